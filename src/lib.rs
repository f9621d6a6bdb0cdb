//! Staff dashboard for the token sale platform.
//!
//! The dashboard renders filterable lists, sale phases and system settings
//! served by the platform's REST backend. List pages are driven entirely by
//! the URL query string, see [`filters`] and [`controller`].

pub mod api;
pub mod controller;
pub mod domain;
pub mod dto;
mod error_conversions;
pub mod filters;
pub mod format;
pub mod forms;
pub mod pagination;
pub mod services;

#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_files::Files;
    use actix_identity::IdentityMiddleware;
    use actix_session::{SessionMiddleware, storage::CookieSessionStore};
    use actix_web::cookie::Key;
    use actix_web::middleware::{self, from_fn};
    use actix_web::{App, HttpServer, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::api::client::BackendClient;
    use crate::format;
    use crate::middleware::redirect_unauthorized;
    use crate::models::config::ServerConfig;
    use crate::routes::auth::{login, logout, show_login};
    use crate::routes::lists::{apply_filters, reset_filters, show_list};
    use crate::routes::main::{show_dashboard, show_referral_tree};
    use crate::routes::phases::{create_phase, delete_phase, show_phases, update_phase};
    use crate::routes::settings::{save_settings, settings_root, show_settings};
    use crate::routes::users::{
        adjust_wallet, approve_founder, reject_founder, toggle_block, toggle_verify,
    };

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let backend = BackendClient::new(&server_config.api_base_url, server_config.api_timeout())
            .map_err(|e| std::io::Error::other(format!("Failed to build backend client: {e}")))?;

        // Keys and stores for identity, sessions, and flash messages.
        let secret_key = Key::from(server_config.secret.as_bytes());

        let message_store = CookieMessageStore::builder(secret_key.clone()).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let mut tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;
        format::filters::register(&mut tera);

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Serving dashboard on {}:{} against {}",
            bind_address.0,
            bind_address.1,
            server_config.api_base_url
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(message_framework.clone())
                .wrap(IdentityMiddleware::default())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                        .cookie_secure(false) // set to true in prod
                        .cookie_domain(Some(server_config.domain.clone()))
                        .build(),
                )
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", "./assets"))
                .service(show_login)
                .service(login)
                .service(
                    web::scope("")
                        .wrap(from_fn(redirect_unauthorized))
                        .service(logout)
                        .service(show_dashboard)
                        .service(show_referral_tree)
                        .service(show_phases)
                        .service(create_phase)
                        .service(update_phase)
                        .service(delete_phase)
                        .service(settings_root)
                        .service(show_settings)
                        .service(save_settings)
                        .service(toggle_block)
                        .service(toggle_verify)
                        .service(adjust_wallet)
                        .service(approve_founder)
                        .service(reject_founder)
                        // Single-segment list routes go last so they never
                        // shadow the pages above.
                        .service(apply_filters)
                        .service(reset_filters)
                        .service(show_list),
                )
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(backend.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
