use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::api::client::BackendClient;
use crate::routes::{CurrentSession, base_context, render_template, service_error_response};
use crate::services::main as main_service;

#[get("/")]
pub async fn show_dashboard(
    session: CurrentSession,
    backend: web::Data<BackendClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let api = backend.with_session(session.into_inner());
    match main_service::load_dashboard(&api).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "dashboard");
            context.insert("user", &data.user);
            context.insert("stats", &data.stats);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => service_error_response(err, "/auth/login"),
    }
}

#[get("/referrals/{user_id}/tree")]
pub async fn show_referral_tree(
    user_id: web::Path<String>,
    session: CurrentSession,
    backend: web::Data<BackendClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let api = backend.with_session(session.into_inner());
    match main_service::load_referral_tree(&api, &user_id).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "users");
            context.insert("user_id", &data.user_id);
            context.insert("tree", &data.tree);
            render_template(&tera, "referrals/tree.html", &context)
        }
        Err(err) => service_error_response(err, "/users"),
    }
}
