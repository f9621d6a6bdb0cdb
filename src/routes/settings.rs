use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::api::client::BackendClient;
use crate::domain::settings::SettingsSection;
use crate::routes::{CurrentSession, base_context, redirect, render_template, service_error_response};
use crate::services::settings as settings_service;

#[get("/settings")]
pub async fn settings_root() -> impl Responder {
    redirect("/settings/account")
}

#[get("/settings/{section}")]
pub async fn show_settings(
    section: web::Path<String>,
    session: CurrentSession,
    backend: web::Data<BackendClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Some(section) = SettingsSection::from_slug(&section) else {
        return HttpResponse::NotFound().finish();
    };

    let api = backend.with_session(session.into_inner());
    match settings_service::load_settings(&api, section).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "settings");
            context.insert("settings", &data);
            render_template(&tera, "settings/index.html", &context)
        }
        Err(err) => service_error_response(err, "/"),
    }
}

#[post("/settings/{section}")]
pub async fn save_settings(
    section: web::Path<String>,
    body: web::Bytes,
    session: CurrentSession,
    backend: web::Data<BackendClient>,
) -> impl Responder {
    let Some(section) = SettingsSection::from_slug(&section) else {
        return HttpResponse::NotFound().finish();
    };
    let back_to = format!("/settings/{}", section.slug());

    let api = backend.with_session(session.into_inner());
    match settings_service::save_settings(&api, section, &body).await {
        Ok(message) => {
            FlashMessage::success(message).send();
            redirect(&back_to)
        }
        Err(err) => service_error_response(err, &back_to),
    }
}
