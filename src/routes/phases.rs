use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::api::client::BackendClient;
use crate::forms::phases::PhaseForm;
use crate::routes::{CurrentSession, base_context, redirect, render_template, service_error_response};
use crate::services::ServiceResult;
use crate::services::phases as phase_service;

const PHASES_PATH: &str = "/phases";

fn respond(result: ServiceResult<String>) -> HttpResponse {
    match result {
        Ok(message) => {
            FlashMessage::success(message).send();
            redirect(PHASES_PATH)
        }
        Err(err) => service_error_response(err, PHASES_PATH),
    }
}

#[get("/phases")]
pub async fn show_phases(
    session: CurrentSession,
    backend: web::Data<BackendClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let api = backend.with_session(session.into_inner());
    match phase_service::load_phases(&api).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "phases");
            context.insert("phases", &data.phases);
            render_template(&tera, "phases/index.html", &context)
        }
        Err(err) => service_error_response(err, "/"),
    }
}

#[post("/phases")]
pub async fn create_phase(
    session: CurrentSession,
    backend: web::Data<BackendClient>,
    web::Form(form): web::Form<PhaseForm>,
) -> impl Responder {
    let api = backend.with_session(session.into_inner());
    respond(phase_service::create_phase(&api, form).await)
}

#[post("/phases/{phase_id}")]
pub async fn update_phase(
    phase_id: web::Path<String>,
    session: CurrentSession,
    backend: web::Data<BackendClient>,
    web::Form(form): web::Form<PhaseForm>,
) -> impl Responder {
    let api = backend.with_session(session.into_inner());
    respond(phase_service::update_phase(&api, &phase_id, form).await)
}

#[post("/phases/{phase_id}/delete")]
pub async fn delete_phase(
    phase_id: web::Path<String>,
    session: CurrentSession,
    backend: web::Data<BackendClient>,
) -> impl Responder {
    let api = backend.with_session(session.into_inner());
    respond(phase_service::delete_phase(&api, &phase_id).await)
}
