//! Row actions of the users and founder pool lists. Each one redirects back
//! to the list exactly as it was filtered.

use actix_web::{Responder, post, web};
use actix_web_flash_messages::FlashMessage;

use crate::api::client::BackendClient;
use crate::domain::founder_pool::FounderDecision;
use crate::domain::users::UserToggle;
use crate::filters::views::{FOUNDER_POOL, USERS};
use crate::forms::wallet::WalletAdjustmentForm;
use crate::routes::{CurrentSession, redirect, return_to, service_error_response};
use crate::services::{ServiceResult, undecodable_form};
use crate::services::users as user_service;

fn respond(result: ServiceResult<String>, back_to: &str) -> actix_web::HttpResponse {
    match result {
        Ok(message) => {
            FlashMessage::success(message).send();
            redirect(back_to)
        }
        Err(err) => service_error_response(err, back_to),
    }
}

#[post("/users/{user_id}/toggle-block")]
pub async fn toggle_block(
    user_id: web::Path<String>,
    body: String,
    session: CurrentSession,
    backend: web::Data<BackendClient>,
) -> impl Responder {
    let api = backend.with_session(session.into_inner());
    let result = user_service::toggle_user(&api, &user_id, UserToggle::Block).await;
    respond(result, &return_to(USERS, &body))
}

#[post("/users/{user_id}/toggle-verify")]
pub async fn toggle_verify(
    user_id: web::Path<String>,
    body: String,
    session: CurrentSession,
    backend: web::Data<BackendClient>,
) -> impl Responder {
    let api = backend.with_session(session.into_inner());
    let result = user_service::toggle_user(&api, &user_id, UserToggle::Verify).await;
    respond(result, &return_to(USERS, &body))
}

#[post("/users/{user_id}/wallet")]
pub async fn adjust_wallet(
    user_id: web::Path<String>,
    body: String,
    session: CurrentSession,
    backend: web::Data<BackendClient>,
) -> impl Responder {
    let back_to = return_to(USERS, &body);
    let form = match serde_html_form::from_str::<WalletAdjustmentForm>(&body) {
        Ok(form) => form,
        Err(err) => return service_error_response(undecodable_form(err), &back_to),
    };

    let api = backend.with_session(session.into_inner());
    let result = user_service::adjust_wallet(&api, &user_id, form).await;
    respond(result, &back_to)
}

#[post("/founder-pool/{application_id}/approve")]
pub async fn approve_founder(
    application_id: web::Path<String>,
    body: String,
    session: CurrentSession,
    backend: web::Data<BackendClient>,
) -> impl Responder {
    let api = backend.with_session(session.into_inner());
    let result =
        user_service::review_founder_application(&api, &application_id, FounderDecision::Approve)
            .await;
    respond(result, &return_to(FOUNDER_POOL, &body))
}

#[post("/founder-pool/{application_id}/reject")]
pub async fn reject_founder(
    application_id: web::Path<String>,
    body: String,
    session: CurrentSession,
    backend: web::Data<BackendClient>,
) -> impl Responder {
    let api = backend.with_session(session.into_inner());
    let result =
        user_service::review_founder_application(&api, &application_id, FounderDecision::Reject)
            .await;
    respond(result, &return_to(FOUNDER_POOL, &body))
}
