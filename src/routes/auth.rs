use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::api::client::BackendClient;
use crate::forms::auth::LoginForm;
use crate::middleware::LOGIN_PATH;
use crate::routes::{base_context, redirect, render_template, service_error_response};
use crate::services::auth as auth_service;

#[get("/auth/login")]
pub async fn show_login(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "login");
    render_template(&tera, "auth/login.html", &context)
}

#[post("/auth/login")]
pub async fn login(
    req: HttpRequest,
    backend: web::Data<BackendClient>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    let session = match auth_service::login(backend.get_ref(), form).await {
        Ok(session) => session,
        Err(err) => return service_error_response(err, LOGIN_PATH),
    };

    match Identity::login(&req.extensions(), session.access_token().to_string()) {
        Ok(_) => {
            FlashMessage::success("Signed in").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to store session: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect(LOGIN_PATH)
}
