//! HTTP handlers and the helpers they share.

use std::future::{Ready, ready};

use actix_identity::IdentityExt;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::http::header;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::api::ApiSession;
use crate::filters::query::{QueryParams, with_query};
use crate::filters::views::ListView;
use crate::services::ServiceError;
use crate::services::lists::LOCATION_PARAM;

pub mod auth;
pub mod lists;
pub mod main;
pub mod phases;
pub mod settings;
pub mod users;

/// Maps flash message levels onto Bootstrap alert classes.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context shared by every page: pending alerts and the active menu entry.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Flashes the failure and redirects to `back_to`.
///
/// Unauthorized results become a bare 401 so the middleware can send the
/// visitor to the sign-in page.
pub fn service_error_response(err: ServiceError, back_to: &str) -> HttpResponse {
    let message = match err {
        ServiceError::Unauthorized => return HttpResponse::Unauthorized().finish(),
        ServiceError::NotFound => "Record not found".to_string(),
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            format!("Please check the form: {message}")
        }
        ServiceError::Backend(message) => message,
    };
    FlashMessage::error(message).send();
    redirect(back_to)
}

/// List URL a row action returns to, rebuilt from the posted location.
pub fn return_to(view: ListView, body: &str) -> String {
    let posted = QueryParams::parse(body);
    let location = QueryParams::parse(posted.get(LOCATION_PARAM).unwrap_or_default());
    with_query(view.path, &location.to_query_string())
}

/// Backend session of the signed-in staff member.
///
/// Extraction fails with `401 Unauthorized` when nobody is signed in.
pub struct CurrentSession(ApiSession);

impl CurrentSession {
    pub fn into_inner(self) -> ApiSession {
        self.0
    }
}

impl FromRequest for CurrentSession {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let session = req
            .get_identity()
            .and_then(|identity| identity.id())
            .map_err(|err| {
                log::debug!("No signed-in session: {err}");
                ErrorUnauthorized("not signed in")
            })
            .and_then(|token| ApiSession::new(token).map_err(ErrorUnauthorized));
        ready(session.map(CurrentSession))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::views::{FOUNDER_POOL, USERS};

    #[test]
    fn return_to_rebuilds_list_url() {
        assert_eq!(
            return_to(FOUNDER_POOL, "_location=status%3DPending%26page%3D2"),
            "/founder-pool?status=Pending&page=2"
        );
        assert_eq!(return_to(USERS, "currency=USDT"), "/users");
    }
}
