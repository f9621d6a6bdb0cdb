//! Filterable list pages. Every view shares these handlers; the first path
//! segment selects the view.

use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::api::client::BackendClient;
use crate::filters::views::ListView;
use crate::routes::{CurrentSession, base_context, redirect, render_template, service_error_response};
use crate::services::lists as list_service;

#[get("/{view}")]
pub async fn show_list(
    view: web::Path<String>,
    req: HttpRequest,
    session: CurrentSession,
    backend: web::Data<BackendClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Some(view) = ListView::by_slug(&view) else {
        return HttpResponse::NotFound().finish();
    };

    let api = backend.with_session(session.into_inner());
    match list_service::load_list_page(&api, view, req.query_string()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, view.slug);
            context.insert("list", &data);
            render_template(&tera, "lists/index.html", &context)
        }
        Err(err) => service_error_response(err, "/"),
    }
}

/// Target of the filter form; redirects to the canonical URL of the view.
#[get("/{view}/apply")]
pub async fn apply_filters(view: web::Path<String>, req: HttpRequest) -> impl Responder {
    let Some(view) = ListView::by_slug(&view) else {
        return HttpResponse::NotFound().finish();
    };

    match list_service::apply_filters(view, req.query_string()) {
        Ok(location) => redirect(&location),
        Err(err) => service_error_response(err, view.path),
    }
}

#[get("/{view}/reset")]
pub async fn reset_filters(view: web::Path<String>) -> impl Responder {
    match ListView::by_slug(&view) {
        Some(view) => redirect(&list_service::reset_filters(view)),
        None => HttpResponse::NotFound().finish(),
    }
}
