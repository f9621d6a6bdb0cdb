use std::time::Duration;

use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::middleware::from_fn;
use actix_web::{App, test, web};
use actix_web_flash_messages::{FlashMessagesFramework, Level, storage::CookieMessageStore};
use tera::Tera;

use token_admin::api::client::BackendClient;
use token_admin::middleware::redirect_unauthorized;
use token_admin::routes::alert_level_to_str;
use token_admin::routes::lists::{apply_filters, reset_filters, show_list};
use token_admin::routes::phases::show_phases;

fn location<B>(resp: &ServiceResponse<B>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

#[::core::prelude::v1::test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[actix_web::test]
async fn apply_redirects_to_canonical_url() {
    let app = test::init_service(App::new().service(apply_filters).service(reset_filters)).await;

    let req = test::TestRequest::get()
        .uri("/transactions/apply?_location=userId%3D7%26page%3D3&dateFrom=&dateTo=&transactionType=all&currency=all&status=Pending")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/transactions?userId=7&status=Pending");
}

#[actix_web::test]
async fn reset_redirects_to_bare_path() {
    let app = test::init_service(App::new().service(apply_filters).service(reset_filters)).await;

    let req = test::TestRequest::get()
        .uri("/founder-pool/reset")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/founder-pool");
}

#[actix_web::test]
async fn unknown_list_is_not_found() {
    let app = test::init_service(App::new().service(apply_filters).service(reset_filters)).await;

    let req = test::TestRequest::get().uri("/accounts/reset").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn protected_pages_redirect_to_login_without_session() {
    let key = Key::from(&[7; 64]);
    let message_store = CookieMessageStore::builder(key.clone()).build();
    let backend =
        BackendClient::new("http://127.0.0.1:9", Duration::from_secs(1)).expect("client builds");

    let app = test::init_service(
        App::new()
            .wrap(FlashMessagesFramework::builder(message_store).build())
            .wrap(IdentityMiddleware::default())
            .wrap(SessionMiddleware::new(CookieSessionStore::default(), key))
            .service(
                web::scope("")
                    .wrap(from_fn(redirect_unauthorized))
                    .service(show_phases)
                    .service(show_list),
            )
            .app_data(web::Data::new(Tera::default()))
            .app_data(web::Data::new(backend)),
    )
    .await;

    for uri in ["/phases", "/users?status=active"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&resp), "/auth/login");
    }
}
