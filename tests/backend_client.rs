//! `BackendClient` against an in-process fake of the platform backend.

use std::time::Duration;

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

use token_admin::api::client::BackendClient;
use token_admin::api::errors::ApiError;
use token_admin::api::{AdminApi, ApiSession, Credentials};
use token_admin::domain::types::{Amount, RecordId};
use token_admin::domain::wallet::{Currency, WalletAdjustment, WalletOperation};

const TOKEN: &str = "t0ken";

fn authorized(req: &HttpRequest) -> bool {
    req.headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        == Some(format!("Bearer {TOKEN}").as_str())
}

fn expired() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({"message": "Token expired"}))
}

async fn founder_pool(req: HttpRequest) -> HttpResponse {
    if !authorized(&req) {
        return expired();
    }
    HttpResponse::Ok().json(json!({
        "message": "Founder pools fetched",
        "payload": {
            "founderPools": [{"id": "f1", "query": req.query_string()}],
            "currentPage": 3,
            "totalPages": 4,
            "totalItems": 31
        }
    }))
}

async fn login(body: web::Json<Value>) -> HttpResponse {
    if body["password"] == "pw" {
        HttpResponse::Ok().json(json!({"message": "Welcome", "payload": {"accessToken": TOKEN}}))
    } else {
        HttpResponse::Unauthorized().json(json!({"message": "Invalid credentials"}))
    }
}

async fn wallet(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    if !authorized(&req) {
        return expired();
    }
    if !matches!(body["currency"].as_str(), Some("USDT" | "3TWENTY")) {
        return HttpResponse::BadRequest().json(json!({"message": "Unknown currency"}));
    }
    if body["amount"].as_f64().unwrap_or_default() < -100.0 {
        return HttpResponse::BadRequest().json(json!({"message": "Insufficient balance"}));
    }
    HttpResponse::Ok().json(json!({"message": "Wallet updated"}))
}

async fn financial_stats() -> HttpResponse {
    HttpResponse::Ok().json(json!({"payload": {"totalDeposit": 1200, "totalWithdraw": "300"}}))
}

async fn sale_stats() -> HttpResponse {
    HttpResponse::Ok().json(json!({"payload": {"saleStats": {"totalSupply": 1000000, "totalUSDT": 5000}}}))
}

async fn running_sale_stats() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "payload": {"runningSaleStas": {"total3TWENTY": 25000, "totalAvailable": 75000}}
    }))
}

async fn start_backend() -> BackendClient {
    let server = HttpServer::new(|| {
        App::new().service(
            web::scope("/api")
                .route("/founder-pool", web::get().to(founder_pool))
                .route("/auth/login", web::post().to(login))
                .route("/wallet/{id}", web::put().to(wallet))
                .route("/dashboard/finantial-stats", web::get().to(financial_stats))
                .route("/dashboard/sale-stats", web::get().to(sale_stats))
                .route("/dashboard/running-sale-stats", web::get().to(running_sale_stats)),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind fake backend");
    let address = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    BackendClient::new(format!("http://{address}/api/"), Duration::from_secs(5))
        .expect("client builds")
}

#[actix_web::test]
async fn list_forwards_query_and_token() {
    let client = start_backend()
        .await
        .with_session(ApiSession::new(TOKEN).unwrap());

    let page = client
        .list("/founder-pool", "founderPools", "status=Approved&page=3")
        .await
        .unwrap();

    assert_eq!(page.items[0]["query"], "status=Approved&page=3");
    assert_eq!(page.current_page, 3);
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.total_items, 31);
}

#[actix_web::test]
async fn rejected_token_is_unauthorized() {
    let client = start_backend()
        .await
        .with_session(ApiSession::new("stale").unwrap());

    let result = client.list("/founder-pool", "founderPools", "").await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
}

#[actix_web::test]
async fn login_returns_session_or_server_message() {
    let client = start_backend().await;

    let session = client
        .login(&Credentials {
            username: "admin".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();
    assert_eq!(session.access_token(), TOKEN);

    let err = client
        .login(&Credentials {
            username: "admin".into(),
            password: "nope".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.user_message("Login failed"), "Invalid credentials");
}

#[actix_web::test]
async fn wallet_errors_carry_backend_message() {
    let client = start_backend()
        .await
        .with_session(ApiSession::new(TOKEN).unwrap());
    let user = RecordId::new("u1").unwrap();

    let message = client
        .adjust_wallet(&WalletAdjustment::new(
            user.clone(),
            Currency::Usdt,
            WalletOperation::Add,
            Amount::new(50.0).unwrap(),
        ))
        .await
        .unwrap();
    assert_eq!(message, "Wallet updated");

    let err = client
        .adjust_wallet(&WalletAdjustment::new(
            user,
            Currency::Token,
            WalletOperation::Subtract,
            Amount::new(500.0).unwrap(),
        ))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Backend { status: 400, message: Some(ref message) } if message == "Insufficient balance"
    ));
}

#[actix_web::test]
async fn dashboard_stats_include_running_phase() {
    let client = start_backend()
        .await
        .with_session(ApiSession::new(TOKEN).unwrap());

    let stats = client.dashboard_stats().await.unwrap();

    assert_eq!(stats.financial["totalDeposit"], 1200);
    assert_eq!(stats.sales["totalSupply"], 1000000);
    assert_eq!(stats.running["total3TWENTY"], 25000);
    assert_eq!(stats.running["totalAvailable"], 75000);
}
