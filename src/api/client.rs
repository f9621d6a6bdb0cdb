//! `reqwest` implementation of [`AdminApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::Value;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::{AdminApi, ApiSession, Credentials, DashboardStats, Envelope, ListPage};
use crate::domain::founder_pool::FounderDecision;
use crate::domain::phase::PhasePayload;
use crate::domain::settings::{ConfigUpdate, SystemConfig};
use crate::domain::types::RecordId;
use crate::domain::users::UserToggle;
use crate::domain::wallet::WalletAdjustment;
use crate::filters::query::with_query;

/// HTTP client for the backend.
///
/// The client is cheap to clone. A client without a session can only log
/// in; [`BackendClient::with_session`] returns a copy that authenticates
/// every request with the given access token.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    session: Option<ApiSession>,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session: None,
        })
    }

    pub fn with_session(&self, session: ApiSession) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            session: Some(session),
        }
    }

    pub fn session(&self) -> Option<&ApiSession> {
        self.session.as_ref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.session {
            Some(session) => builder.bearer_auth(session.access_token()),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> ApiResult<Envelope> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status == StatusCode::UNAUTHORIZED && self.session.is_some() {
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let message = serde_json::from_slice::<Envelope>(&body)
                .ok()
                .and_then(|envelope| envelope.message);
            log::warn!("Backend answered {status}: {message:?}");
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        if body.is_empty() {
            return Ok(Envelope::default());
        }
        Ok(serde_json::from_slice(&body)?)
    }

    async fn mutate(&self, builder: RequestBuilder) -> ApiResult<String> {
        Ok(self.send(builder).await?.into_message())
    }
}

#[async_trait]
impl AdminApi for BackendClient {
    async fn login(&self, credentials: &Credentials) -> ApiResult<ApiSession> {
        let envelope = self
            .send(self.request(Method::POST, "/auth/login").json(credentials))
            .await?;
        let token: String = envelope.payload_field("accessToken")?;
        ApiSession::new(token).map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn current_user(&self) -> ApiResult<Value> {
        self.send(self.request(Method::GET, "/auth/me"))
            .await?
            .payload_field("user")
    }

    async fn list(&self, resource: &str, items_key: &str, query: &str) -> ApiResult<ListPage> {
        let envelope = self
            .send(self.request(Method::GET, &with_query(resource, query)))
            .await?;
        let payload = envelope.payload.unwrap_or(Value::Null);
        ListPage::from_payload(&payload, items_key)
    }

    async fn toggle_user(&self, id: &RecordId, toggle: UserToggle) -> ApiResult<String> {
        let path = format!("/users/{id}/{}", toggle.action());
        self.mutate(self.request(Method::POST, &path)).await
    }

    async fn adjust_wallet(&self, adjustment: &WalletAdjustment) -> ApiResult<String> {
        let path = format!("/wallet/{}", adjustment.user_id);
        self.mutate(self.request(Method::PUT, &path).json(adjustment))
            .await
    }

    async fn review_founder_application(
        &self,
        id: &RecordId,
        decision: FounderDecision,
    ) -> ApiResult<String> {
        let path = format!("/founder-pool/{id}/{}", decision.action());
        self.mutate(self.request(Method::POST, &path)).await
    }

    async fn list_phases(&self) -> ApiResult<Vec<Value>> {
        self.send(self.request(Method::GET, "/phases"))
            .await?
            .payload_field("phases")
    }

    async fn create_phase(&self, phase: &PhasePayload) -> ApiResult<String> {
        self.mutate(self.request(Method::POST, "/phases").json(phase))
            .await
    }

    async fn update_phase(&self, id: &RecordId, phase: &PhasePayload) -> ApiResult<String> {
        let path = format!("/phases/{id}");
        self.mutate(self.request(Method::PUT, &path).json(phase))
            .await
    }

    async fn delete_phase(&self, id: &RecordId) -> ApiResult<String> {
        let path = format!("/phases/{id}");
        self.mutate(self.request(Method::DELETE, &path)).await
    }

    async fn configs(&self) -> ApiResult<SystemConfig> {
        self.send(self.request(Method::GET, "/configs"))
            .await?
            .payload_field("configs")
    }

    async fn update_config(&self, update: &ConfigUpdate) -> ApiResult<String> {
        self.mutate(self.request(Method::PUT, "/configs").json(update))
            .await
    }

    async fn referral_tree(&self, id: &RecordId) -> ApiResult<Value> {
        let path = format!("/referrals/{id}/tree");
        self.send(self.request(Method::GET, &path))
            .await?
            .payload_field("tree")
    }

    async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        let financial = self
            .send(self.request(Method::GET, "/dashboard/finantial-stats"))
            .await?
            .payload
            .unwrap_or(Value::Null);
        let sales = self
            .send(self.request(Method::GET, "/dashboard/sale-stats"))
            .await?
            .payload_field("saleStats")?;
        let running = match self
            .send(self.request(Method::GET, "/dashboard/running-sale-stats"))
            .await
            .and_then(|envelope| envelope.payload_field("runningSaleStas"))
        {
            Ok(running) => running,
            Err(ApiError::Unauthorized) => return Err(ApiError::Unauthorized),
            Err(err) => {
                log::warn!("Running sale statistics unavailable: {err}");
                Value::Null
            }
        };
        Ok(DashboardStats {
            financial,
            sales,
            running,
        })
    }
}
