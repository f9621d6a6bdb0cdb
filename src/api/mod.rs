//! Access to the platform's REST backend.
//!
//! Every backend response is wrapped in an envelope `{ message, payload }`.
//! List endpoints put a page of opaque items under a resource-specific key
//! next to `currentPage`, `totalPages` and `totalItems`.

use std::fmt::{Debug, Formatter};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::errors::{ApiError, ApiResult};
use crate::controller::ListSource;
use crate::domain::founder_pool::FounderDecision;
use crate::domain::phase::PhasePayload;
use crate::domain::settings::{ConfigUpdate, SystemConfig};
use crate::domain::types::{RecordId, TypeConstraintError};
use crate::domain::users::UserToggle;
use crate::domain::wallet::WalletAdjustment;
use crate::filters::views::ListView;

pub mod client;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Access token obtained at login and handed to the client explicitly.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSession {
    access_token: String,
}

impl ApiSession {
    pub fn new(access_token: impl Into<String>) -> Result<Self, TypeConstraintError> {
        let access_token = access_token.into().trim().to_string();
        if access_token.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self { access_token })
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl Debug for ApiSession {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSession")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Response envelope shared by every endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub payload: Option<Value>,
}

impl Envelope {
    /// Deserializes `payload.<key>`.
    pub fn payload_field<T>(&self, key: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self
            .payload
            .as_ref()
            .and_then(|payload| payload.get(key))
            .cloned()
            .ok_or_else(|| ApiError::Decode(format!("missing payload.{key}")))?;
        Ok(serde_json::from_value(value)?)
    }

    pub fn into_message(self) -> String {
        self.message.unwrap_or_default()
    }
}

fn page_number(payload: &Value, key: &str, default: u64) -> u64 {
    match payload.get(key) {
        Some(Value::Number(number)) => number.as_u64().unwrap_or(default),
        Some(Value::String(text)) => text.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// One page of a list endpoint. Items are passed through untouched.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ListPage {
    pub items: Vec<Value>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
}

impl ListPage {
    /// Reads a list payload whose items live under `items_key`.
    ///
    /// A missing or `null` item array is an empty page; any other non-array
    /// value is a decoding error.
    pub fn from_payload(payload: &Value, items_key: &str) -> ApiResult<Self> {
        if !payload.is_object() {
            return Err(ApiError::Decode("list payload is not an object".into()));
        }
        let items = match payload.get(items_key) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.clone(),
            Some(_) => {
                return Err(ApiError::Decode(format!(
                    "payload.{items_key} is not an array"
                )));
            }
        };
        Ok(Self {
            items,
            current_page: page_number(payload, "currentPage", 1),
            total_pages: page_number(payload, "totalPages", 0),
            total_items: page_number(payload, "totalItems", 0),
        })
    }
}

/// Figures shown on the dashboard landing page.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DashboardStats {
    pub financial: Value,
    pub sales: Value,
    /// Sold and remaining supply of the running phase; `null` when the
    /// backend has none to report.
    pub running: Value,
}

/// Operations the dashboard performs against the backend.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> ApiResult<ApiSession>;
    async fn current_user(&self) -> ApiResult<Value>;
    async fn list(&self, resource: &str, items_key: &str, query: &str) -> ApiResult<ListPage>;
    async fn toggle_user(&self, id: &RecordId, toggle: UserToggle) -> ApiResult<String>;
    async fn adjust_wallet(&self, adjustment: &WalletAdjustment) -> ApiResult<String>;
    async fn review_founder_application(
        &self,
        id: &RecordId,
        decision: FounderDecision,
    ) -> ApiResult<String>;
    async fn list_phases(&self) -> ApiResult<Vec<Value>>;
    async fn create_phase(&self, phase: &PhasePayload) -> ApiResult<String>;
    async fn update_phase(&self, id: &RecordId, phase: &PhasePayload) -> ApiResult<String>;
    async fn delete_phase(&self, id: &RecordId) -> ApiResult<String>;
    async fn configs(&self) -> ApiResult<SystemConfig>;
    async fn update_config(&self, update: &ConfigUpdate) -> ApiResult<String>;
    async fn referral_tree(&self, id: &RecordId) -> ApiResult<Value>;
    async fn dashboard_stats(&self) -> ApiResult<DashboardStats>;
}

/// Adapts a list view of an [`AdminApi`] to the controller's data source.
pub struct ViewSource<'a, A: AdminApi + ?Sized> {
    api: &'a A,
    view: ListView,
}

impl<'a, A: AdminApi + ?Sized> ViewSource<'a, A> {
    pub fn new(api: &'a A, view: ListView) -> Self {
        Self { api, view }
    }
}

#[async_trait]
impl<A: AdminApi + ?Sized> ListSource for ViewSource<'_, A> {
    type Page = ListPage;

    async fn fetch(&self, query: &str) -> ApiResult<ListPage> {
        self.api
            .list(self.view.resource, self.view.items_key, query)
            .await
    }
}
