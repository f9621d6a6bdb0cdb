//! Mock backend used to isolate services in tests.

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use crate::api::errors::ApiResult;
use crate::api::{AdminApi, ApiSession, Credentials, DashboardStats, ListPage};
use crate::domain::founder_pool::FounderDecision;
use crate::domain::phase::PhasePayload;
use crate::domain::settings::{ConfigUpdate, SystemConfig};
use crate::domain::types::RecordId;
use crate::domain::users::UserToggle;
use crate::domain::wallet::WalletAdjustment;

mock! {
    pub Api {}

    #[async_trait]
    impl AdminApi for Api {
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
}
