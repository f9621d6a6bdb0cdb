//! Dashboard landing page and referral trees.

use crate::api::AdminApi;
use crate::api::errors::ApiError;
use crate::domain::types::RecordId;
use crate::dto::main::{DashboardPageData, ReferralTreePageData};
use crate::services::{ServiceError, ServiceResult};

/// Loads the signed-in profile and the headline statistics.
///
/// Missing statistics do not fail the page; the profile request is what
/// proves the session is still valid.
pub async fn load_dashboard<A>(api: &A) -> ServiceResult<DashboardPageData>
where
    A: AdminApi + ?Sized,
{
    let user = match api.current_user().await {
        Ok(user) => Some(user),
        Err(ApiError::Unauthorized) => return Err(ServiceError::Unauthorized),
        Err(err) => {
            log::warn!("Failed to load profile: {err}");
            None
        }
    };

    let stats = match api.dashboard_stats().await {
        Ok(stats) => stats,
        Err(ApiError::Unauthorized) => return Err(ServiceError::Unauthorized),
        Err(err) => {
            log::error!("Failed to load dashboard statistics: {err}");
            Default::default()
        }
    };

    Ok(DashboardPageData { user, stats })
}

pub async fn load_referral_tree<A>(api: &A, user_id: &str) -> ServiceResult<ReferralTreePageData>
where
    A: AdminApi + ?Sized,
{
    let id = RecordId::new(user_id)?;
    let tree = api
        .referral_tree(&id)
        .await
        .map_err(|err| ServiceError::from_api(err, "Failed to load referral tree"))?;

    Ok(ReferralTreePageData {
        user_id: id.to_string(),
        tree,
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::DashboardStats;
    use crate::api::mock::MockApi;
    use serde_json::json;

    #[tokio::test]
    async fn dashboard_survives_missing_statistics() {
        let mut api = MockApi::new();
        api.expect_current_user()
            .returning(|| Ok(json!({"username": "admin"})));
        api.expect_dashboard_stats()
            .returning(|| Err(ApiError::Transport("timeout".into())));

        let data = load_dashboard(&api).await.unwrap();

        assert_eq!(data.user.unwrap()["username"], "admin");
        assert_eq!(data.stats, DashboardStats::default());
    }

    #[tokio::test]
    async fn expired_session_fails_dashboard() {
        let mut api = MockApi::new();
        api.expect_current_user()
            .returning(|| Err(ApiError::Unauthorized));
        api.expect_dashboard_stats().times(0);

        let result = load_dashboard(&api).await;

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[tokio::test]
    async fn referral_tree_is_loaded_for_valid_id() {
        let mut api = MockApi::new();
        api.expect_referral_tree()
            .withf(|id| id.as_str() == "u1")
            .times(1)
            .returning(|_| Ok(json!({"children": []})));

        let data = load_referral_tree(&api, "u1").await.unwrap();

        assert_eq!(data.user_id, "u1");
        assert_eq!(data.tree["children"], json!([]));
    }
}
