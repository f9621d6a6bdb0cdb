use serde::Serialize;
use serde_json::Value;

use crate::api::DashboardStats;

/// Data required to render the dashboard landing page.
#[derive(Debug, Serialize)]
pub struct DashboardPageData {
    pub user: Option<Value>,
    pub stats: DashboardStats,
}

/// Referral tree of one user.
#[derive(Debug, Serialize)]
pub struct ReferralTreePageData {
    pub user_id: String,
    pub tree: Value,
}
