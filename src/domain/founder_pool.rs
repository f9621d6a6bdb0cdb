use serde::Deserialize;

/// Outcome of reviewing a founder-pool application.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FounderDecision {
    Approve,
    Reject,
}

impl FounderDecision {
    /// Action segment appended to `/founder-pool/{id}`.
    pub fn action(self) -> &'static str {
        match self {
            FounderDecision::Approve => "approve",
            FounderDecision::Reject => "reject",
        }
    }
}
