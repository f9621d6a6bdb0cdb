use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct PhasesPageData {
    pub phases: Vec<Value>,
}
