use serde::Serialize;

use crate::domain::types::{Amount, NonEmptyString};

/// Body of `POST /phases` and `PUT /phases/{id}`.
///
/// `supply` is only sent on creation; the backend does not allow changing the
/// supply of an existing phase.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PhasePayload {
    pub name: NonEmptyString,
    pub description: String,
    pub start: String,
    pub end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supply: Option<Amount>,
    pub price: Amount,
}
