use serde::Deserialize;
use validator::Validate;

use crate::domain::phase::PhasePayload;
use crate::domain::types::{Amount, NonEmptyString};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Sale phase form shared by the add and update modals.
pub struct PhaseForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1))]
    pub start: String,
    #[validate(length(min = 1))]
    pub end: String,
    #[serde(default)]
    pub supply: Option<String>,
    pub price: String,
}

impl PhaseForm {
    /// Payload for `POST /phases`; supply is required.
    pub fn into_new_phase(self) -> Result<PhasePayload, FormError> {
        let supply = self
            .supply
            .as_deref()
            .filter(|supply| !supply.trim().is_empty())
            .ok_or(FormError::InvalidAmount)
            .and_then(|supply| Amount::parse(supply).map_err(FormError::from))?;
        let mut payload = self.into_payload()?;
        payload.supply = Some(supply);
        Ok(payload)
    }

    /// Payload for `PUT /phases/{id}`; supply is never sent.
    pub fn into_updated_phase(self) -> Result<PhasePayload, FormError> {
        self.into_payload()
    }

    fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            start: self.start.trim().to_string(),
            end: self.end.trim().to_string(),
            ..self
        }
    }

    fn into_payload(self) -> Result<PhasePayload, FormError> {
        let form = self.trimmed();
        form.validate()?;
        Ok(PhasePayload {
            name: NonEmptyString::new(form.name)?,
            description: form.description,
            start: form.start,
            end: form.end,
            supply: None,
            price: Amount::parse(&form.price)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PhaseForm {
        PhaseForm {
            name: " Seed ".into(),
            description: "First round".into(),
            start: "2026-01-01".into(),
            end: "2026-02-01".into(),
            supply: Some("1000000".into()),
            price: "0.05".into(),
        }
    }

    #[test]
    fn new_phase_requires_supply() {
        let mut without_supply = form();
        without_supply.supply = Some("  ".into());
        assert!(matches!(
            without_supply.into_new_phase(),
            Err(FormError::InvalidAmount)
        ));

        let payload = form().into_new_phase().unwrap();
        assert_eq!(payload.name.as_str(), "Seed");
        assert_eq!(payload.supply.map(Amount::get), Some(1_000_000.0));
    }

    #[test]
    fn updated_phase_omits_supply() {
        let payload = form().into_updated_phase().unwrap();
        assert!(payload.supply.is_none());
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("supply").is_none());
        assert_eq!(json["price"], 0.05);
    }

    #[test]
    fn blank_dates_fail_validation() {
        let mut blank = form();
        blank.start = String::new();
        blank.end = "   ".into();
        assert!(matches!(blank.into_new_phase(), Err(FormError::Validation(_))));

        let mut blank_end = form();
        blank_end.end = " ".into();
        assert!(matches!(
            blank_end.into_updated_phase(),
            Err(FormError::Validation(_))
        ));
    }
}
