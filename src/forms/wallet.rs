use serde::Deserialize;

use crate::domain::types::{Amount, RecordId};
use crate::domain::wallet::{Currency, WalletAdjustment, WalletOperation};
use crate::forms::FormError;

#[derive(Debug, Deserialize)]
/// Manual balance adjustment submitted from the users list.
pub struct WalletAdjustmentForm {
    pub currency: Currency,
    #[serde(rename = "type")]
    pub operation: WalletOperation,
    pub amount: String,
}

impl WalletAdjustmentForm {
    /// Builds the backend request; the amount must be strictly positive.
    pub fn into_adjustment(self, user_id: RecordId) -> Result<WalletAdjustment, FormError> {
        let amount = Amount::parse(&self.amount)?;
        if amount.get() == 0.0 {
            return Err(FormError::InvalidAmount);
        }
        Ok(WalletAdjustment::new(
            user_id,
            self.currency,
            self.operation,
            amount,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(amount: &str) -> WalletAdjustmentForm {
        serde_html_form::from_str(&format!("currency=3TWENTY&type=subtract&amount={amount}"))
            .unwrap()
    }

    #[test]
    fn parses_submitted_form() {
        let adjustment = form("10")
            .into_adjustment(RecordId::new("3").unwrap())
            .unwrap();
        assert_eq!(adjustment.amount, -10.0);
        assert_eq!(adjustment.currency, Currency::Token);
    }

    #[test]
    fn rejects_zero_and_garbage_amounts() {
        let id = RecordId::new("3").unwrap();
        assert!(matches!(
            form("0").into_adjustment(id.clone()),
            Err(FormError::InvalidAmount)
        ));
        assert!(matches!(
            form("ten").into_adjustment(id),
            Err(FormError::InvalidAmount)
        ));
    }
}
