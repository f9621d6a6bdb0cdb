use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::domain::types::{Amount, RecordId};

/// Balance a manual adjustment applies to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Currency {
    #[serde(rename = "USDT")]
    Usdt,
    #[serde(rename = "3TWENTY")]
    Token,
}

/// Direction of a manual adjustment.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WalletOperation {
    Add,
    Subtract,
}

/// Body of `PUT /wallet/{userId}`.
///
/// The backend expects a signed amount: positive for credits, negative for
/// debits.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletAdjustment {
    pub currency: Currency,
    pub amount: f64,
    #[serde(rename = "type")]
    pub operation: WalletOperation,
    pub user_id: RecordId,
}

impl WalletAdjustment {
    pub fn new(
        user_id: RecordId,
        currency: Currency,
        operation: WalletOperation,
        amount: Amount,
    ) -> Self {
        let amount = match operation {
            WalletOperation::Add => amount.get(),
            WalletOperation::Subtract => -amount.get(),
        };
        Self {
            currency,
            amount,
            operation,
            user_id,
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Usdt => write!(f, "USDT"),
            Currency::Token => write!(f, "3TWENTY"),
        }
    }
}
