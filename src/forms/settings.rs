//! Forms editing the system configuration entries.

use serde::Deserialize;
use serde_json::json;
use validator::{Validate, ValidationError};

use crate::domain::settings::{ConfigEntries, ConfigKey, ConfigUpdate, percentages_to_fractions};
use crate::domain::types::Amount;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
pub struct AccountConfigForm {
    #[validate(range(min = 0.0))]
    pub activation_usdt: f64,
}

impl AccountConfigForm {
    pub fn into_update(self) -> Result<ConfigUpdate, FormError> {
        self.validate()?;
        Ok(ConfigUpdate {
            key: ConfigKey::ActivationUsdt,
            value: json!(self.activation_usdt),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LimitsConfigForm {
    #[validate(range(min = 0.0))]
    pub minimum_deposit: f64,
    #[validate(range(min = 0.0))]
    pub minimum_withdraw: f64,
    #[validate(range(min = 0.0))]
    pub minimum_buy_token: f64,
    #[validate(range(min = 0.0))]
    pub withdraw_charge: f64,
}

impl LimitsConfigForm {
    pub fn into_update(self) -> Result<ConfigUpdate, FormError> {
        self.validate()?;
        Ok(ConfigUpdate {
            key: ConfigKey::DepositSettings,
            value: json!({
                "minimumDeposit": self.minimum_deposit,
                "minimumWithdraw": self.minimum_withdraw,
                "minimumBuyToken": self.minimum_buy_token,
                "withdrawCharge": self.withdraw_charge,
            }),
        })
    }
}

fn validate_staking_bounds(form: &StakingConfigForm) -> Result<(), ValidationError> {
    if form.maximum < form.minimum {
        return Err(ValidationError::new("maximum_below_minimum"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_staking_bounds"))]
pub struct StakingConfigForm {
    #[validate(range(min = 1.0))]
    pub duration_days: f64,
    #[validate(range(min = 0.0))]
    pub apy: f64,
    #[validate(range(min = 0.0))]
    pub minimum: f64,
    #[validate(range(min = 0.0))]
    pub maximum: f64,
}

impl StakingConfigForm {
    pub fn into_update(self) -> Result<ConfigUpdate, FormError> {
        self.validate()?;
        Ok(ConfigUpdate {
            key: ConfigKey::StakingDetails,
            value: json!({
                "durationDays": self.duration_days,
                "apy": self.apy,
                "minimum": self.minimum,
                "maximum": self.maximum,
            }),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FounderConfigForm {
    #[validate(range(min = 0.0))]
    pub minimum_investment: f64,
    #[validate(range(min = 0.0))]
    pub total_seat: f64,
}

impl FounderConfigForm {
    pub fn into_update(self) -> Result<ConfigUpdate, FormError> {
        self.validate()?;
        Ok(ConfigUpdate {
            key: ConfigKey::FounderDetails,
            value: json!({
                "minimumInvestment": self.minimum_investment,
                "totalSeat": self.total_seat,
            }),
        })
    }
}

/// Key/value table posted as repeated `key` and `value` inputs.
#[derive(Debug, Default, Deserialize)]
pub struct MapConfigForm {
    #[serde(default)]
    pub key: Vec<String>,
    #[serde(default)]
    pub value: Vec<String>,
}

impl MapConfigForm {
    /// Pairs keys with values. Rows left completely blank are skipped.
    pub fn entries(&self) -> Result<ConfigEntries, FormError> {
        if self.key.len() != self.value.len() {
            return Err(FormError::MismatchedEntries);
        }

        let mut entries = ConfigEntries::new();
        for (key, value) in self.key.iter().zip(&self.value) {
            let key = key.trim();
            let value = value.trim();
            if key.is_empty() && value.is_empty() {
                continue;
            }
            if key.is_empty() || value.is_empty() {
                return Err(FormError::MismatchedEntries);
            }
            let amount = Amount::parse(value)?;
            if !entries.insert(key, amount.get()) {
                return Err(FormError::DuplicateKey(key.to_string()));
            }
        }
        Ok(entries)
    }

    /// Referral profits are entered as percentages and stored as fractions.
    pub fn into_profit_update(self) -> Result<ConfigUpdate, FormError> {
        let fractions = percentages_to_fractions(&self.entries()?);
        Ok(ConfigUpdate {
            key: ConfigKey::ProfitMap,
            value: json!(fractions),
        })
    }

    /// Ranking thresholds are stored exactly as entered.
    pub fn into_ranking_update(self) -> Result<ConfigUpdate, FormError> {
        Ok(ConfigUpdate {
            key: ConfigKey::RankingMap,
            value: json!(self.entries()?),
        })
    }
}
