//! System configuration values stored by the backend under `/configs`.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Key of a configuration entry.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    ActivationUsdt,
    DepositSettings,
    StakingDetails,
    FounderDetails,
    ProfitMap,
    RankingMap,
}

/// Body of `PUT /configs`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ConfigUpdate {
    pub key: ConfigKey,
    pub value: Value,
}

fn number_from(value: Option<Value>) -> f64 {
    match value {
        Some(Value::Number(number)) => number.as_f64().unwrap_or_default(),
        Some(Value::String(text)) => text.trim().parse().unwrap_or_default(),
        _ => 0.0,
    }
}

/// Accepts numbers as well as numeric strings; anything else becomes zero.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer).map(number_from)
}

/// Key/value table of a map-shaped entry, kept in the order it was received
/// or entered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigEntries(Vec<(String, f64)>);

impl ConfigEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| *value)
    }

    /// Appends an entry. Returns `false` and leaves the table untouched when
    /// the key is already present.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) -> bool {
        let key = key.into();
        if self.get(&key).is_some() {
            return false;
        }
        self.0.push((key, value));
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn map_values(&self, f: impl Fn(f64) -> f64) -> Self {
        Self(
            self.0
                .iter()
                .map(|(key, value)| (key.clone(), f(*value)))
                .collect(),
        )
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ConfigEntries {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut entries = Self::new();
        for (key, value) in iter {
            entries.insert(key, value);
        }
        entries
    }
}

impl Serialize for ConfigEntries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ConfigEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Option::<Map<String, Value>>::deserialize(deserializer)?;
        Ok(map
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| (key, number_from(Some(value))))
            .collect())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DepositSettings {
    #[serde(deserialize_with = "lenient_number")]
    pub minimum_deposit: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub minimum_withdraw: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub minimum_buy_token: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub withdraw_charge: f64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StakingDetails {
    #[serde(deserialize_with = "lenient_number")]
    pub duration_days: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub apy: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub minimum: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub maximum: f64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FounderDetails {
    #[serde(deserialize_with = "lenient_number")]
    pub minimum_investment: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub total_seat: f64,
}

/// Every configuration entry the dashboard edits.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct SystemConfig {
    #[serde(deserialize_with = "lenient_number")]
    pub activation_usdt: f64,
    pub deposit_settings: DepositSettings,
    pub staking_details: StakingDetails,
    pub founder_details: FounderDetails,
    /// Referral level → profit share as a fraction (0.05 = 5%).
    pub profit_map: ConfigEntries,
    /// Rank → threshold, stored exactly as entered.
    pub ranking_map: ConfigEntries,
}

/// Converts stored fractions to the percentages shown in forms.
pub fn fractions_to_percentages(entries: &ConfigEntries) -> ConfigEntries {
    entries.map_values(|fraction| round_percentage(fraction * 100.0))
}

/// Converts percentages entered in forms back to stored fractions.
pub fn percentages_to_fractions(entries: &ConfigEntries) -> ConfigEntries {
    entries.map_values(|percent| percent / 100.0)
}

// 0.07 * 100.0 is 7.000000000000001 in binary floating point.
fn round_percentage(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Section of the settings area; each one edits a single [`ConfigKey`].
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SettingsSection {
    Account,
    Limits,
    Staking,
    Founder,
    Referral,
    Ranking,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 6] = [
        SettingsSection::Account,
        SettingsSection::Limits,
        SettingsSection::Staking,
        SettingsSection::Founder,
        SettingsSection::Referral,
        SettingsSection::Ranking,
    ];

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.slug() == slug)
    }

    pub fn slug(self) -> &'static str {
        match self {
            SettingsSection::Account => "account",
            SettingsSection::Limits => "limits",
            SettingsSection::Staking => "staking",
            SettingsSection::Founder => "founder",
            SettingsSection::Referral => "referral",
            SettingsSection::Ranking => "ranking",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SettingsSection::Account => "Account Config",
            SettingsSection::Limits => "Limits Config",
            SettingsSection::Staking => "Staking Config",
            SettingsSection::Founder => "Founder Config",
            SettingsSection::Referral => "Referral Config",
            SettingsSection::Ranking => "Ranking Config",
        }
    }

    pub fn key(self) -> ConfigKey {
        match self {
            SettingsSection::Account => ConfigKey::ActivationUsdt,
            SettingsSection::Limits => ConfigKey::DepositSettings,
            SettingsSection::Staking => ConfigKey::StakingDetails,
            SettingsSection::Founder => ConfigKey::FounderDetails,
            SettingsSection::Referral => ConfigKey::ProfitMap,
            SettingsSection::Ranking => ConfigKey::RankingMap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_backend_configs_with_string_numbers() {
        let config: SystemConfig = serde_json::from_value(json!({
            "ACTIVATION_USDT": "25",
            "STAKING_DETAILS": {"durationDays": 30, "apy": "12.5", "minimum": 10, "maximum": 1000},
            "PROFIT_MAP": {"1": 0.1, "2": "0.05"},
            "UNRELATED": true
        }))
        .unwrap();

        assert_eq!(config.activation_usdt, 25.0);
        assert_eq!(config.staking_details.apy, 12.5);
        assert_eq!(config.profit_map.get("2"), Some(0.05));
        assert_eq!(config.deposit_settings, DepositSettings::default());
        assert!(config.ranking_map.is_empty());
    }

    #[test]
    fn profit_map_percentages_round_trip() {
        let fractions: ConfigEntries = [("1", 0.07), ("2", 0.035)].into_iter().collect();
        let percentages = fractions_to_percentages(&fractions);
        assert_eq!(percentages.get("1"), Some(7.0));
        assert_eq!(percentages.get("2"), Some(3.5));
        assert_eq!(percentages_to_fractions(&percentages), fractions);
    }

    #[test]
    fn map_entries_keep_backend_order() {
        let config: SystemConfig = serde_json::from_str(
            r#"{"PROFIT_MAP": {"1": 0.1, "2": 0.05, "10": 0.01}, "RANKING_MAP": null}"#,
        )
        .unwrap();

        let levels: Vec<_> = config.profit_map.keys().collect();
        assert_eq!(levels, vec!["1", "2", "10"]);
        assert!(config.ranking_map.is_empty());
        assert_eq!(
            serde_json::to_string(&config.profit_map).unwrap(),
            r#"{"1":0.1,"2":0.05,"10":0.01}"#
        );
    }

    #[test]
    fn duplicate_keys_are_not_inserted() {
        let mut entries = ConfigEntries::new();
        assert!(entries.insert("Gold", 5000.0));
        assert!(!entries.insert("Gold", 1.0));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.get("Gold"), Some(5000.0));
    }

    #[test]
    fn config_keys_use_backend_names() {
        assert_eq!(
            serde_json::to_value(ConfigKey::ActivationUsdt).unwrap(),
            json!("ACTIVATION_USDT")
        );
        assert_eq!(
            serde_json::to_value(SettingsSection::Referral.key()).unwrap(),
            json!("PROFIT_MAP")
        );
    }

    #[test]
    fn sections_resolve_from_slugs() {
        for section in SettingsSection::ALL {
            assert_eq!(SettingsSection::from_slug(section.slug()), Some(section));
        }
        assert_eq!(SettingsSection::from_slug("billing"), None);
    }
}
