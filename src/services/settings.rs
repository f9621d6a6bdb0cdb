//! Services behind the settings area. Each section edits one configuration
//! entry of the backend.

use serde::de::DeserializeOwned;

use crate::api::AdminApi;
use crate::domain::settings::{ConfigUpdate, SettingsSection, fractions_to_percentages};
use crate::dto::settings::{SectionLink, SettingsPageData};
use crate::forms::settings::{
    AccountConfigForm, FounderConfigForm, LimitsConfigForm, MapConfigForm, StakingConfigForm,
};
use crate::services::{ServiceError, ServiceResult, message_or, undecodable_form};

/// Loads the configuration and prepares the given section for display.
pub async fn load_settings<A>(api: &A, section: SettingsSection) -> ServiceResult<SettingsPageData>
where
    A: AdminApi + ?Sized,
{
    let config = api
        .configs()
        .await
        .map_err(|err| ServiceError::from_api(err, "Failed to load settings"))?;

    let entries = match section {
        SettingsSection::Referral => fractions_to_percentages(&config.profit_map),
        SettingsSection::Ranking => config.ranking_map.clone(),
        _ => Default::default(),
    };

    let sections = SettingsSection::ALL
        .into_iter()
        .map(|other| SectionLink {
            slug: other.slug(),
            title: other.title(),
            active: other == section,
        })
        .collect();

    Ok(SettingsPageData {
        section,
        title: section.title(),
        sections,
        config,
        entries,
    })
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> ServiceResult<T> {
    serde_html_form::from_bytes(body).map_err(undecodable_form)
}

/// Parses the submitted section form into a configuration update.
pub fn parse_settings_form(section: SettingsSection, body: &[u8]) -> ServiceResult<ConfigUpdate> {
    let update = match section {
        SettingsSection::Account => decode::<AccountConfigForm>(body)?.into_update(),
        SettingsSection::Limits => decode::<LimitsConfigForm>(body)?.into_update(),
        SettingsSection::Staking => decode::<StakingConfigForm>(body)?.into_update(),
        SettingsSection::Founder => decode::<FounderConfigForm>(body)?.into_update(),
        SettingsSection::Referral => decode::<MapConfigForm>(body)?.into_profit_update(),
        SettingsSection::Ranking => decode::<MapConfigForm>(body)?.into_ranking_update(),
    };
    Ok(update?)
}

/// Validates and stores the submitted section.
pub async fn save_settings<A>(
    api: &A,
    section: SettingsSection,
    body: &[u8],
) -> ServiceResult<String>
where
    A: AdminApi + ?Sized,
{
    let update = parse_settings_form(section, body).map_err(|err| {
        log::error!("Failed to parse {} settings: {err}", section.slug());
        err
    })?;

    let message = api
        .update_config(&update)
        .await
        .map_err(|err| ServiceError::from_api(err, "Failed to save settings"))?;

    log::info!("Updated {:?}", update.key);
    Ok(message_or(message, "Settings saved"))
}

#[cfg(test)]
mod form_tests {
    use super::*;
    use crate::domain::settings::ConfigKey;
    use serde_json::json;

    #[test]
    fn staking_form_is_parsed_from_urlencoded_body() {
        let update = parse_settings_form(
            SettingsSection::Staking,
            b"durationDays=90&apy=15&minimum=100&maximum=5000",
        )
        .unwrap();
        assert_eq!(update.key, ConfigKey::StakingDetails);
        assert_eq!(update.value["durationDays"], json!(90.0));
    }

    #[test]
    fn missing_fields_are_form_errors() {
        let result = parse_settings_form(SettingsSection::Founder, b"minimumInvestment=10");
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn referral_rows_become_fractions() {
        let update =
            parse_settings_form(SettingsSection::Referral, b"key=1&value=12.5&key=2&value=5")
                .unwrap();
        assert_eq!(update.key, ConfigKey::ProfitMap);
        assert_eq!(update.value, json!({"1": 0.125, "2": 0.05}));
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::domain::settings::{ConfigKey, SystemConfig};

    fn config() -> SystemConfig {
        SystemConfig {
            activation_usdt: 25.0,
            profit_map: [("1", 0.07), ("2", 0.035), ("10", 0.01)].into_iter().collect(),
            ranking_map: [("Gold", 5000.0)].into_iter().collect(),
            ..SystemConfig::default()
        }
    }

    #[tokio::test]
    async fn referral_section_shows_percentages() {
        let mut api = MockApi::new();
        api.expect_configs().times(1).returning(|| Ok(config()));

        let data = load_settings(&api, SettingsSection::Referral).await.unwrap();

        assert_eq!(data.entries.get("1"), Some(7.0));
        let levels: Vec<_> = data.entries.keys().collect();
        assert_eq!(levels, vec!["1", "2", "10"]);
        assert_eq!(data.title, "Referral Config");
        assert_eq!(data.sections.iter().filter(|link| link.active).count(), 1);
    }

    #[tokio::test]
    async fn ranking_section_shows_raw_values() {
        let mut api = MockApi::new();
        api.expect_configs().returning(|| Ok(config()));

        let data = load_settings(&api, SettingsSection::Ranking).await.unwrap();

        assert_eq!(data.entries.get("Gold"), Some(5000.0));
    }

    #[tokio::test]
    async fn invalid_form_is_not_sent() {
        let mut api = MockApi::new();
        api.expect_update_config().times(0);

        let result = save_settings(&api, SettingsSection::Account, b"activation_usdt=-5").await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[tokio::test]
    async fn valid_form_updates_single_key() {
        let mut api = MockApi::new();
        api.expect_update_config()
            .withf(|update| update.key == ConfigKey::ActivationUsdt && update.value == 30.0)
            .times(1)
            .returning(|_| Ok(String::new()));

        let message = save_settings(&api, SettingsSection::Account, b"activation_usdt=30")
            .await
            .unwrap();

        assert_eq!(message, "Settings saved");
    }
}
