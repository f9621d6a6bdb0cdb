//! Token sale phases.

use crate::api::AdminApi;
use crate::domain::types::RecordId;
use crate::dto::phases::PhasesPageData;
use crate::forms::phases::PhaseForm;
use crate::services::{ServiceError, ServiceResult, message_or};

pub async fn load_phases<A>(api: &A) -> ServiceResult<PhasesPageData>
where
    A: AdminApi + ?Sized,
{
    let phases = api
        .list_phases()
        .await
        .map_err(|err| ServiceError::from_api(err, "Failed to load phases"))?;
    Ok(PhasesPageData { phases })
}

pub async fn create_phase<A>(api: &A, form: PhaseForm) -> ServiceResult<String>
where
    A: AdminApi + ?Sized,
{
    let phase = form.into_new_phase()?;
    let message = api
        .create_phase(&phase)
        .await
        .map_err(|err| ServiceError::from_api(err, "Failed to create phase"))?;

    log::info!("Created phase {}", phase.name);
    Ok(message_or(message, "Phase created"))
}

/// Updates a phase. Supply is fixed once a phase exists.
pub async fn update_phase<A>(api: &A, phase_id: &str, form: PhaseForm) -> ServiceResult<String>
where
    A: AdminApi + ?Sized,
{
    let id = RecordId::new(phase_id)?;
    let phase = form.into_updated_phase()?;
    let message = api
        .update_phase(&id, &phase)
        .await
        .map_err(|err| ServiceError::from_api(err, "Failed to update phase"))?;

    log::info!("Updated phase {id}");
    Ok(message_or(message, "Phase updated"))
}

pub async fn delete_phase<A>(api: &A, phase_id: &str) -> ServiceResult<String>
where
    A: AdminApi + ?Sized,
{
    let id = RecordId::new(phase_id)?;
    let message = api
        .delete_phase(&id)
        .await
        .map_err(|err| ServiceError::from_api(err, "Failed to delete phase"))?;

    log::info!("Deleted phase {id}");
    Ok(message_or(message, "Phase deleted"))
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::errors::ApiError;
    use crate::api::mock::MockApi;
    use serde_json::json;

    fn form(supply: Option<&str>) -> PhaseForm {
        PhaseForm {
            name: "Seed".into(),
            description: String::new(),
            start: "2026-01-01".into(),
            end: "2026-02-01".into(),
            supply: supply.map(str::to_string),
            price: "0.05".into(),
        }
    }

    #[tokio::test]
    async fn load_passes_phases_through() {
        let mut api = MockApi::new();
        api.expect_list_phases()
            .times(1)
            .returning(|| Ok(vec![json!({"id": "1", "name": "Seed"})]));

        let data = load_phases(&api).await.unwrap();

        assert_eq!(data.phases.len(), 1);
        assert_eq!(data.phases[0]["name"], "Seed");
    }

    #[tokio::test]
    async fn create_without_supply_is_a_form_error() {
        let mut api = MockApi::new();
        api.expect_create_phase().times(0);

        let result = create_phase(&api, form(None)).await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[tokio::test]
    async fn update_never_sends_supply() {
        let mut api = MockApi::new();
        api.expect_update_phase()
            .withf(|id, phase| id.as_str() == "p1" && phase.supply.is_none())
            .times(1)
            .returning(|_, _| Ok("Phase updated successfully".into()));

        let message = update_phase(&api, "p1", form(Some("500"))).await.unwrap();

        assert_eq!(message, "Phase updated successfully");
    }

    #[tokio::test]
    async fn delete_reports_backend_message() {
        let mut api = MockApi::new();
        api.expect_delete_phase().returning(|_| {
            Err(ApiError::Backend {
                status: 409,
                message: Some("Phase already started".into()),
            })
        });

        let result = delete_phase(&api, "p1").await;

        assert!(matches!(result, Err(ServiceError::Backend(message)) if message == "Phase already started"));
    }
}
