//! Row actions of the users and founder pool lists.

use crate::api::AdminApi;
use crate::domain::founder_pool::FounderDecision;
use crate::domain::types::RecordId;
use crate::domain::users::UserToggle;
use crate::forms::wallet::WalletAdjustmentForm;
use crate::services::{ServiceError, ServiceResult, message_or};

/// Flips the blocked or verified flag of a user.
pub async fn toggle_user<A>(api: &A, user_id: &str, toggle: UserToggle) -> ServiceResult<String>
where
    A: AdminApi + ?Sized,
{
    let id = RecordId::new(user_id)?;
    let message = api
        .toggle_user(&id, toggle)
        .await
        .map_err(|err| ServiceError::from_api(err, "Failed to update user"))?;

    log::info!("User {id}: {}", toggle.action());
    Ok(message_or(message, "User updated"))
}

/// Adds to or subtracts from one of the user's balances.
pub async fn adjust_wallet<A>(
    api: &A,
    user_id: &str,
    form: WalletAdjustmentForm,
) -> ServiceResult<String>
where
    A: AdminApi + ?Sized,
{
    let id = RecordId::new(user_id)?;
    let adjustment = form.into_adjustment(id)?;
    let message = api
        .adjust_wallet(&adjustment)
        .await
        .map_err(|err| ServiceError::from_api(err, "Failed to update wallet"))?;

    log::info!(
        "Wallet of user {} adjusted by {} {}",
        adjustment.user_id,
        adjustment.amount,
        adjustment.currency
    );
    Ok(message_or(message, "Wallet updated"))
}

/// Approves or rejects a founder pool application.
pub async fn review_founder_application<A>(
    api: &A,
    application_id: &str,
    decision: FounderDecision,
) -> ServiceResult<String>
where
    A: AdminApi + ?Sized,
{
    let id = RecordId::new(application_id)?;
    let message = api
        .review_founder_application(&id, decision)
        .await
        .map_err(|err| ServiceError::from_api(err, "Failed to review application"))?;

    log::info!("Founder application {id}: {}", decision.action());
    let fallback = match decision {
        FounderDecision::Approve => "Application approved",
        FounderDecision::Reject => "Application rejected",
    };
    Ok(message_or(message, fallback))
}
