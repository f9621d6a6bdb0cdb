//! Staff sign-in against the backend.

use validator::Validate;

use crate::api::{AdminApi, ApiSession, Credentials};
use crate::forms::auth::LoginForm;
use crate::services::{ServiceError, ServiceResult};

/// Validates the sign-in form and exchanges the credentials for a session.
pub async fn login<A>(api: &A, form: LoginForm) -> ServiceResult<ApiSession>
where
    A: AdminApi + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(
            "Username and password are required".to_string(),
        ));
    }

    let credentials = Credentials::from(form);
    let session = api
        .login(&credentials)
        .await
        .map_err(|err| ServiceError::from_api(err, "Login failed"))?;

    log::info!("Staff member {} signed in", credentials.username);
    Ok(session)
}
