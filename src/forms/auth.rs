use serde::Deserialize;
use validator::Validate;

use crate::api::Credentials;

#[derive(Deserialize, Validate)]
/// Staff sign-in form.
pub struct LoginForm {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl From<LoginForm> for Credentials {
    fn from(form: LoginForm) -> Self {
        Self {
            username: form.username.trim().to_string(),
            password: form.password,
        }
    }
}
