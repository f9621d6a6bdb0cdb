//! Error conversion glue between the value, form, filter and service layers.

use crate::domain::types::TypeConstraintError;
use crate::filters::FilterError;
use crate::forms::FormError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<FilterError> for ServiceError {
    fn from(val: FilterError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
