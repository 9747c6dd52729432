//! Error conversion glue between the form layer and the service layer.

use crate::domain::types::TypeConstraintError;
use crate::forms::ads::SubmitAdFormError;
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::Validation(val.to_string())
    }
}

impl From<SubmitAdFormError> for ServiceError {
    fn from(val: SubmitAdFormError) -> Self {
        match val {
            SubmitAdFormError::Upload(e) => ServiceError::Upload(e.to_string()),
            other => ServiceError::Validation(other.to_string()),
        }
    }
}
