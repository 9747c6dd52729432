use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The uploaded file was rejected (bad type or size).
    #[error("{0}")]
    Upload(String),
    /// A submitted field failed validation.
    #[error("{0}")]
    Validation(String),
    /// The phone number already has the maximum number of ads.
    #[error("Limit reached: Only 2 ads allowed per phone number.")]
    QuotaExceeded,
    /// A required request parameter was missing.
    #[error("{0}")]
    BadRequest(String),
    /// The repository or the asset store failed.
    #[error("storage failure")]
    Storage,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
