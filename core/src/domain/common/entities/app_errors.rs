use thiserror::Error;

/// Domain-level failures. `ExternalServiceError` carries the message exactly
/// as it should be shown to the user, so `Display` is just the payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("resource not found")]
    NotFound,
    #[error("user is not authenticated")]
    NotAuthenticated,
    #[error("{0}")]
    ExternalServiceError(String),
    #[error("{0} is not set")]
    MissingEnv(&'static str),
    #[error("internal server error")]
    InternalServerError,
}
