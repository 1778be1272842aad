use thiserror::Error;

/// Service-level errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Calendar emission failed: {0}")]
    Emit(String),

    #[error("Itinerary generation failed: {0}")]
    Generation(String),

    #[error("Invalid trip request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    RfcError(#[from] tripcal_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] tripcal_core::error::CoreError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
