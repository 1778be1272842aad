use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("{0} does not exist in time zone {1}")]
    NonexistentLocalTime(String, String),

    #[error("Failed to read itinerary from {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write calendar to {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    ServiceError(#[from] tripcal_service::error::ServiceError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
