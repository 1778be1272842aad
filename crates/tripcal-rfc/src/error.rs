use thiserror::Error;

/// iCalendar construction and serialization errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Invalid TEXT value for {property}: {reason}")]
    InvalidText {
        property: String,
        reason: String,
    },
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
