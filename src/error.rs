use thiserror::Error;

use crate::core::SelectionContext;

pub type ThumbnailResult<T> = Result<T, ThumbnailError>;

/// Failure classification surfaced to the request layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// The caller sent something malformed.
    ClientInput,
    /// The resource, or a required part of it, does not exist.
    NotFound,
    /// Anything else went wrong while producing the image.
    Processing,
}

impl ErrorClass {
    /// Status code the HTTP layer answers with for this class.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::ClientInput => 422,
            Self::NotFound => 404,
            Self::Processing => 400,
        }
    }
}

#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("invalid content reference: {0}")]
    InvalidReference(String),

    #[error("invalid render size: {0}")]
    InvalidRenderSize(String),

    #[error("invalid plot target: {0}")]
    InvalidTarget(String),

    #[error("there was no distribution for that content reference")]
    ResourceNotFound,

    #[error("the recording does not contain a cell")]
    NoCellFound,

    #[error("the recording does not contain a repetition")]
    NoRepetitionFound,

    #[error("the recording does not contain a sweep")]
    NoSweepFound,

    #[error("the recording does not contain a protocol")]
    NoProtocolFound,

    #[error("the recording does not contain any intracellular response data")]
    NoResponseData,

    #[error("the recording does not contain a unit")]
    NoUnitFound,

    #[error("the recording does not contain a sampling rate")]
    NoRateFound,

    #[error("the recording does not contain a conversion factor")]
    NoConversionFound,

    #[error("no {context} candidate to select from")]
    NoSuchElement { context: SelectionContext },

    #[error("invalid container: {0}")]
    InvalidContainer(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("unknown failure: {0}")]
    Unknown(String),
}

impl ThumbnailError {
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidReference(_) | Self::InvalidRenderSize(_) | Self::InvalidTarget(_) => {
                ErrorClass::ClientInput
            }
            Self::ResourceNotFound
            | Self::NoCellFound
            | Self::NoRepetitionFound
            | Self::NoSweepFound
            | Self::NoProtocolFound
            | Self::NoResponseData
            | Self::NoUnitFound
            | Self::NoRateFound
            | Self::NoConversionFound
            | Self::NoSuchElement { .. } => ErrorClass::NotFound,
            Self::InvalidContainer(_)
            | Self::InvalidData(_)
            | Self::Transport(_)
            | Self::Unknown(_) => ErrorClass::Processing,
        }
    }
}
