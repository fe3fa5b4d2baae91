use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid duration {value:?}: {reason}")]
    InvalidDuration { value: String, reason: &'static str },

    #[error("unknown unit {unit:?} in duration {value:?}")]
    UnknownDurationUnit { value: String, unit: String },

    #[error("duration {0:?} overflows")]
    DurationOverflow(String),

    #[error("negative duration {0:?} is not allowed")]
    NegativeDuration(String),

    #[error("invalid unsigned 32-bit integer: {0:?}")]
    InvalidUInt32(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
