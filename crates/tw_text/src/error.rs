use alloc::string::String;
use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Failure to turn text into a [`Primitive`](crate::Primitive).
///
/// Every variant keeps the rejected input so callers can report it verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    #[error("invalid boolean value: {0:?}")]
    Bool(String),

    #[error("invalid integer value: {0:?}")]
    Integer(String),

    #[error("invalid floating point value: {0:?}")]
    Float(String),

    #[error("invalid character value: {0:?}")]
    Char(String),

    #[error("value {value:?} does not fit in `{target}`")]
    OutOfRange { value: String, target: &'static str },
}

impl ParseError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            Self::Bool(s) | Self::Integer(s) | Self::Float(s) | Self::Char(s) => s,
            Self::OutOfRange { value, .. } => value,
        }
    }
}
