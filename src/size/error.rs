use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ByteSizeError {
    #[error("String is null or whitespace")]
    EmptyInput,

    #[error("No byte indicator found in value '{0}'")]
    MissingMagnitude(String),

    #[error("No number found in value '{0}'")]
    InvalidNumber(String),

    #[error("Can't have partial bits for value '{0}'")]
    FractionalBits(String),

    #[error("Bytes of magnitude '{0}' is not supported")]
    UnknownMagnitude(String),

    #[error("Attempted to divide by a zero byte size")]
    DivideByZero,

    #[error("Unknown culture: {0}")]
    UnknownCulture(String),
}

pub type Result<T> = std::result::Result<T, ByteSizeError>;
