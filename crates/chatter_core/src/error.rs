use thiserror::Error;

/// A directive was invoked with parameters it cannot work with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("{directive}: {param} param missing")]
    MissingParam {
        directive: &'static str,
        param: &'static str,
    },

    #[error("{directive}: invalid value for param {param}: {message}")]
    InvalidParam {
        directive: &'static str,
        param: String,
        message: String,
    },

    #[error("Illegal value for param type: '{given}'. Legal values are: {legal}")]
    UnknownKind { given: String, legal: String },

    #[error("invalid target: '{0}'")]
    InvalidTarget(String),

    #[error("{0}: no body")]
    NoContent(&'static str),
}

/// The text does not follow the envelope marker grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    #[error("unknown message kind: {0}")]
    UnknownKind(String),

    #[error("malformed marker parameters: {0}")]
    BadParams(String),

    #[error("unterminated marker body")]
    Unterminated,

    #[error("unclosed marker parameters")]
    UnclosedParams,

    #[error("no marker found")]
    NotFound,

    #[error("unexpected trailing text after marker: '{0}'")]
    Trailing(String),
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
