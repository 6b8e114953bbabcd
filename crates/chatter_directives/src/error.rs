use chatter_core::ConfigurationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectiveError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Directive not found: {0}")]
    NotFound(String),

    #[error("Failed to write directive output")]
    Write(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, DirectiveError>;
