//! Error types for observability crate

use thiserror::Error;

/// Errors that can occur during observability initialization
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// A global subscriber is already installed
    #[error("Observability already initialised")]
    AlreadyInitialised,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
