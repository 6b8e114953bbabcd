use std::path::PathBuf;

use thiserror::Error;

/// The template engine could not produce text.
///
/// `Io` covers templates that could not be found or read; only this class
/// triggers the alternate-template fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Template unavailable: {0}")]
    Io(String),

    #[error("Template failed: {0}")]
    Template(String),
}

impl RenderError {
    pub fn is_io(&self) -> bool {
        matches!(self, RenderError::Io(_))
    }
}

/// Rendered text could not be turned into message units.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("No message markers in rendered text: '{excerpt}'")]
    NoMarkers { excerpt: String },
}

#[derive(Error, Debug)]
pub enum CompositionError {
    #[error("Rendering '{template}' failed: {source}")]
    Render {
        template: String,
        #[source]
        source: RenderError,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CompositionError>;
