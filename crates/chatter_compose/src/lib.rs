//! Template-directed message composition.
//!
//! [`CompositionManager::compose`] renders a template with the chat
//! directives available, parses the envelope markers in the output and
//! returns the messages as ordered, addressed batches.

pub mod config;
pub mod engine;
pub mod error;
pub mod factory;
pub mod manager;

pub use config::ComposeConfig;
pub use engine::{TemplateEngine, TemplateRenderer};
pub use error::{CompositionError, ConfigError, ParseError, RenderError, Result};
pub use factory::{MarkerUnitFactory, UnitFactory};
pub use manager::{CompositionManager, group_units};
