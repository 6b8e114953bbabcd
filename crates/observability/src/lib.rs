//! Chatter observability - logging setup shared by the library crates and
//! the CLI.
//!
//! # Quick Start
//!
//! ```no_run
//! use chatter_observability::{ObservabilityConfig, init};
//!
//! let config = ObservabilityConfig::new("chatter")
//!     .with_log_level("debug");
//!
//! init(config)?;
//!
//! // Or initialize from environment variables
//! // chatter_observability::init_from_env()?;
//!
//! tracing::info!("composer ready");
//! # Ok::<(), chatter_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `SERVICE_NAME` - Service name
//! - `CHATTER_LOG` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};
pub use self::tracing::{record_duration, record_error};

// Macros are exported via #[macro_export] and available as
// chatter_observability::compose_span!(), etc.
