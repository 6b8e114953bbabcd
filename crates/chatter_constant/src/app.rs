//! Application metadata constants

pub const NAME: &str = "chatter";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Template-directed message composition for line-oriented chat protocols";

/// Service name reported by the tracing subscriber
pub const SERVICE_NAME: &str = "chatter";
