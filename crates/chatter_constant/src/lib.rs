//! Constants shared across the chatter crates.

pub mod app;
pub mod defaults;
pub mod style;
