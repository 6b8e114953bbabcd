pub mod columns;
pub mod compact;
pub mod message;

use std::fmt;

use chatter_core::ConfigurationError;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

pub use columns::{ColumnFormatter, ColumnSpec, ColumnsArgs, RowBuilder};
pub use compact::{CompactListArgs, CompactListFormatter, CompactListSpec};
pub use message::{EnvelopeTagger, MessageArgs};

use crate::error::Result;

/// A named operation invocable from a template block.
///
/// `body` is the rendered content of the enclosing block, `None` when the
/// directive was invoked without one. Output is streamed into `out`.
pub trait Directive: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn parameters_schema(&self) -> JsonValue;
    fn execute(&self, body: Option<&str>, args: JsonValue, out: &mut dyn fmt::Write) -> Result<()>;
}

/// Deserialize directive arguments, treating `null` as "no arguments".
pub(crate) fn parse_args<T: DeserializeOwned>(
    directive: &'static str,
    args: JsonValue,
) -> std::result::Result<T, ConfigurationError> {
    let args = if args.is_null() {
        JsonValue::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| ConfigurationError::InvalidParam {
        directive,
        param: "arguments".to_string(),
        message: e.to_string(),
    })
}

pub(crate) fn require_body<'a>(
    directive: &'static str,
    body: Option<&'a str>,
) -> std::result::Result<&'a str, ConfigurationError> {
    body.ok_or(ConfigurationError::NoContent(directive))
}
