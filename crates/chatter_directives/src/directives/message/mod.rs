mod args;

pub use args::MessageArgs;

use std::fmt;

use chatter_core::envelope::{BODY_CLOSE, Envelope};
use chatter_core::{ConfigurationError, EnvelopeKind, Target};
use serde_json::{json, Value as JsonValue};

use crate::directives::{parse_args, require_body, Directive};
use crate::error::Result;

pub(crate) const NAME: &str = "message";

/// Wraps its body in an envelope marker carrying kind, priority, target and
/// the reply flag.
pub struct EnvelopeTagger {
    default_priority: u32,
}

impl EnvelopeTagger {
    pub fn new(default_priority: u32) -> Self {
        Self { default_priority }
    }

    fn priority(&self, given: Option<i64>) -> std::result::Result<u32, ConfigurationError> {
        match given {
            None => Ok(self.default_priority),
            Some(p) => u32::try_from(p).map_err(|_| ConfigurationError::InvalidParam {
                directive: NAME,
                param: "priority".to_string(),
                message: format!("must be a non-negative integer, got {p}"),
            }),
        }
    }
}

impl Directive for EnvelopeTagger {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Wrap the body in an addressed, prioritised message marker"
    }

    fn parameters_schema(&self) -> JsonValue {
        json!({
            "type": "object",
            "properties": {
                "type": { "type": "string" },
                "priority": { "type": "integer", "minimum": 0 },
                "target": { "type": "string" },
                "reply": { "type": "boolean" }
            },
            "required": ["type"]
        })
    }

    fn execute(&self, body: Option<&str>, args: JsonValue, out: &mut dyn fmt::Write) -> Result<()> {
        let args: MessageArgs = parse_args(NAME, args)?;
        let kind: EnvelopeKind = args.kind.parse()?;
        let priority = self.priority(args.priority)?;
        let target = args.target.as_deref().map(Target::parse).transpose()?;
        let body = require_body(NAME, body)?;
        if body.contains(BODY_CLOSE) {
            return Err(ConfigurationError::InvalidParam {
                directive: NAME,
                param: "body".to_string(),
                message: format!("must not contain '{BODY_CLOSE}'"),
            }
            .into());
        }

        Envelope::write_head(out, kind, priority, target.as_ref(), args.reply)?;
        out.write_str(body)?;
        out.write_str(BODY_CLOSE)?;
        Ok(())
    }
}
