mod args;

pub use args::{CompactListArgs, CompactListSpec};

use std::fmt;

use chatter_constant::style::NORMAL;
use chatter_core::text::{is_blank, limited_trim, split_lines};
use serde_json::{json, Value as JsonValue};

use crate::directives::{parse_args, require_body, Directive};
use crate::error::Result;

pub(crate) const NAME: &str = "compact";

/// Joins body lines into a separated paragraph, broken into chunks that
/// stay under the line budget. The intro only costs budget on the first
/// chunk. A single line longer than the budget is written whole.
pub struct CompactListFormatter {
    separator: String,
    budget: usize,
}

impl CompactListFormatter {
    pub fn new(separator: impl Into<String>, budget: usize) -> Self {
        Self {
            separator: separator.into(),
            budget,
        }
    }

    pub fn format(&self, body: &str, spec: &CompactListSpec, out: &mut dyn fmt::Write) -> Result<()> {
        out.write_str(&spec.intro)?;

        let separator_len = spec.separator.chars().count();
        let mut reserved = spec.intro.chars().count();
        let mut acc = String::new();
        let mut acc_len = 0usize;
        let mut chunks = 0usize;

        for line in split_lines(body) {
            if is_blank(line) {
                continue;
            }
            let mut item = limited_trim(line).to_string();
            item.push_str(NORMAL);
            let item_len = item.chars().count();

            let occupied = reserved + acc_len;
            let joint = if acc.is_empty() { 0 } else { separator_len };
            if occupied > 0 && occupied + joint + item_len >= spec.budget {
                out.write_str(&acc)?;
                out.write_char('\n')?;
                chunks += 1;
                acc.clear();
                acc_len = 0;
                reserved = 0;
            } else if !acc.is_empty() {
                acc.push_str(&spec.separator);
                acc_len += separator_len;
            }
            acc.push_str(&item);
            acc_len += item_len;
        }

        if !acc.is_empty() {
            out.write_str(&acc)?;
            chunks += 1;
        }
        tracing::trace!(chunks, "compact: list written");
        Ok(())
    }
}

impl Directive for CompactListFormatter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Join body lines into separated chunks bounded by the line budget"
    }

    fn parameters_schema(&self) -> JsonValue {
        json!({
            "type": "object",
            "properties": {
                "intro": { "type": "string" },
                "separator": { "type": "string" }
            }
        })
    }

    fn execute(&self, body: Option<&str>, args: JsonValue, out: &mut dyn fmt::Write) -> Result<()> {
        let args: CompactListArgs = parse_args(NAME, args)?;
        let spec = CompactListSpec::resolve(args, &self.separator, self.budget)?;
        let body = require_body(NAME, body)?;
        self.format(body, &spec, out)
    }
}
