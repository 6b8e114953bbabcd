mod args;
mod row;

pub use args::{ColumnSpec, ColumnsArgs};
pub use row::RowBuilder;

use std::borrow::Cow;
use std::fmt;

use chatter_constant::style::{NORMAL, UNDERLINE};
use chatter_core::text::{limited_trim, split_lines};
use serde_json::{json, Value as JsonValue};

use crate::directives::{parse_args, require_body, Directive};
use crate::error::Result;

pub(crate) const NAME: &str = "columns";

/// Lays body lines out as a fixed-width table, one line per cell.
///
/// A trailing group with fewer lines than there are columns is not written.
pub struct ColumnFormatter {
    separator: String,
    padding: char,
}

impl ColumnFormatter {
    pub fn new(separator: impl Into<String>, padding: char) -> Self {
        Self {
            separator: separator.into(),
            padding,
        }
    }

    pub fn format(&self, body: &str, spec: &ColumnSpec, out: &mut dyn fmt::Write) -> Result<()> {
        let body = limited_trim(body);
        let body: Cow<'_, str> = if spec.emphasis {
            Cow::Owned(body.replace(NORMAL, &format!("{NORMAL}{UNDERLINE}")))
        } else {
            Cow::Borrowed(body)
        };

        let mut row = RowBuilder::new(spec);
        let mut rows = 0usize;
        for line in split_lines(&body) {
            if let Some(finished) = row.push(line) {
                out.write_str(&finished)?;
                rows += 1;
            }
        }
        if row.next_column() > 0 {
            tracing::debug!(
                dropped = row.next_column(),
                "columns: partial row not written"
            );
        }
        tracing::trace!(rows, "columns: table written");
        Ok(())
    }
}

impl Directive for ColumnFormatter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Lay out body lines as rows of fixed-width columns"
    }

    fn parameters_schema(&self) -> JsonValue {
        json!({
            "type": "object",
            "properties": {
                "widths": { "type": "array", "items": { "type": "integer", "minimum": 0 } },
                "separator": { "type": "string" },
                "padding": { "type": "string", "maxLength": 1 },
                "underlined": { "type": "boolean" }
            },
            "required": ["widths"]
        })
    }

    fn execute(&self, body: Option<&str>, args: JsonValue, out: &mut dyn fmt::Write) -> Result<()> {
        let args: ColumnsArgs = parse_args(NAME, args)?;
        let spec = ColumnSpec::resolve(args, &self.separator, self.padding)?;
        let body = require_body(NAME, body)?;
        self.format(body, &spec, out)
    }
}
