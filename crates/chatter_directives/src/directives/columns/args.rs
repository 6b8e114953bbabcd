use chatter_core::ConfigurationError;
use serde::{Deserialize, Serialize};

use super::NAME;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ColumnsArgs {
    #[serde(default, alias = "colLengths")]
    pub widths: Option<Vec<usize>>,

    #[serde(default)]
    pub separator: Option<String>,

    #[serde(default)]
    pub padding: Option<String>,

    #[serde(default)]
    pub underlined: bool,
}

impl ColumnsArgs {
    pub fn new(widths: Vec<usize>) -> Self {
        Self {
            widths: Some(widths),
            ..Self::default()
        }
    }
}

/// Resolved layout of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub widths: Vec<usize>,
    pub padding: char,
    pub separator: String,
    /// Underline every cell
    pub emphasis: bool,
}

impl ColumnSpec {
    pub fn resolve(
        args: ColumnsArgs,
        default_separator: &str,
        default_padding: char,
    ) -> Result<Self, ConfigurationError> {
        let widths = args.widths.ok_or(ConfigurationError::MissingParam {
            directive: NAME,
            param: "widths",
        })?;
        if widths.is_empty() {
            return Err(ConfigurationError::InvalidParam {
                directive: NAME,
                param: "widths".to_string(),
                message: "at least one width is required".to_string(),
            });
        }

        let padding = match args.padding {
            None => default_padding,
            Some(p) => {
                let mut chars = p.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => {
                        return Err(ConfigurationError::InvalidParam {
                            directive: NAME,
                            param: "padding".to_string(),
                            message: format!("expected a single character, got '{p}'"),
                        });
                    }
                }
            }
        };

        Ok(Self {
            widths,
            padding,
            separator: args
                .separator
                .unwrap_or_else(|| default_separator.to_string()),
            emphasis: args.underlined,
        })
    }
}
