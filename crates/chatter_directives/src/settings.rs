use chatter_constant::defaults;

/// Process-wide values the default directives are built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveSettings {
    pub default_priority: u32,
    pub max_line_length: usize,
    pub column_separator: String,
    pub column_padding: char,
    pub list_separator: String,
}

impl Default for DirectiveSettings {
    fn default() -> Self {
        Self {
            default_priority: defaults::DEFAULT_PRIORITY,
            max_line_length: defaults::MAX_LINE_LENGTH,
            column_separator: defaults::COLUMN_SEPARATOR.to_string(),
            column_padding: defaults::COLUMN_PADDING,
            list_separator: defaults::LIST_SEPARATOR.to_string(),
        }
    }
}
