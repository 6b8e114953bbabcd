//! Default values for composition settings.
//!
//! Every value here can be overridden through `ComposeConfig`.

/// Directory templates are loaded from
pub const TEMPLATES_DIR: &str = "templates";
/// File extension appended to template names that lack one
pub const TEMPLATE_EXTENSION: &str = ".tmpl";
/// Priority given to envelopes that do not declare one
pub const DEFAULT_PRIORITY: u32 = 5;
/// Maximum length of one outgoing protocol line
pub const MAX_LINE_LENGTH: usize = 350;

/// Column separator used by the `columns` directive
pub const COLUMN_SEPARATOR: &str = " I ";
/// Column padding used by the `columns` directive
pub const COLUMN_PADDING: char = ' ';
/// Item separator used by the `compact` directive
pub const LIST_SEPARATOR: &str = ", ";

/// Environment variable overriding the templates directory
pub const ENV_TEMPLATES_DIR: &str = "CHATTER_TEMPLATES_DIR";
/// Environment variable overriding the default priority
pub const ENV_DEFAULT_PRIORITY: &str = "CHATTER_DEFAULT_PRIORITY";
/// Environment variable overriding the maximum line length
pub const ENV_MAX_LINE_LENGTH: &str = "CHATTER_MAX_LINE_LENGTH";
/// Environment variable holding the log filter
pub const ENV_LOG: &str = "CHATTER_LOG";
