//! Composition settings

use std::path::{Path, PathBuf};

use chatter_constant::defaults;
use chatter_directives::DirectiveSettings;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings shared by every composition. Built once, then only read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    /// Directory templates are loaded from
    pub templates_dir: PathBuf,
    /// Appended to template names that lack it
    pub template_extension: String,
    /// Priority of envelopes that declare none
    pub default_priority: u32,
    /// Budget for compact lists and outgoing lines
    pub max_line_length: usize,
    pub column_separator: String,
    pub column_padding: char,
    pub list_separator: String,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(defaults::TEMPLATES_DIR))
    }
}

impl ComposeConfig {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
            template_extension: defaults::TEMPLATE_EXTENSION.to_string(),
            default_priority: defaults::DEFAULT_PRIORITY,
            max_line_length: defaults::MAX_LINE_LENGTH,
            column_separator: defaults::COLUMN_SEPARATOR.to_string(),
            column_padding: defaults::COLUMN_PADDING,
            list_separator: defaults::LIST_SEPARATOR.to_string(),
        }
    }

    pub fn with_templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = dir.into();
        self
    }

    pub fn with_template_extension(mut self, extension: impl Into<String>) -> Self {
        self.template_extension = extension.into();
        self
    }

    pub fn with_default_priority(mut self, priority: u32) -> Self {
        self.default_priority = priority;
        self
    }

    pub fn with_max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = max;
        self
    }

    pub fn with_column_separator(mut self, separator: impl Into<String>) -> Self {
        self.column_separator = separator.into();
        self
    }

    pub fn with_column_padding(mut self, padding: char) -> Self {
        self.column_padding = padding;
        self
    }

    pub fn with_list_separator(mut self, separator: impl Into<String>) -> Self {
        self.list_separator = separator.into();
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::default().merge_lookup(|key| std::env::var(key).ok())
    }

    /// Override fields from a variable source. Unparseable values are
    /// ignored.
    pub fn merge_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(defaults::ENV_TEMPLATES_DIR) {
            self.templates_dir = PathBuf::from(dir);
        }

        if let Some(priority) = lookup(defaults::ENV_DEFAULT_PRIORITY) {
            if let Ok(val) = priority.trim().parse::<u32>() {
                self.default_priority = val;
            }
        }

        if let Some(max) = lookup(defaults::ENV_MAX_LINE_LENGTH) {
            if let Ok(val) = max.trim().parse::<usize>() {
                self.max_line_length = val;
            }
        }

        self
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn directive_settings(&self) -> DirectiveSettings {
        DirectiveSettings {
            default_priority: self.default_priority,
            max_line_length: self.max_line_length,
            column_separator: self.column_separator.clone(),
            column_padding: self.column_padding,
            list_separator: self.list_separator.clone(),
        }
    }

    /// `name` with the template extension appended unless already present.
    pub fn template_file(&self, name: &str) -> String {
        if name.ends_with(&self.template_extension) {
            name.to_string()
        } else {
            format!("{name}{}", self.template_extension)
        }
    }

    /// Variant of `name` selected by `count` prefixes: the count goes in
    /// front of the extension, or at the end when there is none.
    pub fn alternate_name(&self, name: &str, count: u32) -> String {
        match name.rfind(&self.template_extension) {
            Some(idx) if !self.template_extension.is_empty() => {
                format!("{}{count}{}", &name[..idx], self.template_extension)
            }
            _ => format!("{name}{count}"),
        }
    }
}
