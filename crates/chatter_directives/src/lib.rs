pub mod directives;
pub mod error;
pub mod settings;
pub mod time;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use serde_json::Value as JsonValue;

pub use directives::{
    ColumnFormatter, ColumnSpec, ColumnsArgs, CompactListArgs, CompactListFormatter,
    CompactListSpec, Directive, EnvelopeTagger, MessageArgs, RowBuilder,
};
pub use error::{DirectiveError, Result};
pub use settings::DirectiveSettings;
pub use time::TimeAnnotator;

/// The fixed table of directives handed to a template engine.
#[derive(Clone)]
pub struct DirectiveSet {
    directives: HashMap<String, Arc<dyn Directive>>,
}

impl DirectiveSet {
    /// An empty set.
    pub fn new() -> Self {
        Self {
            directives: HashMap::new(),
        }
    }

    /// `columns`, `compact` and `message`, configured from `settings`.
    pub fn with_defaults(settings: &DirectiveSettings) -> Self {
        let mut set = Self::new();
        set.register_defaults(settings);
        set
    }

    fn register_defaults(&mut self, settings: &DirectiveSettings) {
        let columns = ColumnFormatter::new(&settings.column_separator, settings.column_padding);
        self.register(columns);

        let compact = CompactListFormatter::new(&settings.list_separator, settings.max_line_length);
        self.register(compact);

        let message = EnvelopeTagger::new(settings.default_priority);
        self.register(message);
    }

    pub fn register<D: Directive + 'static>(&mut self, directive: D) {
        self.directives
            .insert(directive.name().to_string(), Arc::new(directive));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Directive>> {
        self.directives.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.directives.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run `name` over `body` and collect its output.
    pub fn call(&self, name: &str, body: Option<&str>, args: JsonValue) -> Result<String> {
        let directive = self
            .get(name)
            .ok_or_else(|| DirectiveError::NotFound(name.to_string()))?;

        let start = Instant::now();
        let mut out = String::new();
        directive.execute(body, args, &mut out)?;
        tracing::debug!(
            directive = name,
            output_len = out.len(),
            duration_us = start.elapsed().as_micros() as u64,
            "directive executed"
        );
        Ok(out)
    }

    pub fn list_directives(&self) -> Vec<DirectiveInfo> {
        let mut infos: Vec<DirectiveInfo> = self
            .directives
            .values()
            .map(|d| DirectiveInfo {
                name: d.name().to_string(),
                description: d.description().to_string(),
                parameters: d.parameters_schema(),
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }
}

impl Default for DirectiveSet {
    fn default() -> Self {
        Self::with_defaults(&DirectiveSettings::default())
    }
}

#[derive(Debug, Clone)]
pub struct DirectiveInfo {
    pub name: String,
    pub description: String,
    pub parameters: JsonValue,
}
