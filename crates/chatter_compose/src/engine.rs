//! Template rendering.
//!
//! [`TemplateEngine`] is a minijinja environment with every directive of a
//! [`DirectiveSet`] registered as a filter, so templates invoke them as
//! blocks:
//!
//! ```text
//! {% filter message(type="notice", priority=3) %}Hello {{ name }}{% endfilter %}
//! ```

use std::path::Path;
use std::sync::Arc;

use chatter_core::text::capitalize_first_letters;
use chatter_directives::time::{from_unix, parse_timestamp};
use chatter_directives::{Directive, DirectiveSet, TimeAnnotator};
use minijinja::value::{Kwargs, Value};
use minijinja::{path_loader, AutoEscape, Environment, Error, ErrorKind, UndefinedBehavior};
use serde_json::Value as JsonValue;

use crate::config::ComposeConfig;
use crate::error::RenderError;

/// Turns a named template plus bindings into text.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, name: &str, data: &JsonValue) -> Result<String, RenderError>;
}

pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// An engine without a loader; templates are added with
    /// [`add_template`](Self::add_template).
    pub fn new(directives: &DirectiveSet) -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        for name in directives.names() {
            if let Some(directive) = directives.get(name) {
                register_directive(&mut env, directive);
            }
        }
        register_time_functions(&mut env);
        register_text_functions(&mut env);

        Self { env }
    }

    /// An engine loading templates from `dir`.
    pub fn with_loader(dir: impl AsRef<Path>, directives: &DirectiveSet) -> Self {
        let mut engine = Self::new(directives);
        engine.env.set_loader(path_loader(dir.as_ref()));
        engine
    }

    /// Loads from the configured directory with the default directives.
    pub fn from_config(config: &ComposeConfig) -> Self {
        let directives = DirectiveSet::with_defaults(&config.directive_settings());
        Self::with_loader(&config.templates_dir, &directives)
    }

    pub fn add_template(&mut self, name: impl Into<String>, source: impl Into<String>) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.into(), source.into())
            .map_err(RenderError::from)
    }
}

impl TemplateRenderer for TemplateEngine {
    fn render(&self, name: &str, data: &JsonValue) -> Result<String, RenderError> {
        let template = self.env.get_template(name)?;
        Ok(template.render(data)?)
    }
}

impl From<Error> for RenderError {
    fn from(err: Error) -> Self {
        if err.kind() == ErrorKind::TemplateNotFound || caused_by_io(&err) {
            RenderError::Io(err.to_string())
        } else {
            RenderError::Template(err.to_string())
        }
    }
}

fn caused_by_io(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if e.is::<std::io::Error>() {
            return true;
        }
        current = e.source();
    }
    false
}

fn register_directive(env: &mut Environment<'static>, directive: Arc<dyn Directive>) {
    let name = directive.name();
    env.add_filter(name, move |body: Option<String>, kwargs: Kwargs| -> Result<String, Error> {
        let args = kwargs_to_json(&kwargs)?;
        let mut out = String::new();
        directive
            .execute(body.as_deref(), args, &mut out)
            .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()).with_source(e))?;
        Ok(out)
    });
}

fn kwargs_to_json(kwargs: &Kwargs) -> Result<JsonValue, Error> {
    let mut map = serde_json::Map::new();
    for key in kwargs.args() {
        let value: Value = kwargs.get(key)?;
        let json = serde_json::to_value(&value).map_err(|e| {
            Error::new(ErrorKind::InvalidOperation, format!("argument {key}: {e}"))
        })?;
        map.insert(key.to_string(), json);
    }
    Ok(JsonValue::Object(map))
}

fn register_time_functions(env: &mut Environment<'static>) {
    env.add_function("time_since", |ts: Value| TimeAnnotator::new().since(timestamp_arg(&ts)));
    env.add_function("time_until", |ts: Value| TimeAnnotator::new().until(timestamp_arg(&ts)));
}

fn register_text_functions(env: &mut Environment<'static>) {
    env.add_function("color_with_age", |text: String, ts: Value| {
        TimeAnnotator::new().color_with_age(&text, timestamp_arg(&ts))
    });
    env.add_function("capitalize_first_letters", |s: String, lower_rest: Option<bool>| {
        capitalize_first_letters(&s, lower_rest.unwrap_or(false))
    });
}

/// Unix seconds or an RFC 3339 string.
fn timestamp_arg(value: &Value) -> Option<chrono::DateTime<chrono::Utc>> {
    if let Ok(secs) = i64::try_from(value.clone()) {
        return from_unix(secs);
    }
    value.as_str().and_then(parse_timestamp)
}
