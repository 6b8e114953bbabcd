//! The composition pipeline: select a template, render it, parse the
//! markers, then group and order the resulting units.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use chatter_core::style::formatting_bindings;
use chatter_core::{AddressingContext, CompositionResult, MessageUnit, OutputBatch};
use chatter_observability::{compose_span, record_duration, record_error, render_span};
use serde_json::{Map, Value as JsonValue};

use crate::config::ComposeConfig;
use crate::engine::{TemplateEngine, TemplateRenderer};
use crate::error::{CompositionError, RenderError, Result};
use crate::factory::{MarkerUnitFactory, UnitFactory};

/// Stateless between calls; safe to share across threads.
pub struct CompositionManager {
    config: ComposeConfig,
    renderer: Arc<dyn TemplateRenderer>,
    factory: Arc<dyn UnitFactory>,
}

impl CompositionManager {
    pub fn new(
        config: ComposeConfig,
        renderer: Arc<dyn TemplateRenderer>,
        factory: Arc<dyn UnitFactory>,
    ) -> Self {
        Self {
            config,
            renderer,
            factory,
        }
    }

    /// Templates from the configured directory, markers parsed with the
    /// default factory.
    pub fn from_config(config: ComposeConfig) -> Self {
        let renderer = Arc::new(TemplateEngine::from_config(&config));
        let factory = Arc::new(MarkerUnitFactory::new(config.default_priority));
        Self::new(config, renderer, factory)
    }

    pub fn config(&self) -> &ComposeConfig {
        &self.config
    }

    /// Compose `template` against `data`. Every failure is logged and
    /// yields an empty result, meaning "nothing to send".
    pub fn compose(
        &self,
        data: &Map<String, JsonValue>,
        template: &str,
        context: &AddressingContext,
    ) -> CompositionResult {
        let span = compose_span!(template, context.prefixes_used);
        let _guard = span.enter();
        let start = Instant::now();

        let result = match self.try_compose(data, template, context) {
            Ok(result) => result,
            Err(e) => {
                record_error(&e);
                CompositionResult::empty()
            }
        };
        span.record("batches", result.len());
        record_duration("duration_ms", start.elapsed());
        result
    }

    /// Like [`compose`](Self::compose) but reports the failure.
    pub fn try_compose(
        &self,
        data: &Map<String, JsonValue>,
        template: &str,
        context: &AddressingContext,
    ) -> Result<CompositionResult> {
        let bindings = self.bindings(data);
        let text = self.render_with_fallback(template, context, &bindings)?;
        let units = self.factory.parse(&text, context)?;
        Ok(group_units(units, &context.receiver))
    }

    /// Caller data with the formatting names layered on top.
    fn bindings(&self, data: &Map<String, JsonValue>) -> JsonValue {
        let mut bindings = data.clone();
        for (name, literal) in formatting_bindings() {
            bindings.insert(name.to_string(), JsonValue::String(literal.to_string()));
        }
        JsonValue::Object(bindings)
    }

    /// At most two attempts: the prefix-count variant first, then the
    /// plain template if the variant is unavailable.
    fn render_with_fallback(
        &self,
        template: &str,
        context: &AddressingContext,
        bindings: &JsonValue,
    ) -> Result<String> {
        if context.prefixes_used > 1 {
            let alternate = self.config.alternate_name(template, context.prefixes_used);
            match self.render(&alternate, bindings) {
                Ok(text) => return Ok(text),
                Err(RenderError::Io(message)) => {
                    tracing::warn!(
                        template = %alternate,
                        error = %message,
                        "alternate template unavailable, using primary"
                    );
                }
                Err(source) => {
                    return Err(CompositionError::Render {
                        template: alternate,
                        source,
                    });
                }
            }
        }

        self.render(template, bindings)
            .map_err(|source| CompositionError::Render {
                template: template.to_string(),
                source,
            })
    }

    fn render(&self, name: &str, bindings: &JsonValue) -> std::result::Result<String, RenderError> {
        let file = self.config.template_file(name);
        let span = render_span!(file.as_str());
        let _guard = span.enter();

        let text = self.renderer.render(&file, bindings)?;
        span.record("output_len", text.len());
        Ok(text)
    }
}

/// Groups units by (target identity, priority), keeping arrival order within
/// each batch, and drops blank units.
pub fn group_units(units: Vec<MessageUnit>, receiver: &str) -> CompositionResult {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut batches: Vec<OutputBatch> = Vec::new();
    let mut discarded = 0usize;

    for unit in units {
        if unit.is_blank() {
            discarded += 1;
            continue;
        }
        match index.entry(OutputBatch::key_of(&unit)) {
            Entry::Occupied(slot) => batches[*slot.get()].push(unit),
            Entry::Vacant(slot) => {
                slot.insert(batches.len());
                batches.push(OutputBatch::new(unit, receiver));
            }
        }
    }

    if discarded > 0 {
        tracing::debug!(discarded, "blank units discarded");
    }
    CompositionResult::from_batches(batches)
}
