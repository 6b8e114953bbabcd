//! Turning rendered text into message units.

use chatter_core::text::{is_blank, limited_trim, split_lines};
use chatter_core::{AddressingContext, Envelope, MessageUnit};

use crate::error::ParseError;

const EXCERPT_LEN: usize = 40;

/// Extracts message units from a rendered blob.
pub trait UnitFactory: Send + Sync {
    fn parse(&self, text: &str, context: &AddressingContext) -> Result<Vec<MessageUnit>, ParseError>;
}

/// Reads envelope markers. Each line of a marker body becomes one unit;
/// text between markers is ignored.
#[derive(Debug, Clone)]
pub struct MarkerUnitFactory {
    default_priority: u32,
}

impl MarkerUnitFactory {
    pub fn new(default_priority: u32) -> Self {
        Self { default_priority }
    }

    fn resolve(&self, envelope: Envelope, context: &AddressingContext) -> Vec<MessageUnit> {
        let kind = envelope.kind.resolve(context.input_kind);
        let target = envelope
            .target
            .unwrap_or_else(|| context.default_target(kind).clone());

        split_lines(&envelope.body)
            .into_iter()
            .map(|line| {
                MessageUnit::new(kind, target.clone(), envelope.priority, limited_trim(line))
                    .with_receiver(envelope.reply)
            })
            .collect()
    }
}

impl UnitFactory for MarkerUnitFactory {
    fn parse(&self, text: &str, context: &AddressingContext) -> Result<Vec<MessageUnit>, ParseError> {
        let envelopes = Envelope::scan(text, self.default_priority);
        if envelopes.is_empty() {
            if is_blank(text) {
                return Ok(Vec::new());
            }
            return Err(ParseError::NoMarkers {
                excerpt: text.trim().chars().take(EXCERPT_LEN).collect(),
            });
        }

        let mut units = Vec::new();
        for envelope in envelopes {
            units.extend(self.resolve(envelope, context));
        }
        tracing::debug!(units = units.len(), "parsed message units");
        Ok(units)
    }
}
