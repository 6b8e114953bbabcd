//! Batches of units sharing a recipient and a priority, and the ordered
//! result of one composition.

use std::cmp::Ordering;

use serde::Serialize;

use crate::target::Target;
use crate::unit::MessageUnit;

/// Units that share a (target identity, priority) pair, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputBatch {
    pub target: Target,
    pub priority: u32,
    /// The instance that must deliver this batch, if any
    pub handler: Option<String>,
    units: Vec<MessageUnit>,
}

impl OutputBatch {
    /// Starts a batch with its first unit. The batch is handled by
    /// `receiver` when that unit asks for it.
    pub fn new(first: MessageUnit, receiver: &str) -> Self {
        let handler = first.use_receiver.then(|| receiver.to_string());
        Self {
            target: first.target.clone(),
            priority: first.priority,
            handler,
            units: vec![first],
        }
    }

    /// Grouping key: `identity priority`.
    pub fn key_of(unit: &MessageUnit) -> String {
        format!("{} {}", unit.target.identity(), unit.priority)
    }

    pub fn key(&self) -> String {
        format!("{} {}", self.target.identity(), self.priority)
    }

    pub fn push(&mut self, unit: MessageUnit) {
        self.units.push(unit);
    }

    pub fn units(&self) -> &[MessageUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Splits every unit whose text is longer than `max_length` characters
    /// into consecutive slices of `max_length - 1` characters.
    pub fn conform_to_max_length(&mut self, max_length: usize) {
        let slice_len = max_length.saturating_sub(1).max(1);
        let mut conformed = Vec::with_capacity(self.units.len());
        for unit in self.units.drain(..) {
            if unit.text.chars().count() <= max_length {
                conformed.push(unit);
                continue;
            }
            let chars: Vec<char> = unit.text.chars().collect();
            for slice in chars.chunks(slice_len) {
                conformed.push(unit.with_text(slice.iter().collect::<String>()));
            }
        }
        self.units = conformed;
    }

    /// Raw protocol lines, in delivery order.
    pub fn commands(&self) -> Vec<String> {
        self.units.iter().map(MessageUnit::command).collect()
    }
}

impl Ord for OutputBatch {
    /// Priority first, then recipient. Keys are unique within a result, so
    /// the remaining fields only break ties between batches of different
    /// results, keeping the order consistent with `Eq`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.target.identity().cmp(&other.target.identity()))
            .then_with(|| self.target.cmp(&other.target))
            .then_with(|| self.handler.cmp(&other.handler))
            .then_with(|| self.units.cmp(&other.units))
    }
}

impl PartialOrd for OutputBatch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The ordered batches produced by one composition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompositionResult {
    batches: Vec<OutputBatch>,
}

impl CompositionResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sorts `batches` into delivery order.
    pub fn from_batches(mut batches: Vec<OutputBatch>) -> Self {
        batches.sort();
        Self { batches }
    }

    pub fn batches(&self) -> &[OutputBatch] {
        &self.batches
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutputBatch> {
        self.batches.iter()
    }

    pub fn conform_to_max_length(&mut self, max_length: usize) {
        for batch in &mut self.batches {
            batch.conform_to_max_length(max_length);
        }
    }
}

impl IntoIterator for CompositionResult {
    type Item = OutputBatch;
    type IntoIter = std::vec::IntoIter<OutputBatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.batches.into_iter()
    }
}

impl<'a> IntoIterator for &'a CompositionResult {
    type Item = &'a OutputBatch;
    type IntoIter = std::slice::Iter<'a, OutputBatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.batches.iter()
    }
}
