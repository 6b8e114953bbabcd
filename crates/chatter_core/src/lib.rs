pub mod batch;
pub mod context;
pub mod envelope;
pub mod error;
pub mod kind;
pub mod style;
pub mod target;
pub mod text;
pub mod unit;

pub use batch::{CompositionResult, OutputBatch};
pub use context::AddressingContext;
pub use envelope::Envelope;
pub use error::{ConfigurationError, MarkerError, Result};
pub use kind::{EnvelopeKind, MessageKind, ReplyKind};
pub use style::{Segment, StyleToken};
pub use target::Target;
pub use unit::MessageUnit;
