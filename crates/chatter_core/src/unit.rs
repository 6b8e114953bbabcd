//! A single deliverable line.

use serde::Serialize;

use crate::kind::MessageKind;
use crate::target::Target;

/// One line of outbound text, fully resolved against its context.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct MessageUnit {
    pub kind: MessageKind,
    pub target: Target,
    pub priority: u32,
    pub text: String,
    /// Must be delivered by the instance that received the input
    pub use_receiver: bool,
}

impl MessageUnit {
    pub fn new(kind: MessageKind, target: Target, priority: u32, text: impl Into<String>) -> Self {
        Self {
            kind,
            target,
            priority,
            text: text.into(),
            use_receiver: false,
        }
    }

    pub fn with_receiver(mut self, use_receiver: bool) -> Self {
        self.use_receiver = use_receiver;
        self
    }

    pub fn is_blank(&self) -> bool {
        crate::text::is_blank(&self.text)
    }

    /// The raw protocol line for this unit.
    pub fn command(&self) -> String {
        self.kind.format_command(self.target.name(), &self.text)
    }

    /// Copy of this unit carrying different text.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command() {
        let unit = MessageUnit::new(
            MessageKind::Notice,
            Target::User("bob".to_string()),
            5,
            "hi there",
        );
        assert_eq!(unit.command(), "NOTICE bob :hi there");
    }

    #[test]
    fn test_is_blank() {
        let target = Target::User("bob".to_string());
        assert!(MessageUnit::new(MessageKind::Message, target.clone(), 5, " \t").is_blank());
        assert!(!MessageUnit::new(MessageKind::Message, target, 5, "x").is_blank());
    }
}
