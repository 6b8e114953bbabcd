//! Who a composition is addressed to.

use serde::Serialize;

use crate::kind::MessageKind;
use crate::target::Target;

/// The conversation that triggered a composition.
///
/// Units that carry no explicit target are resolved against it, and reply
/// kinds are resolved against `input_kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressingContext {
    /// How many command prefixes the user typed; more than one selects an
    /// alternate template variant
    pub prefixes_used: u32,
    pub input_kind: MessageKind,
    /// `None` for private conversations
    pub channel: Option<Target>,
    pub user: Target,
    /// The instance that received the input
    pub receiver: String,
}

impl AddressingContext {
    /// A private conversation with `user`.
    pub fn new(user: Target, receiver: impl Into<String>) -> Self {
        Self {
            prefixes_used: 1,
            input_kind: MessageKind::PrivateMessage,
            channel: None,
            user,
            receiver: receiver.into(),
        }
    }

    /// Moves the conversation into `channel`.
    pub fn with_channel(mut self, channel: Target) -> Self {
        self.channel = Some(channel);
        if self.input_kind == MessageKind::PrivateMessage {
            self.input_kind = MessageKind::Message;
        }
        self
    }

    pub fn with_input_kind(mut self, kind: MessageKind) -> Self {
        self.input_kind = kind;
        self
    }

    pub fn with_prefixes_used(mut self, prefixes_used: u32) -> Self {
        self.prefixes_used = prefixes_used;
        self
    }

    pub fn is_private(&self) -> bool {
        self.input_kind == MessageKind::PrivateMessage || self.channel.is_none()
    }

    /// Recipient for a unit of `kind` that names no target. Channel-facing
    /// kinds go to the channel when there is one; everything else goes to
    /// the user.
    pub fn default_target(&self, kind: MessageKind) -> &Target {
        match (&self.channel, kind.targets_channel_by_default()) {
            (Some(channel), true) => channel,
            _ => &self.user,
        }
    }
}
