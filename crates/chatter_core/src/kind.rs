//! Message kinds: how a unit of text is delivered.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConfigurationError;

/// A concrete delivery kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKind {
    Action,
    Ctcp,
    Message,
    Notice,
    PrivateMessage,
}

impl MessageKind {
    pub const ALL: [MessageKind; 5] = [
        MessageKind::Action,
        MessageKind::Ctcp,
        MessageKind::Message,
        MessageKind::Notice,
        MessageKind::PrivateMessage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MessageKind::Action => "ACTION",
            MessageKind::Ctcp => "CTCP",
            MessageKind::Message => "MESSAGE",
            MessageKind::Notice => "NOTICE",
            MessageKind::PrivateMessage => "PRIVATE_MESSAGE",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            MessageKind::Action => "me",
            MessageKind::Ctcp => "ctcp",
            MessageKind::Message => "msg",
            MessageKind::Notice => "notice",
            MessageKind::PrivateMessage => "pm",
        }
    }

    /// Looks up a kind by long or short name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| {
            kind.name().eq_ignore_ascii_case(name) || kind.short_name().eq_ignore_ascii_case(name)
        })
    }

    /// Kinds that address a channel when no explicit target is given.
    pub fn targets_channel_by_default(&self) -> bool {
        matches!(self, MessageKind::Message | MessageKind::Action)
    }

    /// Raw protocol line delivering `text` to `target`.
    pub fn format_command(&self, target: &str, text: &str) -> String {
        match self {
            MessageKind::Action => format!("PRIVMSG {target} :\u{0001}ACTION {text}\u{0001}"),
            MessageKind::Ctcp => format!("NOTICE {target} :\u{0001}{text}\u{0001}"),
            MessageKind::Message | MessageKind::PrivateMessage => {
                format!("PRIVMSG {target} :{text}")
            }
            MessageKind::Notice => format!("NOTICE {target} :{text}"),
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A kind resolved against the input that triggered the composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyKind {
    ReplyNotice,
    ReplyMessage,
}

impl ReplyKind {
    pub const ALL: [ReplyKind; 2] = [ReplyKind::ReplyNotice, ReplyKind::ReplyMessage];

    pub fn name(&self) -> &'static str {
        match self {
            ReplyKind::ReplyNotice => "REPLY_NOTICE",
            ReplyKind::ReplyMessage => "REPLY_MESSAGE",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Private input gets a private answer; anything else gets a notice or
    /// a channel message.
    pub fn resolve(&self, input: MessageKind) -> MessageKind {
        if input == MessageKind::PrivateMessage {
            return MessageKind::PrivateMessage;
        }
        match self {
            ReplyKind::ReplyNotice => MessageKind::Notice,
            ReplyKind::ReplyMessage => MessageKind::Message,
        }
    }
}

/// The kind written into an envelope marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeKind {
    Direct(MessageKind),
    Reply(ReplyKind),
}

impl EnvelopeKind {
    pub fn from_name(name: &str) -> Option<Self> {
        MessageKind::from_name(name)
            .map(EnvelopeKind::Direct)
            .or_else(|| ReplyKind::from_name(name).map(EnvelopeKind::Reply))
    }

    pub fn name(&self) -> &'static str {
        match self {
            EnvelopeKind::Direct(kind) => kind.name(),
            EnvelopeKind::Reply(kind) => kind.name(),
        }
    }

    pub fn resolve(&self, input: MessageKind) -> MessageKind {
        match self {
            EnvelopeKind::Direct(kind) => *kind,
            EnvelopeKind::Reply(kind) => kind.resolve(input),
        }
    }

    /// Every accepted name, e.g. `[ACTION, me, CTCP, ctcp, ...]`.
    pub fn all_names() -> String {
        let names: Vec<&str> = MessageKind::ALL
            .iter()
            .flat_map(|kind| [kind.name(), kind.short_name()])
            .chain(ReplyKind::ALL.iter().map(|kind| kind.name()))
            .collect();
        format!("[{}]", names.join(", "))
    }
}

impl FromStr for EnvelopeKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnvelopeKind::from_name(s.trim()).ok_or_else(|| ConfigurationError::UnknownKind {
            given: s.to_string(),
            legal: EnvelopeKind::all_names(),
        })
    }
}

impl fmt::Display for EnvelopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
