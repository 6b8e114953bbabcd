//! The envelope marker: a textual mini-protocol written into rendered text
//! by the `message` directive and parsed back out by the unit factory.
//!
//! Grammar:
//!
//! ```text
//! marker   = kind ws* "(" params ")" ws* "<{" body "}>"
//! params   = [priority] ["," target] ["," flag]
//! flag     = "true" | "false"
//! ```
//!
//! `kind` is any name accepted by [`EnvelopeKind::from_name`]. The body runs
//! to the first `}>`, so a body containing `}>` cannot be carried.
//!
//! A lone parameter after the priority is the reply flag when it reads
//! `true` or `false`, otherwise the target. Since `true` and `false` are also
//! legal nicknames, the writer always follows a target with its flag.

use std::fmt;

use crate::error::MarkerError;
use crate::kind::EnvelopeKind;
use crate::target::Target;

pub const BODY_OPEN: &str = "<{";
pub const BODY_CLOSE: &str = "}>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub kind: EnvelopeKind,
    pub priority: u32,
    /// `None` means "the context's default recipient"
    pub target: Option<Target>,
    /// Deliver through the instance that received the triggering input
    pub reply: bool,
    pub body: String,
}

impl Envelope {
    pub fn new(kind: EnvelopeKind, priority: u32, body: impl Into<String>) -> Self {
        Self {
            kind,
            priority,
            target: None,
            reply: false,
            body: body.into(),
        }
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_reply(mut self, reply: bool) -> Self {
        self.reply = reply;
        self
    }

    /// Write the marker head, everything up to and including `<{`.
    pub fn write_head<W: fmt::Write + ?Sized>(
        out: &mut W,
        kind: EnvelopeKind,
        priority: u32,
        target: Option<&Target>,
        reply: bool,
    ) -> fmt::Result {
        write!(out, "{}({}", kind.name(), priority)?;
        match target {
            Some(target) => write!(out, ",{},{}", target.name(), reply)?,
            None if reply => out.write_str(",true")?,
            None => {}
        }
        write!(out, "){BODY_OPEN}")
    }

    /// Parse text holding exactly one marker, surrounding whitespace allowed.
    pub fn parse(s: &str, default_priority: u32) -> Result<Self, MarkerError> {
        let trimmed = s.trim();
        let (envelope, consumed) = parse_at(trimmed, default_priority)?;
        let rest = trimmed[consumed..].trim();
        if !rest.is_empty() {
            return Err(MarkerError::Trailing(rest.to_string()));
        }
        Ok(envelope)
    }

    /// Every marker in `text`, in order. Text between markers is ignored.
    /// Scanning ends at the first marker whose body is never closed.
    pub fn scan(text: &str, default_priority: u32) -> Vec<Self> {
        let mut out = Vec::new();
        let mut pos = 0;
        let mut prev: Option<char> = None;
        while pos < text.len() {
            let rest = &text[pos..];
            let Some(c) = rest.chars().next() else { break };
            let starts_word = (c.is_ascii_alphabetic() || c == '_') && !prev.is_some_and(is_ident_char);
            if starts_word {
                match parse_at(rest, default_priority) {
                    Ok((envelope, consumed)) => {
                        out.push(envelope);
                        pos += consumed;
                        prev = None;
                        continue;
                    }
                    // nothing ahead can close a later marker either
                    Err(MarkerError::Unterminated | MarkerError::UnclosedParams) => break,
                    Err(_) => {}
                }
            }
            prev = Some(c);
            pos += c.len_utf8();
        }
        out
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Envelope::write_head(f, self.kind, self.priority, self.target.as_ref(), self.reply)?;
        f.write_str(&self.body)?;
        f.write_str(BODY_CLOSE)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Parse one marker at the start of `s`, returning it and the bytes consumed.
fn parse_at(s: &str, default_priority: u32) -> Result<(Envelope, usize), MarkerError> {
    let ident_len = s.find(|c: char| !is_ident_char(c)).unwrap_or(s.len());
    if ident_len == 0 {
        return Err(MarkerError::NotFound);
    }
    let ident = &s[..ident_len];
    let kind =
        EnvelopeKind::from_name(ident).ok_or_else(|| MarkerError::UnknownKind(ident.to_string()))?;

    let after_ident = &s[ident_len..];
    let params_start = after_ident.trim_start();
    let Some(params_src) = params_start.strip_prefix('(') else {
        return Err(MarkerError::BadParams("expected '('".to_string()));
    };
    let close = params_src.find(')').ok_or(MarkerError::UnclosedParams)?;
    let (priority, target, reply) = parse_params(&params_src[..close], default_priority)?;

    let after_params = params_src[close + 1..].trim_start();
    let Some(body_src) = after_params.strip_prefix(BODY_OPEN) else {
        return Err(MarkerError::BadParams(format!("expected '{BODY_OPEN}'")));
    };
    let body_end = body_src.find(BODY_CLOSE).ok_or(MarkerError::Unterminated)?;
    let body = &body_src[..body_end];

    let consumed = s.len() - body_src.len() + body_end + BODY_CLOSE.len();
    let envelope = Envelope {
        kind,
        priority,
        target,
        reply,
        body: body.to_string(),
    };
    Ok((envelope, consumed))
}

fn parse_params(
    src: &str,
    default_priority: u32,
) -> Result<(u32, Option<Target>, bool), MarkerError> {
    let mut params: Vec<&str> = if src.trim().is_empty() {
        Vec::new()
    } else {
        src.split(',').map(str::trim).collect()
    };

    let mut priority = default_priority;
    if let Some(first) = params.first() {
        if !first.is_empty() && first.bytes().all(|b| b.is_ascii_digit()) {
            priority = first
                .parse()
                .map_err(|_| MarkerError::BadParams(format!("priority out of range: {first}")))?;
            params.remove(0);
        }
    }

    let (target, reply) = match params.as_slice() {
        [] => (None, false),
        [single] => match parse_flag(single) {
            Some(reply) => (None, reply),
            None => (Some(parse_target(single)?), false),
        },
        [name, flag] => {
            let reply = parse_flag(flag).ok_or_else(|| MarkerError::BadParams(src.to_string()))?;
            (Some(parse_target(name)?), reply)
        }
        _ => return Err(MarkerError::BadParams(src.to_string())),
    };
    Ok((priority, target, reply))
}

fn parse_flag(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_target(name: &str) -> Result<Target, MarkerError> {
    Target::parse(name).map_err(|e| MarkerError::BadParams(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{MessageKind, ReplyKind};

    fn msg() -> EnvelopeKind {
        EnvelopeKind::Direct(MessageKind::Message)
    }

    #[test]
    fn test_display_minimal() {
        let envelope = Envelope::new(msg(), 5, "Hello X");
        assert_eq!(envelope.to_string(), "MESSAGE(5)<{Hello X}>");
    }

    #[test]
    fn test_display_full() {
        let envelope = Envelope::new(EnvelopeKind::Direct(MessageKind::Notice), 3, "hi")
            .with_target(Target::parse("#chan").unwrap())
            .with_reply(true);
        assert_eq!(envelope.to_string(), "NOTICE(3,#chan,true)<{hi}>");
    }

    #[test]
    fn test_display_target_always_carries_flag() {
        let envelope = Envelope::new(msg(), 5, "x").with_target(Target::parse("true").unwrap());
        assert_eq!(envelope.to_string(), "MESSAGE(5,true,false)<{x}>");

        let envelope = Envelope::new(msg(), 5, "x").with_reply(true);
        assert_eq!(envelope.to_string(), "MESSAGE(5,true)<{x}>");
    }

    #[test]
    fn test_parse_lone_param_flag_or_target() {
        let parsed = Envelope::parse("msg(5,true)<{x}>", 5).unwrap();
        assert_eq!(parsed.target, None);
        assert!(parsed.reply);

        let parsed = Envelope::parse("msg(5,False)<{x}>", 5).unwrap();
        assert_eq!(parsed.target, None);
        assert!(!parsed.reply);

        let parsed = Envelope::parse("msg(5,bob)<{x}>", 5).unwrap();
        assert_eq!(parsed.target, Some(Target::User("bob".to_string())));
        assert!(!parsed.reply);
    }

    #[test]
    fn test_parse_target_then_flag() {
        let parsed = Envelope::parse("msg(5,false,true)<{x}>", 5).unwrap();
        assert_eq!(parsed.target, Some(Target::User("false".to_string())));
        assert!(parsed.reply);

        assert!(matches!(
            Envelope::parse("msg(5,bob,maybe)<{x}>", 5),
            Err(MarkerError::BadParams(_))
        ));
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let envelopes = vec![
            Envelope::new(msg(), 5, "Hello X"),
            Envelope::new(EnvelopeKind::Reply(ReplyKind::ReplyNotice), 1, "two\nlines")
                .with_target(Target::parse("bob").unwrap()),
            Envelope::new(EnvelopeKind::Direct(MessageKind::Action), 42, "")
                .with_reply(true),
            Envelope::new(msg(), 0, " padded ")
                .with_target(Target::parse("#c").unwrap())
                .with_reply(true),
            Envelope::new(msg(), 5, "x").with_target(Target::parse("true").unwrap()),
            Envelope::new(msg(), 5, "x").with_target(Target::parse("False").unwrap()),
            Envelope::new(msg(), 5, "x")
                .with_target(Target::parse("TRUE").unwrap())
                .with_reply(true),
        ];
        for envelope in envelopes {
            let parsed = Envelope::parse(&envelope.to_string(), 9).unwrap();
            assert_eq!(parsed, envelope);
        }
    }

    #[test]
    fn test_parse_defaults() {
        let parsed = Envelope::parse("msg()<{x}>", 7).unwrap();
        assert_eq!(parsed.priority, 7);
        assert_eq!(parsed.target, None);
        assert!(!parsed.reply);

        let parsed = Envelope::parse("pm(#chan)<{x}>", 7).unwrap();
        assert_eq!(parsed.priority, 7);
        assert_eq!(parsed.target, Some(Target::Channel("#chan".to_string())));
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let parsed = Envelope::parse("  notice ( 3 , bob , TRUE ) <{x}>\n", 5).unwrap();
        assert_eq!(parsed.kind, EnvelopeKind::Direct(MessageKind::Notice));
        assert_eq!(parsed.priority, 3);
        assert_eq!(parsed.target, Some(Target::User("bob".to_string())));
        assert!(parsed.reply);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Envelope::parse("SHOUT(1)<{x}>", 5),
            Err(MarkerError::UnknownKind("SHOUT".to_string()))
        );
        assert_eq!(
            Envelope::parse("MSG(1)<{x", 5),
            Err(MarkerError::Unterminated)
        );
        assert!(matches!(
            Envelope::parse("MSG(1,#a,#b)<{x}>", 5),
            Err(MarkerError::BadParams(_))
        ));
        assert!(matches!(
            Envelope::parse("MSG(1)<{x}> tail", 5),
            Err(MarkerError::Trailing(_))
        ));
    }

    #[test]
    fn test_scan_finds_all_markers() {
        let text = "intro MSG(5)<{one}>\nnoise NOTICE(2,bob)<{two\nthree}> xpm(1)<{no}> end";
        let found = Envelope::scan(text, 5);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].body, "one");
        assert_eq!(found[1].body, "two\nthree");
        assert_eq!(found[1].target, Some(Target::User("bob".to_string())));
    }

    #[test]
    fn test_scan_skips_broken_markers() {
        let found = Envelope::scan("MSG(1)<{never closed MSG(2)<{ok}>", 5);
        // the first marker's body runs to the first `}>`
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].body, "never closed MSG(2)<{ok");
    }

    #[test]
    fn test_scan_stops_at_unterminated_body() {
        let found = Envelope::scan("MSG(1)<{one}> msg(2)<{open msg(3)<{also open", 5);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].body, "one");
    }

    #[test]
    fn test_scan_many_open_markers() {
        let text = "msg(1)<{x ".repeat(20_000);
        assert!(Envelope::scan(&text, 5).is_empty());

        let text = format!("MSG(1)<{{ok}}> {}", "msg( ".repeat(20_000));
        let found = Envelope::scan(&text, 5);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_parse_unclosed_params() {
        assert_eq!(Envelope::parse("msg(1<{x}>", 5), Err(MarkerError::UnclosedParams));
    }

    #[test]
    fn test_scan_empty_text() {
        assert!(Envelope::scan("", 5).is_empty());
        assert!(Envelope::scan("no markers here", 5).is_empty());
    }
}
