use crate::directives::{Directive, EnvelopeTagger};
use crate::DirectiveError;
use chatter_core::{ConfigurationError, Envelope, EnvelopeKind, MessageKind, ReplyKind, Target};
use serde_json::{json, Value as JsonValue};

fn run(body: Option<&str>, args: JsonValue) -> Result<String, DirectiveError> {
    let mut out = String::new();
    EnvelopeTagger::new(5).execute(body, args, &mut out)?;
    Ok(out)
}

#[test]
fn test_message_defaults() {
    let out = run(Some("Hello X"), json!({"type": "msg"})).unwrap();
    assert_eq!(out, "MESSAGE(5)<{Hello X}>");
}

#[test]
fn test_message_all_params() {
    let out = run(
        Some("hi"),
        json!({"type": "notice", "priority": 3, "target": "#chan", "reply": true}),
    )
    .unwrap();
    assert_eq!(out, "NOTICE(3,#chan,true)<{hi}>");
}

#[test]
fn test_message_reply_alias() {
    let out = run(Some("hi"), json!({"type": "pm", "replyWithRecipient": true})).unwrap();
    assert_eq!(out, "PRIVATE_MESSAGE(5,true)<{hi}>");
}

#[test]
fn test_message_output_parses_back() {
    let out = run(
        Some("line one\nline two"),
        json!({"type": "reply_notice", "priority": 1, "target": "bob"}),
    )
    .unwrap();
    let envelope = Envelope::parse(&out, 5).unwrap();

    assert_eq!(envelope.kind, EnvelopeKind::Reply(ReplyKind::ReplyNotice));
    assert_eq!(envelope.priority, 1);
    assert_eq!(envelope.target, Some(Target::User("bob".to_string())));
    assert!(!envelope.reply);
    assert_eq!(envelope.body, "line one\nline two");
}

#[test]
fn test_message_flag_named_target_keeps_recipient() {
    let out = run(Some("x"), json!({"type": "msg", "target": "true"})).unwrap();
    assert_eq!(out, "MESSAGE(5,true,false)<{x}>");

    let envelope = Envelope::parse(&out, 5).unwrap();
    assert_eq!(envelope.target, Some(Target::User("true".to_string())));
    assert!(!envelope.reply);
}

#[test]
fn test_message_empty_body_is_allowed() {
    let out = run(Some(""), json!({"type": "me"})).unwrap();
    let envelope = Envelope::parse(&out, 5).unwrap();
    assert_eq!(envelope.kind, EnvelopeKind::Direct(MessageKind::Action));
    assert_eq!(envelope.body, "");
}

#[test]
fn test_message_unknown_type_lists_legal_values() {
    let err = run(Some("x"), json!({"type": "shout"})).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'shout'"));
    assert!(message.contains("PRIVATE_MESSAGE, pm"));
}

#[test]
fn test_message_missing_type() {
    let err = run(Some("x"), json!({})).unwrap_err();
    assert!(matches!(
        err,
        DirectiveError::Configuration(ConfigurationError::UnknownKind { given, .. }) if given.is_empty()
    ));
}

#[test]
fn test_message_negative_priority() {
    let err = run(Some("x"), json!({"type": "msg", "priority": -1})).unwrap_err();
    assert!(err.to_string().contains("priority"));
}

#[test]
fn test_message_invalid_target() {
    let err = run(Some("x"), json!({"type": "msg", "target": "not valid"})).unwrap_err();
    assert!(matches!(
        err,
        DirectiveError::Configuration(ConfigurationError::InvalidTarget(_))
    ));
}

#[test]
fn test_message_body_with_terminator() {
    let err = run(Some("oops }> here"), json!({"type": "msg"})).unwrap_err();
    assert!(err.to_string().contains("body"));
}

#[test]
fn test_message_no_body() {
    let err = run(None, json!({"type": "msg"})).unwrap_err();
    assert!(matches!(
        err,
        DirectiveError::Configuration(ConfigurationError::NoContent("message"))
    ));
}
