use crate::directives::{CompactListFormatter, Directive};
use crate::DirectiveError;
use chatter_core::style::strip;
use chatter_core::ConfigurationError;
use serde_json::{json, Value as JsonValue};

fn run(budget: usize, body: Option<&str>, args: JsonValue) -> Result<String, DirectiveError> {
    let mut out = String::new();
    CompactListFormatter::new(", ", budget).execute(body, args, &mut out)?;
    Ok(out)
}

#[test]
fn test_compact_wraps_and_keeps_oversized_line_whole() {
    let body = "aa\nbb\nccccccccccccccccccc";
    let out = run(20, Some(body), json!({})).unwrap();

    assert_eq!(strip(&out), "aa, bb\nccccccccccccccccccc");
}

#[test]
fn test_compact_single_chunk() {
    let out = run(350, Some("one\ntwo\nthree"), json!({})).unwrap();
    assert_eq!(strip(&out), "one, two, three");
    assert!(!out.ends_with('\n'));
}

#[test]
fn test_compact_intro_costs_first_chunk_only() {
    let out = run(20, Some("alpha\nbeta\ngamma"), json!({"intro": "Online: "})).unwrap();
    assert_eq!(strip(&out), "Online: alpha\nbeta, gamma");
}

#[test]
fn test_compact_intro_alone_when_first_item_does_not_fit() {
    let out = run(10, Some("abcdefgh"), json!({"intro": "Hi: "})).unwrap();
    assert_eq!(strip(&out), "Hi: \nabcdefgh");
}

#[test]
fn test_compact_chunks_stay_within_budget() {
    let body: Vec<String> = (0..60).map(|i| format!("item{i}")).collect();
    let budget = 40;
    let out = run(budget, Some(&body.join("\n")), json!({"intro": "List: "})).unwrap();

    let chunks: Vec<&str> = out.split('\n').collect();
    assert!(chunks.len() > 1);
    for chunk in chunks {
        assert!(chunk.chars().count() <= budget, "chunk too long: {chunk:?}");
    }
    let items: Vec<String> = strip(&out)
        .trim_start_matches("List: ")
        .split(['\n', ','])
        .map(|s| s.trim().to_string())
        .collect();
    assert_eq!(items, body);
}

#[test]
fn test_compact_custom_separator_and_blank_lines() {
    let out = run(350, Some("a\n\n  \nb\n"), json!({"separator": " / "})).unwrap();
    assert_eq!(strip(&out), "a / b");
}

#[test]
fn test_compact_empty_body_writes_intro() {
    let out = run(350, Some(""), json!({"intro": "Nobody: "})).unwrap();
    assert_eq!(out, "Nobody: ");
}

#[test]
fn test_compact_intro_longer_than_budget() {
    let err = run(5, Some("a"), json!({"intro": "too long"})).unwrap_err();
    assert!(matches!(
        err,
        DirectiveError::Configuration(ConfigurationError::InvalidParam { .. })
    ));
}

#[test]
fn test_compact_no_body() {
    let err = run(350, None, json!({})).unwrap_err();
    assert_eq!(err.to_string(), "compact: no body");
}
