use chatter_core::ConfigurationError;
use serde::Deserialize;
use serde_json::json;

use crate::directives::{parse_args, require_body};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct WidthArgs {
    width: usize,
}

#[test]
fn test_require_body_borrows_from_body() {
    let rendered = String::from("line one\nline two");
    let body = require_body("columns", Some(rendered.as_str())).unwrap();
    assert_eq!(body, "line one\nline two");
    assert!(std::ptr::eq(body, rendered.as_str()));
}

#[test]
fn test_require_body_missing() {
    assert_eq!(
        require_body("compact", None),
        Err(ConfigurationError::NoContent("compact"))
    );
}

#[test]
fn test_parse_args_null_is_empty() {
    let args: WidthArgs = parse_args("columns", serde_json::Value::Null).unwrap();
    assert_eq!(args.width, 0);
}

#[test]
fn test_parse_args_wrong_shape() {
    let err = parse_args::<WidthArgs>("columns", json!({"width": "wide"})).unwrap_err();
    assert!(matches!(
        err,
        ConfigurationError::InvalidParam { directive: "columns", ref param, .. } if param == "arguments"
    ));
}
