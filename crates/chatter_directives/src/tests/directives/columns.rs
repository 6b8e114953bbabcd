use crate::directives::{ColumnFormatter, Directive};
use crate::DirectiveError;
use chatter_constant::style::{NORMAL, UNDERLINE};
use chatter_core::style::{strip, visible_width};
use chatter_core::ConfigurationError;
use serde_json::{json, Value as JsonValue};

fn formatter() -> ColumnFormatter {
    ColumnFormatter::new(" I ", ' ')
}

fn run(body: Option<&str>, args: JsonValue) -> Result<String, DirectiveError> {
    let mut out = String::new();
    formatter().execute(body, args, &mut out)?;
    Ok(out)
}

#[test]
fn test_columns_basic_rows() {
    let out = run(Some("a\nbb\nccc\ndd"), json!({"widths": [5, 3]})).unwrap();

    let row1 = format!(" I a{NORMAL}{} I bb{NORMAL}{} I \n", " ".repeat(4), " ");
    let row2 = format!(" I ccc{NORMAL}{} I dd{NORMAL}{} I \n", " ".repeat(2), " ");
    assert_eq!(out, format!("{row1}{row2}"));
}

#[test]
fn test_columns_cells_have_declared_width() {
    let out = run(Some("x\nyy\nzzz"), json!({"widths": [4, 2, 6]})).unwrap();

    let stripped = strip(&out);
    assert_eq!(stripped, " I x    I yy I zzz    I \n");
    let cells: Vec<&str> = stripped.trim_end_matches(" I \n").split(" I ").skip(1).collect();
    let widths: Vec<usize> = cells.iter().map(|c| visible_width(c)).collect();
    assert_eq!(widths, vec![4, 2, 6]);
}

#[test]
fn test_columns_partial_row_is_dropped() {
    // 5 lines over 2 columns: two full rows, the fifth line is not written
    let out = run(Some("1\n2\n3\n4\n5"), json!({"widths": [1, 1]})).unwrap();

    assert_eq!(out.matches('\n').count(), 2);
    assert!(!strip(&out).contains('5'));
}

#[test]
fn test_columns_fewer_lines_than_columns_writes_nothing() {
    let out = run(Some("only"), json!({"widths": [4, 4]})).unwrap();
    assert_eq!(out, "");
}

#[test]
fn test_columns_truncates_by_visible_width() {
    let out = run(Some("abcdef"), json!({"widths": [3]})).unwrap();
    assert_eq!(out, format!(" I abc{NORMAL} I \n"));
}

#[test]
fn test_columns_style_tokens_do_not_count() {
    let body = format!("\u{0002}ab\u{0002}");
    let out = run(Some(&body), json!({"widths": [4]})).unwrap();
    assert_eq!(strip(&out), " I ab   I \n");
}

#[test]
fn test_columns_underlined() {
    let body = format!("a{NORMAL}b\nc");
    let out = run(Some(&body), json!({"widths": [3, 1], "underlined": true})).unwrap();

    let expected = format!(
        "{UNDERLINE} I a{NORMAL}{UNDERLINE}b{NORMAL}{UNDERLINE}  I c{NORMAL}{UNDERLINE} I \n"
    );
    assert_eq!(out, expected);
}

#[test]
fn test_columns_custom_separator_and_padding() {
    let out = run(
        Some("a\nb"),
        json!({"widths": [3, 2], "separator": "|", "padding": "."}),
    )
    .unwrap();
    assert_eq!(strip(&out), "|a..|b.|\n");
}

#[test]
fn test_columns_accepts_col_lengths_alias() {
    let out = run(Some("a"), json!({"colLengths": [2]})).unwrap();
    assert_eq!(strip(&out), " I a  I \n");
}

#[test]
fn test_columns_crlf_and_trimmed_body() {
    let out = run(Some("  a \t\r\n\tb  \n"), json!({"widths": [1, 1]})).unwrap();
    assert_eq!(strip(&out), " I a I b I \n");
}

#[test]
fn test_columns_missing_widths() {
    let err = run(Some("a"), json!({"separator": "|"})).unwrap_err();
    assert!(matches!(
        err,
        DirectiveError::Configuration(ConfigurationError::MissingParam {
            directive: "columns",
            param: "widths"
        })
    ));
}

#[test]
fn test_columns_rejects_bad_widths() {
    let err = run(Some("a"), json!({"widths": "wide"})).unwrap_err();
    assert!(matches!(
        err,
        DirectiveError::Configuration(ConfigurationError::InvalidParam { .. })
    ));

    let err = run(Some("a"), json!({"widths": [-1]})).unwrap_err();
    assert!(matches!(
        err,
        DirectiveError::Configuration(ConfigurationError::InvalidParam { .. })
    ));

    let err = run(Some("a"), json!({"widths": []})).unwrap_err();
    assert!(matches!(
        err,
        DirectiveError::Configuration(ConfigurationError::InvalidParam { .. })
    ));
}

#[test]
fn test_columns_rejects_multi_char_padding() {
    let err = run(Some("a"), json!({"widths": [2], "padding": "ab"})).unwrap_err();
    assert!(err.to_string().contains("padding"));
}

#[test]
fn test_columns_no_body() {
    let err = run(None, json!({"widths": [2]})).unwrap_err();
    assert!(matches!(
        err,
        DirectiveError::Configuration(ConfigurationError::NoContent("columns"))
    ));
}
