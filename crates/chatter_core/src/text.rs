//! Plain-text helpers shared by the directives and the unit factory.

/// Trim spaces and tabs from both ends.
///
/// Line breaks and other whitespace are left alone, so trimming never merges
/// or drops lines. The scan from each end stops at the first other character.
pub fn limited_trim(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\t')
}

/// Split on `\n` or `\r\n`.
///
/// Trailing empty lines are dropped, leading and interior ones kept. Text
/// without any line break comes back as a single line, even when empty.
pub fn split_lines(s: &str) -> Vec<&str> {
    if !s.contains('\n') {
        return vec![s];
    }
    let mut lines: Vec<&str> = s
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// True for text with nothing but whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Upper-cases the first letter of every space-separated word, and
/// optionally lower-cases the rest of each word. Runs of spaces collapse to
/// one.
pub fn capitalize_first_letters(s: &str, lower_rest: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split(' ').filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
        }
        let rest = chars.as_str();
        if lower_rest {
            out.push_str(&rest.to_lowercase());
        } else {
            out.push_str(rest);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limited_trim_spaces_and_tabs() {
        assert_eq!(limited_trim(" \tabc \t "), "abc");
        assert_eq!(limited_trim("   "), "");
        assert_eq!(limited_trim("a b"), "a b");
    }

    #[test]
    fn test_limited_trim_keeps_line_breaks() {
        assert_eq!(limited_trim("\nabc\n "), "\nabc\n");
    }

    #[test]
    fn test_split_lines_mixed_endings() {
        assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_lines_drops_trailing_empties() {
        assert_eq!(split_lines("a\nb\n\n"), vec!["a", "b"]);
        assert_eq!(split_lines("\na"), vec!["", "a"]);
        assert!(split_lines("\n\n").is_empty());
    }

    #[test]
    fn test_split_lines_without_break() {
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("one"), vec!["one"]);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(" \n\t"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_capitalize_first_letters() {
        assert_eq!(capitalize_first_letters("hello wide world", false), "Hello Wide World");
        assert_eq!(capitalize_first_letters("mIxEd CASE", false), "MIxEd CASE");
        assert_eq!(capitalize_first_letters("mIxEd CASE", true), "Mixed Case");
    }

    #[test]
    fn test_capitalize_first_letters_spacing() {
        assert_eq!(capitalize_first_letters("", true), "");
        assert_eq!(capitalize_first_letters("  two   words ", false), "Two Words");
        assert_eq!(capitalize_first_letters("élan vital", false), "Élan Vital");
    }
}
