//! Style codec: recognises the protocol's invisible control sequences and
//! measures, pads and truncates text by its visible width only.
//!
//! Unknown or malformed sequences are treated as ordinary text; none of these
//! functions fail.

use std::borrow::Cow;

use chatter_constant::style;
use unicode_width::UnicodeWidthChar;

/// A recognised control sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleToken {
    /// Clears every active format
    Reset,
    /// Underline; the emphasis used by underlined tables
    Emphasis,
    Bold,
    Reverse,
    Italic,
    /// `\x03` with optional foreground and background codes. A bare `\x03`
    /// clears colours.
    Color { fg: Option<u8>, bg: Option<u8> },
}

impl StyleToken {
    /// The literal form written into text.
    pub fn literal(&self) -> Cow<'static, str> {
        match self {
            StyleToken::Reset => Cow::Borrowed(style::NORMAL),
            StyleToken::Emphasis => Cow::Borrowed(style::UNDERLINE),
            StyleToken::Bold => Cow::Borrowed(style::BOLD),
            StyleToken::Reverse => Cow::Borrowed(style::REVERSE),
            StyleToken::Italic => Cow::Borrowed(style::ITALIC),
            StyleToken::Color { fg, bg } => {
                let mut out = String::from(style::COLOR_PREFIX);
                if let Some(fg) = fg {
                    out.push_str(&format!("{fg:02}"));
                    if let Some(bg) = bg {
                        out.push_str(&format!(",{bg:02}"));
                    }
                }
                Cow::Owned(out)
            }
        }
    }
}

/// One piece of styled text: either a control sequence or a visible character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Style(StyleToken, &'a str),
    Text(char),
}

/// Iterator splitting text into [`Segment`]s.
pub struct Segments<'a> {
    rest: &'a str,
}

pub fn segments(s: &str) -> Segments<'_> {
    Segments { rest: s }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.rest.chars().next()?;
        let simple = match c {
            '\u{000f}' => Some(StyleToken::Reset),
            '\u{001f}' => Some(StyleToken::Emphasis),
            '\u{0002}' => Some(StyleToken::Bold),
            '\u{0016}' => Some(StyleToken::Reverse),
            '\u{001d}' => Some(StyleToken::Italic),
            _ => None,
        };
        if let Some(token) = simple {
            let (literal, rest) = self.rest.split_at(c.len_utf8());
            self.rest = rest;
            return Some(Segment::Style(token, literal));
        }
        if c == style::COLOR_PREFIX {
            let len = color_len(self.rest);
            let (literal, rest) = self.rest.split_at(len);
            self.rest = rest;
            return Some(Segment::Style(parse_color(literal), literal));
        }
        self.rest = &self.rest[c.len_utf8()..];
        Some(Segment::Text(c))
    }
}

/// Byte length of a colour sequence starting at `s` (which begins with `\x03`).
fn color_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 1;
    let fg_digits = count_digits(&bytes[end..], 2);
    end += fg_digits;
    if fg_digits > 0 && bytes.get(end) == Some(&b',') {
        let bg_digits = count_digits(&bytes[end + 1..], 2);
        if bg_digits > 0 {
            end += 1 + bg_digits;
        }
    }
    end
}

fn count_digits(bytes: &[u8], max: usize) -> usize {
    bytes
        .iter()
        .take(max)
        .take_while(|b| b.is_ascii_digit())
        .count()
}

fn parse_color(literal: &str) -> StyleToken {
    let body = &literal[1..];
    let mut parts = body.splitn(2, ',');
    let fg = parts.next().and_then(|p| p.parse::<u8>().ok());
    let bg = parts.next().and_then(|p| p.parse::<u8>().ok());
    StyleToken::Color { fg, bg }
}

/// Width of `s` as the reader sees it; control sequences count zero.
pub fn visible_width(s: &str) -> usize {
    segments(s)
        .map(|seg| match seg {
            Segment::Text(c) => c.width().unwrap_or(0),
            Segment::Style(..) => 0,
        })
        .sum()
}

/// Append `pad` until the visible width reaches `width`.
///
/// Text that is already at least `width` wide is returned unchanged.
pub fn pad(s: &str, width: usize, pad: char) -> String {
    let current = visible_width(s);
    if current >= width {
        return s.to_string();
    }
    let pad_width = pad.width().unwrap_or(1).max(1);
    let mut out = String::with_capacity(s.len() + width - current);
    out.push_str(s);
    let mut filled = current;
    while filled + pad_width <= width {
        out.push(pad);
        filled += pad_width;
    }
    out
}

/// Pad `s` to exactly `width` visible columns, or truncate it by visible
/// width when it is wider. Control sequences are never dropped, so a
/// trailing reset survives truncation.
pub fn fit(s: &str, width: usize, pad_char: char) -> String {
    if visible_width(s) <= width {
        return pad(s, width, pad_char);
    }
    let mut out = String::with_capacity(s.len());
    let mut filled = 0;
    let mut cut = false;
    for seg in segments(s) {
        match seg {
            Segment::Style(_, literal) => out.push_str(literal),
            Segment::Text(c) if !cut => {
                let w = c.width().unwrap_or(0);
                if filled + w <= width {
                    out.push(c);
                    filled += w;
                } else {
                    cut = true;
                }
            }
            Segment::Text(_) => {}
        }
    }
    // a wide character straddling the edge leaves a gap
    pad(&out, width, pad_char)
}

/// Remove every control sequence.
pub fn strip(s: &str) -> String {
    segments(s)
        .filter_map(|seg| match seg {
            Segment::Text(c) => Some(c),
            Segment::Style(..) => None,
        })
        .collect()
}

/// Name/literal pairs exposed to templates.
pub fn formatting_bindings() -> impl Iterator<Item = (&'static str, &'static str)> {
    style::NAMED.iter().copied()
}
