//! Control sequences of the chat protocol.
//!
//! These are invisible to the reader; clients interpret them as formatting.

/// Resets all formatting
pub const NORMAL: &str = "\u{000f}";
pub const BOLD: &str = "\u{0002}";
/// Emphasis; the column directive uses this for underlined tables
pub const UNDERLINE: &str = "\u{001f}";
pub const REVERSE: &str = "\u{0016}";
pub const ITALIC: &str = "\u{001d}";

/// Introduces a colour code (`\x03FG` or `\x03FG,BG`)
pub const COLOR_PREFIX: char = '\u{0003}';

pub const WHITE: &str = "\u{0003}00";
pub const BLACK: &str = "\u{0003}01";
pub const DARK_BLUE: &str = "\u{0003}02";
pub const DARK_GREEN: &str = "\u{0003}03";
pub const RED: &str = "\u{0003}04";
pub const BROWN: &str = "\u{0003}05";
pub const PURPLE: &str = "\u{0003}06";
pub const OLIVE: &str = "\u{0003}07";
pub const YELLOW: &str = "\u{0003}08";
pub const GREEN: &str = "\u{0003}09";
pub const TEAL: &str = "\u{0003}10";
pub const CYAN: &str = "\u{0003}11";
pub const BLUE: &str = "\u{0003}12";
pub const MAGENTA: &str = "\u{0003}13";
pub const DARK_GRAY: &str = "\u{0003}14";
pub const LIGHT_GRAY: &str = "\u{0003}15";

/// All named control sequences, in the order they are exposed to templates
pub const NAMED: &[(&str, &str)] = &[
    ("NORMAL", NORMAL),
    ("BOLD", BOLD),
    ("UNDERLINE", UNDERLINE),
    ("REVERSE", REVERSE),
    ("ITALIC", ITALIC),
    ("WHITE", WHITE),
    ("BLACK", BLACK),
    ("DARK_BLUE", DARK_BLUE),
    ("DARK_GREEN", DARK_GREEN),
    ("RED", RED),
    ("BROWN", BROWN),
    ("PURPLE", PURPLE),
    ("OLIVE", OLIVE),
    ("YELLOW", YELLOW),
    ("GREEN", GREEN),
    ("TEAL", TEAL),
    ("CYAN", CYAN),
    ("BLUE", BLUE),
    ("MAGENTA", MAGENTA),
    ("DARK_GRAY", DARK_GRAY),
    ("LIGHT_GRAY", LIGHT_GRAY),
];
