//! SGR display attributes and the color encoder
//!
//! A [`Style`] is an ordered list of numeric Select Graphic Rendition codes applied
//! together to one piece of text. Painting wraps text as
//! `ESC [ c1;c2;... m text ESC [ 0 m`; an empty style leaves the text untouched, so
//! uncolored output carries no escape bytes at all.
//!
//! ```
//! use huelog_console::style::{self, BOLD, FG_RED};
//!
//! assert_eq!(style::encode("text", &[BOLD, FG_RED]), "\x1b[1;31mtext\x1b[0m");
//! assert_eq!(style::encode("text", &[]), "text");
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{self, Write};

// Text styles
/// Reset all attributes
pub const RESET: u8 = 0;
/// Bold
pub const BOLD: u8 = 1;
/// Faint
pub const FAINT: u8 = 2;
/// Italic
pub const ITALIC: u8 = 3;
/// Underline
pub const UNDERLINE: u8 = 4;
/// Slow blink
pub const BLINK_SLOW: u8 = 5;
/// Rapid blink
pub const BLINK_RAPID: u8 = 6;
/// Swap foreground and background
pub const REVERSE_VIDEO: u8 = 7;
/// Concealed
pub const CONCEALED: u8 = 8;
/// Crossed out
pub const CROSSED_OUT: u8 = 9;

// Foreground colors
/// Black foreground
pub const FG_BLACK: u8 = 30;
/// Red foreground
pub const FG_RED: u8 = 31;
/// Green foreground
pub const FG_GREEN: u8 = 32;
/// Yellow foreground
pub const FG_YELLOW: u8 = 33;
/// Blue foreground
pub const FG_BLUE: u8 = 34;
/// Magenta foreground
pub const FG_MAGENTA: u8 = 35;
/// Cyan foreground
pub const FG_CYAN: u8 = 36;
/// White foreground
pub const FG_WHITE: u8 = 37;

// High-intensity foreground colors
/// Bright black (grey) foreground
pub const FG_HI_BLACK: u8 = 90;
/// Bright red foreground
pub const FG_HI_RED: u8 = 91;
/// Bright green foreground
pub const FG_HI_GREEN: u8 = 92;
/// Bright yellow foreground
pub const FG_HI_YELLOW: u8 = 93;
/// Bright blue foreground
pub const FG_HI_BLUE: u8 = 94;
/// Bright magenta foreground
pub const FG_HI_MAGENTA: u8 = 95;
/// Bright cyan foreground
pub const FG_HI_CYAN: u8 = 96;
/// Bright white foreground
pub const FG_HI_WHITE: u8 = 97;

// Background colors
/// Black background
pub const BG_BLACK: u8 = 40;
/// Red background
pub const BG_RED: u8 = 41;
/// Green background
pub const BG_GREEN: u8 = 42;
/// Yellow background
pub const BG_YELLOW: u8 = 43;
/// Blue background
pub const BG_BLUE: u8 = 44;
/// Magenta background
pub const BG_MAGENTA: u8 = 45;
/// Cyan background
pub const BG_CYAN: u8 = 46;
/// White background
pub const BG_WHITE: u8 = 47;

// High-intensity background colors
/// Bright black (grey) background
pub const BG_HI_BLACK: u8 = 100;
/// Bright red background
pub const BG_HI_RED: u8 = 101;
/// Bright green background
pub const BG_HI_GREEN: u8 = 102;
/// Bright yellow background
pub const BG_HI_YELLOW: u8 = 103;
/// Bright blue background
pub const BG_HI_BLUE: u8 = 104;
/// Bright magenta background
pub const BG_HI_MAGENTA: u8 = 105;
/// Bright cyan background
pub const BG_HI_CYAN: u8 = 106;
/// Bright white background
pub const BG_HI_WHITE: u8 = 107;

const ESC: char = '\x1b';

/// Wrap `text` in the escape sequence for `codes`
///
/// Codes are emitted in the given order and are not validated.
pub fn encode<'t>(text: &'t str, codes: &[u8]) -> Cow<'t, str> {
    if codes.is_empty() {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 4 * codes.len() + 6);
    encode_into(&mut out, text, codes);
    Cow::Owned(out)
}

/// Append `text` wrapped in the escape sequence for `codes` to `buf`
pub fn encode_into(buf: &mut String, text: impl fmt::Display, codes: &[u8]) {
    // Writing into a String only fails if `text` itself does
    let _ = if codes.is_empty() {
        write!(buf, "{text}")
    } else {
        write_escaped(buf, text, codes)
    };
}

fn write_escaped(buf: &mut String, text: impl fmt::Display, codes: &[u8]) -> fmt::Result {
    buf.push(ESC);
    buf.push('[');
    for (i, code) in codes.iter().enumerate() {
        if i > 0 {
            buf.push(';');
        }
        write!(buf, "{code}")?;
    }
    buf.push('m');
    write!(buf, "{text}")?;
    buf.push(ESC);
    buf.push_str("[0m");
    Ok(())
}

/// Ordered SGR codes applied together
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(Vec<u8>);

impl Style {
    /// Style with no codes; painting with it is a passthrough
    pub const fn plain() -> Self {
        Self(Vec::new())
    }

    /// Style from codes in emission order
    pub fn new(codes: impl Into<Vec<u8>>) -> Self {
        Self(codes.into())
    }

    /// The codes in emission order
    pub fn codes(&self) -> &[u8] {
        &self.0
    }

    /// Whether painting leaves text untouched
    pub fn is_plain(&self) -> bool {
        self.0.is_empty()
    }

    /// Paint `text`, borrowing it when the style is plain
    pub fn paint<'t>(&self, text: &'t str) -> Cow<'t, str> {
        encode(text, &self.0)
    }

    /// Append painted `text` to `buf`
    pub fn paint_into(&self, buf: &mut String, text: impl fmt::Display) {
        encode_into(buf, text, &self.0);
    }
}

impl From<Vec<u8>> for Style {
    fn from(codes: Vec<u8>) -> Self {
        Self(codes)
    }
}

impl From<&[u8]> for Style {
    fn from(codes: &[u8]) -> Self {
        Self(codes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Style {
    fn from(codes: [u8; N]) -> Self {
        Self(codes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_encodings() {
        let cases: &[(&str, &[u8], &str)] = &[
            ("Hello, World!", &[BOLD, FG_RED], "\x1b[1;31mHello, World!\x1b[0m"),
            ("Testing 123", &[UNDERLINE, FG_BLUE], "\x1b[4;34mTesting 123\x1b[0m"),
            ("Plain Text", &[], "Plain Text"),
            ("12345", &[FAINT, FG_YELLOW], "\x1b[2;33m12345\x1b[0m"),
            ("Important", &[ITALIC, FG_HI_GREEN], "\x1b[3;92mImportant\x1b[0m"),
            ("Custom", &[BLINK_RAPID, BG_RED], "\x1b[6;41mCustom\x1b[0m"),
            ("Multi", &[BOLD, FG_BLUE, UNDERLINE], "\x1b[1;34;4mMulti\x1b[0m"),
            ("Background", &[BG_CYAN, BOLD], "\x1b[46;1mBackground\x1b[0m"),
            (
                "Combined",
                &[ITALIC, FG_MAGENTA, BG_HI_YELLOW, REVERSE_VIDEO],
                "\x1b[3;35;103;7mCombined\x1b[0m",
            ),
        ];
        for (text, codes, expected) in cases {
            assert_eq!(encode(text, codes), *expected);
        }
    }

    #[test]
    fn plain_style_borrows() {
        assert!(matches!(Style::plain().paint("x"), Cow::Borrowed("x")));
        assert!(Style::default().is_plain());
    }

    #[test]
    fn out_of_range_codes_pass_through() {
        assert_eq!(encode("x", &[255, 0]), "\x1b[255;0mx\x1b[0m");
    }

    #[test]
    fn paint_into_formats_display_values() {
        let mut buf = String::from(">");
        Style::from([FG_CYAN, ITALIC]).paint_into(&mut buf, format_args!("{:>4}", "ab"));
        assert_eq!(buf, ">\x1b[36;3m  ab\x1b[0m");
    }

    proptest! {
        #[test]
        fn empty_style_is_identity(text in ".*") {
            prop_assert_eq!(encode(&text, &[]), text.as_str());
        }

        #[test]
        fn escape_like_text_is_untouched(text in "\\x1b\\[[0-9;]{0,6}m.{0,8}") {
            prop_assert_eq!(encode(&text, &[]), text.as_str());
        }

        #[test]
        fn triples_wrap_exactly(a: u8, b: u8, c: u8, text in ".{0,16}") {
            let expected = format!("\x1b[{a};{b};{c}m{text}\x1b[0m");
            prop_assert_eq!(encode(&text, &[a, b, c]), expected);
        }
    }
}
