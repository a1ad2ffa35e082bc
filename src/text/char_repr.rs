use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Write;
use std::ops::RangeInclusive;

/// Characters that render as nothing or as a plain space.
const INVISIBLE: [RangeInclusive<char>; 17] = [
    '\u{00a0}'..='\u{00a0}',
    '\u{00ad}'..='\u{00ad}',
    '\u{034f}'..='\u{034f}',
    '\u{061c}'..='\u{061c}',
    '\u{115f}'..='\u{1160}',
    '\u{17b4}'..='\u{17b5}',
    '\u{180b}'..='\u{180f}',
    '\u{2000}'..='\u{200f}',
    '\u{2028}'..='\u{202f}',
    '\u{205f}'..='\u{206f}',
    '\u{3000}'..='\u{3000}',
    '\u{3164}'..='\u{3164}',
    '\u{fe00}'..='\u{fe0f}',
    '\u{feff}'..='\u{feff}',
    '\u{ffa0}'..='\u{ffa0}',
    '\u{fff9}'..='\u{fffb}',
    '\u{e0000}'..='\u{e0fff}',
];

pub fn is_invisible(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_control();
    }
    ch.is_control() || ch.is_whitespace() || INVISIBLE.iter().any(|range| range.contains(&ch))
}

/// Non-ASCII characters and ASCII control characters except tab.
pub fn is_suspicious(ch: char) -> bool {
    !ch.is_ascii() || (ch.is_ascii_control() && ch != '\t')
}

/// Printable representation of a character in single quotes.
///
/// Characters that would be invisible in a terminal are written as `\u{...}` escapes.
pub struct CharRepr(pub char);

impl Display for CharRepr {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_char('\'')?;
        match self.0 {
            '\'' => f.write_str("\\'")?,
            '\\' => f.write_str("\\\\")?,
            '\t' => f.write_str("\\t")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\0' => f.write_str("\\0")?,
            ch if is_invisible(ch) => write!(f, "\\u{{{:04x}}}", ch as u32)?,
            ch => f.write_char(ch)?,
        }
        f.write_char('\'')
    }
}

/// Unicode code point in `U+XXXX` notation.
pub struct CodePoint(pub char);

impl Display for CodePoint {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.pad(&format!("U+{:04X}", self.0 as u32))
    }
}
