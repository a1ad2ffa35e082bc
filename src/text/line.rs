use std::fmt::Display;
use std::fmt::Formatter;

/// Line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEnding {
    Lf,
    CrLf,
    Cr,
    /// The last line of a text that does not end with a terminator.
    Eof,
}

impl LineEnding {
    /// The terminator as it appears in the text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
            Self::Eof => "",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Lf => "LF",
            Self::CrLf => "CRLF",
            Self::Cr => "CR",
            Self::Eof => "none",
        }
    }
}

impl Display for LineEnding {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line contents without the terminator.
    pub text: &'a str,
    pub ending: LineEnding,
}

/// Splits text into lines using universal newlines: `\n`, `\r\n` and a lone `\r`.
///
/// Other Unicode line separators are treated as regular characters.
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Lines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let bytes = self.rest.as_bytes();
        let Some(i) = bytes.iter().position(|&b| matches!(b, b'\n' | b'\r')) else {
            let text = std::mem::take(&mut self.rest);
            return Some(Line {
                text,
                ending: LineEnding::Eof,
            });
        };
        let ending = match (bytes[i], bytes.get(i + 1).copied()) {
            (b'\r', Some(b'\n')) => LineEnding::CrLf,
            (b'\r', _) => LineEnding::Cr,
            _ => LineEnding::Lf,
        };
        let (text, rest) = self.rest.split_at(i);
        self.rest = &rest[ending.as_str().len()..];
        Some(Line { text, ending })
    }
}

pub fn lines(text: &str) -> Lines<'_> {
    Lines::new(text)
}
