use std::fmt::Display;
use std::fmt::Formatter;
use std::io::Write;
use std::path::Path;

use crate::inspect::Error;
use crate::inspect::LineRange;
use crate::text::decode;
use crate::text::is_suspicious;
use crate::text::lines;
use crate::text::CharRepr;
use crate::text::CodePoint;
use crate::text::Line;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Print only the non-ASCII characters and control characters of each line.
    pub suspicious_only: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines_total: usize,
    pub lines_printed: usize,
    pub chars_printed: usize,
    pub suspicious: usize,
    pub replaced: usize,
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Printed {} of {} line(s), {} character(s), {} suspicious",
            self.lines_printed, self.lines_total, self.chars_printed, self.suspicious
        )?;
        if self.replaced != 0 {
            write!(f, ", {} invalid byte sequence(s) replaced", self.replaced)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharInfo {
    /// 0-based index of the character in the line.
    pub column: usize,
    pub ch: char,
}

impl CharInfo {
    pub fn is_suspicious(&self) -> bool {
        is_suspicious(self.ch)
    }
}

/// Labeled line followed by one row per character.
///
/// ```text
/// L3: a€
///         0  U+0061   'a'
///         1  U+20AC   '€'
///       eol  LF
/// ```
pub struct LineReport<'a> {
    index: usize,
    line: Line<'a>,
    suspicious_only: bool,
}

impl<'a> LineReport<'a> {
    pub fn new(index: usize, line: Line<'a>, options: Options) -> Self {
        Self {
            index,
            line,
            suspicious_only: options.suspicious_only,
        }
    }

    /// 1-based line number.
    pub fn label(&self) -> usize {
        self.index + 1
    }

    pub fn line(&self) -> &Line<'a> {
        &self.line
    }

    /// Characters that are included in the report.
    pub fn chars(&self) -> impl Iterator<Item = CharInfo> + '_ {
        self.line
            .text
            .chars()
            .enumerate()
            .map(|(column, ch)| CharInfo { column, ch })
            .filter(|info| !self.suspicious_only || info.is_suspicious())
    }
}

impl Display for LineReport<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(f, "L{}: {}", self.label(), self.line.text)?;
        for info in self.chars() {
            writeln!(
                f,
                "    {:>5}  {:<8} {}",
                info.column,
                CodePoint(info.ch),
                CharRepr(info.ch)
            )?;
        }
        writeln!(f, "    {:>5}  {}", "eol", self.line.ending)
    }
}

/// Reads the whole file and prints the lines from `range`.
pub fn inspect_file<P: AsRef<Path>, W: Write>(
    path: P,
    range: LineRange,
    options: Options,
    writer: W,
) -> Result<Summary, Error> {
    let path = path.as_ref();
    log::debug!("Reading {}", path.display());
    let bytes = fs_err::read(path)?;
    inspect_bytes(&bytes, range, options, writer)
}

/// Decodes `bytes` and prints the lines from `range`.
///
/// Indices past the last line produce no output.
pub fn inspect_bytes<W: Write>(
    bytes: &[u8],
    range: LineRange,
    options: Options,
    mut writer: W,
) -> Result<Summary, Error> {
    let decoded = decode(bytes);
    if decoded.is_lossy() {
        log::warn!(
            "Input is not valid UTF-8: replaced {} invalid byte sequence(s) with U+FFFD",
            decoded.replaced()
        );
    }
    let all: Vec<Line> = lines(decoded.as_str()).collect();
    if range.exceeds(all.len()) {
        log::warn!(
            "Line range {} exceeds the number of lines ({})",
            range,
            all.len()
        );
    }
    let mut summary = Summary {
        lines_total: all.len(),
        replaced: decoded.replaced(),
        ..Default::default()
    };
    for (offset, line) in range.select(&all).iter().enumerate() {
        let report = LineReport::new(range.start() + offset, *line, options);
        for info in report.chars() {
            summary.chars_printed += 1;
            if info.is_suspicious() {
                summary.suspicious += 1;
            }
        }
        write!(writer, "{}", report)?;
        summary.lines_printed += 1;
    }
    writer.flush()?;
    Ok(summary)
}
