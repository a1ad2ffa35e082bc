use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::inspect::Error;

/// Half-open range of 0-based line indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineRange {
    start: usize,
    end: usize,
}

impl LineRange {
    pub const DEFAULT: Self = Self { start: 40, end: 50 };

    pub fn new(start: usize, end: usize) -> Result<Self, Error> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Fills in the missing bound so that the range has the default length.
    pub fn from_bounds(start: Option<usize>, end: Option<usize>) -> Result<Self, Error> {
        let len = Self::DEFAULT.len();
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            (Some(start), None) => Self::new(start, start.saturating_add(len)),
            (None, Some(end)) => Self::new(end.saturating_sub(len), end),
            (None, None) => Ok(Self::DEFAULT),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The part of `items` that falls into the range.
    pub fn select<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let n = items.len();
        &items[self.start.min(n)..self.end.min(n)]
    }

    /// Returns `true` if the range extends past the last of `num_lines` lines.
    pub fn exceeds(&self, num_lines: usize) -> bool {
        self.end > num_lines
    }
}

impl Default for LineRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for LineRange {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Parses 1-based inclusive notation: `41..50`, `41-50` or `41`.
impl FromStr for LineRange {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let syntax_error = || Error::RangeSyntax(value.to_string());
        let parse_line = |s: &str| -> Result<usize, Error> {
            match s.trim().parse::<usize>() {
                Ok(0) | Err(_) => Err(syntax_error()),
                Ok(n) => Ok(n),
            }
        };
        let (first, last) = match value.split_once("..").or_else(|| value.split_once('-')) {
            Some((first, last)) => (parse_line(first)?, parse_line(last)?),
            None => {
                let line = parse_line(value)?;
                (line, line)
            }
        };
        Self::new(first - 1, last)
    }
}

#[cfg(test)]
mod tests {
    use arbtest::arbtest;

    use super::*;

    #[test]
    fn new() {
        assert_eq!(10, LineRange::new(40, 50).unwrap().len());
        assert!(LineRange::new(5, 5).unwrap().is_empty());
        assert!(matches!(
            LineRange::new(6, 5),
            Err(Error::InvalidRange { start: 6, end: 5 })
        ));
    }

    #[test]
    fn parse() {
        assert_eq!(LineRange::new(40, 50).unwrap(), "41..50".parse().unwrap());
        assert_eq!(LineRange::new(40, 50).unwrap(), "41-50".parse().unwrap());
        assert_eq!(LineRange::new(40, 50).unwrap(), " 41 .. 50 ".parse().unwrap());
        assert_eq!(LineRange::new(0, 1).unwrap(), "1".parse().unwrap());
        assert!(matches!(
            "0..3".parse::<LineRange>(),
            Err(Error::RangeSyntax(..))
        ));
        assert!(matches!(
            "a..b".parse::<LineRange>(),
            Err(Error::RangeSyntax(..))
        ));
        assert!(matches!("".parse::<LineRange>(), Err(Error::RangeSyntax(..))));
        assert!(matches!(
            "1..".parse::<LineRange>(),
            Err(Error::RangeSyntax(..))
        ));
        assert!(matches!(
            "10..5".parse::<LineRange>(),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn parse_inclusive_bounds() {
        arbtest(|u| {
            let first = u.int_in_range(1..=10_000_usize)?;
            let last = u.int_in_range(first..=20_000_usize)?;
            let range: LineRange = format!("{first}..{last}").parse().unwrap();
            assert_eq!(first - 1, range.start());
            assert_eq!(last, range.end());
            assert_eq!(last - first + 1, range.len());
            Ok(())
        });
    }

    #[test]
    fn from_bounds() {
        assert_eq!(LineRange::DEFAULT, LineRange::from_bounds(None, None).unwrap());
        assert_eq!(
            LineRange::new(100, 110).unwrap(),
            LineRange::from_bounds(Some(100), None).unwrap()
        );
        assert_eq!(
            LineRange::new(0, 3).unwrap(),
            LineRange::from_bounds(None, Some(3)).unwrap()
        );
        assert!(LineRange::from_bounds(Some(3), Some(2)).is_err());
    }

    #[test]
    fn exceeds() {
        let range = LineRange::new(40, 50).unwrap();
        assert!(!range.exceeds(50));
        assert!(range.exceeds(49));
        assert_eq!("[40, 50)", range.to_string());
    }

    #[test]
    fn select() {
        let items: Vec<usize> = (0..45).collect();
        let range = LineRange::new(40, 50).unwrap();
        assert_eq!(&[40, 41, 42, 43, 44], range.select(&items));
        assert!(LineRange::new(50, 60).unwrap().select(&items).is_empty());
        assert!(range.select::<usize>(&[]).is_empty());
    }
}
