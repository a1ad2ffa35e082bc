use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input/output error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid line range: start {start} is greater than end {end}")]
    InvalidRange { start: usize, end: usize },
    #[error("invalid line range {0:?}, expected `FIRST..LAST`, `FIRST-LAST` or `LINE`")]
    RangeSyntax(String),
}
