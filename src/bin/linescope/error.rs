use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Logger error: {0}")]
    Logger(log::SetLoggerError),
    #[error("Toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Input/output error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Inspect(#[from] linescope::inspect::Error),
    #[error("No file to inspect: specify FILE or `path` in the configuration file")]
    MissingPath,
}

impl From<log::SetLoggerError> for Error {
    fn from(other: log::SetLoggerError) -> Self {
        Self::Logger(other)
    }
}
