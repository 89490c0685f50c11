//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors surfaced by the logger's fallible surface.
///
/// The emission path itself is best-effort and never returns an error:
/// sink write failures during a log call are dropped by design. Only
/// explicit operations such as [`flush`](crate::Logger::flush) and level
/// parsing report failures.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error from the underlying sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognized log level name
    #[error("invalid log level: '{0}'")]
    InvalidLevel(String),
}
