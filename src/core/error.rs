//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Failures surfaced by the logger.
///
/// No error ever escapes a leveled logging method; write failures are
/// reported on stderr and swallowed so that logging never aborts the
/// application. `LoggerError` appears only in that diagnostic and in the
/// return value of [`Logger::flush`](crate::Logger::flush).
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The sink rejected a fully formatted event.
    #[error("could not write event: {0}")]
    Write(#[source] std::io::Error),

    /// The sink failed to flush buffered output.
    #[error("could not flush writer: {0}")]
    Flush(#[source] std::io::Error),
}
