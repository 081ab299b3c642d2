//! Pooled log event structure

use super::level::Level;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scratch buffer capacity of a freshly allocated event.
pub(crate) const INITIAL_BUFFER_CAPACITY: usize = 500;

/// A single log occurrence in flight.
///
/// An event carries everything a [`Formatter`](crate::formatters::Formatter)
/// needs to render one line, plus the byte buffer the rendered line is
/// written into. Events are borrowed from the pool immediately before use,
/// overwritten field by field, formatted once, written to the sink, and
/// released back to the pool. Ownership is exclusive for the duration of one
/// log call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub time: DateTime<Utc>,
    /// Name of the logger that produced the event.
    pub module: String,
    pub level: Level,
    /// Caller line number; zero when source capture is off.
    pub line: u32,
    /// Caller file base name; empty when source capture is off.
    pub filename: String,
    pub message: String,
    /// Serialization scratch space. The logger lends this buffer to the
    /// formatter; its contents are only meaningful during one log call.
    #[serde(skip)]
    pub(crate) buf: Vec<u8>,
}

impl Event {
    /// Create an empty event with a pre-sized scratch buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            time: DateTime::UNIX_EPOCH,
            module: String::new(),
            level: Level::Unset,
            line: 0,
            filename: String::new(),
            message: String::new(),
            buf: Vec::with_capacity(INITIAL_BUFFER_CAPACITY),
        }
    }

    /// Rendered bytes accumulated for this event.
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buf
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::new()
    }
}
