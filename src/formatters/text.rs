//! Logfmt-style text formatter

use super::Formatter;
use crate::core::event::Event;
use std::io::Write;

/// A performance focused formatter printing log lines in a logfmt style.
///
/// Field order is fixed: timestamp (Unix milliseconds), logger name when not
/// empty, level, message. Each field renders as `key=value` followed by a
/// single space, except the last which is followed by a newline. Setting a
/// field name to the empty string drops that field from the output entirely.
///
/// # Examples
///
/// ```
/// use logline::{Logger, Options, TextFormatter};
/// use std::sync::Arc;
///
/// let logger = Logger::with_options(Options {
///     formatter: Some(Arc::new(TextFormatter::new())),
///     writer: Some(Box::new(std::io::stdout())),
///     ..Options::default()
/// });
/// logger.info("service started");
/// ```
#[derive(Debug, Clone)]
pub struct TextFormatter {
    timestamp_field: String,
    name_field: String,
    level_field: String,
    message_field: String,
}

impl TextFormatter {
    /// Create a formatter with the standard field names `ts`, `logger`,
    /// `lvl` and `msg`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timestamp_field: "ts".into(),
            name_field: "logger".into(),
            level_field: "lvl".into(),
            message_field: "msg".into(),
        }
    }

    /// Rename the timestamp field; empty drops it.
    #[must_use]
    pub fn with_timestamp_field(mut self, key: impl Into<String>) -> Self {
        self.timestamp_field = key.into();
        self
    }

    /// Rename the logger name field; empty drops it.
    #[must_use]
    pub fn with_name_field(mut self, key: impl Into<String>) -> Self {
        self.name_field = key.into();
        self
    }

    /// Rename the level field; empty drops it.
    #[must_use]
    pub fn with_level_field(mut self, key: impl Into<String>) -> Self {
        self.level_field = key.into();
        self
    }

    /// Rename the message field; empty drops it.
    #[must_use]
    pub fn with_message_field(mut self, key: impl Into<String>) -> Self {
        self.message_field = key.into();
        self
    }

    fn encode_str(&self, buf: &mut Vec<u8>, key: &str, value: &str, eol: bool) {
        if key.is_empty() {
            return;
        }
        buf.extend_from_slice(key.as_bytes());
        buf.push(b'=');
        if value.chars().any(needs_quoting) {
            buf.push(b'"');
            buf.extend_from_slice(value.as_bytes());
            buf.push(b'"');
        } else {
            buf.extend_from_slice(value.as_bytes());
        }
        buf.push(if eol { b'\n' } else { b' ' });
    }

    fn encode_int(&self, buf: &mut Vec<u8>, key: &str, value: i64, eol: bool) {
        if key.is_empty() {
            return;
        }
        buf.extend_from_slice(key.as_bytes());
        buf.push(b'=');
        let _ = write!(buf, "{value}");
        buf.push(if eol { b'\n' } else { b' ' });
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn format(&self, event: &Event, buf: &mut Vec<u8>) {
        self.encode_int(buf, &self.timestamp_field, event.time.timestamp_millis(), false);
        if !event.module.is_empty() {
            self.encode_str(buf, &self.name_field, &event.module, false);
        }
        self.encode_str(buf, &self.level_field, event.level.as_str(), false);
        self.encode_str(buf, &self.message_field, &event.message, true);
    }
}

/// Values containing a character at or below U+0020, `=`, `"`, or the
/// Unicode replacement character are wrapped in double quotes. Embedded
/// quotes are not escaped.
fn needs_quoting(c: char) -> bool {
    c <= ' ' || c == '=' || c == '"' || c == char::REPLACEMENT_CHARACTER
}
