//! Journalctl friendly formatter

use super::Formatter;
use crate::core::event::Event;

/// A minimal formatter printing log lines as `[module] level - message`.
///
/// The bracketed module segment is omitted when the event carries no module
/// name, which plays well with journald's own prefixing.
#[derive(Debug, Clone, Copy, Default)]
pub struct JournalFormatter;

impl JournalFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for JournalFormatter {
    fn format(&self, event: &Event, buf: &mut Vec<u8>) {
        if !event.module.is_empty() {
            buf.push(b'[');
            buf.extend_from_slice(event.module.as_bytes());
            buf.extend_from_slice(b"] ");
        }

        buf.extend_from_slice(event.level.as_str().as_bytes());
        buf.extend_from_slice(b" - ");
        buf.extend_from_slice(event.message.as_bytes());
        buf.push(b'\n');
    }
}
