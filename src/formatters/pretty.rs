//! Human-oriented colored formatter

use super::Formatter;
use crate::core::config;
use crate::core::event::Event;
use crate::core::level::Level;
use std::io::Write;

const RESET: &[u8] = b"\x1b[0m";

const BOLD: u8 = 1;
const RED: u8 = 31;
const GREEN: u8 = 32;
const YELLOW: u8 = 33;
const BLUE: u8 = 34;
const CYAN: u8 = 36;
const WHITE: u8 = 37;
const GREY: u8 = 90;

/// ANSI color code for a level's three-letter code; zero means uncolored.
fn level_color(level: Level) -> u8 {
    match level {
        Level::Trace => BLUE,
        Level::Info => GREEN,
        Level::Warning => YELLOW,
        Level::Error | Level::Fatal => RED,
        Level::Debug | Level::Unset => 0,
    }
}

/// A development oriented formatter producing colored, human friendly lines.
///
/// Not tuned for throughput; meant for watching a terminal while testing
/// things out locally. Output: grey timestamp, colored three-letter level
/// code, bracketed module name, message (bold for anything more severe than
/// info), and optionally the caller location.
///
/// # Examples
///
/// ```
/// use logline::{Logger, Options, PrettyFormatter};
/// use std::sync::Arc;
///
/// let logger = Logger::with_options(Options {
///     formatter: Some(Arc::new(PrettyFormatter::new().with_source(true))),
///     writer: Some(Box::new(std::io::stdout())),
///     ..Options::default()
/// });
/// logger.info("up and running");
/// ```
#[derive(Debug, Clone)]
pub struct PrettyFormatter {
    time_format: String,
    append_source: bool,
}

impl PrettyFormatter {
    /// Create a formatter using the `%Y-%m-%d %H:%M:%S` time layout with
    /// source capture disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            time_format: "%Y-%m-%d %H:%M:%S".into(),
            append_source: false,
        }
    }

    /// Replace the chrono layout used for the leading timestamp.
    #[must_use]
    pub fn with_time_format(mut self, layout: impl Into<String>) -> Self {
        self.time_format = layout.into();
        self
    }

    /// Append ` source=<file>:<line>` with the caller location to every
    /// line.
    #[must_use]
    pub fn with_source(mut self, append_source: bool) -> Self {
        self.append_source = append_source;
        self
    }

    /// Append `value`, wrapped in an ANSI set/reset pair when `code` is
    /// positive.
    fn color(buf: &mut Vec<u8>, code: u8, value: &str) {
        if code > 0 {
            let _ = write!(buf, "\x1b[{code}m");
            buf.extend_from_slice(value.as_bytes());
            buf.extend_from_slice(RESET);
        } else {
            buf.extend_from_slice(value.as_bytes());
        }
    }
}

impl Default for PrettyFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for PrettyFormatter {
    fn format(&self, event: &Event, buf: &mut Vec<u8>) {
        let timestamp = event.time.format(&self.time_format).to_string();
        Self::color(buf, GREY, &timestamp);
        buf.push(b' ');
        Self::color(buf, level_color(event.level), event.level.short_code());
        buf.push(b' ');

        Self::color(buf, GREY, "[");
        if event.module.is_empty() {
            Self::color(buf, WHITE, &config::default_logger_name());
        } else {
            Self::color(buf, WHITE, &event.module);
        }
        Self::color(buf, GREY, "]");
        buf.push(b' ');

        if event.level < Level::Info {
            Self::color(buf, BOLD, &event.message);
        } else {
            buf.extend_from_slice(event.message.as_bytes());
        }

        if self.append_source {
            buf.push(b' ');
            Self::color(buf, CYAN, "source=");
            buf.extend_from_slice(event.filename.as_bytes());
            buf.push(b':');
            let _ = write!(buf, "{}", event.line);
        }

        buf.push(b'\n');
    }

    fn wants_source(&self) -> bool {
        self.append_source
    }
}
