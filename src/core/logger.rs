//! Main logger implementation

use super::config;
use super::error::{LoggerError, Result};
use super::level::Level;
use super::pool;
use crate::formatters::{Formatter, TextFormatter};
use chrono::Utc;
use parking_lot::Mutex;
use std::io::Write;
use std::mem;
use std::panic::Location;
use std::path::Path;
use std::process;
use std::sync::{Arc, LazyLock};

/// Shared sink handle; a logger and its named derivatives write through the
/// same writer.
type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Process-wide default formatter handed to loggers constructed without one.
static DEFAULT_FORMATTER: LazyLock<Arc<dyn Formatter>> =
    LazyLock::new(|| Arc::new(TextFormatter::new()));

/// Configuration for [`Logger::with_options`].
///
/// Every field has a usable default: an absent writer discards all output,
/// an absent formatter uses the shared logfmt formatter, an absent name
/// takes the process-wide default name, and an unset level defers to the
/// global threshold. An explicitly empty name stays empty.
#[derive(Default)]
pub struct Options {
    pub name: Option<String>,
    pub formatter: Option<Arc<dyn Formatter>>,
    pub level: Level,
    pub writer: Option<Box<dyn Write + Send>>,
}

/// A leveled logger writing formatted events to a byte sink.
///
/// The formatter and sink are fixed at construction and shared, read-only,
/// with every derivative produced by [`Logger::with_name`]. Each log call is
/// an independent transaction: an enablement check followed by an optional
/// emit through a pooled [`Event`](crate::Event).
///
/// # Examples
///
/// ```
/// use logline::{Level, Logger};
///
/// let mut logger = Logger::new(std::io::stdout());
/// logger.set_level(Level::Debug);
///
/// logger.info("server started");
/// logger.debug("listening on port 8080");
/// ```
pub struct Logger {
    formatter: Arc<dyn Formatter>,
    writer: Option<SharedWriter>,
    name: String,
    level: Level,

    // Suppresses process termination on fatal; only set by tests.
    ignore_exit: bool,
}

impl Logger {
    /// Create a logger writing to `writer` with optimistic defaults: the
    /// shared logfmt formatter, the process-wide default name, and the
    /// global severity threshold.
    #[must_use]
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self::with_options(Options {
            writer: Some(Box::new(writer)),
            ..Options::default()
        })
    }

    /// Create a logger with the given name writing to stdout.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::with_options(Options {
            name: Some(name.into()),
            writer: Some(Box::new(std::io::stdout())),
            ..Options::default()
        })
    }

    /// Create a logger from explicit options.
    #[must_use]
    pub fn with_options(opts: Options) -> Self {
        Self {
            formatter: opts
                .formatter
                .unwrap_or_else(|| Arc::clone(&DEFAULT_FORMATTER)),
            writer: opts.writer.map(|writer| Arc::new(Mutex::new(writer))),
            name: opts.name.unwrap_or_else(config::default_logger_name),
            level: opts.level,
            ignore_exit: false,
        }
    }

    /// Assign a new severity threshold to this logger instance.
    ///
    /// [`Level::Unset`] defers to the global threshold.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Derive a logger sharing this logger's formatter and sink under a
    /// different name.
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            formatter: Arc::clone(&self.formatter),
            writer: self.writer.clone(),
            name: name.into(),
            level: self.level,
            ignore_exit: self.ignore_exit,
        }
    }

    /// Whether a message at `level` would currently be emitted.
    fn should(&self, level: Level) -> bool {
        if self.writer.is_none() || level.is_unset() {
            return false;
        }
        let threshold = if self.level.is_unset() {
            config::global_level()
        } else {
            self.level
        };
        level <= threshold
    }

    /// Log `message` at `level`.
    ///
    /// Disabled levels return immediately without touching the event pool.
    /// Write failures are reported on stderr and swallowed; logging never
    /// returns an error to the caller.
    #[track_caller]
    pub fn log(&self, level: Level, message: impl AsRef<str>) {
        if !self.should(level) {
            return;
        }
        self.emit(level, message.as_ref(), Location::caller());
    }

    fn emit(&self, level: Level, message: &str, caller: &Location<'_>) {
        let Some(writer) = &self.writer else { return };

        let mut event = pool::shared().acquire();
        event.time = Utc::now();
        event.level = level;
        event.module.clear();
        event.module.push_str(&self.name);
        event.message.clear();
        event.message.push_str(message);
        event.filename.clear();
        event.line = 0;
        if self.formatter.wants_source() {
            event.filename.push_str(base_name(caller.file()));
            event.line = caller.line();
        }

        // Lend the event's buffer to the formatter, then hand the rendered
        // line to the sink in one write.
        let mut buf = mem::take(&mut event.buf);
        self.formatter.format(&event, &mut buf);
        if let Err(err) = writer.lock().write_all(&buf) {
            eprintln!("[LOGGER ERROR] {}", LoggerError::Write(err));
        }
        event.buf = buf;

        pool::shared().release(event);
    }

    /// Flush the underlying sink.
    pub fn flush(&self) -> Result<()> {
        if let Some(writer) = &self.writer {
            writer.lock().flush().map_err(LoggerError::Flush)?;
        }
        Ok(())
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl AsRef<str>) {
        self.log(Level::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Level::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Level::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(Level::Warning, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Level::Error, message);
    }

    /// Log a message at fatal severity, then terminate the process with a
    /// non-zero status.
    ///
    /// ```no_run
    /// use logline::Logger;
    ///
    /// let logger = Logger::new(std::io::stderr());
    /// logger.fatal("unrecoverable startup failure");
    /// ```
    #[track_caller]
    pub fn fatal(&self, message: impl AsRef<str>) {
        self.log(Level::Fatal, message);
        if !self.ignore_exit {
            process::exit(1);
        }
    }

    /// Log a message at fatal severity, then panic with it.
    #[track_caller]
    pub fn panic(&self, message: impl AsRef<str>) -> ! {
        let message = message.as_ref();
        self.log(Level::Fatal, message);
        panic!("{}", message);
    }
}

/// Base name of a source file path as reported by the caller location.
fn base_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
