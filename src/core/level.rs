//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a log message.
///
/// Levels are ordered so that a *lower* numeric value means a *higher*
/// severity: `Fatal` is 1 and `Trace` is 6. A message is emitted when its
/// level compares `<=` to the active threshold.
///
/// [`Level::Unset`] is the zero placeholder meaning "defer to the global
/// threshold"; it is never a valid message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    /// Defer to the global threshold. Never a message severity.
    #[default]
    Unset = 0,
    Fatal = 1,
    Error = 2,
    Warning = 3,
    Info = 4,
    Debug = 5,
    Trace = 6,
}

impl Level {
    /// Parse a level from its canonical lowercase name.
    ///
    /// Unrecognized input yields [`Level::Unset`] rather than an error, so
    /// the function is total over all strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use logline::Level;
    ///
    /// assert_eq!(Level::parse("warn"), Level::Warning);
    /// assert_eq!(Level::parse("trace"), Level::Trace);
    /// assert_eq!(Level::parse("garbage"), Level::Unset);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "fatal" => Level::Fatal,
            "error" => Level::Error,
            "warn" => Level::Warning,
            "info" => Level::Info,
            "debug" => Level::Debug,
            "trace" => Level::Trace,
            _ => Level::Unset,
        }
    }

    /// Canonical lowercase name of the level.
    ///
    /// [`Level::Unset`] renders as an empty string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Warning => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
            Level::Unset => "",
        }
    }

    /// Three-letter uppercase code used by the pretty formatter.
    #[must_use]
    pub fn short_code(&self) -> &'static str {
        match self {
            Level::Fatal => "FTL",
            Level::Error => "ERR",
            Level::Warning => "WRN",
            Level::Info => "INF",
            Level::Debug => "DBG",
            Level::Trace => "TRC",
            Level::Unset => "",
        }
    }

    /// Whether this is the "defer to global" placeholder.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Level::Unset)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
