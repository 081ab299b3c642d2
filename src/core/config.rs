//! Process-wide logger configuration
//!
//! The default severity threshold and the default logger display name are
//! shared globals consulted on every log call by loggers that leave the
//! corresponding setting unset. Reads take a per-call snapshot; the library
//! provides no coordination between concurrent writers, so tests and
//! applications mutating these after loggers start running must serialize
//! externally.

use super::level::Level;
use parking_lot::RwLock;
use std::sync::LazyLock;

static GLOBAL_LEVEL: RwLock<Level> = RwLock::new(Level::Info);

static DEFAULT_NAME: LazyLock<RwLock<String>> =
    LazyLock::new(|| RwLock::new(String::from("default")));

/// Current process-wide severity threshold, consulted by loggers whose own
/// threshold is unset.
#[must_use]
pub fn global_level() -> Level {
    *GLOBAL_LEVEL.read()
}

/// Replace the process-wide severity threshold.
///
/// # Examples
///
/// ```
/// use logline::{global_level, set_global_level, Level};
///
/// set_global_level(Level::Debug);
/// assert_eq!(global_level(), Level::Debug);
/// ```
pub fn set_global_level(level: Level) {
    *GLOBAL_LEVEL.write() = level;
}

/// Display name assigned to loggers constructed without one, also used by
/// the pretty formatter when an event carries no module name.
#[must_use]
pub fn default_logger_name() -> String {
    DEFAULT_NAME.read().clone()
}

/// Replace the default logger display name.
pub fn set_default_logger_name(name: impl Into<String>) {
    *DEFAULT_NAME.write() = name.into();
}
