//! # Logline
//!
//! A lightweight, leveled logging library with pooled events and pluggable
//! formatters.
//!
//! ## Features
//!
//! - **Buffer Reuse**: events and their output buffers are recycled through
//!   a concurrent pool, so steady-state logging allocates next to nothing
//! - **Pluggable Formatters**: colored human-readable, logfmt, and
//!   journald friendly output out of the box
//! - **Thread Safe**: loggers, formatters, and sinks are freely shared
//!   across threads
//! - **Easy to Use**: simple leveled methods plus formatting macros

pub mod core;
pub mod formatters;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        default_logger_name, global_level, set_default_logger_name, set_global_level, Event,
        Level, Logger, LoggerError, Options, Result,
    };
    pub use crate::formatters::{Formatter, JournalFormatter, PrettyFormatter, TextFormatter};
}

pub use crate::core::{
    default_logger_name, global_level, set_default_logger_name, set_global_level, Event, Level,
    Logger, LoggerError, Options, Result,
};
pub use crate::formatters::{Formatter, JournalFormatter, PrettyFormatter, TextFormatter};
