//! Logging macros for ergonomic log message formatting.
//!
//! These macros are the formatted-string variants of the leveled methods,
//! with automatic formatting similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use logline::{info, Logger};
//!
//! let logger = Logger::new(std::io::stdout());
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use logline::{Level, Logger};
/// # let logger = Logger::new(std::io::stdout());
/// use logline::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use logline::{Level, Logger};
/// # let mut logger = Logger::new(std::io::stdout());
/// # logger.set_level(Level::Trace);
/// use logline::trace;
/// trace!(logger, "entering handler");
/// trace!(logger, "variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use logline::{Level, Logger};
/// # let mut logger = Logger::new(std::io::stdout());
/// # logger.set_level(Level::Debug);
/// use logline::debug;
/// debug!(logger, "cache warmed");
/// debug!(logger, "counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use logline::Logger;
/// # let logger = Logger::new(std::io::stdout());
/// use logline::info;
/// info!(logger, "application started");
/// info!(logger, "processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use logline::Logger;
/// # let logger = Logger::new(std::io::stdout());
/// use logline::warning;
/// warning!(logger, "low disk space");
/// warning!(logger, "retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use logline::Logger;
/// # let logger = Logger::new(std::io::stdout());
/// use logline::error;
/// error!(logger, "failed to connect to database");
/// error!(logger, "error code: {}, message: {}", 500, "internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level message, then terminate the process with a non-zero
/// status.
///
/// # Examples
///
/// ```no_run
/// # use logline::Logger;
/// # let logger = Logger::new(std::io::stderr());
/// use logline::fatal;
/// fatal!(logger, "unable to recover: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format!($($arg)+))
    };
}
