//! Basic logger usage example
//!
//! Demonstrates leveled logging with the default logfmt formatter.
//!
//! Run with: cargo run --example basic_usage

use logline::{info, warning, Level, Logger};

fn main() {
    let mut logger = Logger::named("demo");
    logger.set_level(Level::Trace);

    logger.trace("this is a trace message");
    logger.debug("this is a debug message");
    logger.info("this is an info message");
    logger.warning("this is a warning message");
    logger.error("this is an error message");

    // Formatting macros
    info!(logger, "processing {} items", 100);
    warning!(logger, "retry attempt {} of {}", 3, 5);

    // Derived loggers share the formatter and sink
    let worker = logger.with_name("demo.worker");
    worker.info("derived logger with its own name");

    // Raising the threshold silences the noisy levels
    logger.set_level(Level::Warning);
    logger.debug("hidden now");
    logger.warning("still visible");
}
