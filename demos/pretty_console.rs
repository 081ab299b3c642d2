//! Colored console output example
//!
//! Demonstrates the pretty formatter with caller location capture.
//!
//! Run with: cargo run --example pretty_console

use logline::formatters::PrettyFormatter;
use logline::{Level, Logger, Options};
use std::sync::Arc;

fn main() {
    let mut logger = Logger::with_options(Options {
        name: Some("console".into()),
        formatter: Some(Arc::new(PrettyFormatter::new().with_source(true))),
        writer: Some(Box::new(std::io::stdout())),
        ..Options::default()
    });
    logger.set_level(Level::Trace);

    logger.trace("tracing through the startup sequence");
    logger.debug("loaded 3 configuration files");
    logger.info("listening on 127.0.0.1:8080");
    logger.warning("certificate expires in 7 days");
    logger.error("upstream connection refused");
}
