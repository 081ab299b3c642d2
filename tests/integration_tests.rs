//! Integration tests for the logger
//!
//! These tests verify:
//! - Constructor defaults (name, formatter, discard writer)
//! - Exact output contracts for the built-in formatters through a logger
//! - Sink sharing across named derivatives
//! - File sinks and flushing
//! - Formatting macros

mod common;

use common::SharedBuf;
use logline::formatters::{JournalFormatter, PrettyFormatter};
use logline::{error, info, Logger, Options};
use std::fs;
use std::sync::Arc;
use tempfile::NamedTempFile;

#[test]
fn test_logger_without_writer_is_silent() {
    let logger = Logger::with_options(Options::default());

    // Nothing observable; the calls must simply complete.
    logger.info("goes nowhere");
    info!(logger, "formatted {} goes nowhere too", 42);
    assert!(logger.flush().is_ok());
}

#[test]
fn test_named_logger_output() {
    let sink = SharedBuf::default();
    let logger = Logger::with_options(Options {
        name: Some("testing".into()),
        writer: Some(Box::new(sink.clone())),
        ..Options::default()
    });

    logger.info("hello world!");
    assert!(
        sink.contents().contains("logger=testing"),
        "expected log message to contain logger=testing: {:?}",
        sink.contents()
    );
}

#[test]
fn test_unset_name_takes_the_default() {
    let sink = SharedBuf::default();
    let logger = Logger::with_options(Options {
        writer: Some(Box::new(sink.clone())),
        ..Options::default()
    });

    logger.info("hello");
    assert!(sink.contents().contains("logger=default"));
}

#[test]
fn test_explicitly_empty_name_omits_the_field() {
    let sink = SharedBuf::default();
    let logger = Logger::with_options(Options {
        name: Some(String::new()),
        writer: Some(Box::new(sink.clone())),
        ..Options::default()
    });

    logger.info("hello");
    let output = sink.contents();
    assert!(output.starts_with("ts="), "got {output:?}");
    assert!(output.contains(" lvl=info "), "got {output:?}");
    assert!(!output.contains("logger="), "got {output:?}");
}

#[test]
fn test_text_quoting_through_logger() {
    let sink = SharedBuf::default();
    let logger = Logger::with_options(Options {
        name: Some(String::new()),
        writer: Some(Box::new(sink.clone())),
        ..Options::default()
    });

    logger.info("hello");
    assert!(sink.contents().ends_with("lvl=info msg=hello\n"));
    sink.clear();

    logger.info("hello world!");
    assert!(sink.contents().ends_with("lvl=info msg=\"hello world!\"\n"));
}

#[test]
fn test_pretty_output_contract() {
    let sink = SharedBuf::default();
    let logger = Logger::with_options(Options {
        formatter: Some(Arc::new(PrettyFormatter::new())),
        writer: Some(Box::new(sink.clone())),
        ..Options::default()
    });

    logger.info("hello world!");

    let want = "\u{1b}[32mINF\u{1b}[0m \u{1b}[90m[\u{1b}[0m\u{1b}[37mdefault\u{1b}[0m\u{1b}[90m]\u{1b}[0m hello world!\n";
    let got = sink.contents();
    assert!(
        got.ends_with(want),
        "incorrect log suffix from output:\n{got:?}"
    );
}

#[test]
fn test_journal_output_contract() {
    let sink = SharedBuf::default();
    let logger = Logger::with_options(Options {
        name: Some("main".into()),
        formatter: Some(Arc::new(JournalFormatter::new())),
        writer: Some(Box::new(sink.clone())),
        ..Options::default()
    });

    logger.info("Hello World");
    assert_eq!(sink.contents(), "[main] info - Hello World\n");
}

#[test]
fn test_derived_loggers_share_one_sink() {
    let sink = SharedBuf::default();
    let root = Logger::with_options(Options {
        name: Some("root".into()),
        writer: Some(Box::new(sink.clone())),
        ..Options::default()
    });
    let api = root.with_name("api");
    let db = root.with_name("db");

    root.info("one");
    api.info("two");
    db.info("three");

    let output = sink.contents();
    assert_eq!(sink.line_count(), 3);
    assert!(output.contains("logger=root"));
    assert!(output.contains("logger=api"));
    assert!(output.contains("logger=db"));
}

#[test]
fn test_file_sink() {
    let file = NamedTempFile::new().expect("failed to create temp file");
    let path = file.path().to_path_buf();

    let logger = Logger::new(file.reopen().expect("failed to reopen temp file"));
    logger.info("written to disk");
    logger.error("and this too");
    logger.flush().expect("failed to flush");

    let content = fs::read_to_string(&path).expect("failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("msg=\"written to disk\""));
    assert!(lines[1].contains("lvl=error"));
}

#[test]
fn test_macros_format_their_arguments() {
    let sink = SharedBuf::default();
    let logger = Logger::with_options(Options {
        writer: Some(Box::new(sink.clone())),
        ..Options::default()
    });

    info!(logger, "processed {} items in {}ms", 128, 7);
    error!(logger, "exit code {}", 1);

    let output = sink.contents();
    assert!(output.contains("msg=\"processed 128 items in 7ms\""));
    assert!(output.contains("lvl=error msg=\"exit code 1\""));
}

#[test]
fn test_pretty_source_capture_reports_this_file() {
    let sink = SharedBuf::default();
    let logger = Logger::with_options(Options {
        formatter: Some(Arc::new(PrettyFormatter::new().with_source(true))),
        writer: Some(Box::new(sink.clone())),
        ..Options::default()
    });

    logger.info("locate me");
    let output = sink.contents();
    assert!(
        output.contains("integration_tests.rs:"),
        "caller file expected in output: {output:?}"
    );
}

#[test]
fn test_logging_never_fails_on_a_closed_sink() {
    struct ClosedSink;

    impl std::io::Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "receiver went away",
            ))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let logger = Logger::new(ClosedSink);
    // The write fails internally; the call itself must not.
    logger.info("nobody is listening");
}
