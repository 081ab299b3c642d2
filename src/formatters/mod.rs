//! Formatter contract and the built-in formatter implementations

pub mod journal;
pub mod pretty;
pub mod text;

pub use journal::JournalFormatter;
pub use pretty::PrettyFormatter;
pub use text::TextFormatter;

use crate::core::event::Event;

/// Strategy for rendering a log event into bytes.
///
/// `format` appends one fully rendered line, including any trailing line
/// terminator, to `buf`, the event's own scratch buffer lent out by the
/// logger for the duration of the call. Implementations must only append;
/// they never truncate or inspect what is already there.
///
/// A single formatter instance is shared by every logger constructed with it
/// and may be invoked from many threads concurrently on *different* events,
/// so implementations must not keep per-call mutable state.
pub trait Formatter: Send + Sync {
    fn format(&self, event: &Event, buf: &mut Vec<u8>);

    /// Whether the logger should capture the caller's file and line before
    /// formatting. Only the pretty formatter asks for this.
    fn wants_source(&self) -> bool {
        false
    }
}
