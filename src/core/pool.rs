//! Event recycling pool
//!
//! Amortizes event and buffer allocation across high-frequency logging.
//! Idle events park in a bounded channel acting as a concurrent free list:
//! `acquire` falls back to a fresh allocation when the channel is empty and
//! `release` drops events instead of blocking when it is full.

use super::event::Event;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::OnceLock;

/// Largest buffer capacity an event may keep when returning to the pool.
///
/// Proper pool usage requires each entry to have roughly the same memory
/// cost; an event whose buffer grew past this mark is dropped so a single
/// oversized message cannot pin its memory in the pool permanently.
const MAX_POOLED_BUFFER: usize = 64 * 1024;

/// Number of idle events the pool retains.
const POOL_SIZE: usize = 128;

pub(crate) struct EventPool {
    tx: Sender<Event>,
    rx: Receiver<Event>,
}

impl EventPool {
    fn with_capacity(size: usize) -> Self {
        let (tx, rx) = bounded(size);
        Self { tx, rx }
    }

    /// Take an event out of the pool, allocating a fresh one when none is
    /// idle.
    ///
    /// The returned event's buffer is empty with its capacity preserved.
    /// Every other field still holds whatever the previous borrower left and
    /// must be overwritten before use.
    pub(crate) fn acquire(&self) -> Event {
        match self.rx.try_recv() {
            Ok(mut event) => {
                event.buf.clear();
                event
            }
            Err(_) => Event::new(),
        }
    }

    /// Return an event for reuse.
    ///
    /// Events whose buffer capacity exceeds [`MAX_POOLED_BUFFER`] are
    /// dropped, as are events arriving while the pool is already full.
    pub(crate) fn release(&self, event: Event) {
        if event.buf.capacity() > MAX_POOLED_BUFFER {
            return;
        }
        let _ = self.tx.try_send(event);
    }
}

/// The process-wide pool shared by all loggers.
pub(crate) fn shared() -> &'static EventPool {
    static POOL: OnceLock<EventPool> = OnceLock::new();
    POOL.get_or_init(|| EventPool::with_capacity(POOL_SIZE))
}
