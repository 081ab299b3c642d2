//! Shared helpers for the integration test binaries.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// A cloneable in-memory sink, so a test can keep reading back what the
/// logger it handed the other clone to has written.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("utf-8 log output")
    }

    pub fn line_count(&self) -> usize {
        self.contents().lines().count()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
