//! A growable byte buffer used by the writer to accumulate output before
//! transferring ownership to the caller.
//!
//! Grounded on `rec-buf.c`: fixed growth increments, and `close` shrinks to
//! the used size and hands the backing storage to the caller.

const STEP: usize = 512;

#[derive(Debug, Default)]
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    pub fn new() -> Self {
        Self { data: Vec::with_capacity(STEP) }
    }

    pub fn push_byte(&mut self, b: u8) {
        if self.data.len() == self.data.capacity() {
            self.data.reserve(STEP);
        }
        self.data.push(b);
    }

    pub fn push_str(&mut self, s: &str) {
        for b in s.bytes() {
            self.push_byte(b);
        }
    }

    /// Undo the last `n` pushed bytes.
    ///
    /// `n` must not exceed the number of bytes currently held: the C
    /// original computes `used - n` in unsigned arithmetic and silently
    /// underflows when `n > used`. Here we fail fast instead: an
    /// out-of-range rewind is a programmer bug, not a value to quietly
    /// wrap.
    pub fn rewind(&mut self, n: usize) {
        assert!(n <= self.data.len(), "rec: buffer rewind past start");
        self.data.truncate(self.data.len() - n);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consume the buffer, returning the accumulated bytes.
    pub fn close(self) -> Vec<u8> {
        self.data
    }

    /// Consume the buffer, returning the accumulated bytes as a `String`.
    ///
    /// Panics if the buffer does not hold valid UTF-8; the writer never
    /// emits invalid UTF-8, so this should never trigger in practice.
    pub fn close_to_string(self) -> String {
        String::from_utf8(self.data).expect("rec: writer emitted invalid utf-8")
    }
}
