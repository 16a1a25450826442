//! Circular byte stream over external memory
//!
//! A fixed-capacity FIFO whose storage is a window of a [`Memory`] rather
//! than local RAM: the indices live here, the bytes live on the chip.
//! Useful when the buffered data dwarfs what the controller can hold, at
//! the cost of one bus transaction per byte moved.
//!
//! Nothing guards against two streams mapping overlapping windows of the
//! same device; keeping windows disjoint is the caller's responsibility.

use crate::memory::Memory;

/// Fixed-capacity FIFO mapped onto `[base, base + size)` of a memory
///
/// Invariants: `count <= size`; both indices stay in `[0, size)`;
/// `(put - get) mod size == count mod size` while the stream is not full.
pub struct RingStream<M> {
    mem: M,
    base: u32,
    size: usize,
    put: usize,
    get: usize,
    count: usize,
}

impl<M: Memory> RingStream<M> {
    /// Map a stream of capacity `size` onto `mem` starting at `base`
    ///
    /// The window must fit the device: `base + size <= mem.capacity()`.
    pub fn new(mem: M, base: u32, size: usize) -> Self {
        debug_assert!(size > 0);
        debug_assert!(base as u64 + size as u64 <= mem.capacity() as u64);
        Self {
            mem,
            base,
            size,
            put: 0,
            get: 0,
            count: 0,
        }
    }

    /// Append a byte, or reject it when the stream is full
    ///
    /// Rejection returns the byte and performs no write: the writer is
    /// told immediately and nothing unread is overwritten.
    pub fn put(&mut self, byte: u8) -> Result<(), u8> {
        if self.count == self.size {
            return Err(byte);
        }
        self.mem.write(self.base + self.put as u32, &[byte]);
        self.put = (self.put + 1) % self.size;
        self.count += 1;
        Ok(())
    }

    /// The byte `get` would return, without consuming it
    pub fn peek(&mut self) -> Option<u8> {
        if self.count == 0 {
            return None;
        }
        let mut byte = [0u8];
        self.mem.read(self.base + self.get as u32, &mut byte);
        Some(byte[0])
    }

    /// Consume and return the oldest byte, `None` when empty
    pub fn get(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.get = (self.get + 1) % self.size;
        self.count -= 1;
        Some(byte)
    }

    /// Number of bytes currently buffered
    pub fn available(&self) -> usize {
        self.count
    }

    /// Fixed capacity of the stream
    pub fn capacity(&self) -> usize {
        self.size
    }

    /// Whether `get` would return `None`
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether `put` would reject
    pub fn is_full(&self) -> bool {
        self.count == self.size
    }

    /// Discard the logical contents
    ///
    /// Resets the indices and count only. Bytes already written to the
    /// backing device stay there physically; they are unreachable through
    /// this stream because the count is zero.
    pub fn flush(&mut self) {
        self.put = 0;
        self.get = 0;
        self.count = 0;
    }

    /// Give the backing memory back, consuming the stream
    pub fn into_inner(self) -> M {
        self.mem
    }
}
