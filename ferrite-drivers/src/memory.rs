//! Byte-addressable external memory
//!
//! The address space lives on the chip, not in this process; all an
//! implementation does is move bytes across the bus. Operations are
//! synchronous, block for the full transaction, and have no partial
//! outcome: the full count is always attempted.

/// A linear byte address space reachable through bus transactions
pub trait Memory {
    /// Read `buf.len()` bytes starting at `addr`
    fn read(&mut self, addr: u32, buf: &mut [u8]);

    /// Write `data.len()` bytes starting at `addr`
    fn write(&mut self, addr: u32, data: &[u8]);

    /// Size of the address space in bytes
    fn capacity(&self) -> u32;
}

impl<M: Memory + ?Sized> Memory for &mut M {
    fn read(&mut self, addr: u32, buf: &mut [u8]) {
        (**self).read(addr, buf);
    }

    fn write(&mut self, addr: u32, data: &[u8]) {
        (**self).write(addr, data);
    }

    fn capacity(&self) -> u32 {
        (**self).capacity()
    }
}

/// Shared access for several consumers of one device, e.g. two streams
/// over disjoint windows of the same chip
impl<M: Memory> Memory for &core::cell::RefCell<M> {
    fn read(&mut self, addr: u32, buf: &mut [u8]) {
        self.borrow_mut().read(addr, buf);
    }

    fn write(&mut self, addr: u32, data: &[u8]) {
        self.borrow_mut().write(addr, data);
    }

    fn capacity(&self) -> u32 {
        self.borrow().capacity()
    }
}
