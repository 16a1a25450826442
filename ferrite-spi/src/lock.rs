//! Busy-flag bus lock
//!
//! Mutual exclusion over one physical bus, reduced to what the execution
//! model actually provides: a flag polled from a single cooperative
//! thread. [`BusLock::acquire`] spins until the flag clears, invoking a
//! [`Relax`] hook on every failed poll so other cooperative work (the
//! current holder included) can run.
//!
//! Hazards, by contract rather than by accident:
//!
//! - no timeout: a holder that never releases starves all waiters;
//! - no fairness: when several callers wait, whichever polls after the
//!   release wins;
//! - not reentrant: acquiring while already holding spins forever.
//!
//! The flag lives in a [`Cell`], which keeps the lock `!Sync`; it cannot
//! be shared across preemptive threads by construction.

use core::cell::Cell;

use ferrite_hal::Relax;

/// Exclusive-acquisition gate for one bus
#[derive(Debug, Default)]
pub struct BusLock {
    held: Cell<bool>,
}

impl BusLock {
    /// New, unheld lock
    pub const fn new() -> Self {
        Self {
            held: Cell::new(false),
        }
    }

    /// Spin until the lock is free, then take it
    ///
    /// `relax` runs once per failed poll.
    pub fn acquire<R: Relax>(&self, relax: &R) {
        while self.held.get() {
            relax.relax();
        }
        self.held.set(true);
    }

    /// Take the lock if it is free; returns whether it was taken
    pub fn try_acquire(&self) -> bool {
        if self.held.get() {
            return false;
        }
        self.held.set(true);
        true
    }

    /// Clear the held flag, letting the next waiter through
    pub fn release(&self) {
        self.held.set(false);
    }

    /// Current state of the held flag
    pub fn is_held(&self) -> bool {
        self.held.get()
    }
}
