//! Shared bus wrapper
//!
//! One [`SharedBus`] exists per physical bus for the life of the program.
//! It owns the backend, the [`BusLock`] gating it, and the relax strategy
//! used while waiting. Device handles borrow it; none of them owns it.

use core::cell::{RefCell, RefMut};

use ferrite_hal::{BusConfig, Relax, Spin};

use crate::bus::SpiBus;
use crate::lock::BusLock;

/// A bus backend plus the arbitration state shared by its devices
///
/// At most one session is active at any instant: the backend's `RefCell`
/// is only borrowed after the lock is won, and the borrow lives inside the
/// session guard.
pub struct SharedBus<B, R = Spin> {
    bus: RefCell<B>,
    lock: BusLock,
    relax: R,
}

impl<B: SpiBus> SharedBus<B> {
    /// Wrap a backend with the default busy-spin wait strategy
    pub fn new(bus: B) -> Self {
        Self::with_relax(bus, Spin)
    }
}

impl<B: SpiBus, R: Relax> SharedBus<B, R> {
    /// Wrap a backend with an explicit wait strategy
    ///
    /// The strategy runs on every failed poll while some device waits for
    /// the bus, and is the only point other cooperative work gets to run
    /// during that wait.
    pub fn with_relax(bus: B, relax: R) -> Self {
        Self {
            bus: RefCell::new(bus),
            lock: BusLock::new(),
            relax,
        }
    }

    /// Whether some device currently holds the bus
    pub fn is_busy(&self) -> bool {
        self.lock.is_held()
    }

    /// Win the lock and program the backend for `config`
    ///
    /// Blocks (spinning through the relax strategy) until the current
    /// holder releases. Never times out. Returns the borrowed backend;
    /// the caller pairs it with [`BusLock::release`] via the transaction
    /// guard.
    pub(crate) fn begin(&self, config: &BusConfig) -> RefMut<'_, B> {
        self.lock.acquire(&self.relax);
        let mut bus = self.bus.borrow_mut();
        bus.configure(config);
        bus
    }

    pub(crate) fn lock(&self) -> &BusLock {
        &self.lock
    }

    /// Take the backend back out, consuming the wrapper
    pub fn into_inner(self) -> B {
        self.bus.into_inner()
    }
}
