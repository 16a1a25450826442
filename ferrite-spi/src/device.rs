//! Chip-select device handles
//!
//! A [`SpiDevice`] binds one chip-select pin and a fixed [`BusConfig`] to
//! a [`SharedBus`]. Chip drivers talk to their chip exclusively through
//! scoped [`Transaction`] guards, which keep the acquire/select and
//! deselect/release pairs matched on every exit path.

use core::cell::RefMut;

use ferrite_hal::{BusConfig, OutputPin, Relax, Spin};

use crate::bus::SpiBus;
use crate::lock::BusLock;
use crate::shared::SharedBus;

/// One chip on a shared bus
///
/// Owns the chip-select pin; borrows the bus. The configuration is fixed
/// at construction and reprogrammed into the backend at the start of every
/// transaction, so devices with different modes or clocks can interleave
/// on one bus.
pub struct SpiDevice<'bus, B, CS, R = Spin> {
    bus: &'bus SharedBus<B, R>,
    cs: CS,
    config: BusConfig,
}

impl<'bus, B: SpiBus, CS: OutputPin, R: Relax> SpiDevice<'bus, B, CS, R> {
    /// Bind a chip-select pin and configuration to a bus
    ///
    /// Drives the select pin high, the idle level for an active-low
    /// select. Assert and deassert are toggles from here on: a select pin
    /// is owned by exactly one handle and never written by anything else.
    pub fn new(bus: &'bus SharedBus<B, R>, mut cs: CS, config: BusConfig) -> Self {
        cs.set_high();
        Self { bus, cs, config }
    }

    /// This device's fixed bus configuration
    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    /// Open a transaction: win the bus, program it, select the chip
    ///
    /// Blocks until the current holder (if any) releases; there is no
    /// timeout. The returned guard deselects the chip and releases the
    /// bus when dropped, however the scope is left.
    ///
    /// Calling this again while the guard is alive deadlocks in the bus
    /// lock. The lock is not reentrant and does not detect the cycle.
    pub fn transaction(&mut self) -> Transaction<'_, B, CS> {
        let bus = self.bus.begin(&self.config);
        self.cs.toggle();
        Transaction {
            bus,
            cs: &mut self.cs,
            lock: self.bus.lock(),
        }
    }

    /// Give the chip-select pin back, consuming the handle
    pub fn into_cs(self) -> CS {
        self.cs
    }
}

/// Scoped bus session for one device
///
/// Exposes the transfer surface of the backend while the chip is
/// selected. Dropping the guard deselects the chip, then releases the
/// bus, in that order; the select line must settle before another device
/// may drive the clock.
pub struct Transaction<'a, B, CS: OutputPin> {
    bus: RefMut<'a, B>,
    cs: &'a mut CS,
    lock: &'a BusLock,
}

impl<B: SpiBus, CS: OutputPin> Transaction<'_, B, CS> {
    /// Exchange one byte
    pub fn transfer_byte(&mut self, value: u8) -> u8 {
        self.bus.transfer_byte(value)
    }

    /// Full-duplex block exchange
    pub fn transfer(&mut self, read: &mut [u8], write: &[u8]) {
        self.bus.transfer(read, write);
    }

    /// Exchange a block in place
    pub fn transfer_in_place(&mut self, data: &mut [u8]) {
        self.bus.transfer_in_place(data);
    }

    /// Pure write
    pub fn write(&mut self, data: &[u8]) {
        self.bus.write(data);
    }

    /// Pure read
    pub fn read(&mut self, buf: &mut [u8]) {
        self.bus.read(buf);
    }
}

impl<B, CS: OutputPin> Drop for Transaction<'_, B, CS> {
    fn drop(&mut self) {
        self.cs.toggle();
        self.lock.release();
    }
}
