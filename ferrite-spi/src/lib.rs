//! Shared SPI bus layer
//!
//! One physical SPI bus, many attached chips: this crate owns the
//! arbitration and per-transaction configuration that lets independent
//! device handles share the wires safely.
//!
//! - [`bus::SpiBus`] - the controller contract (configure + transfer)
//! - [`lock::BusLock`] - busy-flag mutual exclusion with a cooperative
//!   relax hook while waiting
//! - [`shared::SharedBus`] - one lock + one backend, borrowed by every
//!   device handle on the bus
//! - [`device::SpiDevice`] - chip-select binding and scoped
//!   [`device::Transaction`] guards
//! - [`bitbang::BitBangSpi`] - software backend, clock and data toggled
//!   directly on GPIO
//! - [`hardware::HardwareSpi`] - backend over a dedicated shift register
//!
//! A transaction flows top-down: the device handle wins the lock, programs
//! the backend with its own mode/bit-order/frequency, toggles chip select,
//! transfers, and undoes both on drop.
//!
//! The execution model is single-threaded cooperative. Waiting for the bus
//! spins with a [`ferrite_hal::Relax`] hook; there is no timeout, no
//! fairness and no reentrancy. A handle that acquires twice without
//! releasing deadlocks itself; that is a documented hazard, not an error
//! this layer detects.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bitbang;
pub mod bus;
pub mod device;
pub mod hardware;
pub mod lock;
pub mod shared;

pub use bitbang::BitBangSpi;
pub use bus::SpiBus;
pub use device::{SpiDevice, Transaction};
pub use hardware::HardwareSpi;
pub use lock::BusLock;
pub use shared::SharedBus;
