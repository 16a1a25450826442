//! Chip drivers built on the Ferrite bus layer
//!
//! - [`memory::Memory`] - byte-addressable external memory
//! - [`sram::Sram`] - serial SRAM (23LC1024 class) behind an
//!   opcode + 24-bit-address transaction protocol
//! - [`stream::RingStream`] - fixed-capacity circular byte stream mapped
//!   onto a window of a [`memory::Memory`]
//!
//! Each driver owns one [`ferrite_spi::SpiDevice`] and frames its chip's
//! protocol over scoped transactions; everything below the opcode layer
//! (arbitration, chip select, clocking) is the bus layer's problem.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod memory;
pub mod sram;
pub mod stream;

#[cfg(test)]
mod testutil;

pub use memory::Memory;
pub use sram::{Opcode, Sram};
pub use stream::RingStream;
