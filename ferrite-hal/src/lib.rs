//! Ferrite Hardware Abstraction Layer
//!
//! This crate defines the hardware capabilities the Ferrite bus layer is
//! built on, so that the same bus and driver code runs against any chip
//! HAL that can provide them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Chip drivers (ferrite-drivers)          │
//! └──────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌──────────────────────────────────────────┐
//! │  Bus layer (ferrite-spi)                 │
//! └──────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌──────────────────────────────────────────┐
//! │  ferrite-hal (this crate - traits)       │
//! └──────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ GPIO pins     │       │ SPI shift     │
//! │ (bit-banging) │       │ register HW   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`relax::Relax`] - Cooperative wait while spinning on a busy bus
//! - [`shift::ShiftRegister`] - Dedicated SPI shift-register hardware
//!
//! The [`bus`] module holds the configuration vocabulary (clock mode, bit
//! order, target frequency) shared by every backend, and [`compat`] adapts
//! `embedded-hal` 1.0 digital pins to the traits defined here.

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod compat;
pub mod gpio;
pub mod relax;
pub mod shift;

// Re-export key items at crate root for convenience
pub use bus::{BitOrder, BusConfig, Mode, Phase, Polarity};
pub use gpio::{InputPin, IoPin, OutputPin};
pub use relax::{Relax, Spin};
pub use shift::{ClockDivider, ShiftRegister};
