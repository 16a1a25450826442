//! Shared bus configuration vocabulary
//!
//! Every device handle carries a [`BusConfig`] naming the clock mode, bit
//! order and target frequency it needs; the active backend is programmed
//! from it each time the device wins the bus. No divisor or prescale value
//! is exposed here: translating the requested frequency into backend
//! timing is the backend's business.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Clock polarity: the idle level of the clock line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// Clock phase: which clock transition samples the data line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    /// Data captured on the first (leading) transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on the second (trailing) transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI clock mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl Mode {
    /// The idle level of the clock line for this mode
    pub fn polarity(self) -> Polarity {
        match self {
            Mode::Mode0 | Mode::Mode1 => Polarity::IdleLow,
            Mode::Mode2 | Mode::Mode3 => Polarity::IdleHigh,
        }
    }

    /// The sampling phase for this mode
    pub fn phase(self) -> Phase {
        match self {
            Mode::Mode0 | Mode::Mode2 => Phase::CaptureOnFirstTransition,
            Mode::Mode1 | Mode::Mode3 => Phase::CaptureOnSecondTransition,
        }
    }

    /// The conventional 2-bit encoding: CPOL in bit 1, CPHA in bit 0
    pub fn bits(self) -> u8 {
        match self {
            Mode::Mode0 => 0b00,
            Mode::Mode1 => 0b01,
            Mode::Mode2 => 0b10,
            Mode::Mode3 => 0b11,
        }
    }

    /// True when the clock idles high (CPOL=1)
    pub fn idles_high(self) -> bool {
        self.polarity() == Polarity::IdleHigh
    }

    /// True when data is captured on the trailing transition (CPHA=1)
    pub fn samples_on_trailing_edge(self) -> bool {
        self.phase() == Phase::CaptureOnSecondTransition
    }
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        (mode.polarity(), mode.phase())
    }
}

impl From<(Polarity, Phase)> for Mode {
    fn from((polarity, phase): (Polarity, Phase)) -> Self {
        match (polarity, phase) {
            (Polarity::IdleLow, Phase::CaptureOnFirstTransition) => Mode::Mode0,
            (Polarity::IdleLow, Phase::CaptureOnSecondTransition) => Mode::Mode1,
            (Polarity::IdleHigh, Phase::CaptureOnFirstTransition) => Mode::Mode2,
            (Polarity::IdleHigh, Phase::CaptureOnSecondTransition) => Mode::Mode3,
        }
    }
}

/// Order in which the bits of a byte go out on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BitOrder {
    /// Most significant bit first
    MsbFirst,
    /// Least significant bit first
    LsbFirst,
}

/// Per-device bus configuration
///
/// Fixed at device construction; applied to the backend on every
/// acquisition so devices with different needs can share one bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BusConfig {
    /// Target clock frequency in Hz
    ///
    /// An upper bound: backends run at the closest achievable rate that
    /// does not exceed it.
    pub frequency: u32,
    /// Clock mode (polarity and phase)
    pub mode: Mode,
    /// Bit order on the wire
    pub bit_order: BitOrder,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            frequency: 1_000_000, // 1 MHz
            mode: Mode::Mode0,
            bit_order: BitOrder::MsbFirst,
        }
    }
}

impl BusConfig {
    /// Configuration with the given frequency, Mode 0, MSB first
    pub fn with_frequency(frequency: u32) -> Self {
        Self {
            frequency,
            ..Self::default()
        }
    }
}
