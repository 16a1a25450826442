//! Bit-banged software backend
//!
//! No shift-register hardware: the clock and data lines are GPIO, driven
//! directly. Each bit costs exactly two clock-line transitions, and the
//! ordering of data setup and sampling around those transitions is decided
//! by the clock phase, so a device on the wires cannot tell this backend
//! from a hardware one in any of the four clock modes.
//!
//! The requested frequency in [`BusConfig`] is an upper bound this backend
//! does not throttle to: the bit rate is whatever the GPIO toggle latency
//! yields, which on the target class of hardware is well below any rate a
//! chip would reject.

use ferrite_hal::{BitOrder, BusConfig, InputPin, OutputPin};

use crate::bus::SpiBus;

/// Software SPI over three GPIO lines
///
/// `SCK` and `MOSI` are outputs, `MISO` an input; the pins arrive already
/// pointing the right way, witnessed by their trait bounds.
pub struct BitBangSpi<SCK, MOSI, MISO> {
    sck: SCK,
    mosi: MOSI,
    miso: MISO,
    /// CPHA=1: clock leads, data follows
    clock_first: bool,
    msb_first: bool,
}

impl<SCK, MOSI, MISO> BitBangSpi<SCK, MOSI, MISO>
where
    SCK: OutputPin,
    MOSI: OutputPin,
    MISO: InputPin,
{
    /// Take ownership of the three bus lines
    ///
    /// Line levels are not touched here; the idle clock polarity is
    /// established when a session is configured.
    pub fn new(sck: SCK, mosi: MOSI, miso: MISO) -> Self {
        Self {
            sck,
            mosi,
            miso,
            clock_first: false,
            msb_first: true,
        }
    }

    /// Give the pins back, consuming the backend
    pub fn into_pins(self) -> (SCK, MOSI, MISO) {
        (self.sck, self.mosi, self.miso)
    }
}

impl<SCK, MOSI, MISO> SpiBus for BitBangSpi<SCK, MOSI, MISO>
where
    SCK: OutputPin,
    MOSI: OutputPin,
    MISO: InputPin,
{
    fn configure(&mut self, config: &BusConfig) {
        self.clock_first = config.mode.samples_on_trailing_edge();
        self.msb_first = config.bit_order == BitOrder::MsbFirst;
        // Idle polarity is set once per session, not per bit
        self.sck.set_state(config.mode.idles_high());
    }

    fn transfer_byte(&mut self, mut value: u8) -> u8 {
        let clock_first = self.clock_first;
        if self.msb_first {
            for _ in 0..8 {
                if clock_first {
                    self.sck.toggle();
                }
                self.mosi.set_state(value & 0x80 != 0);
                self.sck.toggle();
                value <<= 1;
                if self.miso.is_high() {
                    value |= 0x01;
                }
                if !clock_first {
                    self.sck.toggle();
                }
            }
        } else {
            for _ in 0..8 {
                if clock_first {
                    self.sck.toggle();
                }
                self.mosi.set_state(value & 0x01 != 0);
                self.sck.toggle();
                value >>= 1;
                if self.miso.is_high() {
                    value |= 0x80;
                }
                if !clock_first {
                    self.sck.toggle();
                }
            }
        }
        value
    }
}
