//! Hardware shift-register capability
//!
//! Chips with a dedicated SPI block expose it to the bus layer through
//! [`ShiftRegister`]: an opaque, double-buffered shift register with a
//! transfer-complete flag. The trait deliberately mirrors the load /
//! wait-for-complete / read-back register discipline of such blocks so a
//! backend can overlap loading the next byte with collecting the previous
//! one, without knowing any register layout.
//!
//! [`ClockDivider`] is the menu of clock divisors such blocks offer and the
//! policy for picking one from a requested frequency.

use crate::bus::{BitOrder, Mode};

/// Clock divisor selectable on the shift-register clock generator
///
/// Powers of two from /2 to /128, plus the /3 tap (the one ×1.5 step,
/// between /2 and /4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockDivider {
    /// System clock / 2
    Div2,
    /// System clock / 3
    Div3,
    /// System clock / 4
    Div4,
    /// System clock / 8
    Div8,
    /// System clock / 16
    Div16,
    /// System clock / 32
    Div32,
    /// System clock / 64
    Div64,
    /// System clock / 128
    Div128,
}

impl ClockDivider {
    /// All supported divisors, fastest first
    pub const ALL: [ClockDivider; 8] = [
        ClockDivider::Div2,
        ClockDivider::Div3,
        ClockDivider::Div4,
        ClockDivider::Div8,
        ClockDivider::Div16,
        ClockDivider::Div32,
        ClockDivider::Div64,
        ClockDivider::Div128,
    ];

    /// The numeric divisor
    pub fn divisor(self) -> u32 {
        match self {
            ClockDivider::Div2 => 2,
            ClockDivider::Div3 => 3,
            ClockDivider::Div4 => 4,
            ClockDivider::Div8 => 8,
            ClockDivider::Div16 => 16,
            ClockDivider::Div32 => 32,
            ClockDivider::Div64 => 64,
            ClockDivider::Div128 => 128,
        }
    }

    /// The next slower divisor; saturates at /128
    pub fn slower(self) -> ClockDivider {
        match self {
            ClockDivider::Div2 => ClockDivider::Div3,
            ClockDivider::Div3 => ClockDivider::Div4,
            ClockDivider::Div4 => ClockDivider::Div8,
            ClockDivider::Div8 => ClockDivider::Div16,
            ClockDivider::Div16 => ClockDivider::Div32,
            ClockDivider::Div32 => ClockDivider::Div64,
            ClockDivider::Div64 | ClockDivider::Div128 => ClockDivider::Div128,
        }
    }

    /// Pick the divisor for a requested device frequency
    ///
    /// Returns the smallest supported divisor `d` with
    /// `clock_hz / d <= target_hz`: the fastest clock that does not
    /// overshoot the request. Requests slower than `clock_hz / 128` clamp
    /// to [`ClockDivider::Div128`].
    ///
    /// The walk from /4 upward halves the remaining ratio per step instead
    /// of dividing, matching how SPI blocks encode their prescaler.
    pub fn for_frequency(clock_hz: u32, target_hz: u32) -> ClockDivider {
        let scale = clock_hz.div_ceil(target_hz.max(1));
        if scale <= 2 {
            return ClockDivider::Div2;
        }
        if scale <= 3 {
            return ClockDivider::Div3;
        }
        let mut divider = ClockDivider::Div4;
        let mut rest = (scale - 1) >> 2;
        while rest != 0 {
            divider = divider.slower();
            rest >>= 1;
        }
        divider
    }
}

/// Double-buffered hardware shift register with a transfer-complete flag
///
/// The contract follows the data-register discipline of SPI blocks:
///
/// - [`load`](ShiftRegister::load) writes the data register and starts
///   clocking the byte out;
/// - [`wait`](ShiftRegister::wait) blocks until the complete flag sets;
/// - [`received`](ShiftRegister::received) reads the receive register,
///   whose contents stay valid until the *next* exchange completes.
///
/// That last point is what permits one byte of read-ahead: a block
/// transfer may load byte `n + 1` and then still collect byte `n`.
pub trait ShiftRegister {
    /// Program clock mode, bit order and clock divisor
    fn configure(&mut self, mode: Mode, bit_order: BitOrder, divider: ClockDivider);

    /// Load a byte into the data register, starting the exchange
    fn load(&mut self, value: u8);

    /// Spin until the transfer-complete flag is set
    fn wait(&mut self);

    /// Read the last completed exchange out of the receive register
    fn received(&mut self) -> u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_ratios() {
        assert_eq!(ClockDivider::for_frequency(16_000_000, 8_000_000), ClockDivider::Div2);
        assert_eq!(ClockDivider::for_frequency(16_000_000, 4_000_000), ClockDivider::Div4);
        assert_eq!(ClockDivider::for_frequency(16_000_000, 2_000_000), ClockDivider::Div8);
        assert_eq!(ClockDivider::for_frequency(16_000_000, 1_000_000), ClockDivider::Div16);
        assert_eq!(ClockDivider::for_frequency(16_000_000, 500_000), ClockDivider::Div32);
        assert_eq!(ClockDivider::for_frequency(16_000_000, 250_000), ClockDivider::Div64);
        assert_eq!(ClockDivider::for_frequency(16_000_000, 125_000), ClockDivider::Div128);
    }

    #[test]
    fn request_faster_than_bus() {
        // Can't clock faster than /2; the request is just an upper bound
        assert_eq!(ClockDivider::for_frequency(16_000_000, 16_000_000), ClockDivider::Div2);
        assert_eq!(ClockDivider::for_frequency(16_000_000, 99_000_000), ClockDivider::Div2);
    }

    #[test]
    fn request_slower_than_slowest() {
        assert_eq!(ClockDivider::for_frequency(16_000_000, 1_000), ClockDivider::Div128);
    }

    #[test]
    fn inexact_ratios_never_overshoot() {
        // 16 MHz / 6 MHz needs the /3 tap: /2 gives 8 MHz, too fast
        assert_eq!(ClockDivider::for_frequency(16_000_000, 6_000_000), ClockDivider::Div3);
        // 16 MHz / 5 MHz: /3 gives 5.33 MHz, still too fast
        assert_eq!(ClockDivider::for_frequency(16_000_000, 5_000_000), ClockDivider::Div4);
        // 16 MHz / 3 MHz: /4 gives 4 MHz, too fast
        assert_eq!(ClockDivider::for_frequency(16_000_000, 3_000_000), ClockDivider::Div8);
    }

    #[test]
    fn selection_is_smallest_supported_divisor() {
        // Exhaustive check against the menu for a spread of requests
        let clock = 48_000_000u32;
        for target in (1_000..=clock).step_by(7_919) {
            let picked = ClockDivider::for_frequency(clock, target);
            // clock/d <= target, compared without rounding
            let fits = |d: &ClockDivider| d.divisor() as u64 * target as u64 >= clock as u64;
            let best = ClockDivider::ALL.iter().copied().find(|d| fits(d));
            match best {
                Some(best) => {
                    assert_eq!(picked, best, "clock {clock} target {target}");
                    assert!(fits(&picked));
                }
                // Request below clock/128: clamped
                None => assert_eq!(picked, ClockDivider::Div128),
            }
        }
    }

    #[test]
    fn slower_chain_saturates() {
        let mut divider = ClockDivider::Div2;
        for _ in 0..16 {
            divider = divider.slower();
        }
        assert_eq!(divider, ClockDivider::Div128);
    }
}
