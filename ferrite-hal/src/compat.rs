//! `embedded-hal` 1.0 pin adapters
//!
//! Chip HALs in the wider ecosystem expose digital pins through the
//! fallible `embedded-hal` traits. These wrappers absorb that fallibility
//! at the boundary: GPIO on-chip cannot meaningfully fail mid-transaction,
//! so output errors are dropped and input errors read as low.

use crate::gpio;

/// An `embedded-hal` output pin as an infallible [`gpio::OutputPin`]
///
/// `embedded-hal` output pins are write-only; the adapter mirrors the
/// driven level so `toggle` and `is_set_high` work on any of them.
pub struct OutputPinAdapter<P> {
    pin: P,
    level: bool,
}

impl<P: embedded_hal::digital::OutputPin> OutputPinAdapter<P> {
    /// Wrap `pin`, driving it to `initial_high` so the mirrored level is
    /// known to match the wire
    pub fn new(mut pin: P, initial_high: bool) -> Self {
        let _ = if initial_high {
            pin.set_high()
        } else {
            pin.set_low()
        };
        Self {
            pin,
            level: initial_high,
        }
    }

    /// Unwrap the inner pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::OutputPin> gpio::OutputPin for OutputPinAdapter<P> {
    fn set_high(&mut self) {
        let _ = self.pin.set_high();
        self.level = true;
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
        self.level = false;
    }

    fn toggle(&mut self) {
        if self.level {
            self.set_low();
        } else {
            self.set_high();
        }
    }

    fn is_set_high(&self) -> bool {
        self.level
    }
}

/// An `embedded-hal` input pin as an infallible [`gpio::InputPin`]
pub struct InputPinAdapter<P> {
    pin: P,
}

impl<P: embedded_hal::digital::InputPin> InputPinAdapter<P> {
    /// Wrap `pin`
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Unwrap the inner pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::InputPin> gpio::InputPin for InputPinAdapter<P> {
    fn is_high(&mut self) -> bool {
        self.pin.is_high().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::{InputPin, OutputPin};
    use core::convert::Infallible;

    #[derive(Default)]
    struct EhPin {
        high: bool,
    }

    impl embedded_hal::digital::ErrorType for EhPin {
        type Error = Infallible;
    }

    impl embedded_hal::digital::OutputPin for EhPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    impl embedded_hal::digital::InputPin for EhPin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.high)
        }
    }

    #[test]
    fn output_adapter_mirrors_level() {
        let pin = OutputPinAdapter::new(EhPin::default(), true);
        assert!(pin.is_set_high());
        assert!(pin.into_inner().high);

        let mut pin = OutputPinAdapter::new(EhPin::default(), false);
        assert!(pin.is_set_low());

        pin.set_high();
        assert!(pin.is_set_high());
        pin.toggle();
        assert!(pin.is_set_low());
        pin.toggle();
        assert!(pin.is_set_high());
        assert!(pin.into_inner().high);
    }

    #[test]
    fn input_adapter_reads_wire() {
        let mut pin = InputPinAdapter::new(EhPin { high: true });
        assert!(pin.is_high());
        let mut pin = InputPinAdapter::new(EhPin { high: false });
        assert!(pin.is_low());
    }
}
