//! GPIO pin abstractions
//!
//! Digital pin traits implemented by chip-specific HALs. The bus layer
//! drives chip-select and bit-banged clock/data lines exclusively through
//! these traits, so pin operations are infallible: a pin that can fail to
//! toggle cannot carry an SPI transaction anyway.
//!
//! Pin direction is a property of the type: a backend that needs an output
//! asks for [`OutputPin`], one that samples a line asks for [`InputPin`].

/// Digital output pin
///
/// Implementations handle the actual register manipulation for the
/// specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Invert the pin state
    ///
    /// Chip-select handling is built on this: assert and deassert are
    /// toggles, not absolute writes, so an unmatched pair leaves the line
    /// inverted for every later transaction.
    fn toggle(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently driven low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Takes `&mut self` so that `embedded-hal` 1.0 pins, whose read methods
/// are `&mut`, can be adapted without interior mutability.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

/// Pin usable for both input and output
pub trait IoPin: OutputPin + InputPin {}

// Blanket implementation for types that implement both traits
impl<T: OutputPin + InputPin> IoPin for T {}
