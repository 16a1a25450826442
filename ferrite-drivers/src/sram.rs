//! Serial SRAM driver (23LC1024 class)
//!
//! A 1 Mbit SPI SRAM in sequential mode: every access is one transaction
//! framed as a 1-byte opcode, a 24-bit big-endian address and the payload.
//! The chip runs mode 0, MSB first, up to 16 MHz.
//!
//! ```text
//!                          23LC1024
//!                       +------------+
//! (CS)----------------1-|CS   U   VCC|-8----------------(VCC)
//! (MISO)--------------2-|SO      HOLD|-7---------(VCC/PULLUP)
//! (VCC/PULLUP)--------3-|NU       SCK|-6----------------(SCK)
//! (GND)---------------4-|VSS       SI|-5---------------(MOSI)
//!                       +------------+
//! ```

use ferrite_hal::{BitOrder, BusConfig, Mode, OutputPin, Relax, Spin};
use ferrite_spi::{SharedBus, SpiBus, SpiDevice};

use crate::memory::Memory;

/// Instruction opcodes understood by the chip
///
/// The mode-register opcodes are reserved vocabulary: the chip powers up
/// in sequential mode, which is the only mode this driver speaks, so no
/// operations are framed on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Opcode {
    /// Read data from memory
    Read = 0x03,
    /// Write data to memory
    Write = 0x02,
    /// Read mode register (reserved)
    ReadMode = 0x05,
    /// Write mode register (reserved)
    WriteMode = 0x01,
}

/// Driver for a 23LC1024-class serial SRAM on a shared bus
pub struct Sram<'bus, B, CS, R = Spin> {
    spi: SpiDevice<'bus, B, CS, R>,
}

impl<'bus, B: SpiBus, CS: OutputPin, R: Relax> Sram<'bus, B, CS, R> {
    /// Maximum device clock frequency
    pub const MAX_FREQUENCY: u32 = 16_000_000;

    /// Device capacity in bytes (1 Mbit)
    ///
    /// The protocol carries a 24-bit address; the chip wires 17 of those
    /// bits and ignores the rest.
    pub const CAPACITY: u32 = 128 * 1024;

    /// Attach to the chip behind `cs` on a shared bus
    pub fn new(bus: &'bus SharedBus<B, R>, cs: CS) -> Self {
        let config = BusConfig {
            frequency: Self::MAX_FREQUENCY,
            mode: Mode::Mode0,
            bit_order: BitOrder::MsbFirst,
        };
        Self {
            spi: SpiDevice::new(bus, cs, config),
        }
    }

    /// Read `buf.len()` bytes starting at `addr` into `buf`
    ///
    /// An empty buffer is a no-op: no transaction is opened and nothing
    /// touches the bus.
    pub fn read(&mut self, addr: u32, buf: &mut [u8]) {
        if buf.is_empty() {
            return;
        }
        let mut txn = self.spi.transaction();
        txn.write(&command(Opcode::Read, addr));
        txn.read(buf);
    }

    /// Write `data` to the chip starting at `addr`
    ///
    /// An empty slice is a no-op, as with [`read`](Self::read).
    pub fn write(&mut self, addr: u32, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        let mut txn = self.spi.transaction();
        txn.write(&command(Opcode::Write, addr));
        txn.write(data);
    }
}

impl<B: SpiBus, CS: OutputPin, R: Relax> Memory for Sram<'_, B, CS, R> {
    fn read(&mut self, addr: u32, buf: &mut [u8]) {
        Sram::read(self, addr, buf);
    }

    fn write(&mut self, addr: u32, data: &[u8]) {
        Sram::write(self, addr, data);
    }

    fn capacity(&self) -> u32 {
        Self::CAPACITY
    }
}

/// Transaction header: opcode, then the low 3 bytes of the address,
/// most significant first
fn command(op: Opcode, addr: u32) -> [u8; 4] {
    let addr = addr.to_be_bytes();
    [op as u8, addr[1], addr[2], addr[3]]
}
