//! Shared test doubles: an emulated serial SRAM chip and an observable
//! chip-select pin.

use std::cell::Cell;
use std::rc::Rc;
use std::vec;
use std::vec::Vec;

use ferrite_hal::{BitOrder, BusConfig, Mode, OutputPin};
use ferrite_spi::SpiBus;
use heapless::Vec as HVec;

const CAPACITY: u32 = 128 * 1024;

/// Where the emulated chip is within a transaction
enum ChipState {
    /// Next byte is an opcode
    Idle,
    /// Collecting the 3 address bytes
    Address { op: u8, addr: u32, have: u8 },
    /// Serving payload bytes from the internal address counter
    Data { op: u8, addr: u32 },
}

/// A 23LC1024 in sequential mode, sitting on the far end of the bus
///
/// The bus is reprogrammed at the start of every transaction, so
/// `configure` doubles as the emulator's select boundary.
pub struct ChipEmulator {
    pub mem: Vec<u8>,
    pub headers: HVec<[u8; 4], 16>,
    pub sessions: u32,
    state: ChipState,
}

impl ChipEmulator {
    pub fn new() -> Self {
        Self {
            mem: vec![0; CAPACITY as usize],
            headers: HVec::new(),
            sessions: 0,
            state: ChipState::Idle,
        }
    }
}

impl SpiBus for ChipEmulator {
    fn configure(&mut self, config: &BusConfig) {
        // The chip's electrical limits; a driver breaking them is a bug
        assert_eq!(config.mode, Mode::Mode0);
        assert_eq!(config.bit_order, BitOrder::MsbFirst);
        assert!(config.frequency <= 16_000_000);
        self.sessions += 1;
        self.state = ChipState::Idle;
    }

    fn transfer_byte(&mut self, value: u8) -> u8 {
        match self.state {
            ChipState::Idle => {
                self.state = ChipState::Address {
                    op: value,
                    addr: 0,
                    have: 0,
                };
                0
            }
            ChipState::Address { op, addr, have } => {
                let addr = (addr << 8) | value as u32;
                if have == 2 {
                    let bytes = addr.to_be_bytes();
                    self.headers
                        .push([op, bytes[1], bytes[2], bytes[3]])
                        .expect("header log full");
                    self.state = ChipState::Data { op, addr };
                } else {
                    self.state = ChipState::Address {
                        op,
                        addr,
                        have: have + 1,
                    };
                }
                0
            }
            ChipState::Data { op, addr } => {
                let index = (addr % CAPACITY) as usize;
                let out = match op {
                    0x02 => {
                        self.mem[index] = value;
                        0
                    }
                    0x03 => self.mem[index],
                    other => panic!("opcode {other:#04x} not understood by the chip"),
                };
                self.state = ChipState::Data { op, addr: addr + 1 };
                out
            }
        }
    }
}

/// Output pin whose toggle count survives being moved into a device
pub struct ProbePin {
    level: Cell<bool>,
    toggles: Rc<Cell<u32>>,
}

impl ProbePin {
    pub fn new() -> Self {
        Self {
            level: Cell::new(false),
            toggles: Rc::new(Cell::new(0)),
        }
    }

    /// Counter incremented on every toggle
    pub fn toggles(&self) -> Rc<Cell<u32>> {
        self.toggles.clone()
    }
}

impl OutputPin for ProbePin {
    fn set_high(&mut self) {
        self.level.set(true);
    }

    fn set_low(&mut self) {
        self.level.set(false);
    }

    fn toggle(&mut self) {
        self.level.set(!self.level.get());
        self.toggles.set(self.toggles.get() + 1);
    }

    fn is_set_high(&self) -> bool {
        self.level.get()
    }
}
