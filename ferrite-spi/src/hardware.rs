//! Hardware shift-register backend
//!
//! Clocks bytes through a dedicated SPI block exposed as a
//! [`ShiftRegister`]. Throughput is serialized on the block's
//! transfer-complete flag; the only overlap is the one byte of read-ahead
//! the double-buffered receive register allows, which the block transfer
//! loops below exploit by loading byte `n + 1` before collecting byte `n`.

use ferrite_hal::{BusConfig, ClockDivider, ShiftRegister};

use crate::bus::SpiBus;

/// SPI backend over dedicated shift-register hardware
pub struct HardwareSpi<S> {
    port: S,
    /// System clock feeding the block's divider, in Hz
    clock_hz: u32,
}

impl<S: ShiftRegister> HardwareSpi<S> {
    /// Wrap a shift-register port clocked from `clock_hz`
    pub fn new(port: S, clock_hz: u32) -> Self {
        Self { port, clock_hz }
    }

    /// Give the port back, consuming the backend
    pub fn into_port(self) -> S {
        self.port
    }
}

impl<S: ShiftRegister> SpiBus for HardwareSpi<S> {
    fn configure(&mut self, config: &BusConfig) {
        let divider = ClockDivider::for_frequency(self.clock_hz, config.frequency);
        self.port.configure(config.mode, config.bit_order, divider);
    }

    fn transfer_byte(&mut self, value: u8) -> u8 {
        self.port.load(value);
        self.port.wait();
        self.port.received()
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) {
        let count = read.len().min(write.len());
        let (read, write) = (&mut read[..count], &write[..count]);
        let Some((&first, rest)) = write.split_first() else {
            return;
        };
        self.port.load(first);
        for i in 0..rest.len() {
            self.port.wait();
            self.port.load(rest[i]);
            read[i] = self.port.received();
        }
        self.port.wait();
        read[count - 1] = self.port.received();
    }

    fn write(&mut self, data: &[u8]) {
        // Pure write never touches the receive register
        let Some((&first, rest)) = data.split_first() else {
            return;
        };
        self.port.load(first);
        for &b in rest {
            self.port.wait();
            self.port.load(b);
        }
        self.port.wait();
    }

    fn read(&mut self, buf: &mut [u8]) {
        let Some(count) = buf.len().checked_sub(1) else {
            return;
        };
        self.port.load(0);
        for i in 0..count {
            self.port.wait();
            self.port.load(0);
            buf[i] = self.port.received();
        }
        self.port.wait();
        buf[count] = self.port.received();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrite_hal::{BitOrder, Mode};
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Configure(Mode, BitOrder, ClockDivider),
        Load(u8),
        Wait,
        Received,
    }

    /// Echoes each loaded byte back, with the double-buffered receive
    /// register: `received` stays valid until the next exchange completes
    #[derive(Default)]
    struct LoopbackPort {
        shifting: Option<u8>,
        receive_register: u8,
        ops: Vec<Op>,
    }

    impl ShiftRegister for LoopbackPort {
        fn configure(&mut self, mode: Mode, bit_order: BitOrder, divider: ClockDivider) {
            self.ops.push(Op::Configure(mode, bit_order, divider));
        }

        fn load(&mut self, value: u8) {
            assert!(
                self.shifting.is_none(),
                "loaded while an exchange was in flight"
            );
            self.shifting = Some(value);
            self.ops.push(Op::Load(value));
        }

        fn wait(&mut self) {
            let value = self.shifting.take().expect("waited with nothing loaded");
            self.receive_register = value;
            self.ops.push(Op::Wait);
        }

        fn received(&mut self) -> u8 {
            self.ops.push(Op::Received);
            self.receive_register
        }
    }

    #[test]
    fn configure_derives_divider_from_request() {
        let mut spi = HardwareSpi::new(LoopbackPort::default(), 16_000_000);
        spi.configure(&BusConfig {
            frequency: 4_000_000,
            mode: Mode::Mode0,
            bit_order: BitOrder::MsbFirst,
        });
        assert_eq!(
            spi.into_port().ops,
            [Op::Configure(Mode::Mode0, BitOrder::MsbFirst, ClockDivider::Div4)]
        );
    }

    #[test]
    fn single_byte_loopback() {
        let mut spi = HardwareSpi::new(LoopbackPort::default(), 16_000_000);
        assert_eq!(spi.transfer_byte(0xA5), 0xA5);
        assert_eq!(
            spi.into_port().ops,
            [Op::Load(0xA5), Op::Wait, Op::Received]
        );
    }

    #[test]
    fn block_write_never_reads_back() {
        let mut spi = HardwareSpi::new(LoopbackPort::default(), 16_000_000);
        spi.write(&[1, 2, 3]);
        assert_eq!(
            spi.into_port().ops,
            [
                Op::Load(1),
                Op::Wait,
                Op::Load(2),
                Op::Wait,
                Op::Load(3),
                Op::Wait,
            ]
        );
    }

    #[test]
    fn block_read_loads_ahead_of_collecting() {
        let mut spi = HardwareSpi::new(LoopbackPort::default(), 16_000_000);
        let mut buf = [0xEEu8; 3];
        spi.read(&mut buf);
        assert_eq!(buf, [0, 0, 0]);
        assert_eq!(
            spi.into_port().ops,
            [
                Op::Load(0),
                Op::Wait,
                // Next byte in flight before the previous is collected
                Op::Load(0),
                Op::Received,
                Op::Wait,
                Op::Load(0),
                Op::Received,
                Op::Wait,
                Op::Received,
            ]
        );
    }

    #[test]
    fn block_transfer_round_trips() {
        let mut spi = HardwareSpi::new(LoopbackPort::default(), 16_000_000);
        let mut read = [0u8; 4];
        spi.transfer(&mut read, &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(read, [0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn empty_blocks_are_no_ops() {
        let mut spi = HardwareSpi::new(LoopbackPort::default(), 16_000_000);
        spi.write(&[]);
        spi.read(&mut []);
        spi.transfer(&mut [], &[]);
        assert!(spi.into_port().ops.is_empty());
    }
}
