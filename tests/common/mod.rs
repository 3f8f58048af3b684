#![allow(dead_code)]

use std::cell::RefCell;

use embedded_hal::{
    delay::DelayNs,
    i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation},
};
use embedded_hal_mock::eh1::i2c::Transaction as I2cTransaction;
use lcd1602_i2c::scan::{FIRST_ADDRESS, LAST_ADDRESS};

pub const ADDR: u8 = 0x27;

/// Something that happened on the bus or the delayer, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Write(u8),
    DelayNs(u32),
}

/// A bus with a single device that logs every byte written to it.
///
/// Like several real HALs it refuses empty writes before touching the bus.
pub struct RecordingBus<'l> {
    pub log: &'l RefCell<Vec<Event>>,
    pub device: u8,
}

impl ErrorType for RecordingBus<'_> {
    type Error = ErrorKind;
}

impl I2c for RecordingBus<'_> {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let empty_write = operations
            .iter()
            .any(|op| matches!(op, Operation::Write(bytes) if bytes.is_empty()));
        if empty_write {
            return Err(ErrorKind::Other);
        }

        if address != self.device {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }

        for op in operations {
            match op {
                Operation::Write(bytes) => bytes
                    .iter()
                    .for_each(|&b| self.log.borrow_mut().push(Event::Write(b))),
                // pins idle high on the PCF8574
                Operation::Read(buf) => buf.fill(0xFF),
            }
        }
        Ok(())
    }
}

/// A delayer that logs instead of sleeping
pub struct RecordingDelay<'l> {
    pub log: &'l RefCell<Vec<Event>>,
}

impl DelayNs for RecordingDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayNs(ns));
    }
}

pub const fn ms(ms: u32) -> Event {
    Event::DelayNs(ms * 1_000_000)
}

/// Expected events for one byte, `control` is 0x0C for commands and 0x0D for data
pub fn framed_events(byte: u8, control: u8) -> Vec<Event> {
    [byte & 0xF0, (byte & 0x0F) << 4]
        .iter()
        .flat_map(|n| {
            [
                Event::Write(n | control),
                ms(2),
                Event::Write((n | control) & 0xFB),
            ]
        })
        .collect()
}

/// Scan probes answered only by the addresses in `present`
pub fn probes(present: &[u8]) -> Vec<I2cTransaction> {
    (FIRST_ADDRESS..=LAST_ADDRESS)
        .map(|addr| {
            let probe = I2cTransaction::read(addr, vec![0]);
            if present.contains(&addr) {
                probe
            } else {
                probe.with_error(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))
            }
        })
        .collect()
}

/// The four writes of one framed command
pub fn command(addr: u8, byte: u8) -> Vec<I2cTransaction> {
    [byte & 0xF0, (byte & 0x0F) << 4]
        .iter()
        .flat_map(|n| {
            [
                I2cTransaction::write(addr, vec![n | 0x0C]),
                I2cTransaction::write(addr, vec![n | 0x08]),
            ]
        })
        .collect()
}

/// Every write of the power-on sequence after the scan
pub fn power_on(addr: u8) -> Vec<I2cTransaction> {
    let mut seq: Vec<I2cTransaction> = [0x33, 0x32, 0x28, 0x0C, 0x01]
        .into_iter()
        .flat_map(|cmd| command(addr, cmd))
        .collect();
    seq.push(I2cTransaction::write(addr, vec![0x08]));
    seq
}
