//! The [`CharacterDisplay`] driver

use core::fmt;

use embedded_hal::{
    delay::DelayNs,
    i2c::{I2c, SevenBitAddress},
};

use crate::{
    command::{cursor_command, CommandSet},
    error::Error,
    expander::{frames, Pin, RegisterSelection, BACKLIGHT_ONLY},
    utils::BitOps,
};

mod init;

pub use init::{Config, EXPECTED_ADDRESS, MODE_SETTLE_MS};

/// How long EN stays high before it is dropped to latch a nibble
pub const ENABLE_PULSE_MS: u32 = 2;

/// A 16x2 LCD behind a PCF8574 expander.
///
/// Every operation is a fixed sequence of single byte writes to the expander,
/// nothing is read back from the controller.
pub struct CharacterDisplay<'a, 'b, I2C, Delayer>
where
    I2C: I2c<SevenBitAddress>,
    Delayer: DelayNs,
{
    i2c: &'a mut I2C,
    delayer: &'b mut Delayer,
    address: u8,
}

impl<'a, 'b, I2C, Delayer> CharacterDisplay<'a, 'b, I2C, Delayer>
where
    I2C: I2c<SevenBitAddress>,
    Delayer: DelayNs,
{
    /// The expander address resolved at construction
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Write one register byte to the expander, with the backlight line forced on
    pub fn write_word(&mut self, word: u8) -> Result<(), Error<I2C::Error>> {
        let word = word.set_pin(Pin::Backlight);

        #[cfg(feature = "defmt")]
        defmt::trace!("lcd1602: write {=u8:#x} to {=u8:#x}", word, self.address);

        self.i2c
            .write(self.address, &[word])
            .map_err(Error::Transport)
    }

    /// Send an instruction, as two EN pulsed nibbles with RS low
    pub fn send_command(&mut self, command: impl Into<u8>) -> Result<(), Error<I2C::Error>> {
        self.send(command.into(), RegisterSelection::Command)
    }

    /// Send a byte to character RAM, as two EN pulsed nibbles with RS high
    pub fn send_data(&mut self, byte: u8) -> Result<(), Error<I2C::Error>> {
        self.send(byte, RegisterSelection::Data)
    }

    fn send(&mut self, byte: u8, rs: RegisterSelection) -> Result<(), Error<I2C::Error>> {
        for frame in frames(byte, rs) {
            self.write_word(frame.enable_high)?;
            self.delayer.delay_ms(ENABLE_PULSE_MS);
            self.write_word(frame.enable_low)?;
        }
        Ok(())
    }

    /// Blank the display and home the cursor
    pub fn clear_screen(&mut self) -> Result<(), Error<I2C::Error>> {
        self.send_command(CommandSet::ClearDisplay)
    }

    /// Drive only the backlight line.
    ///
    /// This is a raw expander write, the controller sees no EN pulse.
    pub fn enable_backlight(&mut self) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[BACKLIGHT_ONLY])
            .map_err(Error::Transport)
    }

    /// Move the cursor to `(col, row)`, saturating into `0..=15` and `0..=1`
    pub fn move_cursor(&mut self, col: i32, row: i32) -> Result<(), Error<I2C::Error>> {
        self.send_command(cursor_command(col, row))
    }

    /// Move the cursor, then write `text` from there
    pub fn write_letter_at(
        &mut self,
        col: i32,
        row: i32,
        text: &str,
    ) -> Result<(), Error<I2C::Error>> {
        self.move_cursor(col, row)?;
        text.chars().try_for_each(|ch| self.send_data(ch as u8))
    }

    /// Write `text` at the current cursor.
    ///
    /// A `'\n'` jumps to the start of the second line. Nothing wraps or scrolls,
    /// and each character is sent as the low byte of its code point.
    pub fn write_message(&mut self, text: &str) -> Result<(), Error<I2C::Error>> {
        text.chars().try_for_each(|ch| match ch {
            '\n' => self.send_command(CommandSet::NextLine),
            _ => self.send_data(ch as u8),
        })
    }
}

impl<'a, 'b, I2C, Delayer> fmt::Write for CharacterDisplay<'a, 'b, I2C, Delayer>
where
    I2C: I2c<SevenBitAddress>,
    Delayer: DelayNs,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_message(s).map_err(|_| fmt::Error)
    }
}
