use embedded_hal::{
    delay::DelayNs,
    i2c::{I2c, SevenBitAddress},
};

use crate::{command::CommandSet, error::Error, lcd::CharacterDisplay, scan::scan};

/// The address of the PCF8574 backpack this driver expects
pub const EXPECTED_ADDRESS: u8 = 0x27;

/// Settle time after each mode setting command of the power-on sequence
pub const MODE_SETTLE_MS: u32 = 5;

/// [`Config`] is the init config of a [`CharacterDisplay`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    address: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: EXPECTED_ADDRESS,
        }
    }
}

#[allow(missing_docs)]
impl Config {
    pub fn get_address(&self) -> u8 {
        self.address
    }

    pub fn set_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }
}

impl<'a, 'b, I2C, Delayer> CharacterDisplay<'a, 'b, I2C, Delayer>
where
    I2C: I2c<SevenBitAddress>,
    Delayer: DelayNs,
{
    /// Find the expander on an opened bus, and run the power-on sequence.
    ///
    /// Fails with [`Error::DeviceNotFound`] when the scan comes back empty
    /// or without the configured address.
    pub fn new(
        i2c: &'a mut I2C,
        delayer: &'b mut Delayer,
        config: Config,
    ) -> Result<Self, Error<I2C::Error>> {
        let address = config.get_address();
        let found = scan(i2c);

        #[cfg(feature = "defmt")]
        defmt::debug!("lcd1602: {=usize} device(s) on the bus", found.len());

        if found.is_empty() {
            #[cfg(feature = "defmt")]
            defmt::warn!("lcd1602: no devices found");
            return Err(Error::DeviceNotFound { bus_empty: true });
        }

        if !found.contains(address) {
            #[cfg(feature = "defmt")]
            defmt::warn!("lcd1602: device not found with address {=u8:#x}", address);
            return Err(Error::DeviceNotFound { bus_empty: false });
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("lcd1602: using address {=u8:#x}", address);

        let mut lcd = CharacterDisplay {
            i2c,
            delayer,
            address,
        };

        // the controller powers up in 8 bit mode, walk it down to 4 bit
        // before anything else is sent as nibble pairs
        for command in [
            CommandSet::InitEightBit,
            CommandSet::InitFourBit,
            CommandSet::FunctionSet,
            CommandSet::DisplayOnCursorOff,
        ] {
            lcd.send_command(command)?;
            lcd.delayer.delay_ms(MODE_SETTLE_MS);
        }

        lcd.send_command(CommandSet::ClearDisplay)?;

        // set backlight after LCD init
        lcd.enable_backlight()?;

        #[cfg(feature = "defmt")]
        defmt::info!("lcd1602: initialized at {=u8:#x}", address);

        Ok(lcd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_0x27() {
        assert_eq!(Config::default().get_address(), 0x27);
        assert_eq!(Config::default().set_address(0x3F).get_address(), 0x3F);
    }
}
