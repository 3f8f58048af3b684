//! Bus probing

use embedded_hal::i2c::{I2c, SevenBitAddress};

/// Lowest address a device may use, 0x00..=0x07 are reserved
pub const FIRST_ADDRESS: u8 = 0x08;
/// Highest address a device may use, 0x78..=0x7F are reserved
pub const LAST_ADDRESS: u8 = 0x77;

/// A set of 7-bit I2C addresses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddressSet(u128);

impl AddressSet {
    /// An empty set
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add `address`, the eighth bit is ignored
    pub fn insert(&mut self, address: u8) {
        self.0 |= 1u128 << (address & 0x7F);
    }

    #[allow(missing_docs)]
    pub fn contains(&self, address: u8) -> bool {
        address <= 0x7F && self.0 & (1u128 << address) != 0
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Addresses in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=0x7F).filter(move |&addr| self.contains(addr))
    }
}

impl FromIterator<u8> for AddressSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = AddressSet::new();
        iter.into_iter().for_each(|addr| set.insert(addr));
        set
    }
}

/// Probe every usable address with a one byte read.
///
/// A read only samples the PCF8574 port, its outputs keep driving the LCD.
/// Empty writes are avoided since several HALs refuse a zero length buffer.
/// An acknowledged probe counts as a responding device, any bus error
/// (usually a NACK) counts as absent.
pub fn scan<I2C>(i2c: &mut I2C) -> AddressSet
where
    I2C: I2c<SevenBitAddress>,
{
    (FIRST_ADDRESS..=LAST_ADDRESS)
        .filter(|&addr| i2c.read(addr, &mut [0u8]).is_ok())
        .collect()
}
