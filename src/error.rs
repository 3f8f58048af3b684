//! Driver errors

use core::fmt;

/// Errors reported by [`CharacterDisplay`](crate::lcd::CharacterDisplay),
/// generic over the bus error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The bus scan did not find the configured address.
    /// Only returned while constructing the display.
    DeviceNotFound {
        /// `true` when no device answered at all
        bus_empty: bool,
    },
    /// A bus write failed, the error is passed through unchanged
    Transport(E),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DeviceNotFound { bus_empty: true } => write!(f, "no devices found"),
            Error::DeviceNotFound { bus_empty: false } => {
                write!(f, "device not found at expected address")
            }
            Error::Transport(e) => write!(f, "I2C error: {e:?}"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for Error<E> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Error::DeviceNotFound { bus_empty: true } => defmt::write!(fmt, "No devices found"),
            Error::DeviceNotFound { bus_empty: false } => {
                defmt::write!(fmt, "Device not found at expected address")
            }
            Error::Transport(_e) => defmt::write!(fmt, "I2C error"),
        }
    }
}
