//! Common tools

use crate::expander::Pin;

/// Bit ops on a PCF8574 register byte, addressed by the expander [`Pin`] they drive
pub trait BitOps: Sized {
    /// Drive `pin` high
    fn set_pin(self, pin: Pin) -> Self;
    /// Drive `pin` low, leave every other line untouched
    fn clear_pin(self, pin: Pin) -> Self;
}

impl BitOps for u8 {
    fn set_pin(self, pin: Pin) -> Self {
        self | pin.mask()
    }

    fn clear_pin(self, pin: Pin) -> Self {
        self & !pin.mask()
    }
}
