//! PCF8574 register layout and 4-bit framing
//!
//! The expander drives the LCD1602 bus with one register byte:
//!
//! ```text
//! P7  P6  P5  P4  P3  P2  P1  P0
//! DB7 DB6 DB5 DB4 BL  EN  RW  RS
//! ```
//!
//! Only the upper data lines are wired, so every 8-bit value reaches the
//! controller as two nibbles, high nibble first. A nibble is latched by the
//! falling edge of EN.

use crate::utils::BitOps;

/// A control line of the expander
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pin {
    /// Low selects the instruction register, high selects data RAM
    RegisterSelect = 0,
    /// Always low, this driver only writes
    ReadWrite = 1,
    /// The controller samples DB4..DB7 on its falling edge
    Enable = 2,
    /// Backlight transistor
    Backlight = 3,
}

impl Pin {
    /// The register bit of this line
    pub const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Register byte with only the backlight line driven
pub const BACKLIGHT_ONLY: u8 = 0x08;

/// Which controller register a byte is meant for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterSelection {
    /// Instruction register
    Command,
    /// Character RAM
    Data,
}

/// The two register bytes that carry one nibble:
/// enable raised, then enable dropped to latch it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NibbleFrame {
    /// Nibble on DB4..DB7 with EN high
    pub enable_high: u8,
    /// Same byte with EN cleared, nothing else changed
    pub enable_low: u8,
}

impl NibbleFrame {
    /// Frame a nibble that already sits in the upper four bits of `nibble`
    pub fn new(nibble: u8, rs: RegisterSelection) -> Self {
        let mut enable_high = (nibble & 0xF0).set_pin(Pin::Enable);
        if rs == RegisterSelection::Data {
            enable_high = enable_high.set_pin(Pin::RegisterSelect);
        }

        Self {
            enable_high,
            enable_low: enable_high.clear_pin(Pin::Enable),
        }
    }
}

/// Split `byte` into its two frames, high nibble first
pub fn frames(byte: u8, rs: RegisterSelection) -> [NibbleFrame; 2] {
    [
        NibbleFrame::new(byte & 0xF0, rs),
        NibbleFrame::new((byte & 0x0F) << 4, rs),
    ]
}
