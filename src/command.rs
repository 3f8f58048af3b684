//! HD44780 instructions used by this driver

/// Number of character columns on the display
pub const COLUMNS: u8 = 16;
/// Number of character rows on the display
pub const ROWS: u8 = 2;

/// DDRAM offset between the first and second line
const LINE_OFFSET: u8 = 0x40;

/// An instruction for the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandSet {
    // these two are not datasheet commands, they are the nibble pairs
    // that walk the controller from its power-on state into 4 bit mode
    /// `0x33`, force 8 bit mode twice
    InitEightBit,
    /// `0x32`, 8 bit mode then 4 bit mode
    InitFourBit,
    /// `0x28`, 4 bit bus, 2 lines, 5x7 dots
    FunctionSet,
    /// `0x0C`, display on, cursor and blink off
    DisplayOnCursorOff,
    /// `0x01`
    ClearDisplay,
    /// Set DDRAM address, the value is masked to 7 bits
    SetDDRAM(u8),
    /// `0xC0`, start of the second line
    NextLine,
}

impl From<CommandSet> for u8 {
    fn from(command: CommandSet) -> Self {
        match command {
            CommandSet::InitEightBit => 0x33,
            CommandSet::InitFourBit => 0x32,
            CommandSet::FunctionSet => 0x28,
            CommandSet::DisplayOnCursorOff => 0x0C,
            CommandSet::ClearDisplay => 0x01,
            CommandSet::SetDDRAM(addr) => 0x80 | (addr & 0x7F),
            CommandSet::NextLine => 0x80 | LINE_OFFSET,
        }
    }
}

/// Clamp a logical position onto the 16x2 grid.
///
/// Values out of range saturate to the nearest edge.
pub fn clamp_position(col: i32, row: i32) -> (u8, u8) {
    (
        col.clamp(0, COLUMNS as i32 - 1) as u8,
        row.clamp(0, ROWS as i32 - 1) as u8,
    )
}

/// The set-DDRAM command for a clamped position
pub fn cursor_command(col: i32, row: i32) -> CommandSet {
    let (col, row) = clamp_position(col, row);
    CommandSet::SetDDRAM(row * LINE_OFFSET + col)
}
