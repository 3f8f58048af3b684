/*!
# LCD 1602 over I2C

Driver for a 16x2 HD44780 character LCD wired to a PCF8574 I2C expander
(the common "I2C backpack"), built on `embedded-hal` 1.0.

Basic Usage:

1. Open the I2C bus with your HAL.
   Any [`embedded_hal::i2c::I2c`] works, the PCF8574 is happy at 400 kHz.

2. Use [`lcd::CharacterDisplay::new()`] to scan the bus for the expander at `0x27`
   and initialize the LCD1602 hardware.

3. Use any methods provided by [`lcd::CharacterDisplay`] to write text.

```ignore
use lcd1602_i2c::lcd::{CharacterDisplay, Config};

let mut lcd = CharacterDisplay::new(&mut i2c, &mut delayer, Config::default())?;
lcd.write_message("hello,\nworld!")?;
lcd.write_letter_at(15, 0, "~")?;
```

Enable the `defmt` feature to log bus activity and format [`error::Error`].
*/

#![no_std]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod expander;
pub mod lcd;
pub mod scan;
pub mod utils;
