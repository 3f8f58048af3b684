#![no_std]
#![no_main]

use core::fmt::Write;

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{i2c::I2c, pac, prelude::*};

use lcd1602_i2c::{
    lcd::{CharacterDisplay, Config, EXPECTED_ADDRESS},
    scan::scan,
};

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(12.MHz()).freeze();

    let mut delayer = cp.SYST.delay(&clocks);

    // PB6 is SCL, PB7 is SDA
    let gpiob = dp.GPIOB.split();

    let mut i2c = I2c::new(dp.I2C1, (gpiob.pb6, gpiob.pb7), 400.kHz(), &clocks);

    let found = scan(&mut i2c);
    for addr in found.iter() {
        rprintln!("found device at {:#04x}", addr);
    }

    // fall back to the other common backpack address
    let config = if found.contains(EXPECTED_ADDRESS) {
        Config::default()
    } else {
        Config::default().set_address(0x3F)
    };

    // init LCD1602
    let mut lcd = match CharacterDisplay::new(&mut i2c, &mut delayer, config) {
        Ok(lcd) => lcd,
        Err(e) => panic!("LCD init failed: {}", e),
    };

    lcd.write_message("hello,\nworld!").unwrap();

    // out of range positions stick to the last column
    lcd.write_letter_at(99, 0, "~").unwrap();

    let mut count: u32 = 0;
    loop {
        lcd.move_cursor(8, 1).unwrap();
        write!(lcd, "{:>8}", count).unwrap();
        count = count.wrapping_add(1);
    }
}
