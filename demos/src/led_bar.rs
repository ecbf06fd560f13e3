//! Drives the three-LED bar from a logical [`LedPattern`].

use demo_logic::sequencer::LedPattern;
use embassy_stm32::gpio::Output;

/// Applies a pattern to the three LEDs, LED1 first.
///
/// The function takes mutable references to the LEDs, as `set_high` and
/// `set_low` require mutable borrows (references). All three pins are
/// written back to back so a pattern is never left partially applied.
pub fn apply(leds: &mut [Output<'_>; 3], pattern: LedPattern) {
    for (index, led) in leds.iter_mut().enumerate() {
        // The LEDs on the lab board are active LOW: they light up when the
        // pin is LOW and turn off when the pin is HIGH.
        if pattern.is_lit(index as u8) {
            led.set_low();
        } else {
            led.set_high();
        }
    }
}
