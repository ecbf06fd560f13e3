//! Demo 4: the potentiometer position shown in binary on the LED bar.
//!
//! A 20 ms tick samples the potentiometer at 12-bit resolution, quantizes
//! the code to a 3-bit level and writes the level's bits to the three
//! LEDs. The quantizer floors, so only the very top code lights all three.

#![no_std]
#![no_main]

use defmt::{debug, info};
use defmt_rtt as _;
use demo_logic::scale::quantize_3bit;
use demo_logic::sequencer::LedPattern;
use demo_logic::state::AnalogMonitor;
use demos::led_bar;
use embassy_executor::Spawner;
use embassy_stm32::{
    adc::{self, Adc, Resolution, SampleTime},
    gpio::{Level, Output, Speed},
};
use embassy_time::{Duration, Ticker};
use panic_probe as _;

/// The maximum code of a 12-bit conversion (4095).
const MAX_CODE: u16 = adc::resolution_to_max_count(Resolution::BITS12) as u16;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let mut peripherals = embassy_stm32::init(Default::default());
    info!("Device started");

    // The LEDs on the lab board are active LOW: they light up when the pin
    // is LOW and turn off when the pin is HIGH. We set the initial value of
    // the pins to HIGH so that the LEDs are turned off when the pins are
    // setup. LED1 is on D8 (PC7), LED2 on D9 (PC6), LED3 on D10 (PC9).
    let mut leds = [
        Output::new(peripherals.PC7, Level::High, Speed::Low),
        Output::new(peripherals.PC6, Level::High, Speed::Low),
        Output::new(peripherals.PC9, Level::High, Speed::Low),
    ];

    // The potentiometer is connected to A0 (PA0), ADC1's Channel 5.
    let mut adc1 = Adc::new(peripherals.ADC1);
    adc1.set_resolution(Resolution::BITS12);
    adc1.set_sample_time(SampleTime::CYCLES160_5);

    let mut monitor = AnalogMonitor::new();

    // The sampling cadence that the original drove from a hardware timer
    // interrupt.
    let mut ticker = Ticker::every(Duration::from_millis(20));

    loop {
        ticker.next().await;

        // Read channel 5 (pin PA0)
        let conversion = Some(adc1.blocking_read(&mut peripherals.PA0));

        // A conversion that did not complete returns `None` from the
        // monitor: that cycle is skipped and the LEDs hold their last
        // level.
        if let Some(raw) = monitor.on_sample(conversion) {
            let level = quantize_3bit(raw, MAX_CODE);
            led_bar::apply(&mut leds, LedPattern::binary(level));

            debug!("code {} -> level {}", raw, level);
        }
    }
}
