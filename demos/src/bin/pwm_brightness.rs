//! Demo 3: a potentiometer fades one LED up while the other fades down.
//!
//! The potentiometer is sampled every 10 ms at 12-bit resolution and the
//! code is split into two complementary PWM duty cycles: the two duties
//! always sum to the full period, so turning the knob shifts brightness
//! from one LED to the other without changing the total.

#![no_std]
#![no_main]

use defmt::{debug, info};
use defmt_rtt as _;
use demo_logic::scale::duty_split;
use demo_logic::state::AnalogMonitor;
use embassy_executor::Spawner;
use embassy_stm32::{
    adc::{self, Adc, Averaging, Resolution, SampleTime},
    gpio::OutputType,
    peripherals::TIM2,
    time::khz,
    timer::{
        Ch2, Ch3,
        low_level::OutputPolarity,
        simple_pwm::{PwmPin, SimplePwm},
    },
};
use embassy_time::Timer;
use panic_probe as _;

/// The maximum code of a 12-bit conversion (4095).
const MAX_CODE: u16 = adc::resolution_to_max_count(Resolution::BITS12) as u16;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let mut peripherals = embassy_stm32::init(Default::default());
    info!("Device started");

    // The two PWM LEDs are connected to D3 (PB3) and D6 (PB10).
    //
    // PB3 can be connected for PWM to Channel 2 of TIM 2 and PB10 to
    // Channel 3 of TIM 2. The `PwmPin` sets the correct configuration of
    // the MODER and the Alternate Function of each pin.
    let led_a_pin: PwmPin<'_, TIM2, Ch2> = PwmPin::new(peripherals.PB3, OutputType::PushPull);
    let led_b_pin: PwmPin<'_, TIM2, Ch3> = PwmPin::new(peripherals.PB10, OutputType::PushPull);

    // Enable PWM for TIM2, only Channels 2 and 3 will be used
    let pwm = SimplePwm::new(
        peripherals.TIM2,   // Timer 2 peripheral
        None,               // Channel 1 not used
        Some(led_a_pin),    // Channel 2 output (PB3)
        Some(led_b_pin),    // Channel 3 output (PB10)
        None,               // Channel 4 not used
        khz(1),             // PWM frequency = 1 kHz
        Default::default(), // Default configuration
    );

    // `split` hands out all the channels with one single borrow, so both
    // can be controlled at the same time.
    let channels = pwm.split();
    let mut led_a = channels.ch2;
    let mut led_b = channels.ch3;

    led_a.enable();
    led_b.enable();

    // The LEDs on the lab board are active LOW: they light up when the PWM
    // signal is LOW. We set the polarity to LOW so that the LED is lit
    // during the PWM's duty cycle period.
    led_a.set_polarity(OutputPolarity::ActiveLow);
    led_b.set_polarity(OutputPolarity::ActiveLow);

    // The potentiometer is connected to A0 (PA0), ADC1's Channel 5.
    let mut adc1 = Adc::new(peripherals.ADC1);

    // 12-bit conversions, lightly averaged to steady the wiper reading
    adc1.set_resolution(Resolution::BITS12);
    adc1.set_averaging(Averaging::Samples16);
    adc1.set_sample_time(SampleTime::CYCLES160_5);

    let mut monitor = AnalogMonitor::new();

    loop {
        // Read channel 5 (pin PA0)
        let conversion = Some(adc1.blocking_read(&mut peripherals.PA0));

        // A conversion that did not complete returns `None` from the
        // monitor: that cycle is skipped and both duty cycles keep their
        // prior values.
        if let Some(raw) = monitor.on_sample(conversion) {
            let period = led_a.max_duty_cycle();
            let (duty_a, duty_b) = duty_split(raw, MAX_CODE, period);

            // Both channels are written back to back so the complementary
            // pair is committed as a whole.
            led_a.set_duty_cycle(duty_a);
            led_b.set_duty_cycle(duty_b);

            debug!("code {} -> duty {} / {}", raw, duty_a, duty_b);
        }

        // Sample the potentiometer every 10 ms.
        Timer::after_millis(10).await;
    }
}
