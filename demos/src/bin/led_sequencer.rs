//! Demo 2: a 5-step LED chase that a button enables and disables.
//!
//! A 500 ms tick advances a modulo-5 sequencer and lights one LED per
//! step following the chase lookup table. Each confirmed button press
//! toggles the sequencer between running and paused; while paused the LEDs
//! hold whatever step was showing.
//!
//! The button is an EXTI input: instead of sampling it, the button task
//! sleeps until the falling edge fires and lets `async-debounce` require
//! the pin to stay stable before the press counts.

#![no_std]
#![no_main]

use async_debounce::Debouncer;
use defmt::info;
use defmt_rtt as _;
use demo_logic::sequencer::chase_pattern;
use demo_logic::state::SequencerControl;
use demos::led_bar;
use embassy_executor::{Spawner, task};
use embassy_futures::select::{Either, select};
use embassy_stm32::{
    exti::ExtiInput,
    gpio::{Level, Output, Pull, Speed},
};
use embassy_sync::{
    blocking_mutex::raw::ThreadModeRawMutex,
    channel::{Channel, DynamicSender},
};
use embassy_time::{Duration, Ticker};
use embedded_hal_async::digital::Wait;
use panic_probe as _;

/// The possible commands the button task can send.
enum Command {
    /// Toggle between running and paused.
    Toggle,
}

/// The channel used to send commands from the button task to the control
/// task.
static COMMANDS_CHANNEL: Channel<ThreadModeRawMutex, Command, 4> = Channel::new();

/// The period in which the button's value has to stay stable to be
/// considered pressed or released.
const DEBOUNCE_STABLE_PERIOD: Duration = Duration::from_millis(100);

/// Task that waits for a debounced button press and sends a toggle
/// command.
#[task]
async fn toggle_button(
    mut button: Debouncer<ExtiInput<'static>>,
    sender: DynamicSender<'static, Command>,
) {
    loop {
        // Wait for a confirmed button press
        button.wait_for_falling_edge().await.ok();

        sender.send(Command::Toggle).await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let peripherals = embassy_stm32::init(Default::default());
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

    // The button is on PA8 with an external pull up: the pin's value is
    // HIGH when the button is released and LOW when it is pressed, so a
    // press arrives as a falling edge on the EXTI line.
    let button = Debouncer::new(
        ExtiInput::new(peripherals.PA8, peripherals.EXTI8, Pull::None),
        DEBOUNCE_STABLE_PERIOD,
    );

    spawner
        .spawn(toggle_button(button, COMMANDS_CHANNEL.dyn_sender()))
        .unwrap();
    let receiver = COMMANDS_CHANNEL.receiver();

    // The sequencer starts running, matching the original behavior where
    // the chase is active from power-up.
    let mut control = SequencerControl::new(5);

    let mut ticker = Ticker::every(Duration::from_millis(500));

    loop {
        match select(ticker.next(), receiver.receive()).await {
            Either::First(()) => {
                if let Some(index) = control.on_tick() {
                    led_bar::apply(&mut leds, chase_pattern(index));
                }
            }
            Either::Second(Command::Toggle) => {
                let state = control.on_press();
                info!("Sequencer is now {}", state);
            }
        }
    }
}
