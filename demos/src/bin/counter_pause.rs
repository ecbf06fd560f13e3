//! Demo 1: a 3-bit binary LED counter that a button pauses and resumes.
//!
//! The counter advances once per second and shows its low 3 bits on the
//! LED bar. Each confirmed button press toggles between running and
//! paused; while paused the LEDs hold their last value.
//!
//! The button is not read with a blocking debounce delay in the control
//! path. A separate task samples it every 10 ms through the sampled
//! debouncer and only sends a command once a press is confirmed, so the
//! counter cadence is never disturbed by input handling.

#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use demo_logic::button::{ButtonEvent, Debouncer};
use demo_logic::sequencer::binary_pattern;
use demo_logic::state::SequencerControl;
use demos::led_bar;
use embassy_executor::{Spawner, task};
use embassy_futures::select::{Either, select};
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_sync::{
    blocking_mutex::raw::ThreadModeRawMutex,
    channel::{Channel, DynamicSender},
};
use embassy_time::{Duration, Ticker, Timer};
use panic_probe as _;

/// The possible commands the button task can send.
enum Command {
    /// Toggle between running and paused.
    Toggle,
}

/// The channel used to send commands from the button task to the control
/// task.
///
/// The run state is owned by the control task alone; the button task never
/// touches it directly. This is the explicit synchronization that the
/// shared-flag-from-interrupt-context approach lacks.
static COMMANDS_CHANNEL: Channel<ThreadModeRawMutex, Command, 4> = Channel::new();

/// How often the button pin is sampled.
const BUTTON_SAMPLE_PERIOD: Duration = Duration::from_millis(10);

/// Task that samples the button and sends a command on each confirmed
/// press.
#[task]
async fn watch_button(button: Input<'static>, sender: DynamicSender<'static, Command>) {
    // 5 consecutive samples at 10 ms give the 50 ms stable window; the 10
    // samples after an accepted edge (100 ms) are discarded so contact
    // bounce cannot retrigger.
    let mut debouncer = Debouncer::new(5, 10);

    loop {
        Timer::after(BUTTON_SAMPLE_PERIOD).await;

        // The buttons on the lab board have an external pull up resistor
        // (soldered on the lab board): the pin reads LOW while the button
        // is pressed.
        if debouncer.update(button.is_low()) == Some(ButtonEvent::Pressed) {
            sender.send(Command::Toggle).await;
        }
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

    // The button is on PA8 with an external pull up, so the internal pull
    // resistor is not needed.
    let button = Input::new(peripherals.PA8, Pull::None);

    spawner
        .spawn(watch_button(button, COMMANDS_CHANNEL.dyn_sender()))
        .unwrap();
    let receiver = COMMANDS_CHANNEL.receiver();

    // The counter wraps every 8 so the LEDs show exactly its 3 bits.
    let mut control = SequencerControl::new(8);
    led_bar::apply(&mut leds, binary_pattern(control.index()));

    let mut ticker = Ticker::every(Duration::from_secs(1));

    loop {
        match select(ticker.next(), receiver.receive()).await {
            Either::First(()) => {
                // While paused `on_tick` returns `None` and the LEDs are
                // left exactly as they are.
                if let Some(index) = control.on_tick() {
                    led_bar::apply(&mut leds, binary_pattern(index));
                }
            }
            Either::Second(Command::Toggle) => {
                let state = control.on_press();
                info!("Counter is now {}", state);
            }
        }
    }
}
