#![cfg_attr(not(test), no_std)]

//! Hardware-independent core of the demo firmware.
//!
//! The demo binaries in the `demos` crate only own peripherals and timing;
//! everything they decide is implemented here, against plain integers and
//! booleans, so it can be unit tested on the host:
//!
//! - [`button`]: a sampled [`Debouncer`] that turns a noisy raw pin value
//!   into confirmed press/release events
//! - [`sequencer`]: the modulo [`Sequencer`] and the LED lookup patterns it
//!   drives
//! - [`scale`]: ADC-code-to-output scaling (complementary PWM duty split and
//!   3-bit binary quantization)
//! - [`state`]: the run-state dispatch machines tying ticks and button
//!   events together

pub mod button;
pub mod scale;
pub mod sequencer;
pub mod state;

pub use button::{ButtonEvent, Debouncer};
pub use scale::{ADC_MAX_CODE, duty_split, quantize_3bit};
pub use sequencer::{LedPattern, Sequencer, binary_pattern, chase_pattern};
pub use state::{AnalogMonitor, RunState, SequencerControl};
