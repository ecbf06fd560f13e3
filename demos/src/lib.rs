#![no_std]

//! Board-side helpers shared by the demo binaries.

pub mod led_bar;
