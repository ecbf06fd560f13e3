//! Run-state dispatch: the machines that tie ticks and button events
//! together.
//!
//! The original demos kept bare booleans (`isPaused`, `counterEnabled`) and
//! flipped them from interrupt context. Here the state is an explicit
//! [`RunState`] owned by one control task; button tasks only send it
//! events, so every transition is exhaustive and testable.

use crate::sequencer::Sequencer;

/// Whether periodic advancement is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunState {
    /// Ticks advance the sequencer and update the outputs.
    Running,
    /// Ticks are ignored; outputs hold their last value.
    Paused,
}

impl RunState {
    /// The other state. Toggling twice restores the original state.
    pub fn toggled(self) -> Self {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }
}

/// A [`Sequencer`] gated by a [`RunState`].
///
/// Feed it the two event streams of a demo: periodic ticks through
/// [`on_tick`](Self::on_tick) and confirmed button presses through
/// [`on_press`](Self::on_press).
pub struct SequencerControl {
    run: RunState,
    seq: Sequencer,
}

impl SequencerControl {
    /// Creates a control starting at index 0 in [`RunState::Running`].
    pub fn new(modulus: u8) -> Self {
        Self {
            run: RunState::Running,
            seq: Sequencer::new(modulus),
        }
    }

    /// Handles one periodic tick.
    ///
    /// Returns the new index when running; returns `None` when paused, in
    /// which case the caller must leave its outputs untouched.
    pub fn on_tick(&mut self) -> Option<u8> {
        match self.run {
            RunState::Running => Some(self.seq.advance()),
            RunState::Paused => None,
        }
    }

    /// Handles one confirmed button press and returns the new run state.
    pub fn on_press(&mut self) -> RunState {
        self.run = self.run.toggled();
        self.run
    }

    /// The current run state.
    pub fn run_state(&self) -> RunState {
        self.run
    }

    /// The current sequencer index.
    pub fn index(&self) -> u8 {
        self.seq.index()
    }
}

/// Tracks the most recent completed ADC conversion.
///
/// A conversion that timed out is passed in as `None`: the monitor keeps
/// its previous code and tells the caller to skip this cycle's output
/// update, so a failed conversion degrades to a held output instead of a
/// crash.
#[derive(Default)]
pub struct AnalogMonitor {
    latest: u16,
}

impl AnalogMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one conversion attempt.
    ///
    /// Returns the fresh code when the conversion completed, `None` when it
    /// timed out.
    pub fn on_sample(&mut self, conversion: Option<u16>) -> Option<u16> {
        if let Some(raw) = conversion {
            self.latest = raw;
        }
        conversion
    }

    /// The last completed conversion (0 before the first one).
    pub fn latest(&self) -> u16 {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::{binary_pattern, chase_pattern};

    #[test]
    fn toggle_is_its_own_inverse() {
        assert_eq!(RunState::Running.toggled().toggled(), RunState::Running);
        assert_eq!(RunState::Paused.toggled().toggled(), RunState::Paused);
    }

    #[test]
    fn five_ticks_mod_8_show_binary_101() {
        let mut control = SequencerControl::new(8);
        let mut index = 0;
        for _ in 0..5 {
            index = control.on_tick().unwrap();
        }
        assert_eq!(index, 5);

        let pattern = binary_pattern(index);
        assert!(pattern.is_lit(0));
        assert!(!pattern.is_lit(1));
        assert!(pattern.is_lit(2));
    }

    #[test]
    fn seven_ticks_mod_5_light_led3_only() {
        let mut control = SequencerControl::new(5);
        let mut index = 0;
        for _ in 0..7 {
            index = control.on_tick().unwrap();
        }
        assert_eq!(index, 2);

        let pattern = chase_pattern(index);
        assert!(!pattern.is_lit(0));
        assert!(!pattern.is_lit(1));
        assert!(pattern.is_lit(2));
    }

    #[test]
    fn paused_ticks_change_nothing() {
        let mut control = SequencerControl::new(8);
        control.on_tick();
        control.on_tick();
        assert_eq!(control.run_state(), RunState::Running);
        assert_eq!(control.on_press(), RunState::Paused);
        assert_eq!(control.run_state(), RunState::Paused);

        for _ in 0..10 {
            assert_eq!(control.on_tick(), None);
            assert_eq!(control.index(), 2);
        }
    }

    #[test]
    fn two_presses_resume_where_paused() {
        let mut control = SequencerControl::new(8);
        control.on_tick();
        control.on_press();
        control.on_tick();
        assert_eq!(control.on_press(), RunState::Running);
        assert_eq!(control.on_tick(), Some(2));
    }

    #[test]
    fn stale_cycle_leaves_the_display_pattern_unchanged() {
        use crate::scale::{ADC_MAX_CODE, quantize_3bit};
        use crate::sequencer::LedPattern;

        // The binary-display update path: quantize a fresh code, hold the
        // pattern on a timed-out conversion.
        let mut monitor = AnalogMonitor::new();
        let mut pattern = LedPattern::OFF;

        if let Some(raw) = monitor.on_sample(Some(2048)) {
            pattern = LedPattern::binary(quantize_3bit(raw, ADC_MAX_CODE));
        }
        assert_eq!(pattern.bits(), 0b011);

        // A timed-out conversion must not touch the pattern.
        if let Some(raw) = monitor.on_sample(None) {
            pattern = LedPattern::binary(quantize_3bit(raw, ADC_MAX_CODE));
        }
        assert_eq!(pattern.bits(), 0b011);
        assert_eq!(monitor.latest(), 2048);
    }

    #[test]
    fn timed_out_conversion_holds_the_last_code() {
        let mut monitor = AnalogMonitor::new();
        assert_eq!(monitor.on_sample(Some(1234)), Some(1234));
        assert_eq!(monitor.on_sample(None), None);
        assert_eq!(monitor.latest(), 1234);
        assert_eq!(monitor.on_sample(Some(42)), Some(42));
        assert_eq!(monitor.latest(), 42);
    }
}
