//! Sampled button debouncing.
//!
//! Due to their mechanical construction, when pressed or released, buttons
//! generate voltage fluctuations that a GPIO pin might register as several
//! presses and releases. The [`Debouncer`] here is fed the raw pin value at
//! a fixed sampling cadence and only commits a logical state change after
//! the value has stayed stable for a full window of samples, so a floating
//! or noisy pin can never toggle the output more than once per genuine
//! press.

/// A confirmed button edge reported by [`Debouncer::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// The debounced state changed from released to pressed.
    Pressed,
    /// The debounced state changed from pressed to released.
    Released,
}

/// Debounces a button sampled at a fixed cadence.
///
/// Call [`update`](Self::update) once per sampling period with the raw
/// logical value of the pin (`true` = pressed). The debouncer commits a new
/// state only after `required` consecutive samples of the new value, and
/// then discards the next `ignore` samples so contact bounce right after an
/// accepted edge cannot retrigger.
///
/// With a 10 ms sampling period, `Debouncer::new(5, 10)` gives a 50 ms
/// stable window and a 100 ms ignore window.
pub struct Debouncer {
    debounced: bool,
    stable: u8,
    required: u8,
    ignore_left: u8,
    ignore: u8,
}

impl Debouncer {
    /// Creates a debouncer that starts in the released state.
    ///
    /// `required` is the number of consecutive samples a new value must
    /// hold before it is committed (must be at least 1); `ignore` is the
    /// number of samples discarded after each accepted edge.
    pub fn new(required: u8, ignore: u8) -> Self {
        assert!(required > 0, "stable window must be at least one sample");
        Self {
            debounced: false,
            stable: 0,
            required,
            ignore_left: 0,
            ignore,
        }
    }

    /// Feeds one raw sample and returns the edge it confirmed, if any.
    ///
    /// While the button is held, at most one [`ButtonEvent::Pressed`] is
    /// ever emitted; the next event can only be the matching release.
    pub fn update(&mut self, pressed: bool) -> Option<ButtonEvent> {
        if self.ignore_left > 0 {
            self.ignore_left -= 1;
            return None;
        }

        if pressed == self.debounced {
            // A glitch shorter than the stable window ends up here and
            // resets the run.
            self.stable = 0;
            return None;
        }

        self.stable += 1;
        if self.stable < self.required {
            return None;
        }

        self.debounced = pressed;
        self.stable = 0;
        self.ignore_left = self.ignore;
        Some(if pressed {
            ButtonEvent::Pressed
        } else {
            ButtonEvent::Released
        })
    }

    /// The current debounced state (`true` = pressed).
    pub fn is_pressed(&self) -> bool {
        self.debounced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sustained_press_fires_exactly_once() {
        let mut debouncer = Debouncer::new(5, 0);
        let mut events = 0;
        for _ in 0..20 {
            if debouncer.update(true) == Some(ButtonEvent::Pressed) {
                events += 1;
            }
        }
        assert_eq!(events, 1);
        assert!(debouncer.is_pressed());
    }

    #[test]
    fn press_confirmed_after_full_stable_window() {
        let mut debouncer = Debouncer::new(5, 0);
        for _ in 0..4 {
            assert_eq!(debouncer.update(true), None);
        }
        assert_eq!(debouncer.update(true), Some(ButtonEvent::Pressed));
    }

    #[test]
    fn single_sample_glitch_is_ignored() {
        let mut debouncer = Debouncer::new(5, 0);
        assert_eq!(debouncer.update(true), None);
        assert_eq!(debouncer.update(false), None);
        assert!(!debouncer.is_pressed());

        // The glitch must also have reset the stable run: a following
        // genuine press still needs the full window.
        for _ in 0..4 {
            assert_eq!(debouncer.update(true), None);
        }
        assert_eq!(debouncer.update(true), Some(ButtonEvent::Pressed));
    }

    #[test]
    fn samples_in_ignore_window_are_discarded() {
        let mut debouncer = Debouncer::new(2, 3);
        assert_eq!(debouncer.update(true), None);
        assert_eq!(debouncer.update(true), Some(ButtonEvent::Pressed));

        // Bounce right after the accepted edge: three samples discarded
        // even though they would otherwise form a stable released run.
        for _ in 0..3 {
            assert_eq!(debouncer.update(false), None);
        }
        assert!(debouncer.is_pressed());

        // After the window the release is debounced as usual.
        assert_eq!(debouncer.update(false), None);
        assert_eq!(debouncer.update(false), Some(ButtonEvent::Released));
    }

    #[test]
    fn release_then_press_fires_again() {
        let mut debouncer = Debouncer::new(2, 0);
        assert_eq!(debouncer.update(true), None);
        assert_eq!(debouncer.update(true), Some(ButtonEvent::Pressed));
        assert_eq!(debouncer.update(false), None);
        assert_eq!(debouncer.update(false), Some(ButtonEvent::Released));
        assert_eq!(debouncer.update(true), None);
        assert_eq!(debouncer.update(true), Some(ButtonEvent::Pressed));
    }
}
