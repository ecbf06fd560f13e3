//! ADC code to output scaling.
//!
//! Two policies, one per demo:
//! - [`duty_split`] turns a code into complementary PWM duty cycles for two
//!   LEDs (one brightens as the other dims)
//! - [`quantize_3bit`] is a lossy 12-bit to 3-bit quantizer for the binary
//!   LED display

/// Highest code a 12-bit conversion can produce.
pub const ADC_MAX_CODE: u16 = 4095;

/// Splits a sampled code into complementary duty cycles over `period`
/// timer ticks.
///
/// The first duty is `raw * period / max_code` with rounded division, the
/// second is its complement, so the two always sum to exactly `period` and
/// the first is monotonically non-decreasing in `raw`. Codes above
/// `max_code` are clamped.
pub fn duty_split(raw: u16, max_code: u16, period: u16) -> (u16, u16) {
    debug_assert!(max_code > 0);
    let raw = raw.min(max_code) as u32;
    let max_code = max_code as u32;
    let duty1 = ((raw * period as u32 + max_code / 2) / max_code) as u16;
    (duty1, period - duty1)
}

/// Quantizes a sampled code to a 3-bit level in `[0, 7]`.
///
/// The division floors, never rounds; that is what defines the bucket
/// boundaries. Only `raw == max_code` reaches level 7.
pub fn quantize_3bit(raw: u16, max_code: u16) -> u8 {
    debug_assert!(max_code > 0);
    let raw = raw.min(max_code) as u32;
    (raw * 7 / max_code as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: u16 = 999;

    #[test]
    fn duties_always_sum_to_the_period() {
        for raw in 0..=ADC_MAX_CODE {
            let (duty1, duty2) = duty_split(raw, ADC_MAX_CODE, PERIOD);
            assert_eq!(duty1 + duty2, PERIOD, "raw = {raw}");
        }
    }

    #[test]
    fn duty_is_monotone_and_spans_the_full_range() {
        let mut previous = 0;
        for raw in 0..=ADC_MAX_CODE {
            let (duty1, _) = duty_split(raw, ADC_MAX_CODE, PERIOD);
            assert!(duty1 >= previous, "raw = {raw}");
            previous = duty1;
        }
        assert_eq!(duty_split(0, ADC_MAX_CODE, PERIOD).0, 0);
        assert_eq!(duty_split(ADC_MAX_CODE, ADC_MAX_CODE, PERIOD).0, PERIOD);
    }

    #[test]
    fn duty_clamps_out_of_range_codes() {
        assert_eq!(
            duty_split(u16::MAX, ADC_MAX_CODE, PERIOD),
            duty_split(ADC_MAX_CODE, ADC_MAX_CODE, PERIOD)
        );
    }

    #[test]
    fn quantizer_boundaries() {
        assert_eq!(quantize_3bit(0, ADC_MAX_CODE), 0);
        assert_eq!(quantize_3bit(2048, ADC_MAX_CODE), 3);
        assert_eq!(quantize_3bit(ADC_MAX_CODE, ADC_MAX_CODE), 7);

        // 4095 / 7 = 585: the first code of level 1. The division must
        // floor, so 584 still maps to level 0.
        assert_eq!(quantize_3bit(584, ADC_MAX_CODE), 0);
        assert_eq!(quantize_3bit(585, ADC_MAX_CODE), 1);
    }

    #[test]
    fn quantizer_is_monotone_and_in_range() {
        let mut previous = 0;
        for raw in 0..=ADC_MAX_CODE {
            let level = quantize_3bit(raw, ADC_MAX_CODE);
            assert!(level <= 7, "raw = {raw}");
            assert!(level >= previous, "raw = {raw}");
            previous = level;
        }
        // Level 7 is reached by the top code alone.
        assert_eq!(quantize_3bit(ADC_MAX_CODE - 1, ADC_MAX_CODE), 6);
    }
}
