//! Speed policy - gravity interval as a pure function of score
//!
//! The interval is a step function: every `SPEED_SCORE_STEP` points shave
//! `DROP_STEP_MS` off the base interval, clamped at a floor. Pure so it is
//! testable without running a tick loop.

use crate::types::{BASE_DROP_MS, DROP_FLOOR_MS, DROP_STEP_MS, SPEED_SCORE_STEP};

/// Gravity interval in milliseconds for a given score.
///
/// Monotonically non-increasing in score; never below `DROP_FLOOR_MS`.
pub fn drop_interval_ms(score: u32) -> u32 {
    let steps = score / SPEED_SCORE_STEP;
    BASE_DROP_MS
        .saturating_sub(steps.saturating_mul(DROP_STEP_MS))
        .max(DROP_FLOOR_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_interval_below_threshold() {
        assert_eq!(drop_interval_ms(0), BASE_DROP_MS);
        assert_eq!(drop_interval_ms(9), BASE_DROP_MS);
    }

    #[test]
    fn test_faster_after_first_threshold() {
        assert!(drop_interval_ms(10) < drop_interval_ms(0));
        assert_eq!(drop_interval_ms(10), BASE_DROP_MS - DROP_STEP_MS);
        assert_eq!(drop_interval_ms(19), BASE_DROP_MS - DROP_STEP_MS);
    }

    #[test]
    fn test_monotonically_non_increasing() {
        let mut prev = drop_interval_ms(0);
        for score in 1..500 {
            let interval = drop_interval_ms(score);
            assert!(interval <= prev, "interval rose at score {score}");
            prev = interval;
        }
    }

    #[test]
    fn test_clamped_at_floor() {
        assert_eq!(drop_interval_ms(10_000), DROP_FLOOR_MS);
    }
}
