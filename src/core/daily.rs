//! Daily puzzle selection
//!
//! Every calendar day maps to one answer index in [0, 365), derived from the
//! number of whole days elapsed since a fixed epoch. The index is recomputed
//! on every load and changes exactly once per day.

use std::time::{SystemTime, UNIX_EPOCH};

/// Reference instant: 2022-01-23T00:00:00Z, in Unix milliseconds
pub const EPOCH_MS: u64 = 1_642_896_000_000;

/// One day in milliseconds
pub const DAY_MS: u64 = 86_400_000;

/// Size of the answer rotation
pub const NUM_ANSWERS: usize = 365;

/// Answer index for a given instant (Unix milliseconds)
///
/// Pure with respect to the instant; instants before the epoch saturate to
/// index 0 rather than wrapping.
///
/// # Examples
/// ```
/// use lexle::core::daily::{DAY_MS, EPOCH_MS, answer_index_at};
///
/// assert_eq!(answer_index_at(EPOCH_MS), 0);
/// assert_eq!(answer_index_at(EPOCH_MS + DAY_MS), 1);
/// ```
#[must_use]
pub fn answer_index_at(now_ms: u64) -> usize {
    let elapsed = now_ms.saturating_sub(EPOCH_MS);
    ((elapsed / DAY_MS) as usize) % NUM_ANSWERS
}

/// Answer index for the current wall-clock time
#[must_use]
pub fn answer_index() -> usize {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
    answer_index_at(now_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_stable_within_a_day() {
        let midnight = EPOCH_MS + 100 * DAY_MS;
        assert_eq!(answer_index_at(midnight), answer_index_at(midnight + 1));
        assert_eq!(
            answer_index_at(midnight),
            answer_index_at(midnight + DAY_MS - 1)
        );
    }

    #[test]
    fn index_advances_by_one_across_day_boundary() {
        for day in [0u64, 1, 42, 363] {
            let ms = EPOCH_MS + day * DAY_MS + 12 * 3_600_000;
            let next = ms + DAY_MS;
            assert_eq!(
                (answer_index_at(ms) + 1) % NUM_ANSWERS,
                answer_index_at(next)
            );
        }
    }

    #[test]
    fn index_wraps_at_rotation_end() {
        let last = EPOCH_MS + 364 * DAY_MS;
        assert_eq!(answer_index_at(last), 364);
        assert_eq!(answer_index_at(last + DAY_MS), 0);
    }

    #[test]
    fn index_saturates_before_epoch() {
        assert_eq!(answer_index_at(0), 0);
        assert_eq!(answer_index_at(EPOCH_MS - 1), 0);
    }

    #[test]
    fn index_always_in_range() {
        for day in 0..800u64 {
            assert!(answer_index_at(EPOCH_MS + day * DAY_MS) < NUM_ANSWERS);
        }
    }
}
