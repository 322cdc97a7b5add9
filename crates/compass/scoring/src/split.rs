//! Percentage splits, margins and dominant poles.

use compass_types::{Axis, Pole};

/// Split two counts into whole percentages that sum to exactly 100.
///
/// The first percentage is `round(first / total * 100)` with halves
/// rounded up, computed in integers; the second is its complement. An
/// axis with no answers splits 50/50.
pub fn percent_split(first: u32, second: u32) -> (u32, u32) {
    let total = u64::from(first) + u64::from(second);
    if total == 0 {
        return (50, 50);
    }
    let first_pct = ((u64::from(first) * 200 + total) / (total * 2)) as u32;
    (first_pct, 100 - first_pct)
}

/// Absolute percentage-point gap between the two poles.
pub fn margin(first_pct: u32, second_pct: u32) -> u32 {
    first_pct.abs_diff(second_pct)
}

/// The pole with the strictly greater count; `tie_break` on equal counts.
pub fn dominant_pole(axis: Axis, first: u32, second: u32, tie_break: Pole) -> Pole {
    debug_assert_eq!(tie_break.axis(), axis);
    match first.cmp(&second) {
        std::cmp::Ordering::Greater => axis.first(),
        std::cmp::Ordering::Less => axis.second(),
        std::cmp::Ordering::Equal => tie_break,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        assert_eq!(percent_split(15, 0), (100, 0));
        assert_eq!(percent_split(0, 15), (0, 100));
        assert_eq!(percent_split(10, 5), (67, 33));
        assert_eq!(percent_split(5, 10), (33, 67));
        assert_eq!(percent_split(7, 7), (50, 50));
    }

    #[test]
    fn test_split_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(percent_split(1, 7), (13, 87));
        // 3/8 = 37.5%
        assert_eq!(percent_split(3, 5), (38, 62));
    }

    #[test]
    fn test_split_empty_axis_defaults() {
        assert_eq!(percent_split(0, 0), (50, 50));
    }

    #[test]
    fn test_complement_never_drifts() {
        // Rounding 1/8 and 7/8 independently would give 13 + 88
        for total in 1..=60u32 {
            for first in 0..=total {
                let (a, b) = percent_split(first, total - first);
                assert_eq!(a + b, 100);
            }
        }
    }

    #[test]
    fn test_margin() {
        assert_eq!(margin(100, 0), 100);
        assert_eq!(margin(33, 67), 34);
        assert_eq!(margin(50, 50), 0);
    }

    #[test]
    fn test_dominant_pole() {
        assert_eq!(dominant_pole(Axis::EI, 9, 6, Pole::I), Pole::E);
        assert_eq!(dominant_pole(Axis::EI, 6, 9, Pole::E), Pole::I);
        assert_eq!(dominant_pole(Axis::SN, 7, 7, Pole::S), Pole::S);
        assert_eq!(dominant_pole(Axis::SN, 7, 7, Pole::N), Pole::N);
    }
}
