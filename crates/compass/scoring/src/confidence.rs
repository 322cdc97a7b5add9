//! Overall confidence.
//!
//! The overall figure is `50 + mean(margins) / 2`. Because each axis pair
//! sums to 100, this equals the mean percentage of the four dominant
//! poles, and always lies in 50..=100.

use compass_types::{OverallConfidence, PerAxis};

/// Overall confidence computed from the four axis margins.
pub fn overall_confidence(margins: PerAxis<u32>) -> OverallConfidence {
    let sum: u32 = margins.iter().map(|(_, m)| *m).sum();
    let mean = f64::from(sum) / 4.0;
    OverallConfidence::Computed {
        value: 50.0 + mean / 2.0,
    }
}

/// Computed confidence when margins exist, the display fallback otherwise.
pub fn overall_confidence_or_fallback(margins: Option<PerAxis<u32>>) -> OverallConfidence {
    match margins {
        Some(margins) => overall_confidence(margins),
        None => OverallConfidence::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_decisive() {
        let overall = overall_confidence(PerAxis::new(100, 100, 100, 100));
        assert_eq!(overall, OverallConfidence::Computed { value: 100.0 });
    }

    #[test]
    fn test_all_ties() {
        let overall = overall_confidence(PerAxis::new(0, 0, 0, 0));
        assert_eq!(overall.value(), 50.0);
        assert!(overall.is_computed());
    }

    #[test]
    fn test_mixed_margins() {
        // dominant percentages 70, 60, 90, 50 -> mean 67.5
        let overall = overall_confidence(PerAxis::new(40, 20, 80, 0));
        assert_eq!(overall.value(), 67.5);
        assert_eq!(overall.display_percent(), 68);
    }

    #[test]
    fn test_fallback_only_without_margins() {
        let fallback = overall_confidence_or_fallback(None);
        assert_eq!(fallback, OverallConfidence::Fallback);
        assert_eq!(fallback.value(), 75.0);

        // A computed 75 stays distinguishable from the fallback
        let computed = overall_confidence_or_fallback(Some(PerAxis::new(50, 50, 50, 50)));
        assert_eq!(computed.value(), 75.0);
        assert!(computed.is_computed());
    }
}
