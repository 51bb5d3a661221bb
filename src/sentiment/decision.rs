//! Threshold decision
//!
//! The last stage of the pipeline. A tally whose positive side leads by more than the
//! threshold is happy, one whose negative side leads by more than the threshold is sad, and
//! everything else is neutral. A non-finite tally cannot be ranked and is neutral as well,
//! so the pipeline never produces anything outside the three labels.

use crate::sentiment::label::SentimentLabel;
use crate::sentiment::tally::ScoreTally;

/// Default margin one side of the tally needs over the other
pub const DEFAULT_DECISION_THRESHOLD: f64 = 0.3;

pub fn decide(tally: &ScoreTally, threshold: f64) -> SentimentLabel {
    if !tally.difference().is_finite() {
        return SentimentLabel::Neutral;
    }

    if tally.positive - tally.negative > threshold {
        SentimentLabel::Happy
    } else if tally.negative - tally.positive > threshold {
        SentimentLabel::Sad
    } else {
        SentimentLabel::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(positive: f64, negative: f64) -> SentimentLabel {
        decide(
            &ScoreTally::new(positive, negative),
            DEFAULT_DECISION_THRESHOLD,
        )
    }

    #[test]
    fn test_clear_margins() {
        assert_eq!(label(1.0, 0.0), SentimentLabel::Happy);
        assert_eq!(label(0.0, 1.2), SentimentLabel::Sad);
    }

    #[test]
    fn test_within_threshold_is_neutral() {
        assert_eq!(label(0.0, 0.0), SentimentLabel::Neutral);
        assert_eq!(label(0.2, 0.0), SentimentLabel::Neutral);
        assert_eq!(label(2.0, 2.2), SentimentLabel::Neutral);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(label(0.3, 0.0), SentimentLabel::Neutral);
        assert_eq!(label(0.0, 0.3), SentimentLabel::Neutral);
        assert_eq!(label(0.5, 0.25), SentimentLabel::Neutral);
        assert_eq!(label(0.25, 0.5), SentimentLabel::Neutral);
    }

    #[test]
    fn test_just_over_threshold() {
        assert_eq!(label(0.31, 0.0), SentimentLabel::Happy);
        assert_eq!(label(0.0, 0.31), SentimentLabel::Sad);
    }

    #[test]
    fn test_non_finite_tally_is_neutral() {
        assert_eq!(label(f64::INFINITY, f64::INFINITY), SentimentLabel::Neutral);
        assert_eq!(label(f64::NAN, 0.0), SentimentLabel::Neutral);
        assert_eq!(label(f64::INFINITY, 0.0), SentimentLabel::Neutral);
    }
}
