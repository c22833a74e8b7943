//! Sentiment classifier — maps a scored observation to a trading signal.

use serde::{Deserialize, Serialize};

use crate::domain::{SentimentLabel, SentimentObservation, Signal};

/// Default confidence a label must strictly exceed to act on.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.8;

/// Threshold classifier over sentiment observations.
///
/// Positive with confidence strictly above the threshold → Buy; Negative
/// strictly above → Sell; everything else (including confidence exactly at
/// the threshold) → Hold. Pure and stateless: the same observation always
/// yields the same signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentClassifier {
    pub threshold: f64,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

impl SentimentClassifier {
    pub fn new(threshold: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&threshold),
            "threshold must be in [0.0, 1.0]"
        );
        Self { threshold }
    }

    pub fn classify(&self, observation: &SentimentObservation) -> Signal {
        if observation.confidence > self.threshold {
            match observation.label {
                SentimentLabel::Positive => Signal::Buy,
                SentimentLabel::Negative => Signal::Sell,
            }
        } else {
            Signal::Hold
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(label: SentimentLabel, confidence: f64) -> SentimentObservation {
        SentimentObservation::new("btc chatter", label, confidence)
    }

    #[test]
    fn confident_positive_buys() {
        let classifier = SentimentClassifier::default();
        assert_eq!(
            classifier.classify(&obs(SentimentLabel::Positive, 0.95)),
            Signal::Buy
        );
    }

    #[test]
    fn confident_negative_sells() {
        let classifier = SentimentClassifier::default();
        assert_eq!(
            classifier.classify(&obs(SentimentLabel::Negative, 0.91)),
            Signal::Sell
        );
    }

    #[test]
    fn low_confidence_holds() {
        let classifier = SentimentClassifier::default();
        assert_eq!(
            classifier.classify(&obs(SentimentLabel::Positive, 0.5)),
            Signal::Hold
        );
    }

    #[test]
    fn threshold_is_strict() {
        // Confidence exactly equal to the threshold does not qualify.
        let classifier = SentimentClassifier::new(0.8);
        assert_eq!(
            classifier.classify(&obs(SentimentLabel::Positive, 0.8)),
            Signal::Hold
        );
        assert_eq!(
            classifier.classify(&obs(SentimentLabel::Negative, 0.8)),
            Signal::Hold
        );
    }

    #[test]
    fn classify_is_idempotent() {
        let classifier = SentimentClassifier::default();
        let observation = obs(SentimentLabel::Negative, 0.99);
        let first = classifier.classify(&observation);
        let second = classifier.classify(&observation);
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "threshold must be in [0.0, 1.0]")]
    fn out_of_range_threshold_rejected() {
        SentimentClassifier::new(1.2);
    }
}
