//! Sentiment observation — the output of an external text-classification model.

use serde::{Deserialize, Serialize};

/// Polarity label emitted by the sentiment model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

/// One scored text input. Stateless: produced once per text, never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentObservation {
    pub text: String,
    pub label: SentimentLabel,
    /// Model confidence in `label`, in [0.0, 1.0].
    pub confidence: f64,
}

impl SentimentObservation {
    pub fn new(text: impl Into<String>, label: SentimentLabel, confidence: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&confidence),
            "confidence must be in [0.0, 1.0]"
        );
        Self {
            text: text.into(),
            label,
            confidence,
        }
    }
}
