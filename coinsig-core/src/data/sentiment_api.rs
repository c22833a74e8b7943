//! Sentiment model clients.
//!
//! `HttpSentimentModel` talks to a hosted text-classification inference
//! endpoint (Hugging Face style: POST `{"inputs": text}`, response
//! `[[{"label": ..., "score": ...}]]`). The model instance is constructed
//! explicitly by the caller and injected wherever sentiment is needed —
//! there is no global pipeline.

use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use super::provider::{DataError, SentimentModel};
use crate::domain::{SentimentLabel, SentimentObservation};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ScoredLabel {
    label: String,
    score: f64,
}

/// Client for a hosted sentiment-analysis endpoint.
pub struct HttpSentimentModel {
    client: reqwest::blocking::Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpSentimentModel {
    pub fn new(endpoint: impl Into<String>, token: Option<String>) -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DataError::Network(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token,
        })
    }
}

impl SentimentModel for HttpSentimentModel {
    fn name(&self) -> &str {
        &self.endpoint
    }

    fn analyze(&self, text: &str) -> Result<SentimentObservation, DataError> {
        let mut request = self.client.post(&self.endpoint).json(&json!({
            "inputs": text,
            "options": {"wait_for_model": true},
        }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let resp = request.send().map_err(|e| DataError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DataError::HttpStatus {
                status: resp.status().as_u16(),
                endpoint: self.endpoint.clone(),
            });
        }

        let scored: Vec<Vec<ScoredLabel>> = resp
            .json()
            .map_err(|e| DataError::ResponseFormatChanged(e.to_string()))?;
        let candidates = scored
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("empty result array".into()))?;
        let best = candidates
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or_else(|| DataError::ResponseFormatChanged("no scored labels".into()))?;

        observation_from_scored(text, best)
    }
}

fn observation_from_scored(text: &str, scored: ScoredLabel) -> Result<SentimentObservation, DataError> {
    let label = match scored.label.as_str() {
        "POSITIVE" => SentimentLabel::Positive,
        "NEGATIVE" => SentimentLabel::Negative,
        other => {
            return Err(DataError::ResponseFormatChanged(format!(
                "unknown sentiment label: {other:?}"
            )))
        }
    };
    if !(0.0..=1.0).contains(&scored.score) {
        return Err(DataError::ResponseFormatChanged(format!(
            "score out of range: {}",
            scored.score
        )));
    }
    Ok(SentimentObservation::new(text, label, scored.score))
}

/// Fixed-output model for offline runs and tests.
///
/// Plays the role the synthetic candle generator plays on the market side.
#[derive(Debug, Clone, Copy)]
pub struct StaticSentimentModel {
    pub label: SentimentLabel,
    pub confidence: f64,
}

impl SentimentModel for StaticSentimentModel {
    fn name(&self) -> &str {
        "static"
    }

    fn analyze(&self, text: &str) -> Result<SentimentObservation, DataError> {
        Ok(SentimentObservation::new(text, self.label, self.confidence))
    }
}
