//! Fear & Greed Index client (alternative.me).
//!
//! The index is a third-party composite sentiment score for crypto
//! markets, 0 (extreme fear) to 100 (extreme greed). The API serves
//! numbers as strings, so parsing is explicit.

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use std::time::Duration;

use super::provider::DataError;

const FNG_URL: &str = "https://api.alternative.me/fng/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct FngResponse {
    data: Vec<FngEntry>,
}

#[derive(Debug, Deserialize)]
struct FngEntry {
    value: String,
    value_classification: String,
    timestamp: String,
}

/// One reading of the Fear & Greed index.
#[derive(Debug, Clone, PartialEq)]
pub struct FearGreedIndex {
    /// 0 = extreme fear, 100 = extreme greed.
    pub value: u8,
    /// Human-readable bucket, e.g. "Fear", "Greed".
    pub classification: String,
    pub timestamp: DateTime<Utc>,
}

/// Blocking client for the alternative.me Fear & Greed endpoint.
pub struct FearGreedClient {
    client: reqwest::blocking::Client,
    url: String,
}

impl FearGreedClient {
    pub fn new() -> Result<Self, DataError> {
        Self::with_url(FNG_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DataError::Network(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Fetch the latest index reading.
    pub fn latest(&self) -> Result<FearGreedIndex, DataError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| DataError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DataError::HttpStatus {
                status: resp.status().as_u16(),
                endpoint: "/fng/".into(),
            });
        }

        let body: FngResponse = resp
            .json()
            .map_err(|e| DataError::ResponseFormatChanged(e.to_string()))?;
        let entry = body
            .data
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("empty data array".into()))?;
        parse_entry(entry)
    }
}

fn parse_entry(entry: FngEntry) -> Result<FearGreedIndex, DataError> {
    let value: u8 = entry
        .value
        .parse()
        .map_err(|_| DataError::ResponseFormatChanged(format!("bad value: {:?}", entry.value)))?;
    let secs: i64 = entry.timestamp.parse().map_err(|_| {
        DataError::ResponseFormatChanged(format!("bad timestamp: {:?}", entry.timestamp))
    })?;
    let timestamp = Utc
        .timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| DataError::ResponseFormatChanged(format!("bad timestamp: {secs}")))?;
    Ok(FearGreedIndex {
        value,
        classification: entry.value_classification,
        timestamp,
    })
}
