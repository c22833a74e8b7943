//! Data provider traits and structured error types.
//!
//! Traits abstract over the concrete HTTP clients so the pipeline can be
//! fed from a mock in tests. Retries for transient failures belong to the
//! caller; clients report one structured error per request.

use thiserror::Error;

use crate::domain::{Candle, SentimentObservation};

/// Structured error types for data operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network error: {0}")]
    Network(String),

    #[error("http status {status} from {endpoint}")]
    HttpStatus { status: u16, endpoint: String },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("data error: {0}")]
    Other(String),
}

/// One side of the order book at a single price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookLevel {
    pub price: f64,
    pub quantity: f64,
}

/// Snapshot of the top of an exchange order book.
#[derive(Debug, Clone)]
pub struct OrderBook {
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
}

impl OrderBook {
    /// Best bid price, if any depth was returned.
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.first().map(|l| l.price)
    }

    /// Best ask price, if any depth was returned.
    pub fn best_ask(&self) -> Option<f64> {
        self.asks.first().map(|l| l.price)
    }
}

/// Source of candle series (exchange REST API, fixtures, synthetic walks).
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Fetch up to `limit` candles for `symbol` at `interval` (e.g. "1h"),
    /// ascending by open time.
    fn fetch_klines(&self, symbol: &str, interval: &str, limit: u32)
        -> Result<Vec<Candle>, DataError>;
}

/// Source of scored sentiment for free-form text.
///
/// Explicitly constructed and caller-owned; implementations must not lazily
/// initialize global state. Inference itself (the pre-trained model) lives
/// behind this seam.
pub trait SentimentModel: Send + Sync {
    /// Model or endpoint name.
    fn name(&self) -> &str;

    /// Score a single text into a labeled observation.
    fn analyze(&self, text: &str) -> Result<SentimentObservation, DataError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_book_best_levels() {
        let book = OrderBook {
            bids: vec![
                BookLevel { price: 99.5, quantity: 2.0 },
                BookLevel { price: 99.0, quantity: 5.0 },
            ],
            asks: vec![BookLevel { price: 100.5, quantity: 1.0 }],
        };
        assert_eq!(book.best_bid(), Some(99.5));
        assert_eq!(book.best_ask(), Some(100.5));
    }

    #[test]
    fn empty_order_book_has_no_best() {
        let book = OrderBook { bids: vec![], asks: vec![] };
        assert_eq!(book.best_bid(), None);
        assert_eq!(book.best_ask(), None);
    }

    struct FixtureProvider;

    impl MarketDataProvider for FixtureProvider {
        fn name(&self) -> &str {
            "fixture"
        }

        fn fetch_klines(
            &self,
            _symbol: &str,
            _interval: &str,
            _limit: u32,
        ) -> Result<Vec<Candle>, DataError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn provider_trait_is_object_safe() {
        let provider: &dyn MarketDataProvider = &FixtureProvider;
        assert_eq!(provider.name(), "fixture");
        assert!(provider.fetch_klines("BTCUSDT", "1h", 10).unwrap().is_empty());
    }

    #[test]
    fn data_error_display() {
        let err = DataError::HttpStatus {
            status: 429,
            endpoint: "/api/v3/klines".into(),
        };
        assert_eq!(err.to_string(), "http status 429 from /api/v3/klines");
    }
}
