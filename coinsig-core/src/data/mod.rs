//! Data clients — external collaborators of the decision core.
//!
//! Everything here is network-facing glue: market data, the Fear & Greed
//! index, and the hosted sentiment model. The decision layer only sees the
//! traits, so tests run without I/O.

pub mod binance;
pub mod feargreed;
pub mod provider;
pub mod sentiment_api;
pub mod synthetic;

pub use binance::BinanceClient;
pub use feargreed::{FearGreedClient, FearGreedIndex};
pub use provider::{BookLevel, DataError, MarketDataProvider, OrderBook, SentimentModel};
pub use sentiment_api::{HttpSentimentModel, StaticSentimentModel};
pub use synthetic::random_walk_candles;
