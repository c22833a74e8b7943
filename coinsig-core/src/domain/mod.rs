//! Domain types shared across the decision pipeline.

pub mod candle;
pub mod sentiment;
pub mod signal;

pub use candle::Candle;
pub use sentiment::{SentimentLabel, SentimentObservation};
pub use signal::Signal;
