//! Signal generation — technical combiner and sentiment classifier.

pub mod combiner;
pub mod sentiment;

pub use combiner::{combine, CombineError};
pub use sentiment::SentimentClassifier;
