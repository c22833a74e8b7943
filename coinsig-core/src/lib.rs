//! COINSIG Core — the rule-based multi-signal decision layer.
//!
//! This crate contains the decision pipeline for a crypto trading-signal
//! prototype:
//! - Domain types (candles, signals, sentiment observations)
//! - Indicator snapshots (RSI, MACD, Bollinger Bands) aligned per candle
//! - Signal combiner with a fixed override order
//! - Threshold-based sentiment classifier
//! - Risk gate: position sizing, daily drawdown halt, stop-loss/take-profit
//! - Data clients for market and sentiment feeds (Binance, alternative.me)
//!
//! The combiner, classifier, and risk gate are pure in-memory computations;
//! everything network-facing lives in `data` and stays behind traits so the
//! decision layer can be tested without I/O.

pub mod data;
pub mod domain;
pub mod indicators;
pub mod risk;
pub mod signals;
