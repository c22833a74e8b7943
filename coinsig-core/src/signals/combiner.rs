//! Signal combiner — merges indicator values into one discrete signal.
//!
//! Rules are applied in a fixed order and each later rule overrides the
//! previous result. This is a deliberate, non-commutative tie-break, not
//! independent voting: Bollinger beats MACD beats RSI. The order is part
//! of the contract and must not be rearranged.

use thiserror::Error;

use crate::domain::Signal;
use crate::indicators::IndicatorSnapshot;

/// Errors from combining indicator values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CombineError {
    /// A field needed by an active rule is NaN (indicator warm-up).
    /// Recoverable: skip this observation and wait for more history.
    #[error("insufficient history: indicator values are not yet defined")]
    InsufficientHistory,
}

/// Combine one indicator snapshot and its candle's close into a signal.
///
/// Rule order (later overrides earlier):
/// 1. Default Hold.
/// 2. RSI < 30 → Buy; RSI > 70 → Sell.
/// 3. MACD histogram > 0 → Buy; < 0 → Sell.
/// 4. Close < lower Bollinger band → Buy; close > upper band → Sell.
///
/// Pure function: deterministic for identical inputs, no side effects.
pub fn combine(snapshot: &IndicatorSnapshot, close: f64) -> Result<Signal, CombineError> {
    if !snapshot.is_warm() || close.is_nan() {
        return Err(CombineError::InsufficientHistory);
    }

    let mut signal = Signal::Hold;

    if snapshot.rsi < 30.0 {
        signal = Signal::Buy;
    } else if snapshot.rsi > 70.0 {
        signal = Signal::Sell;
    }

    if snapshot.macd_hist > 0.0 {
        signal = Signal::Buy;
    } else if snapshot.macd_hist < 0.0 {
        signal = Signal::Sell;
    }

    if close < snapshot.bb_lower {
        signal = Signal::Buy;
    } else if close > snapshot.bb_upper {
        signal = Signal::Sell;
    }

    Ok(signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Snapshot where no rule fires: neutral RSI, flat histogram, close
    /// inside the bands. Tests adjust the field(s) under test.
    fn neutral_snapshot() -> IndicatorSnapshot {
        IndicatorSnapshot {
            rsi: 50.0,
            macd: 0.0,
            macd_signal: 0.0,
            macd_hist: 0.0,
            bb_upper: 110.0,
            bb_mid: 100.0,
            bb_lower: 90.0,
        }
    }

    #[test]
    fn neutral_inputs_hold() {
        assert_eq!(combine(&neutral_snapshot(), 100.0), Ok(Signal::Hold));
    }

    #[test]
    fn oversold_rsi_buys() {
        let mut s = neutral_snapshot();
        s.rsi = 25.0;
        // MACD hist is exactly zero and close is within bands, so nothing
        // overrides the RSI rule.
        assert_eq!(combine(&s, 100.0), Ok(Signal::Buy));
    }

    #[test]
    fn overbought_rsi_sells() {
        let mut s = neutral_snapshot();
        s.rsi = 75.0;
        assert_eq!(combine(&s, 100.0), Ok(Signal::Sell));
    }

    #[test]
    fn rsi_boundaries_are_exclusive() {
        let mut s = neutral_snapshot();
        s.rsi = 30.0;
        assert_eq!(combine(&s, 100.0), Ok(Signal::Hold));
        s.rsi = 70.0;
        assert_eq!(combine(&s, 100.0), Ok(Signal::Hold));
    }

    #[test]
    fn macd_overrides_rsi() {
        let mut s = neutral_snapshot();
        s.rsi = 25.0; // → Buy
        s.macd_hist = -1.5; // → Sell, overrides
        assert_eq!(combine(&s, 100.0), Ok(Signal::Sell));
    }

    #[test]
    fn bollinger_overrides_macd_and_rsi() {
        let mut s = neutral_snapshot();
        s.rsi = 80.0; // → Sell
        s.macd_hist = 5.0; // → Buy, overrides RSI
        // close above the upper band → Sell, overrides everything
        assert_eq!(combine(&s, 115.0), Ok(Signal::Sell));
    }

    #[test]
    fn close_below_lower_band_buys() {
        let mut s = neutral_snapshot();
        s.macd_hist = -1.0; // → Sell
        assert_eq!(combine(&s, 85.0), Ok(Signal::Buy));
    }

    #[test]
    fn close_on_band_does_not_fire() {
        let s = neutral_snapshot();
        assert_eq!(combine(&s, 110.0), Ok(Signal::Hold));
        assert_eq!(combine(&s, 90.0), Ok(Signal::Hold));
    }

    #[test]
    fn warmup_snapshot_is_insufficient_history() {
        let s = IndicatorSnapshot::undefined();
        assert_eq!(combine(&s, 100.0), Err(CombineError::InsufficientHistory));
    }

    #[test]
    fn partially_warm_snapshot_is_insufficient_history() {
        let mut s = neutral_snapshot();
        s.macd_hist = f64::NAN;
        assert_eq!(combine(&s, 100.0), Err(CombineError::InsufficientHistory));
    }

    #[test]
    fn nan_close_is_insufficient_history() {
        let s = neutral_snapshot();
        assert_eq!(
            combine(&s, f64::NAN),
            Err(CombineError::InsufficientHistory)
        );
    }
}
