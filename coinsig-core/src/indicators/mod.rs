//! Indicator snapshots — per-candle technical indicator values.
//!
//! Indicator math is delegated to the `ta` crate (RSI, MACD, Bollinger
//! Bands). This module owns the alignment contract: one fixed-shape
//! snapshot per candle, with NaN for every index inside an indicator's
//! warm-up window. Callers must treat NaN as "insufficient history",
//! never as zero.

pub mod snapshot;

pub use snapshot::{compute_snapshots, IndicatorConfig, IndicatorError, IndicatorSnapshot};

/// Create synthetic candles from close prices for testing.
///
/// Generates plausible OHLV: open = prev_close (or close for the first
/// candle), high = max(open,close) + 1.0, low = min(open,close) - 1.0,
/// volume = 1000, one-minute spacing.
#[cfg(test)]
pub fn make_candles(closes: &[f64]) -> Vec<crate::domain::Candle> {
    use crate::domain::Candle;
    use chrono::TimeZone;
    let base = chrono::Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Candle {
                open_time: base + chrono::Duration::minutes(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1000.0,
            }
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}
