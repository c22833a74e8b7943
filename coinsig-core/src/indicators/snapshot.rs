//! IndicatorSnapshot — fixed-shape indicator values aligned per candle.

use serde::{Deserialize, Serialize};
use ta::indicators::{BollingerBands, MovingAverageConvergenceDivergence, RelativeStrengthIndex};
use ta::Next;
use thiserror::Error;

use crate::domain::Candle;

/// Errors from building the indicator series.
#[derive(Debug, Error)]
pub enum IndicatorError {
    #[error("invalid indicator parameter: {0}")]
    InvalidParameter(String),
}

/// Periods for the three indicator families.
///
/// Defaults match the classic settings: RSI 14, MACD 12/26/9,
/// Bollinger 20 with a 2-standard-deviation envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bb_period: usize,
    pub bb_multiplier: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bb_period: 20,
            bb_multiplier: 2.0,
        }
    }
}

impl IndicatorConfig {
    /// Index of the first candle at which every field of the snapshot is
    /// defined. Everything before this is warm-up.
    pub fn warmup(&self) -> usize {
        let macd_warm = (self.macd_slow + self.macd_signal).saturating_sub(2);
        self.rsi_period
            .max(macd_warm)
            .max(self.bb_period.saturating_sub(1))
    }
}

/// Technical indicator values for one candle.
///
/// Fields inside a rolling computation's warm-up window are NaN. Use
/// [`IndicatorSnapshot::is_warm`] before feeding a snapshot to the combiner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    /// Relative Strength Index in [0, 100], or NaN during warm-up.
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_hist: f64,
    pub bb_upper: f64,
    pub bb_mid: f64,
    pub bb_lower: f64,
}

impl IndicatorSnapshot {
    /// All-NaN snapshot (warm-up or void candle).
    pub fn undefined() -> Self {
        Self {
            rsi: f64::NAN,
            macd: f64::NAN,
            macd_signal: f64::NAN,
            macd_hist: f64::NAN,
            bb_upper: f64::NAN,
            bb_mid: f64::NAN,
            bb_lower: f64::NAN,
        }
    }

    /// True when every field the combiner reads is defined.
    pub fn is_warm(&self) -> bool {
        !self.rsi.is_nan()
            && !self.macd_hist.is_nan()
            && !self.bb_upper.is_nan()
            && !self.bb_lower.is_nan()
    }
}

/// Compute one snapshot per candle, aligned by index.
///
/// Closes are streamed through the `ta` indicators in candle order. Because
/// `ta` emits seeded values from the very first sample, outputs inside each
/// indicator's warm-up window are masked to NaN:
/// - RSI: indices < `rsi_period`
/// - MACD line: indices < `macd_slow - 1`
/// - MACD signal/histogram: indices < `macd_slow + macd_signal - 2`
/// - Bollinger bands: indices < `bb_period - 1`
///
/// A NaN close taints the stream: that candle and every later one get an
/// all-NaN snapshot.
pub fn compute_snapshots(
    candles: &[Candle],
    config: &IndicatorConfig,
) -> Result<Vec<IndicatorSnapshot>, IndicatorError> {
    let mut rsi = RelativeStrengthIndex::new(config.rsi_period)
        .map_err(|e| IndicatorError::InvalidParameter(e.to_string()))?;
    let mut macd = MovingAverageConvergenceDivergence::new(
        config.macd_fast,
        config.macd_slow,
        config.macd_signal,
    )
    .map_err(|e| IndicatorError::InvalidParameter(e.to_string()))?;
    let mut bb = BollingerBands::new(config.bb_period, config.bb_multiplier)
        .map_err(|e| IndicatorError::InvalidParameter(e.to_string()))?;

    let macd_line_warm = config.macd_slow.saturating_sub(1);
    let macd_signal_warm = (config.macd_slow + config.macd_signal).saturating_sub(2);
    let bb_warm = config.bb_period.saturating_sub(1);

    let mut result = Vec::with_capacity(candles.len());
    let mut tainted = false;

    for (i, candle) in candles.iter().enumerate() {
        if tainted || candle.close.is_nan() {
            tainted = true;
            result.push(IndicatorSnapshot::undefined());
            continue;
        }

        let rsi_value = rsi.next(candle.close);
        let macd_out = macd.next(candle.close);
        let bb_out = bb.next(candle.close);

        let mut snapshot = IndicatorSnapshot::undefined();
        if i >= config.rsi_period {
            snapshot.rsi = rsi_value;
        }
        if i >= macd_line_warm {
            snapshot.macd = macd_out.macd;
        }
        if i >= macd_signal_warm {
            snapshot.macd_signal = macd_out.signal;
            snapshot.macd_hist = macd_out.histogram;
        }
        if i >= bb_warm {
            snapshot.bb_upper = bb_out.upper;
            snapshot.bb_mid = bb_out.average;
            snapshot.bb_lower = bb_out.lower;
        }
        result.push(snapshot);
    }

    Ok(result)
}
