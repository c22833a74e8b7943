//! CSV decision report — one row per evaluated candle.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// One evaluated candle: indicator values plus the combined signal.
/// `signal` is empty during warm-up.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionRow {
    pub open_time: DateTime<Utc>,
    pub close: f64,
    pub rsi: f64,
    pub macd_hist: f64,
    pub bb_upper: f64,
    pub bb_lower: f64,
    pub signal: String,
}

/// Write the per-candle report to `path` as CSV.
pub fn write_decision_report(path: &Path, rows: &[DecisionRow]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
    }
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating report file {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn report_writes_header_and_rows() {
        let dir = std::env::temp_dir().join("coinsig-report-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("decisions.csv");

        let rows = vec![DecisionRow {
            open_time: Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(),
            close: 94_655.2,
            rsi: 61.3,
            macd_hist: 12.5,
            bb_upper: 95_000.0,
            bb_lower: 93_000.0,
            signal: "BUY".into(),
        }];
        write_decision_report(&path, &rows).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "open_time,close,rsi,macd_hist,bb_upper,bb_lower,signal"
        );
        assert!(lines.next().unwrap().ends_with(",BUY"));
        std::fs::remove_file(&path).ok();
    }
}
