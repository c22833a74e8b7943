//! Serializable evaluation configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use coinsig_core::indicators::IndicatorConfig;
use coinsig_core::risk::RiskConfig;
use coinsig_core::signals::sentiment::DEFAULT_CONFIDENCE_THRESHOLD;

/// Everything one `evaluate` run needs, loadable from a TOML file.
///
/// Missing fields fall back to the defaults below, so a config file only
/// has to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Trading pair, e.g. "BTCUSDT".
    pub symbol: String,

    /// Candle interval, e.g. "1m", "15m", "1h", "1d".
    pub interval: String,

    /// How many candles to fetch.
    pub limit: u32,

    /// Sentiment confidence threshold (strict).
    pub sentiment_threshold: f64,

    /// Hosted sentiment inference endpoint, if sentiment is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_endpoint: Option<String>,

    // Tables last so the struct serializes to valid TOML.
    /// Indicator periods (RSI/MACD/Bollinger).
    pub indicators: IndicatorConfig,

    /// Risk gate parameters.
    pub risk: RiskConfig,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            symbol: "BTCUSDT".into(),
            interval: "1h".into(),
            limit: 100,
            sentiment_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            sentiment_endpoint: None,
            indicators: IndicatorConfig::default(),
            risk: RiskConfig::default(),
        }
    }
}

impl EvalConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_classic_settings() {
        let config = EvalConfig::default();
        assert_eq!(config.symbol, "BTCUSDT");
        assert_eq!(config.sentiment_threshold, 0.8);
        assert_eq!(config.risk.risk_per_trade, 0.01);
        assert_eq!(config.risk.max_daily_drawdown, 0.05);
        assert_eq!(config.risk.stop_loss_rate, 0.02);
        assert_eq!(config.risk.take_profit_rate, 0.05);
        assert_eq!(config.indicators.rsi_period, 14);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: EvalConfig = toml::from_str(
            r#"
            symbol = "ETHUSDT"
            limit = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.symbol, "ETHUSDT");
        assert_eq!(config.limit, 250);
        assert_eq!(config.interval, "1h");
        assert_eq!(config.risk.stop_loss_rate, 0.02);
    }

    #[test]
    fn full_roundtrip_through_toml() {
        let config = EvalConfig {
            sentiment_endpoint: Some("https://example.com/model".into()),
            ..EvalConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        let parsed: EvalConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
