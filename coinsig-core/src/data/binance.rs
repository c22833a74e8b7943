//! Binance REST client — klines and order-book depth.
//!
//! Thin blocking wrapper over the public `/api/v3` endpoints with a
//! 10-second timeout. Binance serves kline rows as mixed-type JSON arrays
//! (integers for timestamps, strings for prices), so rows deserialize into
//! a tuple and the price fields are parsed explicitly.

use chrono::{TimeZone, Utc};
use serde::Deserialize;
use std::time::Duration;

use super::provider::{BookLevel, DataError, MarketDataProvider, OrderBook};
use crate::domain::Candle;

const DEFAULT_BASE_URL: &str = "https://api.binance.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One kline row: open_time, open, high, low, close, volume, close_time,
/// quote volume, trade count, taker buy base, taker buy quote, ignore.
type KlineRow = (
    i64,
    String,
    String,
    String,
    String,
    String,
    i64,
    String,
    u64,
    String,
    String,
    String,
);

/// Depth endpoint response: price/quantity pairs as decimal strings.
#[derive(Debug, Deserialize)]
struct DepthResponse {
    bids: Vec<(String, String)>,
    asks: Vec<(String, String)>,
}

/// Blocking client for the Binance public market-data API.
pub struct BinanceClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl BinanceClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DataError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn mainnet() -> Result<Self, DataError> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Fetch up to `limit` klines for `symbol` at `interval` (e.g. "1h").
    pub fn get_klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<Candle>, DataError> {
        let endpoint = "/api/v3/klines";
        let url = format!("{}{endpoint}", self.base_url);
        let limit = limit.to_string();
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("interval", interval),
                ("limit", limit.as_str()),
            ])
            .send()
            .map_err(|e| DataError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DataError::HttpStatus {
                status: resp.status().as_u16(),
                endpoint: endpoint.into(),
            });
        }

        let rows: Vec<KlineRow> = resp
            .json()
            .map_err(|e| DataError::ResponseFormatChanged(e.to_string()))?;
        rows.into_iter().map(parse_kline).collect()
    }

    /// Fetch the top `limit` levels of the order book for `symbol`.
    pub fn get_order_book(&self, symbol: &str, limit: u32) -> Result<OrderBook, DataError> {
        let endpoint = "/api/v3/depth";
        let url = format!("{}{endpoint}", self.base_url);
        let limit = limit.to_string();
        let resp = self
            .client
            .get(&url)
            .query(&[("symbol", symbol), ("limit", limit.as_str())])
            .send()
            .map_err(|e| DataError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DataError::HttpStatus {
                status: resp.status().as_u16(),
                endpoint: endpoint.into(),
            });
        }

        let depth: DepthResponse = resp
            .json()
            .map_err(|e| DataError::ResponseFormatChanged(e.to_string()))?;
        Ok(OrderBook {
            bids: parse_levels(&depth.bids)?,
            asks: parse_levels(&depth.asks)?,
        })
    }
}

impl MarketDataProvider for BinanceClient {
    fn name(&self) -> &str {
        "binance"
    }

    fn fetch_klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<Candle>, DataError> {
        self.get_klines(symbol, interval, limit)
    }
}

fn parse_price(field: &str, value: &str) -> Result<f64, DataError> {
    value
        .parse::<f64>()
        .map_err(|_| DataError::ResponseFormatChanged(format!("bad {field} value: {value:?}")))
}

fn parse_kline(row: KlineRow) -> Result<Candle, DataError> {
    let open_time = Utc
        .timestamp_millis_opt(row.0)
        .single()
        .ok_or_else(|| DataError::ResponseFormatChanged(format!("bad open_time: {}", row.0)))?;
    Ok(Candle {
        open_time,
        open: parse_price("open", &row.1)?,
        high: parse_price("high", &row.2)?,
        low: parse_price("low", &row.3)?,
        close: parse_price("close", &row.4)?,
        volume: parse_price("volume", &row.5)?,
    })
}

fn parse_levels(levels: &[(String, String)]) -> Result<Vec<BookLevel>, DataError> {
    levels
        .iter()
        .map(|(price, quantity)| {
            Ok(BookLevel {
                price: parse_price("price", price)?,
                quantity: parse_price("quantity", quantity)?,
            })
        })
        .collect()
}
