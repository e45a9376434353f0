//! Kraken public OHLC response shape.
//!
//! ```json
//! {"error": [], "result": {"XXBTZUSD": [[1688671200, "30306.1", "30306.2",
//!   "30305.7", "30305.7", "30306.1", "3.39", 23]], "last": 1688672160}}
//! ```
//! Row layout: time, open, high, low, close, vwap, volume, count.

use chrono::DateTime;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::MarketDataError;
use crate::models::indicators::Candle;

#[derive(Debug, Deserialize)]
pub struct OhlcResponse {
    #[serde(default)]
    pub error: Vec<String>,
    #[serde(default)]
    pub result: Option<HashMap<String, Value>>,
}

impl OhlcResponse {
    /// Convert to candles, surfacing Kraken's error array first.
    pub fn into_candles(self, symbol: &str) -> Result<Vec<Candle>, MarketDataError> {
        if !self.error.is_empty() {
            return Err(classify_errors(&self.error, symbol));
        }

        let result = self
            .result
            .ok_or_else(|| MarketDataError::Malformed("missing result".to_string()))?;

        let rows = result
            .iter()
            .filter(|(key, _)| key.as_str() != "last")
            .find_map(|(_, value)| value.as_array())
            .ok_or_else(|| MarketDataError::Malformed("no OHLC series in result".to_string()))?;

        rows.iter().map(parse_row).collect()
    }
}

fn classify_errors(errors: &[String], symbol: &str) -> MarketDataError {
    let joined = errors.join("; ");
    if errors.iter().any(|e| e.contains("Unknown asset pair")) {
        MarketDataError::UnknownSymbol(symbol.to_string())
    } else if errors
        .iter()
        .any(|e| e.contains("Rate limit") || e.contains("Too many requests"))
    {
        MarketDataError::RateLimited(joined)
    } else {
        MarketDataError::Api(joined)
    }
}

fn parse_row(row: &Value) -> Result<Candle, MarketDataError> {
    let fields = row
        .as_array()
        .filter(|f| f.len() >= 7)
        .ok_or_else(|| MarketDataError::Malformed(format!("bad OHLC row: {}", row)))?;

    let number = |idx: usize, name: &str| -> Result<f64, MarketDataError> {
        let value = &fields[idx];
        value
            .as_f64()
            .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| MarketDataError::Malformed(format!("bad {} in row: {}", name, row)))
    };

    let secs = fields[0]
        .as_i64()
        .or_else(|| fields[0].as_f64().map(|t| t as i64))
        .ok_or_else(|| MarketDataError::Malformed(format!("bad time in row: {}", row)))?;
    let timestamp = DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| MarketDataError::Malformed(format!("time out of range: {}", secs)))?;

    Ok(Candle::new(
        number(1, "open")?,
        number(2, "high")?,
        number(3, "low")?,
        number(4, "close")?,
        number(6, "volume")?,
        timestamp,
    ))
}
