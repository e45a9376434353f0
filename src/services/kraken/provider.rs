//! Kraken REST candle source (public OHLC endpoint, no auth).

use tracing::debug;
use url::Url;

use super::response::OhlcResponse;
use crate::error::MarketDataError;
use crate::models::indicators::Candle;
use crate::models::timeframe::Timeframe;
use crate::services::market_data::CandleSource;

pub const KRAKEN_BASE_URL: &str = "https://api.kraken.com";

pub struct KrakenCandleSource {
    client: reqwest::Client,
    ohlc_url: Url,
}

impl KrakenCandleSource {
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Any path in `base_url` is kept as a prefix of the OHLC path.
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Result<Self, url::ParseError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let ohlc_url = base.join("0/public/OHLC")?;
        Ok(Self { client, ohlc_url })
    }

    pub fn ohlc_url(&self) -> &Url {
        &self.ohlc_url
    }
}

/// Kraken pair name for a display symbol: `XBT/USD` and `BTC/USD` both
/// become `XBTUSD`.
pub fn kraken_pair(symbol: &str) -> String {
    let upper = symbol.trim().to_uppercase();
    let mut parts = upper.split(|c: char| c == '/' || c == '-' || c == '_');
    let base = parts.next().unwrap_or_default();
    let quote: String = parts.collect();

    let base = match base {
        "BTC" => "XBT",
        "DOGE" => "XDG",
        other => other,
    };
    format!("{}{}", base, quote)
}

#[async_trait::async_trait]
impl CandleSource for KrakenCandleSource {
    async fn fetch_candles(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let pair = kraken_pair(symbol);
        let interval = timeframe.as_minutes().to_string();

        debug!(pair = %pair, interval = %interval, limit = limit, "Kraken: requesting OHLC");

        let response: OhlcResponse = self
            .client
            .get(self.ohlc_url.clone())
            .query(&[("pair", pair.as_str()), ("interval", interval.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut candles = response.into_candles(&pair)?;
        candles.sort_by_key(|c| c.timestamp);
        candles.dedup_by_key(|c| c.timestamp);

        if candles.len() > limit {
            candles.drain(..candles.len() - limit);
        }

        debug!(pair = %pair, count = candles.len(), "Kraken: parsed candles");
        Ok(candles)
    }

    fn name(&self) -> &str {
        "kraken"
    }
}
