//! Candle source interface.

use crate::error::MarketDataError;
use crate::models::indicators::Candle;
use crate::models::timeframe::Timeframe;

#[async_trait::async_trait]
pub trait CandleSource: Send + Sync {
    /// Fetch up to `limit` candles for `symbol`, oldest first.
    async fn fetch_candles(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError>;

    /// Source name for logs.
    fn name(&self) -> &str;
}
