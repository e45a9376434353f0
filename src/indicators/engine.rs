//! Builds the full [`IndicatorSet`] for one candle series.

use crate::indicators::momentum::{calculate_macd_default, calculate_rsi_default};
use crate::indicators::trend::{calculate_ema, EMA_FAST_PERIOD, EMA_SLOW_PERIOD};
use crate::indicators::volatility::calculate_bollinger_bands_default;
use crate::models::indicators::{Candle, IndicatorSet};

/// Candles needed before the slowest classifier input (EMA50) is defined.
pub const MIN_CANDLES: usize = EMA_SLOW_PERIOD;

pub struct IndicatorEngine;

impl IndicatorEngine {
    /// Compute every indicator series from candle closes. Pure; short input
    /// yields `None` entries rather than an error.
    pub fn compute(candles: &[Candle]) -> IndicatorSet {
        let bollinger = calculate_bollinger_bands_default(candles);
        let macd = calculate_macd_default(candles);

        IndicatorSet {
            close: candles.iter().map(|c| c.close).collect(),
            ema_fast: calculate_ema(candles, EMA_FAST_PERIOD),
            ema_slow: calculate_ema(candles, EMA_SLOW_PERIOD),
            rsi: calculate_rsi_default(candles),
            bollinger_upper: bollinger.upper,
            bollinger_lower: bollinger.lower,
            macd_line: macd.macd,
            macd_signal_line: macd.signal,
        }
    }
}
