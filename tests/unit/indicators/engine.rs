//! Unit tests for the indicator engine

use crate::fixtures::{linear_candles, uptrend_candles};
use trendpulse::indicators::{IndicatorEngine, MIN_CANDLES};

#[test]
fn test_series_are_parallel_to_candles() {
    let candles = uptrend_candles(120);
    let set = IndicatorEngine::compute(&candles);
    assert_eq!(set.len(), 120);
    for series in [
        &set.ema_fast,
        &set.ema_slow,
        &set.rsi,
        &set.bollinger_upper,
        &set.bollinger_lower,
        &set.macd_line,
        &set.macd_signal_line,
    ] {
        assert_eq!(series.len(), 120);
    }
}

#[test]
fn test_latest_row_fully_defined_with_enough_history() {
    let set = IndicatorEngine::compute(&uptrend_candles(MIN_CANDLES));
    let latest = set.latest().unwrap();
    assert!(latest.require_defined().is_ok());
    assert!(latest.bollinger_upper.unwrap() >= latest.bollinger_lower.unwrap());
}

#[test]
fn test_short_history_leaves_slow_ema_undefined() {
    let set = IndicatorEngine::compute(&linear_candles(MIN_CANDLES - 1, 100.0, 1.0));
    let latest = set.latest().unwrap();
    assert!(latest.ema_slow.is_none());
    assert!(latest.ema_fast.is_some());
    assert!(latest.require_defined().is_err());
}

#[test]
fn test_empty_input() {
    let set = IndicatorEngine::compute(&[]);
    assert!(set.is_empty());
    assert!(set.latest().is_none());
}
