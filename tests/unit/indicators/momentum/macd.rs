//! Unit tests for MACD indicator

use crate::fixtures::{linear_candles, uptrend_candles};
use trendpulse::indicators::momentum::{calculate_macd, calculate_macd_default};

#[test]
fn test_macd_definition_offsets() {
    let macd = calculate_macd_default(&linear_candles(60, 100.0, 1.0));
    assert!(macd.macd[24].is_none());
    assert!(macd.macd[25].is_some());
    assert!(macd.signal[32].is_none());
    assert!(macd.signal[33].is_some());
}

#[test]
fn test_macd_insufficient_data() {
    let macd = calculate_macd_default(&linear_candles(30, 100.0, 1.0));
    assert!(macd.macd.last().copied().flatten().is_some());
    assert!(macd.signal.iter().all(Option::is_none));
}

#[test]
fn test_macd_of_linear_trend() {
    // line difference of lags: slope * (26 - 12) / 2
    let macd = calculate_macd(&linear_candles(80, 100.0, 0.5), 12, 26, 9);
    let line = macd.macd.last().copied().flatten().unwrap();
    let signal = macd.signal.last().copied().flatten().unwrap();
    assert!((line - 3.5).abs() < 1e-9);
    assert!((signal - 3.5).abs() < 1e-9);
}

#[test]
fn test_macd_bullish_on_up_step() {
    let macd = calculate_macd_default(&uptrend_candles(120));
    let line = macd.macd.last().copied().flatten().unwrap();
    let signal = macd.signal.last().copied().flatten().unwrap();
    assert!(line > signal);
}
