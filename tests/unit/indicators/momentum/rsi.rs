//! Unit tests for RSI indicator

use crate::fixtures::{candles_from_closes, linear_candles, uptrend_candles};
use trendpulse::indicators::momentum::{calculate_rsi, calculate_rsi_default};

#[test]
fn test_rsi_first_defined_after_period_changes() {
    let candles = linear_candles(20, 100.0, 1.0);
    let rsi = calculate_rsi(&candles, 14);
    assert!(rsi[..14].iter().all(Option::is_none));
    assert!(rsi[14].is_some());
}

#[test]
fn test_rsi_insufficient_data() {
    let candles = linear_candles(14, 100.0, 1.0);
    assert!(calculate_rsi_default(&candles).iter().all(Option::is_none));
}

#[test]
fn test_rsi_bounds_for_monotonic_series() {
    let up = calculate_rsi_default(&linear_candles(40, 100.0, 1.0));
    assert_eq!(up.last().copied().flatten(), Some(100.0));

    let down = calculate_rsi_default(&linear_candles(40, 100.0, -1.0));
    assert_eq!(down.last().copied().flatten(), Some(0.0));

    let flat = calculate_rsi_default(&linear_candles(40, 100.0, 0.0));
    assert_eq!(flat.last().copied().flatten(), Some(50.0));
}

#[test]
fn test_rsi_simple_seed() {
    // 14 changes: 7 gains of 2, 7 losses of 1 -> RS = 2, RSI = 66.67
    let mut closes = vec![100.0];
    for i in 0..14 {
        let last = *closes.last().unwrap();
        closes.push(if i % 2 == 0 { last + 2.0 } else { last - 1.0 });
    }
    let rsi = calculate_rsi(&candles_from_closes(&closes), 14);
    let value = rsi[14].unwrap();
    assert!((value - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_rsi_wilder_smoothing_step() {
    // after the seed, one more gain of 2: avg_gain = (1 * 13 + 2) / 14, avg_loss = 0.5 * 13 / 14
    let mut closes = vec![100.0];
    for i in 0..14 {
        let last = *closes.last().unwrap();
        closes.push(if i % 2 == 0 { last + 2.0 } else { last - 1.0 });
    }
    let last = *closes.last().unwrap();
    closes.push(last + 2.0);

    let rsi = calculate_rsi(&candles_from_closes(&closes), 14);
    let avg_gain = (1.0 * 13.0 + 2.0) / 14.0;
    let avg_loss = 0.5 * 13.0 / 14.0;
    let expected = 100.0 - 100.0 / (1.0 + avg_gain / avg_loss);
    assert!((rsi[15].unwrap() - expected).abs() < 1e-9);
}

#[test]
fn test_rsi_zigzag_uptrend_stays_below_overbought() {
    let rsi = calculate_rsi_default(&uptrend_candles(120));
    let value = rsi.last().copied().flatten().unwrap();
    assert!(value > 50.0 && value < 70.0, "rsi was {}", value);
}
