//! Unit tests for Bollinger Bands

use crate::fixtures::{candles_from_closes, linear_candles};
use trendpulse::indicators::volatility::{calculate_bollinger_bands, calculate_bollinger_bands_default};

#[test]
fn test_bollinger_insufficient_data() {
    let bands = calculate_bollinger_bands_default(&linear_candles(19, 100.0, 1.0));
    assert!(bands.upper.iter().all(Option::is_none));
    assert!(bands.lower.iter().all(Option::is_none));
}

#[test]
fn test_bollinger_flat_series_collapses() {
    let bands = calculate_bollinger_bands_default(&linear_candles(25, 42.0, 0.0));
    assert_eq!(bands.upper.last().copied().flatten(), Some(42.0));
    assert_eq!(bands.middle.last().copied().flatten(), Some(42.0));
    assert_eq!(bands.lower.last().copied().flatten(), Some(42.0));
}

#[test]
fn test_bollinger_population_std_dev() {
    // mean 5, population std dev 2
    let candles = candles_from_closes(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    let bands = calculate_bollinger_bands(&candles, 8, 2.0);
    let upper = bands.upper[7].unwrap();
    let lower = bands.lower[7].unwrap();
    assert!((upper - 9.0).abs() < 1e-9);
    assert!((lower - 1.0).abs() < 1e-9);
}
