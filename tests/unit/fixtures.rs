//! Candle builders shared by the unit tests

#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use trendpulse::models::indicators::Candle;

/// Candles with the given closes, five minutes apart.
pub fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Candle::new(
                close,
                close + 0.05,
                close - 0.05,
                close,
                1000.0,
                start + Duration::minutes(5 * i as i64),
            )
        })
        .collect()
}

pub fn linear_candles(count: usize, base_price: f64, step: f64) -> Vec<Candle> {
    let closes: Vec<f64> = (0..count).map(|i| base_price + i as f64 * step).collect();
    candles_from_closes(&closes)
}

/// Rising zigzag: +1.0 then -0.6, repeated. With an even count the last
/// step is up, which reads as Long.
pub fn uptrend_candles(count: usize) -> Vec<Candle> {
    let closes: Vec<f64> = (0..count)
        .map(|i| 100.0 + 0.2 * i as f64 + 0.8 * (i % 2) as f64)
        .collect();
    candles_from_closes(&closes)
}

/// Mirror of [`uptrend_candles`]; an even count reads as Short.
pub fn downtrend_candles(count: usize) -> Vec<Candle> {
    let closes: Vec<f64> = (0..count)
        .map(|i| 200.0 - 0.2 * i as f64 - 0.8 * (i % 2) as f64)
        .collect();
    candles_from_closes(&closes)
}
