//! trendpulse: a polling market-signal engine.
//!
//! Pulls recent candles for one instrument, derives EMA/RSI/Bollinger/MACD
//! indicators, classifies the market into Long/Short/None and notifies once
//! per signal transition. It never trades.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use error::{ConfigError, MarketDataError, NotifyError};
