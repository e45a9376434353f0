//! Unit tests for poll loop configuration

use std::time::Duration;
use trendpulse::config::{Config, TelegramConfig};
use trendpulse::core::runtime::RuntimeConfig;
use trendpulse::models::timeframe::Timeframe;

#[test]
fn test_runtime_config_default() {
    let config = RuntimeConfig::default();
    assert_eq!(config.symbol, "XBT/USD");
    assert_eq!(config.timeframe, Timeframe::Minute5);
    assert_eq!(config.candles, 300);
    assert_eq!(config.poll_interval, Duration::from_secs(30));
    assert_eq!(config.destination, "log");
}

#[test]
fn test_runtime_config_uses_chat_id() {
    let config = Config {
        telegram: Some(TelegramConfig {
            bot_token: "token".to_string(),
            chat_id: "12345".to_string(),
        }),
        ..Config::default()
    };
    assert_eq!(RuntimeConfig::from(&config).destination, "12345");
}
