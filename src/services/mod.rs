//! External collaborators: candle source and notifiers.

pub mod kraken;
pub mod market_data;
pub mod notifier;
pub mod telegram;

pub use kraken::KrakenCandleSource;
pub use market_data::CandleSource;
pub use notifier::{LogOnlyNotifier, Notifier};
pub use telegram::TelegramNotifier;
