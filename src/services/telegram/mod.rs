//! Telegram Bot API notifier

pub mod client;

pub use client::{TelegramNotifier, TELEGRAM_BASE_URL};
