//! Kraken exchange adapter

pub mod provider;
pub mod response;

pub use provider::{kraken_pair, KrakenCandleSource, KRAKEN_BASE_URL};
