//! Technical indicators computed from candle closes.

pub mod engine;
pub mod error;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use engine::*;
pub use error::IndicatorError;
