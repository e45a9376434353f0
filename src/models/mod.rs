//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod signal;
pub mod timeframe;

pub use indicators::{Candle, DefinedSnapshot, IndicatorSet, IndicatorSnapshot};
pub use signal::{SignalDirection, SignalVerdict};
pub use timeframe::Timeframe;
