use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::indicators::IndicatorError;

/// One OHLCV bar. Produced by a candle source, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }
}

/// Per-candle indicator series, parallel to the candle series they were
/// computed from. `None` marks a point without enough history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub close: Vec<f64>,
    pub ema_fast: Vec<Option<f64>>,
    pub ema_slow: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    pub bollinger_upper: Vec<Option<f64>>,
    pub bollinger_lower: Vec<Option<f64>>,
    pub macd_line: Vec<Option<f64>>,
    pub macd_signal_line: Vec<Option<f64>>,
}

impl IndicatorSet {
    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// The most recent row, or `None` for an empty series.
    pub fn latest(&self) -> Option<IndicatorSnapshot> {
        let last = self.len().checked_sub(1)?;
        let at = |series: &[Option<f64>]| series.get(last).copied().flatten();
        Some(IndicatorSnapshot {
            close: self.close[last],
            ema_fast: at(&self.ema_fast),
            ema_slow: at(&self.ema_slow),
            rsi: at(&self.rsi),
            bollinger_upper: at(&self.bollinger_upper),
            bollinger_lower: at(&self.bollinger_lower),
            macd_line: at(&self.macd_line),
            macd_signal_line: at(&self.macd_signal_line),
        })
    }
}

/// Last row of an [`IndicatorSet`]; the only part the classifier reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub close: f64,
    pub ema_fast: Option<f64>,
    pub ema_slow: Option<f64>,
    pub rsi: Option<f64>,
    pub bollinger_upper: Option<f64>,
    pub bollinger_lower: Option<f64>,
    pub macd_line: Option<f64>,
    pub macd_signal_line: Option<f64>,
}

/// Snapshot with every classifier input defined and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefinedSnapshot {
    pub close: f64,
    pub ema_fast: f64,
    pub ema_slow: f64,
    pub rsi: f64,
    pub macd_line: f64,
    pub macd_signal_line: f64,
}

impl IndicatorSnapshot {
    /// Require every classifier input, reporting the first undefined one.
    pub fn require_defined(&self) -> Result<DefinedSnapshot, IndicatorError> {
        fn defined(name: &'static str, value: Option<f64>) -> Result<f64, IndicatorError> {
            match value {
                Some(v) if v.is_finite() => Ok(v),
                _ => Err(IndicatorError::Undefined { indicator: name }),
            }
        }

        Ok(DefinedSnapshot {
            close: defined("close", Some(self.close))?,
            ema_fast: defined("ema_fast", self.ema_fast)?,
            ema_slow: defined("ema_slow", self.ema_slow)?,
            rsi: defined("rsi", self.rsi)?,
            macd_line: defined("macd_line", self.macd_line)?,
            macd_signal_line: defined("macd_signal_line", self.macd_signal_line)?,
        })
    }
}
