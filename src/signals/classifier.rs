//! Maps the latest indicator row to a Long/Short/None verdict.

use crate::models::indicators::{DefinedSnapshot, IndicatorSnapshot};
use crate::models::signal::{SignalDirection, SignalVerdict};

/// RSI bounds for the momentum filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierThresholds {
    /// Long requires RSI strictly below this.
    pub rsi_overbought: f64,
    /// Short requires RSI strictly above this.
    pub rsi_oversold: f64,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignalClassifier {
    thresholds: ClassifierThresholds,
}

impl SignalClassifier {
    pub fn new(thresholds: ClassifierThresholds) -> Self {
        Self { thresholds }
    }

    /// Classify one indicator row. Long is checked before Short; any
    /// undefined input yields `None`.
    pub fn classify(&self, snapshot: &IndicatorSnapshot) -> SignalVerdict {
        let row = match snapshot.require_defined() {
            Ok(row) => row,
            Err(e) => return SignalVerdict::none(format!("No signal: {}.", e)),
        };

        if self.is_long(&row) {
            SignalVerdict::new(
                SignalDirection::Long,
                format!(
                    "Price {:.2} above EMA20/50, RSI {:.1}, MACD bullish.",
                    row.close, row.rsi
                ),
            )
        } else if self.is_short(&row) {
            SignalVerdict::new(
                SignalDirection::Short,
                format!(
                    "Price {:.2} below EMA20/50, RSI {:.1}, MACD bearish.",
                    row.close, row.rsi
                ),
            )
        } else {
            SignalVerdict::none(format!(
                "No signal: price {:.2}, EMA20 {:.2}, EMA50 {:.2}, RSI {:.1}.",
                row.close, row.ema_fast, row.ema_slow, row.rsi
            ))
        }
    }

    fn is_long(&self, row: &DefinedSnapshot) -> bool {
        row.close > row.ema_fast
            && row.ema_fast > row.ema_slow
            && row.rsi < self.thresholds.rsi_overbought
            && row.macd_line > row.macd_signal_line
    }

    fn is_short(&self, row: &DefinedSnapshot) -> bool {
        row.close < row.ema_fast
            && row.ema_fast < row.ema_slow
            && row.rsi > self.thresholds.rsi_oversold
            && row.macd_line < row.macd_signal_line
    }
}
