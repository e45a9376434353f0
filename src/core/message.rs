//! Human-facing alert text.

use crate::config::AlertConfig;
use crate::models::signal::SignalVerdict;

/// Alert for a signal transition:
///
/// ```text
/// 📊 XBT/USD Day Trade Alert
/// Signal: LONG
/// Price 105.00 above EMA20/50, RSI 55.0, MACD bullish.
///
/// TP1: +0.5%
/// SL: -0.5%
/// ```
pub fn format_alert(symbol: &str, verdict: &SignalVerdict, alerts: &AlertConfig) -> String {
    let mut text = format!(
        "📊 {} Day Trade Alert\nSignal: {}\n{}",
        symbol,
        verdict.direction.label(),
        verdict.reason
    );

    if !alerts.take_profit_pct.is_empty() || alerts.stop_loss_pct > 0.0 {
        text.push('\n');
    }
    for (i, pct) in alerts.take_profit_pct.iter().enumerate() {
        text.push_str(&format!("\nTP{}: +{}%", i + 1, pct));
    }
    if alerts.stop_loss_pct > 0.0 {
        text.push_str(&format!("\nSL: -{}%", alerts.stop_loss_pct));
    }
    text
}

pub fn format_started(symbol: &str, timeframe: &str) -> String {
    format!("🚀 {} signal bot started ({})", symbol, timeframe)
}
