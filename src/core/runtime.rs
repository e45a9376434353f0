//! The poll loop: fetch → indicators → verdict → (maybe) notify → sleep.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::config::{AlertConfig, Config};
use crate::core::message::{format_alert, format_started};
use crate::models::signal::SignalDirection;
use crate::models::timeframe::Timeframe;
use crate::services::market_data::CandleSource;
use crate::services::notifier::Notifier;
use crate::signals::engine::{SignalEngine, MIN_CANDLES};
use crate::signals::tracker::TransitionTracker;

/// The subset of [`Config`] the loop reads.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub candles: usize,
    pub poll_interval: Duration,
    pub destination: String,
    pub alerts: AlertConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig::from(&Config::default())
    }
}

impl From<&Config> for RuntimeConfig {
    fn from(config: &Config) -> Self {
        Self {
            symbol: config.symbol.clone(),
            timeframe: config.timeframe,
            candles: config.candles,
            poll_interval: config.poll_interval,
            destination: config.notify_destination().to_string(),
            alerts: config.alerts.clone(),
        }
    }
}

/// What one iteration did. Failures are reported here and in the log, never
/// propagated.
#[derive(Debug, Clone, PartialEq)]
pub enum IterationOutcome {
    FetchFailed,
    InsufficientData { available: usize },
    NoSignal,
    Suppressed(SignalDirection),
    Notified { direction: SignalDirection, delivered: bool },
}

pub struct PollLoop {
    config: RuntimeConfig,
    source: Arc<dyn CandleSource>,
    notifier: Arc<dyn Notifier>,
    engine: SignalEngine,
    tracker: TransitionTracker,
}

impl PollLoop {
    pub fn new(
        config: RuntimeConfig,
        source: Arc<dyn CandleSource>,
        notifier: Arc<dyn Notifier>,
        tracker: TransitionTracker,
    ) -> Self {
        Self {
            config,
            source,
            notifier,
            engine: SignalEngine::default(),
            tracker,
        }
    }

    pub fn with_engine(mut self, engine: SignalEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn tracker(&self) -> &TransitionTracker {
        &self.tracker
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Send the one-time startup message. Returns whether it was delivered.
    pub async fn announce_start(&self) -> bool {
        let text = format_started(&self.config.symbol, self.config.timeframe.as_str());
        match self.notifier.send(&self.config.destination, &text).await {
            Ok(()) => {
                info!(notifier = self.notifier.name(), "Startup message sent");
                true
            }
            Err(e) => {
                warn!(notifier = self.notifier.name(), error = %e, "Startup message failed");
                false
            }
        }
    }

    /// One Fetching phase. Never fails; the outcome says what happened.
    pub async fn run_once(&mut self) -> IterationOutcome {
        let symbol = self.config.symbol.as_str();

        let candles = match self
            .source
            .fetch_candles(symbol, self.config.timeframe, self.config.candles)
            .await
        {
            Ok(candles) => candles,
            Err(e) => {
                error!(
                    source = self.source.name(),
                    symbol = %symbol,
                    error = %e,
                    "Fetch error, skipping this cycle"
                );
                return IterationOutcome::FetchFailed;
            }
        };

        if candles.len() < MIN_CANDLES {
            warn!(
                symbol = %symbol,
                count = candles.len(),
                min = MIN_CANDLES,
                "Not enough candles ({} < {}), skipping this cycle",
                candles.len(),
                MIN_CANDLES
            );
            return IterationOutcome::InsufficientData {
                available: candles.len(),
            };
        }

        let Some((verdict, snapshot)) = self.engine.evaluate_with_indicators(&candles) else {
            return IterationOutcome::InsufficientData { available: 0 };
        };

        debug!(
            symbol = %symbol,
            close = snapshot.close,
            ema_fast = ?snapshot.ema_fast,
            ema_slow = ?snapshot.ema_slow,
            rsi = ?snapshot.rsi,
            bb_upper = ?snapshot.bollinger_upper,
            bb_lower = ?snapshot.bollinger_lower,
            macd = ?snapshot.macd_line,
            macd_signal = ?snapshot.macd_signal_line,
            "Indicators computed"
        );

        let direction = verdict.direction;
        if !self.tracker.evaluate(direction) {
            debug!(symbol = %symbol, direction = %direction, reason = %verdict.reason, "No transition");
            return if direction.is_directional() {
                IterationOutcome::Suppressed(direction)
            } else {
                IterationOutcome::NoSignal
            };
        }

        info!(symbol = %symbol, direction = %direction, reason = %verdict.reason, "Signal transition");

        let text = format_alert(symbol, &verdict, &self.config.alerts);
        // Tracker state stays updated even when delivery fails.
        let delivered = match self.notifier.send(&self.config.destination, &text).await {
            Ok(()) => true,
            Err(e) => {
                error!(
                    notifier = self.notifier.name(),
                    direction = %direction,
                    error = %e,
                    "Notification failed"
                );
                false
            }
        };

        IterationOutcome::Notified {
            direction,
            delivered,
        }
    }

    /// Announce the start, then fetch and sleep the poll interval, forever.
    pub async fn run(mut self) {
        info!(
            symbol = %self.config.symbol,
            timeframe = %self.config.timeframe,
            candles = self.config.candles,
            interval_secs = self.config.poll_interval.as_secs(),
            policy = ?self.tracker.policy(),
            "Poll loop started"
        );

        self.announce_start().await;

        loop {
            let outcome = self.run_once().await;
            debug!(outcome = ?outcome, "Iteration finished");
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }
}
