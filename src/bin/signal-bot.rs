//! trendpulse signal bot
//!
//! Polls Kraken candles for one instrument, classifies the market on every
//! cycle and sends a Telegram alert when the signal changes. Serves a
//! liveness endpoint alongside the loop.

use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use trendpulse::config::Config;
use trendpulse::core::http::start_server;
use trendpulse::core::runtime::{PollLoop, RuntimeConfig};
use trendpulse::logging;
use trendpulse::services::{CandleSource, KrakenCandleSource, LogOnlyNotifier, Notifier, TelegramNotifier};
use trendpulse::signals::{SignalClassifier, SignalEngine, TransitionTracker};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = Config::load()?;
    info!("Starting trendpulse signal bot");
    info!(environment = %config.environment, "Environment");
    info!(
        symbol = %config.symbol,
        timeframe = %config.timeframe,
        candles = config.candles,
        interval = config.poll_interval.as_secs(),
        "Signal evaluation: every {} seconds",
        config.poll_interval.as_secs()
    );

    let source: Arc<dyn CandleSource> = Arc::new(KrakenCandleSource::new(&config.kraken_base_url)?);

    let notifier: Arc<dyn Notifier> = match &config.telegram {
        Some(telegram) => Arc::new(TelegramNotifier::new(telegram.bot_token.clone())),
        None => {
            warn!("Telegram token or chat ID missing, alerts will only be logged");
            Arc::new(LogOnlyNotifier)
        }
    };

    // Liveness comes up before any outbound call can block.
    let port = config.port;
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port).await {
            error!(error = %e, "Liveness server error");
        }
    });

    let poll_loop = PollLoop::new(
        RuntimeConfig::from(&config),
        source,
        notifier,
        TransitionTracker::new(config.transition_policy),
    )
    .with_engine(SignalEngine::new(SignalClassifier::new(config.thresholds)));
    let loop_handle = tokio::spawn(poll_loop.run());

    info!("Signal bot started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down signal bot...");
        }
        _ = server_handle => {
            error!("Liveness server stopped");
        }
        _ = loop_handle => {
            error!("Poll loop stopped");
        }
    }

    Ok(())
}
