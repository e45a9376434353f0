//! Startup configuration.
//!
//! Built once from the process environment (after `.env` is loaded) and an
//! optional YAML file, then shared read-only. Precedence: env > file >
//! defaults.

use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

use crate::error::ConfigError;
use crate::models::timeframe::Timeframe;
use crate::services::kraken::KRAKEN_BASE_URL;
use crate::signals::classifier::ClassifierThresholds;
use crate::signals::tracker::TransitionPolicy;

pub const DEFAULT_SYMBOL: &str = "XBT/USD";
pub const DEFAULT_CANDLES: usize = 300;
pub const DEFAULT_POLL_SECONDS: u64 = 30;
pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Deployment environment name (`APP_ENV`), `sandbox` when unset.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

/// Fixed take-profit / stop-loss annotations appended to alerts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlertConfig {
    #[serde(default = "default_take_profits")]
    pub take_profit_pct: Vec<f64>,
    #[serde(default = "default_stop_loss")]
    pub stop_loss_pct: f64,
}

fn default_take_profits() -> Vec<f64> {
    vec![0.5, 1.0, 2.0]
}

fn default_stop_loss() -> f64 {
    0.5
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            take_profit_pct: default_take_profits(),
            stop_loss_pct: default_stop_loss(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub candles: usize,
    pub poll_interval: Duration,
    pub port: u16,
    pub kraken_base_url: String,
    /// `None` when either credential is missing: alerts go to the log only.
    pub telegram: Option<TelegramConfig>,
    pub alerts: AlertConfig,
    pub transition_policy: TransitionPolicy,
    pub thresholds: ClassifierThresholds,
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            timeframe: Timeframe::default(),
            candles: DEFAULT_CANDLES,
            poll_interval: Duration::from_secs(DEFAULT_POLL_SECONDS),
            port: DEFAULT_PORT,
            kraken_base_url: KRAKEN_BASE_URL.to_string(),
            telegram: None,
            alerts: AlertConfig::default(),
            transition_policy: TransitionPolicy::default(),
            thresholds: ClassifierThresholds::default(),
            environment: "sandbox".to_string(),
        }
    }
}

/// YAML layout, e.g.
///
/// ```yaml
/// telegram:
///   bot_token: "123:abc"
///   chat_id: 42
/// kraken:
///   symbol: XBT/USD
///   timeframe: 5m
///   candles: 300
/// poll_seconds: 30
/// signals:
///   rsi_overbought: 70
///   rsi_oversold: 30
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub telegram: TelegramSection,
    pub kraken: KrakenSection,
    pub poll_seconds: Option<u64>,
    pub port: Option<u16>,
    pub alerts: Option<AlertConfig>,
    pub rearm_on_none: Option<bool>,
    pub signals: SignalsSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignalsSection {
    pub rsi_overbought: Option<f64>,
    pub rsi_oversold: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TelegramSection {
    pub bot_token: Option<String>,
    pub chat_id: Option<ChatId>,
}

/// Telegram chat ids are often written as bare numbers in YAML.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatId::Number(n) => write!(f, "{}", n),
            ChatId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KrakenSection {
    pub symbol: Option<String>,
    pub timeframe: Option<String>,
    pub candles: Option<usize>,
    pub base_url: Option<String>,
}

impl FileConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read `path`; a missing file yields `None`.
    pub fn read_optional<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => Self::from_yaml(&content).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::Io(e)),
        }
    }
}

impl Config {
    /// Load from the process environment and the YAML file named by
    /// `CONFIG_PATH` (default `config.yaml`).
    pub fn load() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = env::vars().collect();
        let path = vars
            .get("CONFIG_PATH")
            .cloned()
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        let file = match FileConfig::read_optional(&path)? {
            Some(file) => file,
            None => {
                warn!(path = %path, "Config file not found, using environment variables");
                FileConfig::default()
            }
        };

        Self::from_sources(&vars, file)
    }

    pub fn from_sources(vars: &HashMap<String, String>, file: FileConfig) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let symbol = lookup(vars, "SYMBOL")
            .map(str::to_string)
            .or(file.kraken.symbol)
            .unwrap_or(defaults.symbol);

        let timeframe_raw = lookup(vars, "TIMEFRAME")
            .map(str::to_string)
            .or(file.kraken.timeframe);
        let timeframe = match timeframe_raw {
            Some(raw) => raw.parse().map_err(|reason| ConfigError::Invalid {
                key: "TIMEFRAME",
                value: raw.clone(),
                reason,
            })?,
            None => defaults.timeframe,
        };

        let candles = parse_var::<usize>(vars, "CANDLES")?
            .or(file.kraken.candles)
            .unwrap_or(defaults.candles);
        if candles == 0 {
            return Err(invalid("CANDLES", "0", "must be greater than zero"));
        }

        let poll_seconds = parse_var::<u64>(vars, "POLL_SECONDS")?
            .or(file.poll_seconds)
            .unwrap_or(DEFAULT_POLL_SECONDS);
        if poll_seconds == 0 {
            return Err(invalid("POLL_SECONDS", "0", "must be greater than zero"));
        }

        let port = parse_var::<u16>(vars, "PORT")?
            .or(file.port)
            .unwrap_or(defaults.port);

        let kraken_base_url = lookup(vars, "KRAKEN_BASE_URL")
            .map(str::to_string)
            .or(file.kraken.base_url)
            .unwrap_or(defaults.kraken_base_url);
        if let Err(e) = url::Url::parse(&kraken_base_url) {
            return Err(invalid("KRAKEN_BASE_URL", &kraken_base_url, &e.to_string()));
        }

        let bot_token = lookup(vars, "TELEGRAM_BOT_TOKEN")
            .map(str::to_string)
            .or(file.telegram.bot_token);
        let chat_id = lookup(vars, "TELEGRAM_CHAT_ID")
            .map(str::to_string)
            .or(file.telegram.chat_id.map(|id| id.to_string()));
        let telegram = match (bot_token, chat_id) {
            (Some(bot_token), Some(chat_id)) => Some(TelegramConfig { bot_token, chat_id }),
            _ => None,
        };

        let mut alerts = file.alerts.unwrap_or_default();
        if let Some(raw) = lookup(vars, "TAKE_PROFIT_PCT") {
            alerts.take_profit_pct = raw
                .split(',')
                .map(|part| part.trim().parse::<f64>())
                .collect::<Result<_, _>>()
                .map_err(|e| invalid("TAKE_PROFIT_PCT", raw, &e.to_string()))?;
        }
        if let Some(stop_loss) = parse_var::<f64>(vars, "STOP_LOSS_PCT")? {
            alerts.stop_loss_pct = stop_loss;
        }
        if alerts.take_profit_pct.iter().any(|p| !p.is_finite() || *p < 0.0)
            || !alerts.stop_loss_pct.is_finite()
            || alerts.stop_loss_pct < 0.0
        {
            return Err(invalid(
                "alerts",
                &format!("{:?}", alerts),
                "percentages must be non-negative",
            ));
        }

        let rearm = match lookup(vars, "REARM_ON_NONE") {
            Some(raw) => parse_bool(raw).ok_or_else(|| invalid("REARM_ON_NONE", raw, "expected a boolean"))?,
            None => file.rearm_on_none.unwrap_or(false),
        };
        let transition_policy = if rearm {
            TransitionPolicy::RearmOnNone
        } else {
            TransitionPolicy::Sticky
        };

        let thresholds = ClassifierThresholds {
            rsi_overbought: parse_var::<f64>(vars, "RSI_OVERBOUGHT")?
                .or(file.signals.rsi_overbought)
                .unwrap_or(defaults.thresholds.rsi_overbought),
            rsi_oversold: parse_var::<f64>(vars, "RSI_OVERSOLD")?
                .or(file.signals.rsi_oversold)
                .unwrap_or(defaults.thresholds.rsi_oversold),
        };
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(thresholds.rsi_overbought)
            || !in_range(thresholds.rsi_oversold)
            || thresholds.rsi_oversold >= thresholds.rsi_overbought
        {
            return Err(invalid(
                "RSI_OVERBOUGHT/RSI_OVERSOLD",
                &format!("{}/{}", thresholds.rsi_overbought, thresholds.rsi_oversold),
                "need 0 <= oversold < overbought <= 100",
            ));
        }

        let environment = lookup(vars, "APP_ENV")
            .map(str::to_string)
            .unwrap_or(defaults.environment);

        Ok(Self {
            symbol,
            timeframe,
            candles,
            poll_interval: Duration::from_secs(poll_seconds),
            port,
            kraken_base_url,
            telegram,
            alerts,
            transition_policy,
            thresholds,
            environment,
        })
    }

    /// Notification destination: the Telegram chat id, or `log`.
    pub fn notify_destination(&self) -> &str {
        self.telegram
            .as_ref()
            .map(|t| t.chat_id.as_str())
            .unwrap_or("log")
    }
}

/// Non-empty variable value.
fn lookup<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn parse_var<T>(vars: &HashMap<String, String>, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(vars, key)
        .map(|raw| raw.parse::<T>().map_err(|e| invalid(key, raw, &e.to_string())))
        .transpose()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(key: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
