//! Application configuration loaded from environment variables.
//!
//! Built at startup by the commands that need it and passed explicitly into
//! each component. The log level is resolved on its own so that offline
//! commands can start without a valid LLM configuration.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use dotenvy::dotenv;

use crate::error::{Result, ScoutError};
use crate::retry::RetryPolicy;

const DEFAULT_LOG_LEVEL: &str = "info";

/// LLM provider selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdapterType {
    #[default]
    Gemini,
}

impl FromStr for AdapterType {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            other => Err(ScoutError::Config(format!("Unknown adapter type: {}", other))),
        }
    }
}

impl fmt::Display for AdapterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gemini => write!(f, "gemini"),
        }
    }
}

/// Gemini provider settings.
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// Required only when an LLM-backed command runs
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: Option<String>,
    pub max_output_tokens: Option<u32>,
    /// 0.0 to 2.0
    pub temperature: Option<f32>,
    pub timeout: Duration,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            base_url: None,
            max_output_tokens: None,
            temperature: None,
            timeout: Duration::from_secs(300),
        }
    }
}

/// Fixed pauses between batch locations.
///
/// These are blind rate-limit guards, not driven by provider headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    pub sleep_success: Duration,
    pub sleep_error: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            sleep_success: Duration::from_secs(60),
            sleep_error: Duration::from_secs(180),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub adapter_type: AdapterType,
    pub gemini: GeminiSettings,
    /// DEBUG, INFO, WARN, ERROR
    pub log_level: String,
    pub retry: RetryPolicy,
    pub batch: BatchConfig,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read only `LOG_LEVEL` from the environment (and `.env` if present).
    pub fn log_level_from_env() -> String {
        let _ = dotenv();

        Self::log_level_from_lookup(|key| env::var(key).ok())
    }

    /// Resolve `LOG_LEVEL` alone, ignoring every other setting.
    pub fn log_level_from_lookup<F>(lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        non_blank(&lookup, "LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| non_blank(&lookup, key);

        let defaults = GeminiSettings::default();
        let gemini = GeminiSettings {
            api_key: get("GEMINI_API_KEY"),
            model: get("GEMINI_MODEL").unwrap_or(defaults.model),
            base_url: get("GEMINI_BASE_URL"),
            max_output_tokens: parse_opt(&get, "GEMINI_MAX_OUTPUT_TOKENS")?,
            temperature: parse_opt(&get, "GEMINI_TEMPERATURE")?,
            timeout: parse_opt(&get, "GEMINI_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        };

        let retry_defaults = RetryPolicy::default();
        let retry = RetryPolicy::new(
            parse_opt(&get, "RETRY_MAX_ATTEMPTS")?.unwrap_or(retry_defaults.max_attempts()),
        )
        .with_base_delay(
            parse_secs(&get, "RETRY_BASE_DELAY")?.unwrap_or(retry_defaults.base_delay()),
        )
        .with_max_delay(parse_secs(&get, "RETRY_MAX_DELAY")?.unwrap_or(retry_defaults.max_delay()))
        .with_exponential_base(
            parse_opt(&get, "RETRY_EXPONENTIAL_BASE")?
                .unwrap_or(retry_defaults.exponential_base()),
        );

        let batch_defaults = BatchConfig::default();
        let batch = BatchConfig {
            sleep_success: parse_opt(&get, "BATCH_SLEEP_SUCCESS")?
                .map(Duration::from_secs)
                .unwrap_or(batch_defaults.sleep_success),
            sleep_error: parse_opt(&get, "BATCH_SLEEP_ERROR")?
                .map(Duration::from_secs)
                .unwrap_or(batch_defaults.sleep_error),
        };

        Ok(Self {
            adapter_type: get("ADAPTER_TYPE")
                .map(|v| v.parse())
                .transpose()?
                .unwrap_or_default(),
            gemini,
            log_level: Self::log_level_from_lookup(&lookup),
            retry,
            batch,
        })
    }
}

fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}

fn parse_opt<T, G>(get: &G, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| ScoutError::Config(format!("{} is invalid ({}): {}", key, raw, e)))
        })
        .transpose()
}

/// Parse a non-negative number of seconds (fractions allowed).
fn parse_secs<G>(get: &G, key: &str) -> Result<Option<Duration>>
where
    G: Fn(&str) -> Option<String>,
{
    parse_opt::<f64, G>(get, key)?
        .map(|secs| {
            Duration::try_from_secs_f64(secs).map_err(|e| {
                ScoutError::Config(format!("{} must be a non-negative number of seconds: {}", key, e))
            })
        })
        .transpose()
}
