//! Client configuration.
//!
//! A [`Config`] can be built in code, read from a JSON file, or taken from the
//! environment. In JSON the token may be a literal or a reference to an
//! environment variable, which keeps secrets out of configuration files:
//!
//! ```json
//! {
//!   "token": "$ROCKET_PAY_KEY",
//!   "testing_mode": false,
//!   "timeout_secs": 30
//! }
//! ```

use serde::Deserialize;
use std::fmt::{Debug, Formatter};
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// The static `Rocket-Pay-Key` token. Never printed by [`Debug`].
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for ApiToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

impl FromStr for ApiToken {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ApiToken::new(s))
    }
}

/// A transparent wrapper that resolves environment variables during deserialization.
///
/// Supports both literal values and environment variable references:
/// - Literal: `"a1b2c3"`
/// - Simple env var: `"$ROCKET_PAY_KEY"`
/// - Braced env var: `"${ROCKET_PAY_KEY}"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralOrEnv<T>(T);

impl<T> LiteralOrEnv<T> {
    pub fn from_literal(value: T) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> T {
        self.0
    }

    /// Returns the variable name if `s` is `$VAR` or `${VAR}`.
    fn parse_env_var_syntax(s: &str) -> Option<&str> {
        if let Some(inner) = s.strip_prefix("${").and_then(|rest| rest.strip_suffix('}')) {
            Some(inner)
        } else if let Some(name) = s.strip_prefix('$') {
            let valid = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_');
            valid.then_some(name)
        } else {
            None
        }
    }
}

impl<T> Deref for LiteralOrEnv<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de, T> Deserialize<'de> for LiteralOrEnv<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        let value = if let Some(var_name) = Self::parse_env_var_syntax(&s) {
            std::env::var(var_name).map_err(|_| {
                serde::de::Error::custom(format!(
                    "Environment variable '{}' not found (referenced as '{}')",
                    var_name, s
                ))
            })?
        } else {
            s
        };

        let parsed = value
            .parse::<T>()
            .map_err(|e| serde::de::Error::custom(format!("Failed to parse value: {}", e)))?;

        Ok(LiteralOrEnv(parsed))
    }
}

/// Settings for a [`RocketPayClient`](crate::client::RocketPayClient).
///
/// Missing fields fall back to environment variables, then to hardcoded defaults.
/// A zero timeout is never used; it is replaced by the 30 second default.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    token: LiteralOrEnv<ApiToken>,
    #[serde(default = "config_defaults::default_testing_mode")]
    testing_mode: bool,
    #[serde(
        rename = "timeout_secs",
        default = "config_defaults::default_timeout",
        deserialize_with = "deserialize_timeout_secs"
    )]
    timeout: Duration,
}

pub mod config_defaults {
    use std::env;
    use std::time::Duration;

    pub const ENV_TOKEN: &str = "ROCKET_PAY_KEY";
    pub const ENV_TESTING_MODE: &str = "ROCKET_PAY_TESTING_MODE";
    pub const ENV_TIMEOUT_SECS: &str = "ROCKET_PAY_TIMEOUT_SECS";

    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// $ROCKET_PAY_TESTING_MODE (`true`/`1`) -> false
    pub fn default_testing_mode() -> bool {
        env::var(ENV_TESTING_MODE)
            .ok()
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false)
    }

    /// $ROCKET_PAY_TIMEOUT_SECS -> 30
    pub fn default_timeout() -> Duration {
        let secs = env::var(ENV_TIMEOUT_SECS)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        non_zero_timeout(Duration::from_secs(secs))
    }

    /// Replaces a zero timeout with the default.
    pub fn non_zero_timeout(timeout: Duration) -> Duration {
        if timeout.is_zero() {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            timeout
        }
    }
}

fn deserialize_timeout_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let secs = u64::deserialize(deserializer)?;
    Ok(config_defaults::non_zero_timeout(Duration::from_secs(secs)))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {0}: {1}")]
    FileRead(PathBuf, std::io::Error),
    #[error("Failed to parse config file: {0}")]
    JsonParse(#[from] serde_json::Error),
    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),
}

impl Config {
    /// Production settings for `token` with the default timeout.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: LiteralOrEnv::from_literal(ApiToken::new(token)),
            testing_mode: false,
            timeout: Duration::from_secs(config_defaults::DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_testing_mode(mut self, testing_mode: bool) -> Self {
        self.testing_mode = testing_mode;
        self
    }

    /// Overall per-request timeout. `Duration::ZERO` restores the default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = config_defaults::non_zero_timeout(timeout);
        self
    }

    /// Reads the settings from the environment, loading `.env` first if present.
    ///
    /// `ROCKET_PAY_KEY` is required; `ROCKET_PAY_TESTING_MODE` and
    /// `ROCKET_PAY_TIMEOUT_SECS` are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let token = std::env::var(config_defaults::ENV_TOKEN)
            .map_err(|_| ConfigError::MissingEnv(config_defaults::ENV_TOKEN))?;
        Ok(Self {
            token: LiteralOrEnv::from_literal(ApiToken::new(token)),
            testing_mode: config_defaults::default_testing_mode(),
            timeout: config_defaults::default_timeout(),
        })
    }

    /// Loads the settings from a JSON file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::FileRead(path.to_path_buf(), e))?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn token(&self) -> &ApiToken {
        &self.token
    }

    pub fn testing_mode(&self) -> bool {
        self.testing_mode
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
