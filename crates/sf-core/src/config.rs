//! Configuration types and loading
//!
//! Values come from defaults, then `STOCKFLOW_*` environment variables. The binary
//! loads a `.env` file first and applies command-line overrides last.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main client configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the remote API (all endpoint paths are joined onto it)
    pub base_url: String,

    /// Per-request timeout
    pub request_timeout_seconds: u64,

    /// Backoff policy for list fetches
    pub retry: RetryConfig,

    /// Notification display settings
    pub notifications: NotificationConfig,

    /// Which id goes in the path of the production-article update endpoint
    pub production_article_key: ProductionArticleKey,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct RetryConfig {
    /// Automatic retries allowed after the first rate-limited attempt
    pub retries: u32,
    /// Delay before the first retry; doubled for every following one
    pub initial_delay_ms: u64,
}

impl RetryConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            retries: 3,
            initial_delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct NotificationConfig {
    pub duration_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { duration_ms: 4000 }
    }
}

/// Key used in `PUT /api/update_article/production/{id}`
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductionArticleKey {
    /// The allocation's own id
    AllocationId,
    /// The id of the allocated article
    #[default]
    ArticleId,
}

impl std::str::FromStr for ProductionArticleKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "allocation_id" | "id" => Ok(Self::AllocationId),
            "article_id" => Ok(Self::ArticleId),
            other => Err(ConfigError::InvalidValue {
                key: ENV_PRODUCTION_ARTICLE_KEY.to_string(),
                message: format!("expected allocation_id or article_id, got {:?}", other),
            }),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://192.168.100.5:8000/".to_string(),
            request_timeout_seconds: 30,
            retry: RetryConfig::default(),
            notifications: NotificationConfig::default(),
            production_article_key: ProductionArticleKey::default(),
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

pub const ENV_API_URL: &str = "STOCKFLOW_API_URL";
pub const ENV_REQUEST_TIMEOUT: &str = "STOCKFLOW_REQUEST_TIMEOUT";
pub const ENV_RETRIES: &str = "STOCKFLOW_RETRIES";
pub const ENV_RETRY_DELAY_MS: &str = "STOCKFLOW_RETRY_DELAY_MS";
pub const ENV_TOAST_DURATION_MS: &str = "STOCKFLOW_TOAST_DURATION_MS";
pub const ENV_PRODUCTION_ARTICLE_KEY: &str = "STOCKFLOW_PRODUCTION_ARTICLE_KEY";

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config.base_url = url;
        }
        if let Some(v) = lookup(ENV_REQUEST_TIMEOUT) {
            config.request_timeout_seconds = parse_number(ENV_REQUEST_TIMEOUT, &v)?;
        }
        if let Some(v) = lookup(ENV_RETRIES) {
            config.retry.retries = parse_number(ENV_RETRIES, &v)?;
        }
        if let Some(v) = lookup(ENV_RETRY_DELAY_MS) {
            config.retry.initial_delay_ms = parse_number(ENV_RETRY_DELAY_MS, &v)?;
        }
        if let Some(v) = lookup(ENV_TOAST_DURATION_MS) {
            config.notifications.duration_ms = parse_number(ENV_TOAST_DURATION_MS, &v)?;
        }
        if let Some(v) = lookup(ENV_PRODUCTION_ARTICLE_KEY) {
            config.production_article_key = v.parse()?;
        }

        tracing::debug!(base_url = %config.base_url, "loaded client configuration");
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn parse_number<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.retry.retries, 3);
        assert_eq!(config.retry.initial_delay(), Duration::from_millis(1000));
        assert_eq!(config.notifications.duration_ms, 4000);
        assert_eq!(config.production_article_key, ProductionArticleKey::ArticleId);
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "http://localhost:9000/"),
            (ENV_RETRIES, "5"),
            (ENV_RETRY_DELAY_MS, "250"),
            (ENV_PRODUCTION_ARTICLE_KEY, "allocation_id"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:9000/");
        assert_eq!(config.retry.retries, 5);
        assert_eq!(config.retry.initial_delay_ms, 250);
        assert_eq!(config.production_article_key, ProductionArticleKey::AllocationId);
        assert_eq!(config.request_timeout_seconds, 30);
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let result = ClientConfig::from_lookup(lookup_from(&[(ENV_RETRIES, "three")]));
        match result {
            Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, ENV_RETRIES),
            other => panic!("expected invalid value error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_key_is_rejected() {
        assert!("production".parse::<ProductionArticleKey>().is_err());
        assert_eq!(
            "id".parse::<ProductionArticleKey>().unwrap(),
            ProductionArticleKey::AllocationId
        );
    }
}
