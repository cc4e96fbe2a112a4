//! Runtime configuration.
//!
//! Defaults point at the published sheet; the CLI reads overrides from the
//! environment (and a `.env` file) through [`Config::from_env`].

use std::time::Duration;

use crate::ingest::FallbackPolicy;

/// Google Sheets id of the listings spreadsheet.
pub const SHEET_ID: &str = "1pOObxqnLmQCgex1g6tFWZ_wgH3mUanl5TvHKOTyzF8E";

/// Request timeout when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_SHEET_URL: &str = "LISTINGS_SHEET_URL";
pub const ENV_TIMEOUT_SECS: &str = "LISTINGS_TIMEOUT_SECS";
pub const ENV_STRICT: &str = "LISTINGS_STRICT";

/// CSV export URL of a Google Sheet.
pub fn sheet_export_url(sheet_id: &str) -> String {
    format!("https://docs.google.com/spreadsheets/d/{}/export?format=csv", sheet_id)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub sheet_url: String,
    pub timeout: Duration,
    pub policy: FallbackPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_url: sheet_export_url(SHEET_ID),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            policy: FallbackPolicy::Substitute,
        }
    }
}

impl Config {
    pub fn with_sheet_url(mut self, url: impl Into<String>) -> Self {
        self.sheet_url = url.into();
        self
    }

    pub fn with_policy(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build from `LISTINGS_*` variables, after loading `.env` if present.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, crate::error::ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, crate::error::ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        use crate::error::ConfigError;

        let mut config = Self::default();

        if let Some(url) = lookup(ENV_SHEET_URL).filter(|v| !v.trim().is_empty()) {
            config.sheet_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: ENV_TIMEOUT_SECS.to_string(),
                    value: raw.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup(ENV_STRICT) {
            config.policy = match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => FallbackPolicy::Fail,
                "0" | "false" | "no" | "" => FallbackPolicy::Substitute,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_STRICT.to_string(),
                        value: raw,
                    })
                }
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert!(config.sheet_url.contains(SHEET_ID));
        assert!(config.sheet_url.ends_with("export?format=csv"));
        assert_eq!(config.policy, FallbackPolicy::Substitute);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (ENV_SHEET_URL, "https://example.org/listings.csv"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_STRICT, "true"),
        ]))
        .unwrap();

        assert_eq!(config.sheet_url, "https://example.org/listings.csv");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.policy, FallbackPolicy::Fail);
    }

    #[test]
    fn test_invalid_timeout() {
        let err = Config::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT_SECS));

        assert!(Config::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "0")])).is_err());
    }

    #[test]
    fn test_invalid_strict_flag() {
        assert!(Config::from_lookup(lookup(&[(ENV_STRICT, "maybe")])).is_err());
    }

    #[test]
    fn test_blank_url_keeps_default() {
        let config = Config::from_lookup(lookup(&[(ENV_SHEET_URL, "  ")])).unwrap();
        assert_eq!(config.sheet_url, sheet_export_url(SHEET_ID));
    }
}
