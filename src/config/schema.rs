use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable consulted before the config file for the key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Application configuration.
///
/// Everything is optional: the crate runs fully without a config file,
/// and a missing weather API key degrades to a displayable warning
/// rather than a startup failure.
///
/// Example YAML:
/// ```yaml
/// weather:
///   api_key: "0123abcd"
///   cache_ttl: "10m"
///   timeout: "10s"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub weather: WeatherConfig,
}

/// Weather provider settings. Durations are humantime strings ("10m").
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WeatherConfig {
    #[serde(default)]
    pub api_key: Option<String>,

    /// How long to replay a memoized lookup outcome (default: 10m).
    #[serde(default)]
    pub cache_ttl: Option<String>,

    /// Timeout on the outbound GET (default: 10s).
    #[serde(default)]
    pub timeout: Option<String>,
}

impl Config {
    /// Resolve the weather API key: environment first, then the config
    /// file. `None` means the weather panel shows a warning.
    pub fn weather_api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Some(key);
            }
        }
        self.weather.api_key.clone()
    }

    /// Cache TTL, falling back to the default on absent or malformed
    /// duration strings.
    pub fn weather_cache_ttl(&self) -> Duration {
        parse_duration_or(self.weather.cache_ttl.as_deref(), DEFAULT_CACHE_TTL)
    }

    /// Fetch timeout, same fallback behavior as the TTL.
    pub fn weather_timeout(&self) -> Duration {
        parse_duration_or(self.weather.timeout.as_deref(), DEFAULT_TIMEOUT)
    }
}

fn parse_duration_or(value: Option<&str>, default: Duration) -> Duration {
    value
        .and_then(|s| humantime::parse_duration(s.trim()).ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.weather.api_key, None);
        assert_eq!(config.weather_cache_ttl(), Duration::from_secs(600));
        assert_eq!(config.weather_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
weather:
  api_key: "0123abcd"
  cache_ttl: "5m"
  timeout: "30s"
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.weather.api_key.as_deref(), Some("0123abcd"));
        assert_eq!(config.weather_cache_ttl(), Duration::from_secs(300));
        assert_eq!(config.weather_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_config_parse() {
        let yaml = r#"
weather:
  api_key: "0123abcd"
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.weather.api_key.as_deref(), Some("0123abcd"));
        assert_eq!(config.weather_cache_ttl(), Duration::from_secs(600));
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_duration_falls_back() {
        let yaml = r#"
weather:
  cache_ttl: "sometimes"
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.weather_cache_ttl(), Duration::from_secs(600));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            weather: WeatherConfig {
                api_key: Some("0123abcd".to_string()),
                cache_ttl: Some("10m".to_string()),
                timeout: Some("10s".to_string()),
            },
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
