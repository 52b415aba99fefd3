mod cache;
mod client;

pub use cache::LookupOutcome;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

use cache::LookupCache;

/// Fixed timeout on the single outbound GET.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
/// How long a lookup outcome is replayed before re-fetching.
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);

/// Current conditions for a property's ZIP code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temp: f64,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
    pub description: String,
    pub icon: String,
    pub wind_speed: Option<f64>,
    pub city_name: String,
}

/// Why a weather lookup produced nothing to display. These are data
/// values for the presentation layer, not panics; the lookup path never
/// unwinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherError {
    MissingApiKey,
    MissingZip,
    InvalidApiKey,
    ZipNotFound(String),
    IncompleteData,
    Api(String),
    Network(String),
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherError::MissingApiKey => write!(f, "Weather API key not configured."),
            WeatherError::MissingZip => write!(f, "ZIP code not provided."),
            WeatherError::InvalidApiKey => {
                write!(f, "Invalid API key. Check your weather provider credentials.")
            }
            WeatherError::ZipNotFound(zip) => {
                write!(f, "Weather data not found for ZIP code: {}.", zip)
            }
            WeatherError::IncompleteData => write!(f, "Incomplete weather data received."),
            WeatherError::Api(msg) => write!(f, "{}", msg),
            WeatherError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for WeatherError {}

/// Weather lookup with a per-ZIP memo of the last outcome.
///
/// The API key is optional by contract: a missing key surfaces as a
/// [`WeatherError::MissingApiKey`] outcome for the caller to display,
/// never as a startup failure.
pub struct WeatherService {
    client: reqwest::Client,
    api_key: Option<String>,
    timeout: Duration,
    cache: Mutex<LookupCache>,
}

impl WeatherService {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_settings(api_key, FETCH_TIMEOUT, DEFAULT_CACHE_TTL)
    }

    pub fn with_settings(api_key: Option<String>, timeout: Duration, cache_ttl: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            timeout,
            cache: Mutex::new(LookupCache::new(cache_ttl)),
        }
    }

    /// Build from loaded configuration (key resolution, TTL, timeout).
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::with_settings(
            config.weather_api_key(),
            config.weather_timeout(),
            config.weather_cache_ttl(),
        )
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Look up current conditions for a ZIP, replaying a fresh cached
    /// outcome (success or error) instead of re-fetching.
    pub async fn lookup(&self, zip_code: &str) -> LookupOutcome {
        let zip = zip_code.trim();
        if zip.is_empty() {
            return Err(WeatherError::MissingZip);
        }
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(WeatherError::MissingApiKey);
        };

        if let Some(cached) = self.cache.lock().unwrap().get(zip) {
            return cached;
        }

        let outcome = client::fetch_weather(&self.client, zip, api_key, self.timeout).await;
        self.cache.lock().unwrap().insert(zip, outcome.clone());
        outcome
    }

    /// Drop all memoized outcomes, forcing fresh fetches.
    pub fn clear_cache(&self) {
        self.cache.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_api_key_is_a_value() {
        let service = WeatherService::new(None);
        let outcome = service.lookup("22701").await;
        assert_eq!(outcome.unwrap_err(), WeatherError::MissingApiKey);
    }

    #[tokio::test]
    async fn test_missing_zip_is_a_value() {
        let service = WeatherService::new(Some("k".to_string()));
        assert_eq!(service.lookup("").await.unwrap_err(), WeatherError::MissingZip);
        assert_eq!(service.lookup("   ").await.unwrap_err(), WeatherError::MissingZip);
    }

    #[test]
    fn test_error_display_strings() {
        assert_eq!(
            WeatherError::ZipNotFound("22701".to_string()).to_string(),
            "Weather data not found for ZIP code: 22701."
        );
        assert_eq!(
            WeatherError::MissingApiKey.to_string(),
            "Weather API key not configured."
        );
        assert!(WeatherError::Network("timed out".to_string())
            .to_string()
            .starts_with("Network error:"));
    }

    #[test]
    fn test_has_api_key() {
        assert!(WeatherService::new(Some("k".to_string())).has_api_key());
        assert!(!WeatherService::new(None).has_api_key());
    }
}
