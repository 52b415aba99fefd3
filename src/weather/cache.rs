use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::{WeatherError, WeatherReport};

/// Outcome of one weather lookup, success or displayable failure.
pub type LookupOutcome = Result<WeatherReport, WeatherError>;

struct CachedLookup {
    fetched_at: Instant,
    outcome: LookupOutcome,
}

/// In-memory per-ZIP memo of the last lookup outcome. Both successes
/// and errors are replayed until the entry goes stale; nothing is
/// persisted.
pub struct LookupCache {
    entries: HashMap<String, CachedLookup>,
    ttl: Duration,
}

impl LookupCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Return the cached outcome for a ZIP if it is still fresh.
    pub fn get(&self, zip: &str) -> Option<LookupOutcome> {
        let entry = self.entries.get(zip)?;
        if entry.fetched_at.elapsed() < self.ttl {
            Some(entry.outcome.clone())
        } else {
            None
        }
    }

    pub fn insert(&mut self, zip: &str, outcome: LookupOutcome) {
        self.entries.insert(
            zip.to_string(),
            CachedLookup {
                fetched_at: Instant::now(),
                outcome,
            },
        );
    }

    /// Drop every entry, forcing fresh fetches.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> WeatherReport {
        WeatherReport {
            temp: 72.5,
            feels_like: Some(74.0),
            humidity: Some(40.0),
            description: "Clear sky".to_string(),
            icon: "01d".to_string(),
            wind_speed: Some(4.6),
            city_name: "Culpeper".to_string(),
        }
    }

    #[test]
    fn test_fresh_entry_is_replayed() {
        let mut cache = LookupCache::new(Duration::from_secs(600));
        cache.insert("22701", Ok(report()));

        let hit = cache.get("22701").expect("entry should be fresh");
        assert_eq!(hit.unwrap().city_name, "Culpeper");
    }

    #[test]
    fn test_error_outcomes_are_cached_too() {
        let mut cache = LookupCache::new(Duration::from_secs(600));
        cache.insert("00000", Err(WeatherError::ZipNotFound("00000".to_string())));

        let hit = cache.get("00000").expect("entry should be fresh");
        assert_eq!(hit.unwrap_err(), WeatherError::ZipNotFound("00000".to_string()));
    }

    #[test]
    fn test_zero_ttl_is_always_stale() {
        let mut cache = LookupCache::new(Duration::ZERO);
        cache.insert("22701", Ok(report()));
        assert!(cache.get("22701").is_none());
    }

    #[test]
    fn test_miss_on_unknown_zip() {
        let cache = LookupCache::new(Duration::from_secs(600));
        assert!(cache.get("99999").is_none());
    }

    #[test]
    fn test_clear_drops_entries() {
        let mut cache = LookupCache::new(Duration::from_secs(600));
        cache.insert("22701", Ok(report()));
        cache.clear();
        assert!(cache.get("22701").is_none());
    }
}
