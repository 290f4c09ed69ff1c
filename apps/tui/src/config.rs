use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_SEARCH_URL: &str = "http://127.0.0.1:5001/search";
pub const DEFAULT_CITY: &str = "Washington, DC";
pub const DEFAULT_RADIUS_KM: f64 = 5.0;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILE: &str = "infra_risk_map.log";

/// Runtime settings resolved from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub search_url: String,
    pub default_city: String,
    pub default_radius_km: f64,
    pub request_timeout: Duration,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            default_city: DEFAULT_CITY.to_string(),
            default_radius_km: DEFAULT_RADIUS_KM,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Loads `.env` if present, then reads the `INFRA_*` variables.
pub fn init_app_config() -> AppConfig {
    dotenv().ok();
    config_from_lookup(|key| env::var(key).ok())
}

/// Builds a config from an arbitrary variable lookup. Unparseable numbers
/// fall back to their defaults.
pub fn config_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppConfig {
    let defaults = AppConfig::default();

    let search_url = lookup("INFRA_SEARCH_URL")
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(defaults.search_url);

    let default_city = lookup("INFRA_DEFAULT_CITY")
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(defaults.default_city);

    let default_radius_km = lookup("INFRA_DEFAULT_RADIUS_KM").map_or(
        defaults.default_radius_km,
        |raw| match raw.trim().parse::<f64>() {
            Ok(radius) if radius.is_finite() && radius > 0.0 => radius,
            _ => {
                warn!(value = %raw, "ignoring invalid INFRA_DEFAULT_RADIUS_KM");
                defaults.default_radius_km
            }
        },
    );

    let request_timeout = lookup("INFRA_REQUEST_TIMEOUT_SECS").map_or(
        defaults.request_timeout,
        |raw| match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                warn!(value = %raw, "ignoring invalid INFRA_REQUEST_TIMEOUT_SECS");
                defaults.request_timeout
            }
        },
    );

    let log_file = lookup("INFRA_LOG_FILE").map_or(defaults.log_file, PathBuf::from);

    AppConfig {
        search_url,
        default_city,
        default_radius_km,
        request_timeout,
        log_file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from_lookup(lookup(&[])), AppConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from_lookup(lookup(&[
            ("INFRA_SEARCH_URL", "http://example.test/search"),
            ("INFRA_DEFAULT_CITY", "Baltimore"),
            ("INFRA_DEFAULT_RADIUS_KM", "2.5"),
            ("INFRA_REQUEST_TIMEOUT_SECS", "5"),
            ("INFRA_LOG_FILE", "/tmp/map.log"),
        ]));

        assert_eq!(config.search_url, "http://example.test/search");
        assert_eq!(config.default_city, "Baltimore");
        assert!((config.default_radius_km - 2.5).abs() < f64::EPSILON);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.log_file, PathBuf::from("/tmp/map.log"));
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let config = config_from_lookup(lookup(&[
            ("INFRA_DEFAULT_RADIUS_KM", "far"),
            ("INFRA_REQUEST_TIMEOUT_SECS", "0"),
        ]));
        assert!((config.default_radius_km - DEFAULT_RADIUS_KM).abs() < f64::EPSILON);
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
