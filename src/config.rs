//! Endpoint and timeout settings.
//!
//! There is no config file: defaults point at the public APIs and each value can be
//! overridden through the environment (`HOLIDAY_DASH_*`), which is also how the tests
//! aim the binaries at a mock server.

use std::time::Duration;

/// Greeting API (`GET <base>/?ip=<ipv4>`).
pub const DEFAULT_SALUTATION_BASE: &str = "https://fourtonfish.com/hellosalut";
/// Nager.Date v2, serves `AvailableCountries`.
pub const DEFAULT_COUNTRIES_BASE: &str = "https://date.nager.at/api/v2";
/// Nager.Date v1, serves `Get/<code>/<year>`.
pub const DEFAULT_HOLIDAYS_BASE: &str = "https://date.nager.at/Api/v1";

pub const ENV_SALUTATION_URL: &str = "HOLIDAY_DASH_SALUTATION_URL";
pub const ENV_COUNTRIES_URL: &str = "HOLIDAY_DASH_COUNTRIES_URL";
pub const ENV_HOLIDAYS_URL: &str = "HOLIDAY_DASH_HOLIDAYS_URL";
pub const ENV_TIMEOUT_SECS: &str = "HOLIDAY_DASH_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub salutation_base: String,
    pub countries_base: String,
    pub holidays_base: String,
    /// Total request timeout.
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            salutation_base: DEFAULT_SALUTATION_BASE.into(),
            countries_base: DEFAULT_COUNTRIES_BASE.into(),
            holidays_base: DEFAULT_HOLIDAYS_BASE.into(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Defaults, overridden by any `HOLIDAY_DASH_*` variable that is set and non-empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Config::default();
        if let Some(v) = get(ENV_SALUTATION_URL) {
            cfg.salutation_base = v;
        }
        if let Some(v) = get(ENV_COUNTRIES_URL) {
            cfg.countries_base = v;
        }
        if let Some(v) = get(ENV_HOLIDAYS_URL) {
            cfg.holidays_base = v;
        }
        match get(ENV_TIMEOUT_SECS).map(|v| v.trim().parse::<u64>()) {
            Some(Ok(secs)) if secs > 0 => cfg.timeout = Duration::from_secs(secs),
            Some(_) => log::warn!("ignoring invalid {ENV_TIMEOUT_SECS}"),
            None => {}
        }
        cfg.normalized()
    }

    /// Use a single base URL for all three APIs (mock servers, proxies).
    pub fn with_base(base: &str) -> Self {
        Config {
            salutation_base: base.into(),
            countries_base: base.into(),
            holidays_base: base.into(),
            ..Config::default()
        }
        .normalized()
    }

    /// Trim whitespace and trailing slashes so paths can be appended with `/`.
    pub fn normalized(mut self) -> Self {
        for base in [
            &mut self.salutation_base,
            &mut self.countries_base,
            &mut self.holidays_base,
        ] {
            *base = base.trim().trim_end_matches('/').to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn lookup_overrides_defaults() {
        let vars: HashMap<&str, &str> = [
            (ENV_COUNTRIES_URL, "http://localhost:9000/v2/"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_HOLIDAYS_URL, "   "),
        ]
        .into_iter()
        .collect();
        let cfg = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.countries_base, "http://localhost:9000/v2");
        assert_eq!(cfg.salutation_base, DEFAULT_SALUTATION_BASE);
        assert_eq!(cfg.holidays_base, DEFAULT_HOLIDAYS_BASE);
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_timeout_keeps_default() {
        let cfg = Config::from_lookup(|k| (k == ENV_TIMEOUT_SECS).then(|| "soon".to_string()));
        assert_eq!(cfg.timeout, Config::default().timeout);
    }

    #[test]
    fn with_base_sets_every_endpoint() {
        let cfg = Config::with_base("http://127.0.0.1:1234/");
        assert_eq!(cfg.salutation_base, "http://127.0.0.1:1234");
        assert_eq!(cfg.countries_base, "http://127.0.0.1:1234");
        assert_eq!(cfg.holidays_base, "http://127.0.0.1:1234");
    }
}
