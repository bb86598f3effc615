//! Blocking client for the two public APIs behind the dashboard:
//!
//! - **hellosalut**: `GET <salutation-base>/?ip=<ipv4>` returns a localized greeting.
//! - **Nager.Date**: `GET <countries-base>/AvailableCountries` lists country codes and
//!   `GET <holidays-base>/Get/<code>/<year>` lists the public holidays of one year.
//!
//! Every call is a single GET. A network error, a non-success status or an undecodable
//! body all surface as the one error kind [`ApiError`]; nothing is retried.
//!
//! [`Client`] does not cache; see [`crate::session::Session`] for the memoized view.
//!
//! ```no_run
//! # use holiday_dash::Client;
//! let client = Client::default();
//! let codes = client.country_codes()?;
//! let count = client.holiday_count(&codes[0], 2020)?;
//! # Ok::<(), holiday_dash::ApiError>(())
//! ```
use crate::config::Config;
use crate::models::{Country, Salutation};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::net::Ipv4Addr;
use thiserror::Error;

/// An external API call failed: transport error, non-success HTTP status or bad JSON.
#[derive(Debug, Error)]
#[error("GET {url} failed")]
pub struct ApiError {
    pub url: String,
    #[source]
    pub source: reqwest::Error,
}

impl ApiError {
    /// HTTP status when the server answered with a non-success code.
    pub fn status(&self) -> Option<StatusCode> {
        self.source.status()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Config::default()).expect("reqwest client build")
    }
}

// Country codes go into a path segment; keep -, _ and . readable.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn segment(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s.trim(), SEGMENT).to_string()
}

impl Client {
    pub fn new(config: Config) -> reqwest::Result<Self> {
        let config = config.normalized();
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(Policy::limited(5))
            .user_agent(concat!("holiday-dash/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        log::debug!("GET {url}");
        match self
            .http
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json::<T>())
        {
            Ok(body) => Ok(body),
            Err(source) => Err(ApiError { url, source }),
        }
    }

    /// Greeting in the language associated with `ip`, returned exactly as the API sends it.
    pub fn salutation(&self, ip: Ipv4Addr) -> Result<String> {
        let url = format!("{}/?ip={}", self.config.salutation_base, ip);
        let body: Salutation = self.get_json(url)?;
        Ok(body.hello)
    }

    /// Countries supported by the holiday API, in response order.
    pub fn available_countries(&self) -> Result<Vec<Country>> {
        let url = format!("{}/AvailableCountries", self.config.countries_base);
        self.get_json(url)
    }

    /// Just the codes of [`Client::available_countries`], order preserved.
    pub fn country_codes(&self) -> Result<Vec<String>> {
        Ok(self
            .available_countries()?
            .into_iter()
            .map(|c| c.key)
            .collect())
    }

    /// Number of public holidays the API lists for `country_code` in `year`.
    pub fn holiday_count(&self, country_code: &str, year: i32) -> Result<usize> {
        let url = format!(
            "{}/Get/{}/{}",
            self.config.holidays_base,
            segment(country_code),
            year
        );
        let holidays: Vec<IgnoredAny> = self.get_json(url)?;
        Ok(holidays.len())
    }
}
