//! Memoized view of [`Client`] for the lifetime of one process.
//!
//! Greetings are cached per IP, the country list once, holiday counts per
//! `(country, year)` and whole series per `(country, current_year)`.

use crate::api::{Client, Result};
use crate::cache::Memo;
use crate::holidays;
use crate::models::HolidaySeries;
use std::net::Ipv4Addr;

#[derive(Debug, Default)]
pub struct Session {
    client: Client,
    greetings: Memo<Ipv4Addr, String>,
    countries: Memo<(), Vec<String>>,
    counts: Memo<(String, i32), usize>,
    series: Memo<(String, i32), HolidaySeries>,
}

impl Session {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            greetings: Memo::new(),
            countries: Memo::new(),
            counts: Memo::new(),
            series: Memo::new(),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn greeting(&self, ip: Ipv4Addr) -> Result<String> {
        self.greetings
            .get_or_try_insert_with(ip, || self.client.salutation(ip))
    }

    pub fn country_codes(&self) -> Result<Vec<String>> {
        self.countries
            .get_or_try_insert_with((), || self.client.country_codes())
    }

    pub fn holiday_count(&self, country_code: &str, year: i32) -> Result<usize> {
        let key = (country_code.to_string(), year);
        self.counts
            .get_or_try_insert_with(key, || self.client.holiday_count(country_code, year))
    }

    /// Series ending at the current calendar year.
    pub fn holiday_series(&self, country_code: &str) -> Result<HolidaySeries> {
        self.holiday_series_for(country_code, holidays::current_year())
    }

    /// Series for the window ending at `current_year`.
    pub fn holiday_series_for(&self, country_code: &str, current_year: i32) -> Result<HolidaySeries> {
        self.series
            .get_or_try_insert_with((country_code.to_string(), current_year), || {
                holidays::aggregate(country_code, current_year, |year| {
                    self.holiday_count(country_code, year)
                })
            })
    }

    /// Number of distinct `(country, year)` counts fetched so far.
    pub fn cached_counts(&self) -> usize {
        self.counts.len()
    }
}
