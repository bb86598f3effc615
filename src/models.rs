use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of the greeting API, e.g. `{"code":"fr","hello":"Salut"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Salutation {
    #[serde(default)]
    pub code: Option<String>,
    pub hello: String,
}

/// One entry of `AvailableCountries`.
///
/// v2 of the holiday API reports `{"key":"AD","value":"Andorra"}`; v3 renamed the
/// fields to `countryCode`/`name`. Both spellings are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    #[serde(alias = "countryCode")]
    pub key: String,
    #[serde(default, alias = "name")]
    pub value: Option<String>,
}

/// Holiday counts per year for one country, ascending by year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HolidaySeries {
    pub country_code: String,
    pub counts: BTreeMap<i32, usize>,
}

impl HolidaySeries {
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            counts: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, year: i32, count: usize) {
        self.counts.insert(year, count);
    }

    /// `(year, count)` pairs in ascending year order.
    pub fn points(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.counts.iter().map(|(y, c)| (*y, *c))
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.counts.keys().copied()
    }

    pub fn get(&self, year: i32) -> Option<usize> {
        self.counts.get(&year).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
