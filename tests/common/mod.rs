#![allow(dead_code)]

use holiday_dash::{Client, Config, Session};
use httpmock::prelude::*;
use serde_json::{Value, json};

pub fn session_for(server: &MockServer) -> Session {
    Session::new(Client::new(Config::with_base(&server.base_url())).unwrap())
}

/// `n` holiday objects shaped like the Nager.Date response.
pub fn holidays_body(year: i32, n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| {
                json!({
                    "date": format!("{year}-01-{:02}", i + 1),
                    "localName": format!("Feiertag {i}"),
                    "name": format!("Holiday {i}"),
                    "countryCode": "DE",
                    "fixed": true,
                    "global": true
                })
            })
            .collect(),
    )
}

pub fn countries_body(codes: &[(&str, &str)]) -> Value {
    Value::Array(
        codes
            .iter()
            .map(|(k, v)| json!({ "key": k, "value": v }))
            .collect(),
    )
}
