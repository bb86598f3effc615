//! Live API tests. Run with: `cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use holiday_dash::{Client, Session};

#[test]
fn country_list_contains_germany() {
    let codes = Client::default().country_codes().unwrap();
    assert!(codes.iter().any(|c| c == "DE"));
}

#[test]
fn german_series_covers_eleven_years() {
    let session = Session::default();
    let series = session.holiday_series("DE").unwrap();
    assert_eq!(series.len(), 11);
    assert!(series.points().all(|(_, c)| c > 0));
}
