mod common;

use common::{countries_body, holidays_body, session_for};
use holiday_dash::Dashboard;
use holiday_dash::dashboard::HEADING;
use holiday_dash::holidays::{current_year, year_window};
use httpmock::prelude::*;
use serde_json::json;
use std::net::Ipv4Addr;

#[test]
fn full_pass_selects_first_code_and_charts_it() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/").query_param("ip", "8.8.4.4");
        then.status(200).json_body(json!({ "code": "en", "hello": "Hello" }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/AvailableCountries");
        then.status(200)
            .json_body(countries_body(&[("GB", "United Kingdom"), ("IE", "Ireland")]));
    });
    for year in year_window(current_year()) {
        server.mock(|when, then| {
            when.method(GET).path(format!("/Get/GB/{year}"));
            then.status(200).json_body(holidays_body(year, 8));
        });
    }

    let session = session_for(&server);
    let page = Dashboard::new(&session)
        .render_for(Ipv4Addr::new(8, 8, 4, 4), None, true)
        .unwrap();

    assert_eq!(page.heading, HEADING);
    assert_eq!(page.greeting, "Hello");
    assert_eq!(page.country_codes, vec!["GB", "IE"]);
    assert_eq!(page.selected.as_deref(), Some("GB"));
    assert_eq!(
        page.confirmation().as_deref(),
        Some("You selected country code - GB")
    );
    let series = page.series.unwrap();
    assert_eq!(series.len(), 11);
    assert!(series.points().all(|(_, c)| c == 8));
}

#[test]
fn chartless_pass_fetches_no_holidays() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).json_body(json!({ "hello": "Hola" }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/AvailableCountries");
        then.status(200).json_body(countries_body(&[("ES", "Spain")]));
    });
    let holidays = server.mock(|when, then| {
        when.method(GET).path_contains("/Get/");
        then.status(200).json_body(json!([]));
    });

    let session = session_for(&server);
    let page = Dashboard::new(&session).render(Some("ES"), false).unwrap();
    assert_eq!(page.selected.as_deref(), Some("ES"));
    assert!(page.series.is_none());
    holidays.assert_hits(0);
}

#[test]
fn empty_country_list_renders_without_selection() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).json_body(json!({ "hello": "Hi" }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/AvailableCountries");
        then.status(200).json_body(json!([]));
    });

    let session = session_for(&server);
    let page = Dashboard::new(&session).render(None, true).unwrap();
    assert!(page.country_codes.is_empty());
    assert_eq!(page.selected, None);
    assert_eq!(page.confirmation(), None);
    assert_eq!(page.series, None);
}

#[test]
fn empty_country_list_ignores_requested_selection() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).json_body(json!({ "hello": "Hi" }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/AvailableCountries");
        then.status(200).json_body(json!([]));
    });
    let holidays = server.mock(|when, then| {
        when.method(GET).path_contains("/Get/");
        then.status(200).json_body(json!([]));
    });

    let session = session_for(&server);
    let page = Dashboard::new(&session).render(Some("DE"), true).unwrap();
    assert_eq!(page.selected, None);
    assert_eq!(page.confirmation(), None);
    assert_eq!(page.series, None);
    holidays.assert_hits(0);
}

#[test]
fn failing_country_list_aborts_the_pass() {
    let server = MockServer::start();
    let greet = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).json_body(json!({ "hello": "Ciao" }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/AvailableCountries");
        then.status(500);
    });
    let holidays = server.mock(|when, then| {
        when.method(GET).path_contains("/Get/");
        then.status(200).json_body(json!([]));
    });

    let session = session_for(&server);
    let err = Dashboard::new(&session)
        .render(Some("IT"), true)
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    greet.assert_hits(1);
    holidays.assert_hits(0);
}

#[test]
fn failing_greeting_stops_before_countries() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(404);
    });
    let countries = server.mock(|when, then| {
        when.method(GET).path("/AvailableCountries");
        then.status(200).json_body(countries_body(&[("PT", "Portugal")]));
    });

    let session = session_for(&server);
    assert!(Dashboard::new(&session).render(None, true).is_err());
    countries.assert_hits(0);
}
