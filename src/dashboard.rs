//! One render pass of the dashboard, independent of the front end that shows it.
//!
//! The pass is linear: random IP, greeting, country list, selection, then (chart
//! variant) the holiday series for the selection. The first failing API call aborts the
//! pass and no [`Page`] is produced.

use crate::api::Result;
use crate::ip;
use crate::models::HolidaySeries;
use crate::session::Session;
use std::io::{self, Write};
use std::net::Ipv4Addr;

pub const HEADING: &str = "This is my new salutation";
pub const SELECT_LABEL: &str = "Select a country code";

/// Everything one pass produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub heading: String,
    pub ip: Ipv4Addr,
    pub greeting: String,
    pub country_codes: Vec<String>,
    pub selected: Option<String>,
    pub series: Option<HolidaySeries>,
}

impl Page {
    pub fn confirmation(&self) -> Option<String> {
        self.selected
            .as_deref()
            .map(|code| format!("You selected country code - {code}"))
    }

    /// Plain-text rendering used by the CLI.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.heading)?;
        writeln!(out, "{}", self.greeting)?;
        writeln!(out)?;
        writeln!(out, "{SELECT_LABEL}: {}", self.country_codes.join(", "))?;
        if let Some(line) = self.confirmation() {
            writeln!(out, "{line}")?;
        }
        if let Some(series) = &self.series {
            writeln!(out)?;
            write_series_table(series, out)?;
        }
        Ok(())
    }
}

/// `year  holidays` table, one row per year ascending.
pub fn write_series_table<W: Write>(series: &HolidaySeries, out: &mut W) -> io::Result<()> {
    writeln!(out, "year  holidays ({})", series.country_code)?;
    for (year, count) in series.points() {
        writeln!(out, "{year}  {count}")?;
    }
    Ok(())
}

pub struct Dashboard<'a> {
    session: &'a Session,
}

impl<'a> Dashboard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Run one pass with a freshly drawn IP.
    ///
    /// `selection` defaults to the first country code, like a select box with nothing
    /// picked yet. An empty country list yields no selection and no series, even when
    /// `selection` is given.
    pub fn render(&self, selection: Option<&str>, with_chart: bool) -> Result<Page> {
        self.render_for(ip::random_ipv4(), selection, with_chart)
    }

    /// Same as [`Dashboard::render`] with a fixed IP.
    pub fn render_for(
        &self,
        ip: Ipv4Addr,
        selection: Option<&str>,
        with_chart: bool,
    ) -> Result<Page> {
        log::info!("rendering dashboard for {ip}");
        let greeting = self.session.greeting(ip)?;
        let country_codes = self.session.country_codes()?;
        // An empty list leaves nothing to select, whatever was asked for.
        let selected = match country_codes.first() {
            None => None,
            Some(first) => Some(selection.map_or_else(|| first.clone(), str::to_string)),
        };
        let series = match (&selected, with_chart) {
            (Some(code), true) => Some(self.session.holiday_series(code)?),
            _ => None,
        };
        Ok(Page {
            heading: HEADING.to_string(),
            ip,
            greeting,
            country_codes,
            selected,
            series,
        })
    }
}
