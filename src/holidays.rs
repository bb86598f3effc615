//! Year-by-year holiday count aggregation.

use crate::models::HolidaySeries;
use chrono::Datelike;
use std::ops::RangeInclusive;

/// Years before the current one included in a series.
pub const PREVIOUS_YEARS: i32 = 10;

/// Years accepted as the end of a window. The start stays well inside `i32`.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// Calendar year of the local clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// `[current_year - PREVIOUS_YEARS, current_year]`, 11 years.
///
/// `current_year` is clamped to `MIN_YEAR..=MAX_YEAR` so the window never overflows
/// and always has 11 entries.
pub fn year_window(current_year: i32) -> RangeInclusive<i32> {
    let end = current_year.clamp(MIN_YEAR, MAX_YEAR);
    (end - PREVIOUS_YEARS)..=end
}

/// Build the series for `country_code` by calling `count_for(year)` for every year of
/// the window, oldest first.
///
/// The first error stops the loop and is returned; there is no partial series.
pub fn aggregate<E, F>(country_code: &str, current_year: i32, mut count_for: F) -> Result<HolidaySeries, E>
where
    F: FnMut(i32) -> Result<usize, E>,
{
    let mut series = HolidaySeries::new(country_code);
    for year in year_window(current_year) {
        let count = count_for(year)?;
        series.insert(year, count);
    }
    Ok(series)
}
