//! Shared chart helpers: colors and axis ranges.

use crate::models::HolidaySeries;
use plotters::prelude::*;

/// Series line color, the first entry of the Office (2013+) chart palette (#4472C4).
pub const SERIES_COLOR: RGBColor = RGBColor(68, 114, 196);

/// Plot ranges for one series. Y always starts at zero since counts are non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min_year: i32,
    pub max_year: i32,
    pub min_count: f64,
    pub max_count: f64,
}

impl AxisBounds {
    pub fn year_span(&self) -> i32 {
        self.max_year - self.min_year
    }
}

/// `None` for an empty series. A single year is padded by one on each side and the
/// Y range gets one count of headroom so the line never sits on the frame.
pub fn axis_bounds(series: &HolidaySeries) -> Option<AxisBounds> {
    let mut years = series.years();
    let first = years.next()?;
    let last = years.last().unwrap_or(first);
    let (min_year, max_year) = if first == last {
        (first - 1, last + 1)
    } else {
        (first, last)
    };
    let max = series.points().map(|(_, c)| c).max().unwrap_or(0);
    Some(AxisBounds {
        min_year,
        max_year,
        min_count: 0.0,
        max_count: max as f64 + 1.0,
    })
}

/// At most 12 year labels to avoid overlap.
pub fn year_label_count(bounds: &AxisBounds) -> usize {
    ((bounds.year_span() + 1) as usize).min(12)
}
