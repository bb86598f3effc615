//! Render a holiday series as a line chart to **SVG** or **PNG**.
//!
//! The output format follows the file extension: `.svg` uses the SVG backend, anything
//! else is written as a bitmap.

pub mod util;

use crate::models::HolidaySeries;
use anyhow::{Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::LineSeries;
use plotters::style::FontFamily;

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::Once;

use util::{AxisBounds, SERIES_COLOR, axis_bounds, year_label_count};

/// One-time registration for a fallback "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        if plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        )
        .is_err()
        {
            log::warn!("bundled chart font could not be registered");
        }
    });
}

/// Plot with the default caption, `Public holidays in <code>`.
pub fn plot_holidays<P: AsRef<Path>>(
    series: &HolidaySeries,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let title = format!("Public holidays in {}", series.country_code);
    plot_holidays_titled(series, out_path, width, height, &title)
}

/// Plot with a custom caption.
pub fn plot_holidays_titled<P: AsRef<Path>>(
    series: &HolidaySeries,
    out_path: P,
    width: u32,
    height: u32,
    title: &str,
) -> Result<()> {
    let bounds = axis_bounds(series).ok_or_else(|| anyhow!("no data to plot"))?;
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, series, bounds, title)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, series, bounds, title)?;
    }
    log::debug!("wrote chart to {}", out_path.display());
    Ok(())
}

/// Helper that draws to any Plotters backend.
fn draw_chart<DB>(
    root: DrawingArea<DB, Shift>,
    series: &HolidaySeries,
    bounds: AxisBounds,
    title: &str,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .caption(title, (FontFamily::SansSerif, 24))
        .set_label_area_size(LabelAreaPosition::Left, 56)
        .set_label_area_size(LabelAreaPosition::Bottom, 48)
        .build_cartesian_2d(
            bounds.min_year..bounds.max_year,
            bounds.min_count..bounds.max_count,
        )
        .map_err(|e| anyhow!("{:?}", e))?;

    let x_label_fmt = |y: &i32| y.to_string();
    let y_label_fmt = |v: &f64| format!("{:.0}", v);

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Holidays")
        .x_labels(year_label_count(&bounds))
        .y_labels(10)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let color = SERIES_COLOR;
    let points: Vec<(i32, f64)> = series.points().map(|(y, c)| (y, c as f64)).collect();

    chart
        .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
        .map_err(|e| anyhow!("{:?}", e))?
        .label(series.country_code.clone())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(2)));

    chart
        .draw_series(
            points
                .iter()
                .map(|(x, y)| Circle::new((*x, *y), 3, color.filled())),
        )
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .label_font((FontFamily::SansSerif, 14))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
