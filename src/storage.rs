use crate::models::HolidaySeries;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a series as CSV with header, one row per year ascending.
pub fn save_csv<P: AsRef<Path>>(series: &HolidaySeries, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("country_code", "year", "holidays"))?;
    for (year, count) in series.points() {
        wtr.serialize((&series.country_code, year, count))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save a series as pretty JSON.
pub fn save_json<P: AsRef<Path>>(series: &HolidaySeries, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(series)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let mut series = HolidaySeries::new("FR");
        series.insert(2020, 11);
        save_csv(&series, &csvp).unwrap();
        save_json(&series, &jsonp).unwrap();
        assert!(csvp.exists());
        assert!(jsonp.exists());
    }
}
