use crate::models::HolidaySeries;
use serde::{Deserialize, Serialize};

/// Summary statistics over the yearly counts of one series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub country_code: String,
    pub years: usize,
    pub total: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub median: f64,
    /// Years reaching `max`, ascending.
    pub peak_years: Vec<i32>,
}

/// `None` for an empty series.
pub fn summarize(series: &HolidaySeries) -> Option<Summary> {
    let mut vals: Vec<usize> = series.points().map(|(_, c)| c).collect();
    if vals.is_empty() {
        return None;
    }
    vals.sort_unstable();
    let years = vals.len();
    let total: usize = vals.iter().sum();
    let min = vals[0];
    let max = vals[years - 1];
    let median = if years % 2 == 1 {
        vals[years / 2] as f64
    } else {
        (vals[years / 2 - 1] + vals[years / 2]) as f64 / 2.0
    };
    let peak_years = series
        .points()
        .filter(|(_, c)| *c == max)
        .map(|(y, _)| y)
        .collect();
    Some(Summary {
        country_code: series.country_code.clone(),
        years,
        total,
        min,
        max,
        mean: total as f64 / years as f64,
        median,
        peak_years,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(counts: &[(i32, usize)]) -> HolidaySeries {
        let mut s = HolidaySeries::new("XX");
        for (y, c) in counts {
            s.insert(*y, *c);
        }
        s
    }

    #[test]
    fn empty_series_has_no_summary() {
        assert_eq!(summarize(&HolidaySeries::new("XX")), None);
    }

    #[test]
    fn median_even_and_odd() {
        let odd = summarize(&series(&[(2018, 3), (2019, 9), (2020, 5)])).unwrap();
        assert_eq!(odd.median, 5.0);
        assert_eq!(odd.min, 3);
        assert_eq!(odd.max, 9);
        assert_eq!(odd.total, 17);
        assert_eq!(odd.peak_years, vec![2019]);

        let even = summarize(&series(&[(2018, 1), (2019, 4), (2020, 2), (2021, 4)])).unwrap();
        assert!((even.median - 3.0).abs() < 1e-9);
        assert!((even.mean - 2.75).abs() < 1e-9);
        assert_eq!(even.peak_years, vec![2019, 2021]);
    }
}
