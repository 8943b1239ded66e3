use super::YearMonth;
use chrono::NaiveDate;
use serde::Serialize;

/// the chosen day of one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RepresentativeDay {
    pub month: YearMonth,
    pub date: NaiveDate,
    pub trips: usize,
    /// mean daily trips over the candidate days of the month
    pub monthly_mean: f64,
    /// true when the candidates came from the fallback weekdays
    pub fallback: bool,
}

impl RepresentativeDay {
    pub fn deviation(&self) -> f64 {
        (self.trips as f64 - self.monthly_mean).abs()
    }
}
