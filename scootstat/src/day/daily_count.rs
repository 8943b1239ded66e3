use super::YearMonth;
use chrono::{Datelike, NaiveDate, Weekday};
use itertools::Itertools;
use serde::Serialize;

/// number of trips started on one calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub month: YearMonth,
    pub date: NaiveDate,
    pub trips: usize,
}

impl DailyCount {
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

/// groups start dates by calendar date, sorted by date.
pub fn count_daily<I>(dates: I) -> Vec<DailyCount>
where
    I: IntoIterator<Item = NaiveDate>,
{
    dates
        .into_iter()
        .counts()
        .into_iter()
        .map(|(date, trips)| DailyCount {
            month: YearMonth::of(&date),
            date,
            trips,
        })
        .sorted_by_key(|c| c.date)
        .collect_vec()
}
