use crate::day::YearMonth;
use crate::model::{Operator, Trip};
use chrono::{Datelike, Weekday};
use itertools::Itertools;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashSet};
use std::fmt::Display;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// an ISO 8601 week, monday to sunday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekKey {
    pub iso_year: i32,
    pub week: u32,
}

impl Display for WeekKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-W{:02}", self.iso_year, self.week)
    }
}

impl Serialize for WeekKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// trips started on one weekday at one hour, summed over the whole period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsageCell {
    pub weekday: Weekday,
    pub hour: u32,
    pub trips: usize,
}

/// trip volumes over time and fleet sizes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MobilityTrends {
    pub by_year: BTreeMap<i32, usize>,
    pub by_month: BTreeMap<YearMonth, usize>,
    pub by_week: BTreeMap<WeekKey, usize>,
    /// indexed by days from monday, then hour
    usage: [[usize; 24]; 7],
    pub vehicles_per_operator: BTreeMap<Operator, usize>,
}

impl MobilityTrends {
    pub fn from_trips(trips: &[Trip]) -> MobilityTrends {
        let mut trends = MobilityTrends::default();
        let mut vehicles: HashSet<(Operator, &str)> = HashSet::new();
        for trip in trips.iter() {
            let start = trip.start_time;
            let date = start.date();
            let iso = date.iso_week();
            *trends.by_year.entry(date.year()).or_default() += 1;
            *trends.by_month.entry(YearMonth::of(&date)).or_default() += 1;
            *trends
                .by_week
                .entry(WeekKey {
                    iso_year: iso.year(),
                    week: iso.week(),
                })
                .or_default() += 1;
            let day = date.weekday().num_days_from_monday() as usize;
            trends.usage[day][trip.start_hour() as usize] += 1;
            vehicles.insert((trip.operator, trip.vehicle_id.as_str()));
        }
        trends.vehicles_per_operator = vehicles
            .into_iter()
            .map(|(op, _)| op)
            .counts()
            .into_iter()
            .collect();
        trends
    }

    pub fn usage(&self, weekday: Weekday, hour: u32) -> usize {
        self.usage
            .get(weekday.num_days_from_monday() as usize)
            .and_then(|row| row.get(hour as usize))
            .copied()
            .unwrap_or_default()
    }

    /// the weekday by hour pivot as a flat list, monday first
    pub fn usage_cells(&self) -> Vec<UsageCell> {
        WEEKDAYS
            .into_iter()
            .cartesian_product(0..24)
            .map(|(weekday, hour)| UsageCell {
                weekday,
                hour,
                trips: self.usage(weekday, hour),
            })
            .collect_vec()
    }

    /// header and rows of the pivot: one row per weekday, one column per hour
    pub fn usage_pivot(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let header = std::iter::once(String::from("weekday"))
            .chain((0..24).map(|h| h.to_string()))
            .collect_vec();
        let rows = self
            .usage_cells()
            .chunks(24)
            .map(|cells| {
                let weekday = cells.first().map(|c| c.weekday.to_string()).unwrap_or_default();
                std::iter::once(weekday)
                    .chain(cells.iter().map(|c| c.trips.to_string()))
                    .collect_vec()
            })
            .collect_vec();
        (header, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::timed_trip;

    #[test]
    fn test_trends() {
        let mut bird = timed_trip("A", "2024-01-08 09:30", "2024-01-08 09:40");
        bird.operator = Operator::Bird;
        let trips = vec![
            timed_trip("A", "2023-12-31 23:00", "2023-12-31 23:10"),
            timed_trip("A", "2024-01-01 09:00", "2024-01-01 09:10"),
            timed_trip("B", "2024-01-01 09:15", "2024-01-01 09:20"),
            bird,
        ];
        let trends = MobilityTrends::from_trips(&trips);
        assert_eq!(trends.by_year.get(&2023), Some(&1));
        assert_eq!(trends.by_year.get(&2024), Some(&3));
        assert_eq!(trends.by_month.len(), 2);
        // 2023-12-31 is a sunday in ISO week 52 of 2023, 2024-01-01 starts week 1
        let weeks = trends.by_week.keys().map(|w| w.to_string()).collect_vec();
        assert_eq!(weeks, vec!["2023-W52", "2024-W01", "2024-W02"]);
        assert_eq!(trends.usage(Weekday::Mon, 9), 3);
        assert_eq!(trends.usage(Weekday::Sun, 23), 1);
        assert_eq!(trends.vehicles_per_operator.get(&Operator::Lime), Some(&2));
        assert_eq!(trends.vehicles_per_operator.get(&Operator::Bird), Some(&1));

        let (header, rows) = trends.usage_pivot();
        assert_eq!(header.len(), 25);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0][0], "Mon");
        assert_eq!(rows[0][10], "3");
    }
}
