use super::{DailyCount, FallbackScope, RepresentativeDay, YearMonth};
use crate::config::RepresentativeDayConfig;
use chrono::Weekday;
use itertools::Itertools;
use std::collections::BTreeMap;

/// picks, for every month, the day whose trip count is closest to the mean daily
/// count of that month, considering only the configured weekdays.
#[derive(Debug, Clone)]
pub struct RepresentativeDaySelector {
    weekdays: Vec<Weekday>,
    fallback_weekdays: Vec<Weekday>,
    scope: FallbackScope,
}

impl From<&RepresentativeDayConfig> for RepresentativeDaySelector {
    fn from(config: &RepresentativeDayConfig) -> Self {
        RepresentativeDaySelector {
            weekdays: config.weekdays.clone(),
            fallback_weekdays: config.fallback_weekdays.clone(),
            scope: config.fallback_scope,
        }
    }
}

impl Default for RepresentativeDaySelector {
    fn default() -> Self {
        RepresentativeDaySelector::from(&RepresentativeDayConfig::default())
    }
}

impl RepresentativeDaySelector {
    /// selects at most one day per month from daily counts.
    ///
    /// # Arguments
    ///
    /// * `counts` - trips per calendar date, any order
    ///
    /// # Returns
    ///
    /// one [`RepresentativeDay`] for every month with at least one candidate day,
    /// ordered by month. equally close days resolve to the earliest date.
    pub fn select(&self, counts: &[DailyCount]) -> Vec<RepresentativeDay> {
        let by_month: BTreeMap<YearMonth, Vec<DailyCount>> = counts
            .iter()
            .sorted_by_key(|c| c.date)
            .fold(BTreeMap::new(), |mut acc, c| {
                acc.entry(c.month).or_insert_with(Vec::new).push(*c);
                acc
            });

        let dataset_fallback = self.scope == FallbackScope::Dataset
            && !counts.iter().any(|c| self.weekdays.contains(&c.weekday()));
        if dataset_fallback {
            log::warn!("no trips on {:?} in the dataset, using {:?}", self.weekdays, self.fallback_weekdays);
        }

        by_month
            .into_iter()
            .filter_map(|(month, days)| {
                let fallback = match self.scope {
                    FallbackScope::Dataset => dataset_fallback,
                    FallbackScope::PerMonth => {
                        !days.iter().any(|c| self.weekdays.contains(&c.weekday()))
                    }
                };
                let weekdays = if fallback {
                    &self.fallback_weekdays
                } else {
                    &self.weekdays
                };
                let candidates = days
                    .into_iter()
                    .filter(|c| weekdays.contains(&c.weekday()))
                    .collect_vec();
                let selected = closest_to_mean(&candidates, fallback);
                if selected.is_none() {
                    log::info!("month {month} has no candidate days");
                }
                selected
            })
            .collect_vec()
    }
}

/// candidates must be sorted by date. only a strictly smaller deviation replaces
/// the current best, so ties keep the earliest date.
fn closest_to_mean(candidates: &[DailyCount], fallback: bool) -> Option<RepresentativeDay> {
    let first = candidates.first()?;
    let total: usize = candidates.iter().map(|c| c.trips).sum();
    let mean = total as f64 / candidates.len() as f64;
    let mut best = first;
    let mut best_deviation = (first.trips as f64 - mean).abs();
    for c in candidates.iter().skip(1) {
        let deviation = (c.trips as f64 - mean).abs();
        if deviation < best_deviation {
            best = c;
            best_deviation = deviation;
        }
    }
    Some(RepresentativeDay {
        month: best.month,
        date: best.date,
        trips: best.trips,
        monthly_mean: mean,
        fallback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::count_daily;
    use chrono::{Datelike, NaiveDate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    /// expands (date, trips) pairs into one start date per trip
    fn counts(days: &[(NaiveDate, usize)]) -> Vec<DailyCount> {
        count_daily(
            days.iter()
                .flat_map(|(d, n)| std::iter::repeat(*d).take(*n)),
        )
    }

    #[test]
    fn test_selects_day_closest_to_mean() {
        // january 2024: tue 2, wed 3, thu 4, tue 9; mean = (10 + 20 + 31 + 3) / 4 = 16
        let daily = counts(&[
            (date(2024, 1, 1), 100), // monday, ignored
            (date(2024, 1, 2), 10),
            (date(2024, 1, 3), 20),
            (date(2024, 1, 4), 31),
            (date(2024, 1, 6), 500), // saturday, ignored
            (date(2024, 1, 9), 3),
        ]);
        let selected = RepresentativeDaySelector::default().select(&daily);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, date(2024, 1, 3));
        assert_eq!(selected[0].monthly_mean, 16.0);
        assert!(!selected[0].fallback);
    }

    #[test]
    fn test_ties_resolve_to_earliest_date() {
        // mean 15, both days deviate by 5
        let daily = counts(&[(date(2024, 1, 3), 20), (date(2024, 1, 2), 10)]);
        let selected = RepresentativeDaySelector::default().select(&daily);
        assert_eq!(selected[0].date, date(2024, 1, 2));
    }

    #[test]
    fn test_one_day_per_month_and_optimality() {
        let mut days = vec![];
        for month in 1..=4 {
            for day in 1..=28 {
                let d = date(2023, month, day);
                days.push((d, ((day * 7 + month * 3) % 11 + 1) as usize));
            }
        }
        let daily = counts(&days);
        let selector = RepresentativeDaySelector::default();
        let selected = selector.select(&daily);
        assert_eq!(selected.len(), 4);
        for rep in selected.iter() {
            let candidates = daily
                .iter()
                .filter(|c| c.month == rep.month && selector.weekdays.contains(&c.weekday()))
                .collect_vec();
            for c in candidates {
                let deviation = (c.trips as f64 - rep.monthly_mean).abs();
                assert!(deviation >= rep.deviation());
                if deviation == rep.deviation() {
                    assert!(c.date >= rep.date);
                }
            }
        }
    }

    #[test]
    fn test_per_month_fallback() {
        // february only has a monday and a friday
        let daily = counts(&[
            (date(2024, 1, 3), 5),
            (date(2024, 2, 5), 8),
            (date(2024, 2, 9), 2),
        ]);
        let selected = RepresentativeDaySelector::default().select(&daily);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[1].month, YearMonth { year: 2024, month: 2 });
        assert!(selected[1].fallback);
        assert_eq!(selected[1].date, date(2024, 2, 5));
    }

    #[test]
    fn test_dataset_fallback_skips_months_without_midweek_days() {
        let config = RepresentativeDayConfig {
            fallback_scope: FallbackScope::Dataset,
            ..Default::default()
        };
        let selector = RepresentativeDaySelector::from(&config);
        let daily = counts(&[(date(2024, 1, 3), 5), (date(2024, 2, 5), 8)]);
        let selected = selector.select(&daily);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date.month(), 1);

        // no mid-week day anywhere, every month falls back
        let daily = counts(&[(date(2024, 1, 5), 5), (date(2024, 2, 5), 8)]);
        let selected = selector.select(&daily);
        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|r| r.fallback));
    }

    #[test]
    fn test_weekend_only_month_is_skipped() {
        let daily = counts(&[(date(2024, 1, 6), 5), (date(2024, 1, 7), 8)]);
        assert!(RepresentativeDaySelector::default().select(&daily).is_empty());
    }
}
