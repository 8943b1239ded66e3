use crate::config::AggregationConfig;
use crate::model::{Trip, VehicleKey};
use crate::zone::ZoneMatcher;
use chrono::{NaiveDateTime, Timelike};
use geo::Point;
use itertools::Itertools;
use serde::Serialize;
use std::collections::HashMap;

/// time a vehicle stood still between two consecutive rentals
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingInterval {
    pub vehicle: VehicleKey,
    /// end of the previous rental
    pub parked_from: NaiveDateTime,
    /// start of the rental that ends the parking
    pub parked_until: NaiveDateTime,
    pub minutes: f64,
    /// start point of the rental that ends the parking
    pub location: Point<f64>,
}

impl ParkingInterval {
    pub fn end_hour(&self) -> u32 {
        self.parked_until.hour()
    }
}

/// parking statistics of one zone. means are None when the zone saw no parking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneParking {
    pub zone: String,
    pub events: usize,
    pub mean_minutes: Option<f64>,
    pub morning_events: usize,
    pub morning_mean_minutes: Option<f64>,
    pub evening_events: usize,
    pub evening_mean_minutes: Option<f64>,
}

/// derives the parking gap before every rental except the first of each vehicle.
/// rentals are ordered by start time within each vehicle; gaps that are not
/// positive or reach `cap_minutes` are discarded.
pub fn parking_intervals(trips: &[Trip], cap_minutes: f64) -> Vec<ParkingInterval> {
    let by_vehicle = trips.iter().into_group_map_by(|t| t.vehicle_key());
    by_vehicle
        .into_iter()
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .flat_map(|(vehicle, vehicle_trips)| {
            vehicle_trips
                .into_iter()
                .sorted_by_key(|t| t.start_time)
                .tuple_windows()
                .filter_map(|(previous, current)| {
                    let gap = current.start_time - previous.end_time;
                    let minutes = gap.num_milliseconds() as f64 / 60_000.0;
                    if minutes > 0.0 && minutes < cap_minutes {
                        Some(ParkingInterval {
                            vehicle: vehicle.clone(),
                            parked_from: previous.end_time,
                            parked_until: current.start_time,
                            minutes,
                            location: current.origin(),
                        })
                    } else {
                        None
                    }
                })
                .collect_vec()
        })
        .collect_vec()
}

/// locates parking intervals in zones and summarizes them per zone, overall and for
/// the morning and evening windows of the hour the parking ended. every zone of the
/// layer is reported, in layer order.
pub fn parking_by_zone(
    intervals: &[ParkingInterval],
    zones: &ZoneMatcher,
    config: &AggregationConfig,
) -> Vec<ZoneParking> {
    let mut by_zone: HashMap<usize, Vec<&ParkingInterval>> = HashMap::new();
    let mut unlocated = 0;
    for interval in intervals.iter() {
        match zones.locate(&interval.location).zone {
            Some(idx) => by_zone.entry(idx).or_default().push(interval),
            None => unlocated += 1,
        }
    }
    if unlocated > 0 {
        log::info!("{unlocated} parking intervals lie outside every zone");
    }

    zones
        .zones()
        .iter()
        .enumerate()
        .map(|(idx, zone)| {
            let located = by_zone.get(&idx).map(|v| v.as_slice()).unwrap_or_default();
            let (morning_events, morning_mean_minutes) = summarize(
                located
                    .iter()
                    .filter(|i| config.morning_window.contains(i.end_hour()))
                    .map(|i| i.minutes),
            );
            let (evening_events, evening_mean_minutes) = summarize(
                located
                    .iter()
                    .filter(|i| config.evening_window.contains(i.end_hour()))
                    .map(|i| i.minutes),
            );
            let (events, mean_minutes) = summarize(located.iter().map(|i| i.minutes));
            ZoneParking {
                zone: zone.name.clone(),
                events,
                mean_minutes,
                morning_events,
                morning_mean_minutes,
                evening_events,
                evening_mean_minutes,
            }
        })
        .collect_vec()
}

/// event count and mean of a sequence of parking minutes
fn summarize<I>(minutes: I) -> (usize, Option<f64>)
where
    I: Iterator<Item = f64>,
{
    let (n, total) = minutes.fold((0, 0.0), |(n, total), m| (n + 1, total + m));
    if n == 0 {
        (0, None)
    } else {
        (n, Some(total / n as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Operator;
    use crate::testing::{timed_trip, two_zones};

    #[test]
    fn test_gap_between_consecutive_trips() {
        let trips = vec![
            timed_trip("A", "2024-01-01 11:00", "2024-01-01 11:10"),
            timed_trip("A", "2024-01-01 10:00", "2024-01-01 10:20"),
        ];
        let intervals = parking_intervals(&trips, 1440.0);
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].minutes, 40.0);
        assert_eq!(intervals[0].parked_until, trips[0].start_time);
    }

    #[test]
    fn test_invalid_gaps_are_discarded() {
        let trips = vec![
            timed_trip("A", "2024-01-01 10:00", "2024-01-01 10:20"),
            // overlaps the previous rental
            timed_trip("A", "2024-01-01 10:10", "2024-01-01 10:30"),
            // more than a day later
            timed_trip("A", "2024-01-03 10:00", "2024-01-03 10:30"),
            // a single rental has no parking
            timed_trip("B", "2024-01-01 10:00", "2024-01-01 10:20"),
        ];
        assert!(parking_intervals(&trips, 1440.0).is_empty());
    }

    #[test]
    fn test_gap_bounds() {
        let trips = vec![
            // back to back, no parking
            timed_trip("ZERO", "2024-01-01 10:00", "2024-01-01 10:20"),
            timed_trip("ZERO", "2024-01-01 10:20", "2024-01-01 10:40"),
            // one minute under a day
            timed_trip("DAY-", "2024-01-01 10:00", "2024-01-01 10:20"),
            timed_trip("DAY-", "2024-01-02 10:19", "2024-01-02 10:40"),
            // exactly a day
            timed_trip("DAY", "2024-01-01 10:00", "2024-01-01 10:20"),
            timed_trip("DAY", "2024-01-02 10:20", "2024-01-02 10:40"),
        ];
        let intervals = parking_intervals(&trips, 1440.0);
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].vehicle.vehicle_id, "DAY-");
        assert_eq!(intervals[0].minutes, 1439.0);
    }

    #[test]
    fn test_vehicles_are_keyed_by_operator() {
        let mut other = timed_trip("A", "2024-01-01 11:00", "2024-01-01 11:10");
        other.operator = Operator::Bird;
        let trips = vec![timed_trip("A", "2024-01-01 10:00", "2024-01-01 10:20"), other];
        assert!(parking_intervals(&trips, 1440.0).is_empty());
    }

    #[test]
    fn test_parking_by_zone_windows() {
        let trips = vec![
            timed_trip("A", "2024-01-01 07:00", "2024-01-01 07:20"),
            timed_trip("A", "2024-01-01 08:00", "2024-01-01 08:10"),
            timed_trip("A", "2024-01-01 17:10", "2024-01-01 17:30"),
        ];
        let intervals = parking_intervals(&trips, 1440.0);
        assert_eq!(intervals.len(), 2);
        let zones = ZoneMatcher::new(two_zones()).expect("zones");
        let stats = parking_by_zone(&intervals, &zones, &AggregationConfig::default());
        assert_eq!(stats.len(), 2);
        let west = &stats[0];
        assert_eq!(west.zone, "West");
        assert_eq!(west.events, 2);
        assert_eq!(west.mean_minutes, Some((40.0 + 540.0) / 2.0));
        assert_eq!((west.morning_events, west.morning_mean_minutes), (1, Some(40.0)));
        assert_eq!((west.evening_events, west.evening_mean_minutes), (1, Some(540.0)));
        let east = &stats[1];
        assert_eq!((east.events, east.mean_minutes), (0, None));
    }
}
