use crate::model::{Operator, ZonedTrip};
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;

/// trips leaving and entering one zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneActivity {
    pub zone: String,
    pub origins: usize,
    pub destinations: usize,
}

/// trips leaving one zone, per operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneOperatorOrigins {
    pub zone: String,
    pub operator: Operator,
    pub origins: usize,
}

/// per-zone origin and destination counts, busiest origin zone first.
pub fn zone_activity(trips: &[ZonedTrip]) -> Vec<ZoneActivity> {
    let mut by_zone: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for t in trips.iter() {
        by_zone.entry(&t.origin_zone).or_default().0 += 1;
        by_zone.entry(&t.destination_zone).or_default().1 += 1;
    }
    by_zone
        .into_iter()
        .map(|(zone, (origins, destinations))| ZoneActivity {
            zone: zone.to_string(),
            origins,
            destinations,
        })
        .sorted_by(|a, b| b.origins.cmp(&a.origins).then_with(|| a.zone.cmp(&b.zone)))
        .collect_vec()
}

/// origins per zone and operator, ordered by operator then by count.
pub fn zone_operator_origins(trips: &[ZonedTrip]) -> Vec<ZoneOperatorOrigins> {
    trips
        .iter()
        .map(|t| (t.trip.operator, t.origin_zone.as_str()))
        .counts()
        .into_iter()
        .map(|((operator, zone), origins)| ZoneOperatorOrigins {
            zone: zone.to_string(),
            operator,
            origins,
        })
        .sorted_by(|a, b| {
            a.operator
                .cmp(&b.operator)
                .then_with(|| b.origins.cmp(&a.origins))
                .then_with(|| a.zone.cmp(&b.zone))
        })
        .collect_vec()
}
