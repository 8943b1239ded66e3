use crate::config::AggregationConfig;
use crate::model::ZonedTrip;
use itertools::Itertools;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// trips between one ordered pair of zones
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OdPairCount {
    pub origin_zone: String,
    pub destination_zone: String,
    pub trips: usize,
}

/// origin by destination contingency table. only zones that appear as an origin
/// (rows) or a destination (columns) of at least one trip are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OdMatrix {
    counts: BTreeMap<(String, String), usize>,
    origins: BTreeSet<String>,
    destinations: BTreeSet<String>,
}

/// the matrix over all trips and its split by start hour
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OdMatrices {
    pub total: OdMatrix,
    pub peak: OdMatrix,
    pub off_peak: OdMatrix,
}

impl OdMatrix {
    pub fn add(&mut self, origin: &str, destination: &str) {
        *self
            .counts
            .entry((origin.to_string(), destination.to_string()))
            .or_default() += 1;
        self.origins.insert(origin.to_string());
        self.destinations.insert(destination.to_string());
    }

    pub fn count(&self, origin: &str, destination: &str) -> usize {
        self.counts
            .get(&(origin.to_string(), destination.to_string()))
            .copied()
            .unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn origins(&self) -> impl Iterator<Item = &String> {
        self.origins.iter()
    }

    pub fn destinations(&self) -> impl Iterator<Item = &String> {
        self.destinations.iter()
    }

    /// the `n` busiest zone pairs, busiest first. equal counts are ordered by
    /// origin then destination name.
    pub fn top_pairs(&self, n: usize) -> Vec<OdPairCount> {
        self.counts
            .iter()
            .sorted_by(|(a_key, a), (b_key, b)| b.cmp(a).then_with(|| a_key.cmp(b_key)))
            .take(n)
            .map(|((o, d), trips)| OdPairCount {
                origin_zone: o.clone(),
                destination_zone: d.clone(),
                trips: *trips,
            })
            .collect_vec()
    }

    /// header and rows of the crosstab layout: one row per origin zone, one column
    /// per destination zone.
    pub fn crosstab(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let header = std::iter::once(String::from("origin_zone"))
            .chain(self.destinations.iter().cloned())
            .collect_vec();
        let rows = self
            .origins
            .iter()
            .map(|o| {
                std::iter::once(o.clone())
                    .chain(self.destinations.iter().map(|d| self.count(o, d).to_string()))
                    .collect_vec()
            })
            .collect_vec();
        (header, rows)
    }
}

impl OdMatrices {
    pub fn build(trips: &[ZonedTrip], config: &AggregationConfig) -> OdMatrices {
        let mut result = OdMatrices::default();
        for t in trips.iter() {
            result.total.add(&t.origin_zone, &t.destination_zone);
            if config.is_peak_hour(t.trip.start_hour()) {
                result.peak.add(&t.origin_zone, &t.destination_zone);
            } else {
                result.off_peak.add(&t.origin_zone, &t.destination_zone);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::trip;

    fn zoned(o: &str, d: &str, hour: u32) -> ZonedTrip {
        ZonedTrip {
            trip: trip("v", (7.62, 45.02), (7.68, 45.02), hour),
            origin_zone: o.to_string(),
            destination_zone: d.to_string(),
        }
    }

    #[test]
    fn test_peak_split_partitions_total() {
        let trips = vec![
            zoned("A", "B", 8),
            zoned("A", "B", 12),
            zoned("A", "B", 17),
            zoned("B", "A", 23),
            zoned("C", "A", 7),
        ];
        let m = OdMatrices::build(&trips, &AggregationConfig::default());
        assert_eq!(m.total.count("A", "B"), 3);
        assert_eq!(m.peak.count("A", "B"), 2);
        assert_eq!(m.off_peak.count("A", "B"), 1);
        assert_eq!(m.total.total(), m.peak.total() + m.off_peak.total());
        assert_eq!(m.total.count("B", "C"), 0);
    }

    #[test]
    fn test_top_pairs_and_crosstab() {
        let trips = vec![
            zoned("B", "A", 1),
            zoned("A", "B", 1),
            zoned("A", "B", 1),
            zoned("A", "A", 1),
        ];
        let m = OdMatrices::build(&trips, &AggregationConfig::default()).total;
        let top = m.top_pairs(2);
        assert_eq!(top[0].trips, 2);
        assert_eq!((top[1].origin_zone.as_str(), top[1].destination_zone.as_str()), ("A", "A"));
        let (header, rows) = m.crosstab();
        assert_eq!(header, vec!["origin_zone", "A", "B"]);
        assert_eq!(rows[0], vec!["A", "1", "2"]);
        assert_eq!(rows[1], vec!["B", "1", "0"]);
    }
}
