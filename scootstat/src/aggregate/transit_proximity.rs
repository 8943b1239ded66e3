use super::ProximityClass;
use crate::model::{Operator, TransitStop, ZonedTrip};
use crate::zone::ZoneMatcher;
use crate::ScootstatError;
use geo::Point;
use itertools::Itertools;
use kdam::tqdm;
use rstar::{PointDistance, RTree};
use scootstat_core::util::projection::Crs;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;

/// transit stops inside the zone layer, indexed in UTM 32N meters. a point is near
/// transit when it lies strictly within the radius of at least one stop, which is
/// the same as lying inside the union of the stop buffers.
pub struct TransitIndex {
    rtree: RTree<[f64; 2]>,
    radius_m: f64,
}

/// counts and shares of the transit classification
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransitSummary {
    pub trips: usize,
    pub origins_near: usize,
    pub destinations_near: usize,
    pub both_near: usize,
    pub one_endpoint_near: usize,
    pub by_class: BTreeMap<ProximityClass, usize>,
}

/// one origin of the map sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitMapPoint {
    pub operator: Operator,
    pub vehicle_id: String,
    pub lat: f64,
    pub lon: f64,
    pub class: ProximityClass,
}

impl TransitIndex {
    /// indexes the stops that lie inside a zone. fails when no stop remains, since
    /// every trip would be classified as far from transit.
    pub fn new(
        stops: &[TransitStop],
        zones: &ZoneMatcher,
        radius_m: f64,
    ) -> Result<TransitIndex, ScootstatError> {
        let inside = stops
            .iter()
            .filter(|s| zones.covers(&s.location))
            .map(|s| utm(&s.location))
            .collect_vec();
        log::info!(
            "{} of {} transit stops lie inside the zone layer",
            inside.len(),
            stops.len()
        );
        if inside.is_empty() {
            return Err(ScootstatError::EmptyReferenceLayer(String::from(
                "transit stop",
            )));
        }
        Ok(TransitIndex {
            rtree: RTree::bulk_load(inside),
            radius_m,
        })
    }

    pub fn stops(&self) -> usize {
        self.rtree.size()
    }

    pub fn is_near(&self, point: &Point<f64>) -> bool {
        let p = utm(point);
        let r2 = self.radius_m * self.radius_m;
        self.rtree
            .locate_within_distance(p, r2)
            .any(|stop| stop.distance_2(&p) < r2)
    }

    pub fn classify(&self, trip: &ZonedTrip) -> ProximityClass {
        ProximityClass::of(
            self.is_near(&trip.trip.origin()),
            self.is_near(&trip.trip.destination()),
        )
    }

    /// classifies every trip, returning the classes in trip order and their summary.
    pub fn classify_all(&self, trips: &[ZonedTrip]) -> (Vec<ProximityClass>, TransitSummary) {
        let classes = tqdm!(trips.iter(), total = trips.len(), desc = "transit proximity")
            .map(|t| self.classify(t))
            .collect_vec();
        eprintln!();
        let summary = TransitSummary::from_classes(&classes);
        (classes, summary)
    }
}

fn utm(point: &Point<f64>) -> [f64; 2] {
    let c = Crs::Utm32N.project(point.0);
    [c.x, c.y]
}

impl TransitSummary {
    pub fn from_classes(classes: &[ProximityClass]) -> TransitSummary {
        let mut by_class: BTreeMap<ProximityClass, usize> =
            ProximityClass::ALL.iter().map(|c| (*c, 0)).collect();
        for c in classes.iter() {
            *by_class.entry(*c).or_default() += 1;
        }
        let count = |c: ProximityClass| by_class.get(&c).copied().unwrap_or_default();
        let both = count(ProximityClass::Both);
        let origin_only = count(ProximityClass::OriginOnly);
        let destination_only = count(ProximityClass::DestinationOnly);
        TransitSummary {
            trips: classes.len(),
            origins_near: both + origin_only,
            destinations_near: both + destination_only,
            both_near: both,
            one_endpoint_near: origin_only + destination_only,
            by_class,
        }
    }

    /// percentage of all trips, zero for an empty summary
    pub fn share(&self, count: usize) -> f64 {
        if self.trips == 0 {
            0.0
        } else {
            100.0 * count as f64 / self.trips as f64
        }
    }

    /// (metric, trips, percent) rows for tabular output
    pub fn rows(&self) -> Vec<(String, usize, f64)> {
        let mut rows = vec![
            (String::from("trips"), self.trips, self.share(self.trips)),
            (String::from("origins near transit"), self.origins_near, self.share(self.origins_near)),
            (String::from("destinations near transit"), self.destinations_near, self.share(self.destinations_near)),
            (String::from("both endpoints near transit"), self.both_near, self.share(self.both_near)),
            (String::from("exactly one endpoint near transit"), self.one_endpoint_near, self.share(self.one_endpoint_near)),
        ];
        for (class, n) in self.by_class.iter() {
            rows.push((class.label().to_string(), *n, self.share(*n)));
        }
        rows
    }
}

impl Display for TransitSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self.rows();
        for (i, (metric, n, pct)) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{metric}: {n} ({pct:.1}%)")?;
        }
        Ok(())
    }
}

impl TransitMapPoint {
    pub fn new(trip: &ZonedTrip, class: ProximityClass) -> TransitMapPoint {
        TransitMapPoint {
            operator: trip.trip.operator,
            vehicle_id: trip.trip.vehicle_id.clone(),
            lat: trip.trip.start_lat,
            lon: trip.trip.start_lon,
            class,
        }
    }
}
