use super::ZoneMatchReport;
use crate::model::{Trip, Zone, ZonedTrip};
use crate::ScootstatError;
use geo::{Contains, Point};
use itertools::Itertools;
use kdam::tqdm;
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{RTree, AABB};
use scootstat_core::util::geo_utils;

type ZoneEnvelope = GeomWithData<Rectangle<[f64; 2]>, usize>;

/// result of locating one point against the zone layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneLookup {
    /// index of the first containing zone in layer order
    pub zone: Option<usize>,
    /// number of zones containing the point
    pub matches: usize,
}

/// spatial index over the zone layer. a point belongs to a zone only when it lies
/// strictly inside the polygon; points on a boundary belong to no zone.
pub struct ZoneMatcher {
    zones: Vec<Zone>,
    rtree: RTree<ZoneEnvelope>,
}

impl ZoneMatcher {
    /// builds the index. an empty layer is a configuration error since every trip
    /// would be discarded by the join.
    pub fn new(zones: Vec<Zone>) -> Result<ZoneMatcher, ScootstatError> {
        if zones.is_empty() {
            return Err(ScootstatError::EmptyReferenceLayer(String::from("zone")));
        }
        let envelopes = zones
            .iter()
            .enumerate()
            .filter_map(|(idx, zone)| {
                let envelope = geo_utils::rectangle_envelope(&zone.geometry);
                if envelope.is_none() {
                    log::warn!("zone '{}' has an empty geometry and can never match", zone.name);
                }
                envelope.map(|rect| GeomWithData::new(rect, idx))
            })
            .collect_vec();
        let rtree = RTree::bulk_load(envelopes);
        Ok(ZoneMatcher { zones, rtree })
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone(&self, index: usize) -> Option<&Zone> {
        self.zones.get(index)
    }

    pub fn locate(&self, point: &Point<f64>) -> ZoneLookup {
        let containing = self
            .rtree
            .locate_in_envelope_intersecting(&AABB::from_point([point.x(), point.y()]))
            .map(|obj| obj.data)
            .filter(|idx| self.zones[*idx].geometry.contains(point))
            .collect_vec();
        ZoneLookup {
            zone: containing.iter().min().copied(),
            matches: containing.len(),
        }
    }

    /// name of the zone containing the point, if any
    pub fn zone_name(&self, point: &Point<f64>) -> Option<&str> {
        self.locate(point)
            .zone
            .and_then(|idx| self.zone(idx))
            .map(|z| z.name.as_str())
    }

    /// true when the point lies inside any zone of the layer
    pub fn covers(&self, point: &Point<f64>) -> bool {
        self.locate(point).zone.is_some()
    }

    /// looks up origins and destinations of every trip independently, then keeps the
    /// trips where both lookups found a zone.
    pub fn match_trips(&self, trips: &[Trip]) -> (Vec<ZonedTrip>, ZoneMatchReport) {
        let origins = tqdm!(trips.iter(), total = trips.len(), desc = "origin zones")
            .map(|t| self.locate(&t.origin()))
            .collect_vec();
        eprintln!();
        let destinations = tqdm!(trips.iter(), total = trips.len(), desc = "destination zones")
            .map(|t| self.locate(&t.destination()))
            .collect_vec();
        eprintln!();

        let ambiguous = origins
            .iter()
            .chain(destinations.iter())
            .filter(|l| l.matches > 1)
            .count();
        let mut report = ZoneMatchReport {
            trips: trips.len(),
            origin_matches: origins.iter().filter(|l| l.zone.is_some()).count(),
            destination_matches: destinations.iter().filter(|l| l.zone.is_some()).count(),
            zoned: 0,
            ambiguous_endpoints: ambiguous,
        };

        let zoned = trips
            .iter()
            .zip(origins.iter().zip(destinations.iter()))
            .filter_map(|(trip, (o, d))| match (o.zone, d.zone) {
                (Some(o), Some(d)) => Some(ZonedTrip {
                    trip: trip.clone(),
                    origin_zone: self.zones[o].name.clone(),
                    destination_zone: self.zones[d].name.clone(),
                }),
                _ => None,
            })
            .collect_vec();
        report.zoned = zoned.len();
        if ambiguous > 0 {
            log::warn!("{ambiguous} trip endpoints lie in more than one zone, using the first");
        }
        (zoned, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{trip, two_zones};
    use geo::{polygon, MultiPolygon};

    #[test]
    fn test_empty_layer_is_an_error() {
        assert!(matches!(
            ZoneMatcher::new(vec![]),
            Err(ScootstatError::EmptyReferenceLayer(_))
        ));
    }

    #[test]
    fn test_locate_is_strictly_within() {
        let matcher = ZoneMatcher::new(two_zones()).expect("non-empty layer");
        assert_eq!(matcher.zone_name(&Point::new(7.62, 45.02)), Some("West"));
        assert_eq!(matcher.zone_name(&Point::new(7.68, 45.02)), Some("East"));
        // on the shared edge
        assert_eq!(matcher.locate(&Point::new(7.65, 45.02)).matches, 0);
        assert_eq!(matcher.zone_name(&Point::new(7.75, 45.02)), None);
    }

    #[test]
    fn test_both_endpoints_required() {
        let matcher = ZoneMatcher::new(two_zones()).expect("non-empty layer");
        let trips = vec![
            trip("a", (7.62, 45.02), (7.68, 45.02), 8),
            trip("b", (7.62, 45.02), (7.75, 45.02), 8),
            trip("c", (7.75, 45.02), (7.68, 45.02), 8),
            trip("d", (7.75, 45.02), (7.75, 45.03), 8),
        ];
        let (zoned, report) = matcher.match_trips(&trips);
        assert_eq!(zoned.len(), 1);
        assert_eq!(zoned[0].trip.vehicle_id, "a");
        assert_eq!(zoned[0].origin_zone, "West");
        assert_eq!(zoned[0].destination_zone, "East");
        assert_eq!(report.origin_matches, 2);
        assert_eq!(report.destination_matches, 2);
        assert_eq!(report.origin_only(), 1);
        assert_eq!(report.destination_only(), 1);
        assert!(report.zoned <= report.origin_matches.min(report.destination_matches));
    }

    #[test]
    fn test_overlap_resolves_to_first_zone() {
        let mut zones = two_zones();
        let big = polygon![(x: 7.5, y: 44.9), (x: 7.8, y: 44.9), (x: 7.8, y: 45.1), (x: 7.5, y: 45.1)];
        zones.push(Zone::new(String::from("City"), MultiPolygon(vec![big])));
        let matcher = ZoneMatcher::new(zones).expect("non-empty layer");
        let lookup = matcher.locate(&Point::new(7.62, 45.02));
        assert_eq!(lookup.zone, Some(0));
        assert_eq!(lookup.matches, 2);
        let (_, report) = matcher.match_trips(&[trip("a", (7.62, 45.02), (7.75, 45.08), 9)]);
        assert_eq!(report.zoned, 1);
        assert_eq!(report.ambiguous_endpoints, 1);
    }
}
