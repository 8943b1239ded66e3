use super::Trip;
use serde::Serialize;

/// a trip whose origin and destination both fall within a zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZonedTrip {
    pub trip: Trip,
    pub origin_zone: String,
    pub destination_zone: String,
}

/// flat projection of a [`ZonedTrip`] for CSV output
#[derive(Debug, Serialize)]
pub struct ZonedTripRow<'a> {
    pub operator: &'a str,
    pub vehicle_id: &'a str,
    pub start_time: String,
    pub end_time: String,
    pub start_lat: f64,
    pub start_lon: f64,
    pub end_lat: f64,
    pub end_lon: f64,
    pub distance_m: f64,
    pub duration_sec: f64,
    pub origin_zone: &'a str,
    pub destination_zone: &'a str,
}

impl ZonedTrip {
    pub fn as_row(&self) -> ZonedTripRow<'_> {
        ZonedTripRow {
            operator: self.trip.operator.tag(),
            vehicle_id: &self.trip.vehicle_id,
            start_time: self.trip.start_time.to_string(),
            end_time: self.trip.end_time.to_string(),
            start_lat: self.trip.start_lat,
            start_lon: self.trip.start_lon,
            end_lat: self.trip.end_lat,
            end_lon: self.trip.end_lon,
            distance_m: self.trip.distance_m,
            duration_sec: self.trip.duration_sec,
            origin_zone: &self.origin_zone,
            destination_zone: &self.destination_zone,
        }
    }
}
