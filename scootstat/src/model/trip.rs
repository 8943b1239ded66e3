use super::Operator;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use geo::Point;
use serde::{Deserialize, Serialize};

/// a cleaned e-scooter rental. produced only by the trip cleaner, so every
/// instance satisfies end_time > start_time, a plausible speed and coordinates
/// inside the study area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub operator: Operator,
    pub vehicle_id: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_lat: f64,
    pub start_lon: f64,
    pub end_lat: f64,
    pub end_lon: f64,
    pub distance_km: f64,
    pub duration_min: f64,
    pub reserved: Option<bool>,
    pub start_battery: Option<f64>,
    pub end_battery: Option<f64>,
    pub organization_id: Option<String>,
    pub duration_sec: f64,
    pub distance_m: f64,
    pub speed_m_s: f64,
}

/// identifies one physical vehicle. plate/vehicle ids are only unique within an operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VehicleKey {
    pub operator: Operator,
    pub vehicle_id: String,
}

impl Trip {
    /// trip origin as a lon/lat point
    pub fn origin(&self) -> Point<f64> {
        Point::new(self.start_lon, self.start_lat)
    }

    /// trip destination as a lon/lat point
    pub fn destination(&self) -> Point<f64> {
        Point::new(self.end_lon, self.end_lat)
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date()
    }

    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    pub fn vehicle_key(&self) -> VehicleKey {
        VehicleKey {
            operator: self.operator,
            vehicle_id: self.vehicle_id.clone(),
        }
    }

    /// bitwise identity of every field except the organization id, used to detect
    /// exact duplicate rows. exports of one operator carry different organization ids
    /// for the same rental.
    pub fn dedup_key(&self) -> String {
        let f = |v: f64| v.to_bits().to_string();
        let of = |v: Option<f64>| v.map(f).unwrap_or_default();
        [
            self.operator.tag().to_string(),
            self.vehicle_id.clone(),
            self.start_time.to_string(),
            self.end_time.to_string(),
            f(self.start_lat),
            f(self.start_lon),
            f(self.end_lat),
            f(self.end_lon),
            f(self.distance_km),
            f(self.duration_min),
            self.reserved.map(|r| r.to_string()).unwrap_or_default(),
            of(self.start_battery),
            of(self.end_battery),
        ]
        .join("\u{1f}")
    }
}
