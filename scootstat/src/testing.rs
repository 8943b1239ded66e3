//! fixtures shared by unit tests across modules
use crate::model::{Operator, Trip, Zone};
use chrono::NaiveDate;
use geo::{polygon, MultiPolygon};

/// two side-by-side squares: West covers lon [7.6, 7.65], East [7.65, 7.7], lat [45.0, 45.05]
pub fn two_zones() -> Vec<Zone> {
    let west = polygon![(x: 7.6, y: 45.0), (x: 7.65, y: 45.0), (x: 7.65, y: 45.05), (x: 7.6, y: 45.05)];
    let east = polygon![(x: 7.65, y: 45.0), (x: 7.7, y: 45.0), (x: 7.7, y: 45.05), (x: 7.65, y: 45.05)];
    vec![
        Zone::new(String::from("West"), MultiPolygon(vec![west])),
        Zone::new(String::from("East"), MultiPolygon(vec![east])),
    ]
}

pub fn trip(vehicle: &str, o: (f64, f64), d: (f64, f64), hour: u32) -> Trip {
    let start = NaiveDate::from_ymd_opt(2024, 3, 5)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("valid time");
    Trip {
        operator: Operator::Lime,
        vehicle_id: vehicle.to_string(),
        start_time: start,
        end_time: start + chrono::Duration::minutes(10),
        start_lat: o.1,
        start_lon: o.0,
        end_lat: d.1,
        end_lon: d.0,
        distance_km: 1.0,
        duration_min: 10.0,
        reserved: None,
        start_battery: None,
        end_battery: None,
        organization_id: None,
        duration_sec: 600.0,
        distance_m: 1000.0,
        speed_m_s: 1000.0 / 600.0,
    }
}

/// a trip between two fixed points in the West zone with explicit times
pub fn timed_trip(vehicle: &str, start: &str, end: &str) -> Trip {
    let parse = |s: &str| {
        chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("test timestamp")
    };
    Trip {
        start_time: parse(start),
        end_time: parse(end),
        ..trip(vehicle, (7.62, 45.02), (7.63, 45.03), 0)
    }
}
