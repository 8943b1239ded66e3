use serde::{Deserialize, Serialize};

/// an inclusive range of start hours, e.g. 8..=10 for the morning window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourWindow {
    pub first_hour: u32,
    pub last_hour: u32,
}

impl HourWindow {
    pub fn contains(&self, hour: u32) -> bool {
        self.first_hour <= hour && hour <= self.last_hour
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// start hours counted as peak demand
    pub peak_hours: Vec<u32>,
    /// number of rows in the ranked zone and zone-pair tables
    pub top_n: usize,
    /// parking gaps at or beyond this many minutes are discarded
    pub parking_cap_minutes: f64,
    pub morning_window: HourWindow,
    pub evening_window: HourWindow,
    /// radius of the walkable area around a transit stop, in meters
    pub transit_radius_m: f64,
}

impl AggregationConfig {
    pub fn is_peak_hour(&self, hour: u32) -> bool {
        self.peak_hours.contains(&hour)
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            peak_hours: vec![7, 8, 9, 16, 17, 18, 19],
            top_n: 100,
            parking_cap_minutes: 1440.0,
            morning_window: HourWindow {
                first_hour: 8,
                last_hour: 10,
            },
            evening_window: HourWindow {
                first_hour: 17,
                last_hour: 20,
            },
            transit_radius_m: 300.0,
        }
    }
}
