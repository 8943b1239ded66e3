use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the operator-independent trip columns, declared in canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalColumn {
    OrganizationId,
    VehicleId,
    StartTime,
    EndTime,
    StartLat,
    StartLon,
    EndLat,
    EndLon,
    DistanceKm,
    DurationMin,
    Reserved,
    StartBattery,
    EndBattery,
}

impl CanonicalColumn {
    pub const ALL: [CanonicalColumn; 13] = [
        CanonicalColumn::OrganizationId,
        CanonicalColumn::VehicleId,
        CanonicalColumn::StartTime,
        CanonicalColumn::EndTime,
        CanonicalColumn::StartLat,
        CanonicalColumn::StartLon,
        CanonicalColumn::EndLat,
        CanonicalColumn::EndLon,
        CanonicalColumn::DistanceKm,
        CanonicalColumn::DurationMin,
        CanonicalColumn::Reserved,
        CanonicalColumn::StartBattery,
        CanonicalColumn::EndBattery,
    ];

    /// columns without which a normalized export cannot be analyzed at all
    pub const REQUIRED: [CanonicalColumn; 3] = [
        CanonicalColumn::VehicleId,
        CanonicalColumn::StartTime,
        CanonicalColumn::EndTime,
    ];

    /// position of this column in canonical order
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            CanonicalColumn::OrganizationId => "organization_id",
            CanonicalColumn::VehicleId => "vehicle_id",
            CanonicalColumn::StartTime => "start_time",
            CanonicalColumn::EndTime => "end_time",
            CanonicalColumn::StartLat => "start_lat",
            CanonicalColumn::StartLon => "start_lon",
            CanonicalColumn::EndLat => "end_lat",
            CanonicalColumn::EndLon => "end_lon",
            CanonicalColumn::DistanceKm => "distance_km",
            CanonicalColumn::DurationMin => "duration_min",
            CanonicalColumn::Reserved => "reserved",
            CanonicalColumn::StartBattery => "start_battery",
            CanonicalColumn::EndBattery => "end_battery",
        }
    }
}

impl Display for CanonicalColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
