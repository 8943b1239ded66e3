use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the cleaning filters in the order they must run. each stage only sees the
/// survivors of the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleaningStage {
    MissingIdentity,
    NonIncreasingTimes,
    NonPositiveDuration,
    SpeedOutOfRange,
    OutsideBoundingBox,
    Duplicate,
}

impl CleaningStage {
    pub const ALL: [CleaningStage; 6] = [
        CleaningStage::MissingIdentity,
        CleaningStage::NonIncreasingTimes,
        CleaningStage::NonPositiveDuration,
        CleaningStage::SpeedOutOfRange,
        CleaningStage::OutsideBoundingBox,
        CleaningStage::Duplicate,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            CleaningStage::MissingIdentity => "missing vehicle id or timestamps",
            CleaningStage::NonIncreasingTimes => "end time not after start time",
            CleaningStage::NonPositiveDuration => "non-positive duration",
            CleaningStage::SpeedOutOfRange => "speed outside plausible range",
            CleaningStage::OutsideBoundingBox => "coordinates outside study area",
            CleaningStage::Duplicate => "exact duplicate",
        }
    }
}

impl Display for CleaningStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
