use crate::clean::TimestampFormat;
use crate::model::Operator;
use scootstat_core::util::geo_utils::GeoBoundingBox;
use serde::{Deserialize, Serialize};

/// thresholds of the trip cleaning stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    /// lower speed bound in m/s, about 2 km/h
    pub min_speed_m_s: f64,
    /// upper speed bound in m/s, the 25 km/h legal limit
    pub max_speed_m_s: f64,
    pub bounding_box: GeoBoundingBox,
    /// operators exporting timestamps as fixed-width `yyyymmddHHMMSS` numbers
    pub fixed_width_timestamp_operators: Vec<Operator>,
}

impl CleaningConfig {
    pub fn timestamp_format(&self, operator: &Operator) -> TimestampFormat {
        if self.fixed_width_timestamp_operators.contains(operator) {
            TimestampFormat::FixedWidth
        } else {
            TimestampFormat::Flexible
        }
    }
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            min_speed_m_s: 0.56,
            max_speed_m_s: 6.94,
            bounding_box: GeoBoundingBox::TURIN,
            fixed_width_timestamp_operators: vec![Operator::Void],
        }
    }
}
