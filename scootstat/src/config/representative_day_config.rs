use crate::day::FallbackScope;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepresentativeDayConfig {
    /// mid-week days considered typical of weekday demand
    pub weekdays: Vec<Weekday>,
    /// used when no trip falls on a mid-week day
    pub fallback_weekdays: Vec<Weekday>,
    pub fallback_scope: FallbackScope,
}

impl Default for RepresentativeDayConfig {
    fn default() -> Self {
        Self {
            weekdays: vec![Weekday::Tue, Weekday::Wed, Weekday::Thu],
            fallback_weekdays: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
            fallback_scope: FallbackScope::PerMonth,
        }
    }
}
