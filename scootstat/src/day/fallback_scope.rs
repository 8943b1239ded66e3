use serde::{Deserialize, Serialize};

/// where the all-weekdays fallback of the representative-day selection is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackScope {
    /// a month without mid-week trips falls back on its own
    #[default]
    PerMonth,
    /// the fallback applies to every month, only when the whole dataset has no
    /// mid-week trips
    Dataset,
}
