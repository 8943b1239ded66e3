use serde::{Deserialize, Serialize};

/// limits for tables meant to be drawn on a map
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    pub max_map_points: usize,
    pub sample_seed: u64,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            max_map_points: 50_000,
            sample_seed: 42,
        }
    }
}
