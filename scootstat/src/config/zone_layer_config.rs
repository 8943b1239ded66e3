use scootstat_core::util::projection::Crs;
use serde::{Deserialize, Serialize};

/// describes the zone boundary CSV: which columns hold the zone name and its
/// WKT geometry, and the reference system the geometry is written in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneLayerConfig {
    pub name_column: String,
    pub geometry_column: String,
    pub crs: Crs,
    /// field separators tried in order until one yields both columns
    pub delimiters: Vec<char>,
}

impl Default for ZoneLayerConfig {
    fn default() -> Self {
        Self {
            name_column: String::from("DENOM"),
            geometry_column: String::from("WKT_GEOM"),
            crs: Crs::MonteMarioItaly1,
            delimiters: vec![';', ','],
        }
    }
}
