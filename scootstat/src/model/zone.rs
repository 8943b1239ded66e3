use geo::MultiPolygon;

/// a named statistical zone of the city with its boundary in WGS84 lon/lat.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub name: String,
    pub geometry: MultiPolygon<f64>,
}

impl Zone {
    pub fn new(name: String, geometry: MultiPolygon<f64>) -> Zone {
        Zone { name, geometry }
    }
}
