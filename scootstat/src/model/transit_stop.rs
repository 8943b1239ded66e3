use geo::Point;

/// a public transit stop location in WGS84 lon/lat.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitStop {
    pub stop_id: Option<String>,
    pub location: Point<f64>,
}
