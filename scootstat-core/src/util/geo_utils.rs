use geo::{BoundingRect, Coord, MultiPolygon};
use rstar::primitives::Rectangle;
use serde::{Deserialize, Serialize};

/// closed latitude/longitude rectangle used to discard coordinates outside the study area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoBoundingBox {
    /// approximation of the municipality of Turin
    pub const TURIN: GeoBoundingBox = GeoBoundingBox {
        min_lat: 44.9,
        max_lat: 45.1,
        min_lon: 7.5,
        max_lon: 7.8,
    };

    /// true when both values lie within the box, bounds included. NaN is never contained.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.min_lat <= lat && lat <= self.max_lat && self.min_lon <= lon && lon <= self.max_lon
    }

    pub fn contains_coord(&self, coord: &Coord<f64>) -> bool {
        self.contains(coord.y, coord.x)
    }
}

impl Default for GeoBoundingBox {
    fn default() -> Self {
        GeoBoundingBox::TURIN
    }
}

impl std::fmt::Display for GeoBoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lat [{},{}] lon [{},{}]",
            self.min_lat, self.max_lat, self.min_lon, self.max_lon
        )
    }
}

/// creates an rtree envelope for a polygon layer entry from its bounding rectangle.
///
/// an empty geometry has no bounding rectangle, in which case the result is None.
pub fn rectangle_envelope(geometry: &MultiPolygon<f64>) -> Option<Rectangle<[f64; 2]>> {
    geometry
        .bounding_rect()
        .map(|rect| {
            let (min, max) = (rect.min(), rect.max());
            Rectangle::from_corners([min.x, min.y], [max.x, max.y])
        })
}
