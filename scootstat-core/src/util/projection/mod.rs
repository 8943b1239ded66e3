//! coordinate reference systems used by the trip analysis. zone boundaries are
//! published in Gauss-Boaga (EPSG:3003) while operator exports and transit stops
//! use WGS84 (EPSG:4326). buffers around transit stops are computed in UTM 32N
//! (EPSG:32632) so that radii can be expressed in meters.
mod crs;
mod ellipsoid;
mod helmert;
mod transverse_mercator;

pub use crs::Crs;
pub use ellipsoid::Ellipsoid;
pub use helmert::Helmert;
pub use transverse_mercator::TransverseMercator;
