use super::{Ellipsoid, Helmert, TransverseMercator};
use geo::Coord;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the coordinate reference systems that appear in the city datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Crs {
    /// EPSG:4326, x = longitude, y = latitude
    Wgs84,
    /// EPSG:3003, Monte Mario / Italy zone 1
    MonteMarioItaly1,
    /// EPSG:32632, WGS 84 / UTM zone 32N
    Utm32N,
}

impl Crs {
    pub fn epsg(self) -> u32 {
        match self {
            Crs::Wgs84 => 4326,
            Crs::MonteMarioItaly1 => 3003,
            Crs::Utm32N => 32632,
        }
    }

    pub fn from_epsg(code: u32) -> Option<Crs> {
        match code {
            4326 => Some(Crs::Wgs84),
            3003 => Some(Crs::MonteMarioItaly1),
            32632 => Some(Crs::Utm32N),
            _ => None,
        }
    }

    /// reprojects a coordinate in this reference system to WGS84 longitude/latitude.
    pub fn to_wgs84(self, coord: Coord<f64>) -> Coord<f64> {
        match self {
            Crs::Wgs84 => coord,
            Crs::Utm32N => TransverseMercator::UTM_32N.inverse(coord),
            Crs::MonteMarioItaly1 => {
                let rome40 = TransverseMercator::GAUSS_BOAGA_WEST.inverse(coord);
                shift_datum(
                    rome40,
                    &Ellipsoid::INTERNATIONAL_1924,
                    &Ellipsoid::WGS84,
                    &Helmert::ROME40_TO_WGS84,
                )
            }
        }
    }

    /// reprojects a WGS84 longitude/latitude into this reference system.
    pub fn project(&self, coord: Coord<f64>) -> Coord<f64> {
        match self {
            Crs::Wgs84 => coord,
            Crs::Utm32N => TransverseMercator::UTM_32N.forward(coord),
            Crs::MonteMarioItaly1 => {
                let rome40 = shift_datum(
                    coord,
                    &Ellipsoid::WGS84,
                    &Ellipsoid::INTERNATIONAL_1924,
                    &Helmert::ROME40_TO_WGS84.inverse(),
                );
                TransverseMercator::GAUSS_BOAGA_WEST.forward(rome40)
            }
        }
    }
}

impl Display for Crs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EPSG:{}", self.epsg())
    }
}

/// moves a geographic coordinate between datums through geocentric cartesian space.
fn shift_datum(
    coord: Coord<f64>,
    source: &Ellipsoid,
    target: &Ellipsoid,
    helmert: &Helmert,
) -> Coord<f64> {
    let ecef = source.geodetic_to_ecef(coord.y.to_radians(), coord.x.to_radians(), 0.0);
    let (phi, lambda, _) = target.ecef_to_geodetic(helmert.apply(ecef));
    Coord {
        x: lambda.to_degrees(),
        y: phi.to_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::Crs;
    use geo::Coord;

    #[test]
    fn test_gauss_boaga_turin_lands_in_turin() {
        let lonlat = Crs::MonteMarioItaly1.to_wgs84(Coord {
            x: 1_396_000.0,
            y: 4_991_000.0,
        });
        assert!(7.5 <= lonlat.x && lonlat.x <= 7.8, "lon {}", lonlat.x);
        assert!(44.9 <= lonlat.y && lonlat.y <= 45.1, "lat {}", lonlat.y);
    }

    #[test]
    fn test_gauss_boaga_round_trip() {
        let lonlat = Coord { x: 7.6869, y: 45.0703 };
        let projected = Crs::MonteMarioItaly1.project(lonlat);
        let back = Crs::MonteMarioItaly1.to_wgs84(projected);
        assert!((back.x - lonlat.x).abs() < 1e-6);
        assert!((back.y - lonlat.y).abs() < 1e-6);
    }

    #[test]
    fn test_epsg_codes() {
        for crs in [Crs::Wgs84, Crs::MonteMarioItaly1, Crs::Utm32N] {
            assert_eq!(Crs::from_epsg(crs.epsg()), Some(crs));
        }
        assert_eq!(Crs::from_epsg(3857), None);
        assert_eq!(format!("{}", Crs::MonteMarioItaly1), "EPSG:3003");
    }
}
