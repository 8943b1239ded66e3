use super::Ellipsoid;
use geo::Coord;
use serde::{Deserialize, Serialize};

/// transverse mercator projection (Snyder, "Map Projections - A Working Manual",
/// eqs. 8-9 through 8-25). accurate to well below a meter within a few degrees
/// of the central meridian, which covers every zone used here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransverseMercator {
    pub ellipsoid: Ellipsoid,
    /// central meridian in degrees
    pub central_meridian: f64,
    /// latitude of origin in degrees
    pub latitude_of_origin: f64,
    pub scale_factor: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

impl TransverseMercator {
    /// Monte Mario / Italy zone 1 (Gauss-Boaga west), EPSG:3003
    pub const GAUSS_BOAGA_WEST: TransverseMercator = TransverseMercator {
        ellipsoid: Ellipsoid::INTERNATIONAL_1924,
        central_meridian: 9.0,
        latitude_of_origin: 0.0,
        scale_factor: 0.9996,
        false_easting: 1_500_000.0,
        false_northing: 0.0,
    };

    /// WGS 84 / UTM zone 32N, EPSG:32632
    pub const UTM_32N: TransverseMercator = TransverseMercator {
        ellipsoid: Ellipsoid::WGS84,
        central_meridian: 9.0,
        latitude_of_origin: 0.0,
        scale_factor: 0.9996,
        false_easting: 500_000.0,
        false_northing: 0.0,
    };

    /// projects a geographic coordinate (x = longitude, y = latitude, degrees)
    /// into easting/northing meters.
    pub fn forward(&self, coord: Coord<f64>) -> Coord<f64> {
        let ep2 = self.ellipsoid.ep2();
        let k0 = self.scale_factor;
        let phi = coord.y.to_radians();
        let dlambda = (coord.x - self.central_meridian).to_radians();

        let n = self.ellipsoid.prime_vertical_radius(phi);
        let t = phi.tan().powi(2);
        let c = ep2 * phi.cos().powi(2);
        let a = dlambda * phi.cos();
        let m = self.ellipsoid.meridian_arc(phi);
        let m0 = self
            .ellipsoid
            .meridian_arc(self.latitude_of_origin.to_radians());

        let x = k0
            * n
            * (a + (1.0 - t + c) * a.powi(3) / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a.powi(5) / 120.0);
        let y = k0
            * (m - m0
                + n * phi.tan()
                    * (a * a / 2.0
                        + (5.0 - t + 9.0 * c + 4.0 * c * c) * a.powi(4) / 24.0
                        + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a.powi(6)
                            / 720.0));
        Coord {
            x: x + self.false_easting,
            y: y + self.false_northing,
        }
    }

    /// recovers the geographic coordinate (x = longitude, y = latitude, degrees)
    /// of a projected easting/northing.
    pub fn inverse(&self, coord: Coord<f64>) -> Coord<f64> {
        let a_axis = self.ellipsoid.semi_major_axis;
        let e2 = self.ellipsoid.e2();
        let ep2 = self.ellipsoid.ep2();
        let k0 = self.scale_factor;

        let m0 = self
            .ellipsoid
            .meridian_arc(self.latitude_of_origin.to_radians());
        let m = m0 + (coord.y - self.false_northing) / k0;
        let mu = m
            / (a_axis
                * (1.0 - e2 / 4.0 - 3.0 * e2.powi(2) / 64.0 - 5.0 * e2.powi(3) / 256.0));
        let e1 = (1.0 - (1.0 - e2).sqrt()) / (1.0 + (1.0 - e2).sqrt());
        let phi1 = mu
            + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
            + (21.0 * e1.powi(2) / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
            + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
            + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

        let c1 = ep2 * phi1.cos().powi(2);
        let t1 = phi1.tan().powi(2);
        let n1 = self.ellipsoid.prime_vertical_radius(phi1);
        let r1 = a_axis * (1.0 - e2) / (1.0 - e2 * phi1.sin().powi(2)).powf(1.5);
        let d = (coord.x - self.false_easting) / (n1 * k0);

        let phi = phi1
            - (n1 * phi1.tan() / r1)
                * (d * d / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d.powi(4) / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1
                        - 252.0 * ep2
                        - 3.0 * c1 * c1)
                        * d.powi(6)
                        / 720.0);
        let lambda = (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
            + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1)
                * d.powi(5)
                / 120.0)
            / phi1.cos();

        Coord {
            x: self.central_meridian + lambda.to_degrees(),
            y: phi.to_degrees(),
        }
    }
}
