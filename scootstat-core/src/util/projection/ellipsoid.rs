use serde::{Deserialize, Serialize};

/// reference ellipsoid described by its semi-major axis (meters) and flattening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    pub semi_major_axis: f64,
    pub flattening: f64,
}

impl Ellipsoid {
    pub const WGS84: Ellipsoid = Ellipsoid {
        semi_major_axis: 6_378_137.0,
        flattening: 1.0 / 298.257_223_563,
    };

    /// Hayford 1909, the ellipsoid of the Rome 1940 datum.
    pub const INTERNATIONAL_1924: Ellipsoid = Ellipsoid {
        semi_major_axis: 6_378_388.0,
        flattening: 1.0 / 297.0,
    };

    /// first eccentricity squared
    pub fn e2(&self) -> f64 {
        self.flattening * (2.0 - self.flattening)
    }

    /// second eccentricity squared
    pub fn ep2(&self) -> f64 {
        let e2 = self.e2();
        e2 / (1.0 - e2)
    }

    /// radius of curvature in the prime vertical at latitude `phi` (radians)
    pub fn prime_vertical_radius(&self, phi: f64) -> f64 {
        self.semi_major_axis / (1.0 - self.e2() * phi.sin().powi(2)).sqrt()
    }

    /// distance along the meridian from the equator to latitude `phi` (radians).
    pub fn meridian_arc(&self, phi: f64) -> f64 {
        let e2 = self.e2();
        let e4 = e2 * e2;
        let e6 = e4 * e2;
        self.semi_major_axis
            * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
                - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
                + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
                - (35.0 * e6 / 3072.0) * (6.0 * phi).sin())
    }

    /// geodetic latitude/longitude (radians) and ellipsoidal height to earth-centered
    /// earth-fixed cartesian coordinates.
    pub fn geodetic_to_ecef(&self, phi: f64, lambda: f64, height: f64) -> [f64; 3] {
        let n = self.prime_vertical_radius(phi);
        let e2 = self.e2();
        [
            (n + height) * phi.cos() * lambda.cos(),
            (n + height) * phi.cos() * lambda.sin(),
            (n * (1.0 - e2) + height) * phi.sin(),
        ]
    }

    /// inverse of [`Ellipsoid::geodetic_to_ecef`], returning (phi, lambda, height). uses the
    /// fixed-point iteration on latitude which converges to sub-millimeter within
    /// a handful of steps for terrestrial points.
    pub fn ecef_to_geodetic(&self, ecef: [f64; 3]) -> (f64, f64, f64) {
        let [x, y, z] = ecef;
        let e2 = self.e2();
        let p = (x * x + y * y).sqrt();
        let lambda = y.atan2(x);
        let mut phi = z.atan2(p * (1.0 - e2));
        let mut height = 0.0;
        for _ in 0..8 {
            let n = self.prime_vertical_radius(phi);
            height = p / phi.cos() - n;
            phi = z.atan2(p * (1.0 - e2 * n / (n + height)));
        }
        (phi, lambda, height)
    }
}

#[cfg(test)]
mod tests {
    use super::Ellipsoid;

    #[test]
    fn test_ecef_round_trip_near_turin() {
        let ellipsoid = Ellipsoid::INTERNATIONAL_1924;
        let phi = 45.07_f64.to_radians();
        let lambda = 7.68_f64.to_radians();
        let ecef = ellipsoid.geodetic_to_ecef(phi, lambda, 0.0);
        let (phi2, lambda2, h2) = ellipsoid.ecef_to_geodetic(ecef);
        assert!((phi - phi2).abs() < 1e-10);
        assert!((lambda - lambda2).abs() < 1e-10);
        assert!(h2.abs() < 1e-3);
    }

    #[test]
    fn test_meridian_arc_at_45_degrees() {
        // roughly 4984 km on the WGS84 ellipsoid
        let arc = Ellipsoid::WGS84.meridian_arc(45.0_f64.to_radians());
        assert!((arc - 4_984_944.0).abs() < 10.0, "arc was {arc}");
    }
}
