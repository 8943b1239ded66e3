use serde::{Deserialize, Serialize};

/// seven-parameter similarity transform between two geocentric frames, in the
/// position-vector convention used by PROJ `+towgs84` strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Helmert {
    /// translations in meters
    pub tx: f64,
    pub ty: f64,
    pub tz: f64,
    /// rotations in arc-seconds
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
    /// scale difference in parts per million
    pub scale_ppm: f64,
}

impl Helmert {
    /// Rome 1940 to WGS84, the `+towgs84` parameters of EPSG:3003.
    pub const ROME40_TO_WGS84: Helmert = Helmert {
        tx: -104.1,
        ty: -49.1,
        tz: -9.9,
        rx: 0.971,
        ry: -2.917,
        rz: 0.714,
        scale_ppm: -11.68,
    };

    /// the reverse transform. negating every parameter is exact to the millimeter
    /// for rotations and scale differences of this magnitude.
    pub fn inverse(&self) -> Helmert {
        Helmert {
            tx: -self.tx,
            ty: -self.ty,
            tz: -self.tz,
            rx: -self.rx,
            ry: -self.ry,
            rz: -self.rz,
            scale_ppm: -self.scale_ppm,
        }
    }

    pub fn apply(&self, ecef: [f64; 3]) -> [f64; 3] {
        let [x, y, z] = ecef;
        let arcsec = std::f64::consts::PI / (180.0 * 3600.0);
        let (rx, ry, rz) = (self.rx * arcsec, self.ry * arcsec, self.rz * arcsec);
        let m = 1.0 + self.scale_ppm * 1e-6;
        [
            self.tx + m * (x - rz * y + ry * z),
            self.ty + m * (rz * x + y - rx * z),
            self.tz + m * (-ry * x + rx * y + z),
        ]
    }
}
