/// Reference ellipsoid parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Flattening (dimensionless)
    pub f: f64,
    /// Semi-minor axis: a * (1 - f)
    pub b: f64,
    /// Polar radius of curvature: a / (1 - f)
    pub c: f64,
    /// First eccentricity squared: 2f - f^2
    pub e2: f64,
    /// Second eccentricity squared: e^2 / (1 - e^2)
    pub ep2: f64,
}

impl Ellipsoid {
    pub const fn new(a: f64, f: f64) -> Self {
        let b = a * (1.0 - f);
        let c = a / (1.0 - f);
        let e2 = 2.0 * f - f * f;
        let ep2 = e2 / (1.0 - e2);
        Self { a, f, b, c, e2, ep2 }
    }

    /// Get the first eccentricity (computed at runtime; sqrt is not const).
    pub fn eccentricity(&self) -> f64 {
        self.e2.sqrt()
    }

    /// Copy of this ellipsoid with the semi-major axis divided by `scale`.
    /// The shape (flattening, eccentricities) is unchanged.
    pub fn scaled(&self, scale: f64) -> Self {
        Self::new(self.a / scale, self.f)
    }

    /// Prime-vertical (normal) radius of curvature at geodetic latitude
    /// `lat` in radians: c / sqrt(1 + ep2·cos²φ).
    pub fn prime_vertical_radius(&self, lat: f64) -> f64 {
        let cos_lat = lat.cos();
        self.c / (1.0 + self.ep2 * cos_lat * cos_lat).sqrt()
    }
}

pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);
