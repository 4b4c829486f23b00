//! Georeferencing engine — conversions between geodetic lon/lat/height
//! (EPSG:4326-style), geocentric Cartesian (EPSG:4978), and a local
//! topocentric frame (EPSG:5819-style) centered on a configurable origin.
//!
//! All ellipsoid and origin constants are derived once in [`Georef::new`]
//! and are read-only afterwards; the four transforms mutate a [`Point`] in
//! place and return `&Georef`, so calls chain:
//!
//!   georef.geod2ecef(&mut p).ecef2topo(&mut p);
//!
//! Geodetic longitudes and latitudes are degrees relative to the origin with
//! the scale factor applied: λ = (λ₀ + (x − λ₀)·s)·rad, and the inverse
//! un-scales back to degrees. Heights are metres above the ellipsoid.

use std::f64::consts::FRAC_PI_2;

use crate::coord::Coordinate;
use crate::error::GeorefError;
use crate::geo::ellipsoid::{Ellipsoid, WGS84};
use crate::point::{Axis, Point};

const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// User-supplied georeferencing parameters: the topocentric/projection
/// origin and the projection scale factor.
///
/// The origin point holds longitude (degrees) in x, latitude (degrees) in y,
/// and height above the ellipsoid (metres) in z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub origin: Point<f64>,
    pub scale_factor: f64,
}

impl Config {
    pub fn new(longitude: f64, latitude: f64, height: f64, scale_factor: f64) -> Self {
        Self {
            origin: Point::new(longitude, latitude, height),
            scale_factor,
        }
    }
}

/// Derived georeferencing constants and the four frame transforms.
///
/// For a fixed [`Config`] the derivation is a pure function: two `Georef`
/// values built from equal configs are field-for-field equal. A `Georef` is
/// immutable after construction and may be shared freely across threads.
#[derive(Clone, Debug, PartialEq)]
pub struct Georef {
    origin: Point<f64>,
    scale_factor: f64,
    ellipsoid: Ellipsoid,
    sin_lon0: f64,
    cos_lon0: f64,
    sin_lat0: f64,
    cos_lat0: f64,
    normal_radius: f64,
}

impl Georef {
    /// Derive the georeferencing constants from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GeorefError::InvalidParameter`] if the origin longitude is
    /// outside [-180, 180] degrees, the origin latitude outside [-90, 90]
    /// degrees, the origin height non-finite, or the scale factor not a
    /// finite positive number.
    pub fn new(config: &Config) -> Result<Self, GeorefError> {
        let lon0 = *config.origin.x();
        let lat0 = *config.origin.y();
        let height0 = *config.origin.z();
        let scale = config.scale_factor;

        if !lon0.is_finite() || lon0.abs() > 180.0 {
            return Err(GeorefError::InvalidParameter(format!(
                "origin longitude must be in [-180, 180] degrees, got {lon0}"
            )));
        }
        if !lat0.is_finite() || lat0.abs() > 90.0 {
            return Err(GeorefError::InvalidParameter(format!(
                "origin latitude must be in [-90, 90] degrees, got {lat0}"
            )));
        }
        if !height0.is_finite() {
            return Err(GeorefError::InvalidParameter(format!(
                "origin height must be finite, got {height0}"
            )));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(GeorefError::InvalidParameter(format!(
                "scale factor must be finite and positive, got {scale}"
            )));
        }

        let ellipsoid = WGS84.scaled(scale);
        let longitude = lon0.to_radians();
        let latitude = lat0.to_radians();

        Ok(Self {
            origin: config.origin,
            scale_factor: scale,
            ellipsoid,
            sin_lon0: longitude.sin(),
            cos_lon0: longitude.cos(),
            sin_lat0: latitude.sin(),
            cos_lat0: latitude.cos(),
            normal_radius: ellipsoid.prime_vertical_radius(latitude),
        })
    }

    /// The configured origin: longitude/latitude in degrees, height in
    /// metres.
    pub fn origin(&self) -> &Point<f64> {
        &self.origin
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// The scale-adjusted ellipsoid all transforms run against.
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Prime-vertical radius of curvature at the origin latitude.
    pub fn normal_radius(&self) -> f64 {
        self.normal_radius
    }

    /// Geodetic (lon/lat degrees, height metres) → geocentric Cartesian.
    ///
    /// EPSG:4326 to EPSG:4978.
    pub fn geod2ecef<C: Coordinate>(&self, point: &mut Point<C>) -> &Self {
        let e = &self.ellipsoid;
        let lon0 = *self.origin.x();
        let lat0 = *self.origin.y();
        let height = point.z().clone();

        let longitude = ((point.x().clone() - lon0) * self.scale_factor + lon0) * DEG_TO_RAD;
        let latitude = ((point.y().clone() - lat0) * self.scale_factor + lat0) * DEG_TO_RAD;
        let cos_lat = latitude.cos();
        let sin_lat = latitude.sin();
        let normal = (cos_lat.clone() * cos_lat.clone() * e.ep2 + 1.0).sqrt().recip() * e.c;
        let hplane = (normal.clone() + height.clone()) * cos_lat;

        *point.x_mut() = hplane.clone() * longitude.cos();
        *point.y_mut() = hplane * longitude.sin();
        *point.z_mut() = (height + normal * (1.0 - e.e2)) * sin_lat;
        self
    }

    /// Geocentric Cartesian → geodetic (lon/lat degrees, height metres).
    ///
    /// EPSG:4978 to EPSG:4326. Closed-form two-pass refinement of the
    /// latitude tangent; no convergence check. Latitudes of exactly ±90° and
    /// 0° take forced-select branches so the height division never runs
    /// against a denormal, and the height formula itself switches between
    ///
    ///   h = hplane/cosφ − N        (|tanφ| ≤ 1, stable away from the poles)
    ///   h = z/sinφ − N·(1 − e²)    (|tanφ| > 1, stable near the poles)
    ///
    /// each being singular in the other's regime.
    pub fn ecef2geod<C: Coordinate>(&self, point: &mut Point<C>) -> &Self {
        let e = &self.ellipsoid;
        let lon0 = *self.origin.x();
        let lat0 = *self.origin.y();
        let x = point.x().clone();
        let y = point.y().clone();
        let z = point.z().clone();

        let hplane = x.hypot(&y);
        let tangent0 =
            z.clone() / hplane.clone() * (hplane.hypot(&z).recip() * (e.ep2 * e.b) + 1.0);
        let latitude0 = (tangent0 * (1.0 - e.f)).atan();
        let tangent1 = (z.clone() + latitude0.sin().powi(3) * (e.ep2 * e.b))
            / (hplane.clone() - latitude0.cos().powi(3) * (e.e2 * e.a));
        let latitude1 = (tangent1 * (1.0 - e.f)).atan();
        let tangent = (z.clone() + latitude1.sin().powi(3) * (e.ep2 * e.b))
            / (hplane.clone() - latitude1.cos().powi(3) * (e.e2 * e.a));

        let longitude = y.atan2(&x);
        let latitude = tangent.atan();
        let cos_lat = latitude.select(|lat| lat == FRAC_PI_2, latitude.fill(1.0), latitude.cos());
        let sin_lat = latitude.select(|lat| lat == 0.0, latitude.fill(1.0), latitude.sin());
        let normal = (cos_lat.clone() * cos_lat.clone() * e.ep2 + 1.0).sqrt().recip() * e.c;

        let height = tangent.select(
            |t| t.abs() <= 1.0,
            hplane / cos_lat - normal.clone(),
            z / sin_lat - normal * (1.0 - e.e2),
        );

        *point.x_mut() = (longitude * RAD_TO_DEG - lon0) / self.scale_factor + lon0;
        *point.y_mut() = (latitude * RAD_TO_DEG - lat0) / self.scale_factor + lat0;
        *point.z_mut() = height;
        self
    }

    /// Geocentric Cartesian → local topocentric.
    ///
    /// EPSG:4978 to EPSG:5819. Shifts the frame to the center of curvature
    /// at the origin (the e²·N₀·sinφ₀ ellipsoid-bulge correction), aligns
    /// the axes by two plane rotations plus an axis swap and flip, then
    /// drops the origin's radius so the origin itself lands at (0, 0, 0).
    pub fn ecef2topo<C: Coordinate>(&self, point: &mut Point<C>) -> &Self {
        *point.z_mut() += self.ellipsoid.e2 * self.normal_radius * self.sin_lat0;
        point.rotate(Axis::X, Axis::Y, self.cos_lon0, self.sin_lon0);
        point.rotate(Axis::Z, Axis::X, self.sin_lat0, self.cos_lat0);
        point.swap(Axis::X, Axis::Y);
        let flipped = -point.y().clone();
        *point.y_mut() = flipped;
        *point.z_mut() -= self.normal_radius + *self.origin.z();
        self
    }

    /// Local topocentric → geocentric Cartesian.
    ///
    /// EPSG:5819 to EPSG:4978. The exact algebraic inverse of
    /// [`Georef::ecef2topo`]: each step applied in reverse order with
    /// negated/transposed rotation parameters, so the round trip reproduces
    /// the input to floating-point precision.
    pub fn topo2ecef<C: Coordinate>(&self, point: &mut Point<C>) -> &Self {
        *point.z_mut() += self.normal_radius + *self.origin.z();
        let flipped = -point.y().clone();
        *point.y_mut() = flipped;
        point.swap(Axis::X, Axis::Y);
        point.rotate(Axis::Z, Axis::X, self.sin_lat0, -self.cos_lat0);
        point.rotate(Axis::X, Axis::Y, self.cos_lon0, -self.sin_lon0);
        *point.z_mut() -= self.ellipsoid.e2 * self.normal_radius * self.sin_lat0;
        self
    }
}
