//! Conversions between three geospatial reference frames on a scaled WGS84
//! ellipsoid: geodetic longitude/latitude/height, geocentric Cartesian
//! (ECEF), and a local topocentric frame centered on a configurable origin.
//!
//! The four transforms are written once against the [`Coordinate`]
//! capability set and run unchanged over a single point (`f64` axes) or a
//! batch of N points ([`Batch`] axes):
//!
//! ```
//! use georef::{Config, Georef, Point};
//!
//! let config = Config::new(0.0, 0.0, 0.0, 0.75);
//! let georef = Georef::new(&config)?;
//!
//! let mut point = Point::new(90.0, 45.0, 0.0);
//! georef.geod2ecef(&mut point).ecef2topo(&mut point);
//! georef.topo2ecef(&mut point).ecef2geod(&mut point);
//! # Ok::<(), georef::GeorefError>(())
//! ```

pub mod coord;
pub mod error;
pub mod geo;
pub mod point;

pub use coord::{Batch, Coordinate};
pub use error::GeorefError;
pub use geo::ellipsoid::{Ellipsoid, WGS84};
pub use geo::georef::{Config, Georef};
pub use point::{Axis, Point};
