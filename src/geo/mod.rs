pub mod ellipsoid;
pub mod georef;
