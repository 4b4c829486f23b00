use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeorefError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid shape: {0}")]
    Shape(String),
}
