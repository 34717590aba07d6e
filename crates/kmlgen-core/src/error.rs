//! Error types for kmlgen

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KmlError {
    #[error("Invalid latitude {value}: must be finite and within [-90, 90]")]
    InvalidLatitude { value: f64 },

    #[error("Invalid longitude {value}: must be finite and within [-180, 180]")]
    InvalidLongitude { value: f64 },
}

pub type Result<T> = std::result::Result<T, KmlError>;
