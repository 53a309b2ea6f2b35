//! Error types for the beam solver

use thiserror::Error;

/// Main error type for beam analysis operations
#[derive(Error, Debug)]
pub enum BeamError {
    #[error("Beam length must be positive, got {0}")]
    NonPositiveLength(f64),

    #[error("Elastic modulus must be positive, got {0} MPa")]
    NonPositiveModulus(f64),

    #[error("Moment of inertia must be positive, got {0} mm^4")]
    NonPositiveInertia(f64),

    #[error("Beam has no loads - at least one load is required")]
    NoLoads,

    #[error("Load magnitude must be positive, got {0}")]
    NonPositiveLoadMagnitude(f64),

    #[error("Load position {position} is outside the beam [0, {length}]")]
    LoadOutOfBounds { position: f64, length: f64 },

    #[error("Distributed load start {start} must be less than end {end}")]
    InvalidLoadExtent { start: f64, end: f64 },

    #[error("Left support {left} must be left of right support {right}")]
    InvalidSupports { left: f64, right: f64 },

    #[error("Support position {position} is outside the beam [0, {length}]")]
    SupportOutOfBounds { position: f64, length: f64 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for beam analysis operations
pub type BeamResult<T> = Result<T, BeamError>;
