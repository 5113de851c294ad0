// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TopoError {
    #[error("Insufficient points for ring: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Degenerate ring: all points are collinear at the configured precision")]
    DegenerateRing,

    #[error("Invalid precision scale: {scale} (must be positive and finite)")]
    InvalidPrecisionScale { scale: f64 },

    #[error("Precision model already initialized")]
    PrecisionAlreadySet,

    #[error("Precision repair failed: {reason}")]
    RepairFailed { reason: String },
}

pub type TopoResult<T> = Result<T, TopoError>;
