use serde::{Deserialize, Serialize};

/// Minimum number of samples needed to derive a summary.
pub const MIN_SAMPLES: usize = 2;

/// One timestamped 3D position reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub timestamp: f64,
}

impl CoordinateSample {
    pub fn new(x: f64, y: f64, z: f64, timestamp: f64) -> Self {
        Self { x, y, z, timestamp }
    }
}

/// Net displacement rate per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VelocityVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl VelocityVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Result payload returned for a track of samples.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KinematicSummary {
    pub distance: f64,
    pub speed: f64,
    pub velocity: VelocityVector,
}

/// Common error type for kinematic calculations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum KinematicsError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("internal failure: {0}")]
    Internal(String),
}

impl KinematicsError {
    pub fn insufficient_samples() -> Self {
        KinematicsError::Validation("At least 2 coordinates required".into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, KinematicsError::Validation(_))
    }
}

pub type KinematicsResult<T> = Result<T, KinematicsError>;
