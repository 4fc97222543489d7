//! Error types for army_points

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for army_points operations
#[derive(Debug, Error)]
pub enum PointsError {
    /// Input file does not exist
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// Input file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Army list has no faction line
    #[error("army list is empty: no faction line found")]
    EmptyList,
    /// Leading quantity on a list line does not fit a u32
    #[error("line {line}: quantity '{value}' is not a valid number")]
    InvalidQuantity { line: usize, value: String },
    /// No faction in the points document matched the requested one
    #[error("no known faction {faction}")]
    FactionNotFound { faction: String },
    /// No unit in the resolved faction matched the requested one
    #[error("could not find any unit named {name}")]
    UnitNotFound { name: String },
    /// Requested model count exceeds every tier of the matched unit
    #[error("models count for unit {quantity} {name} was too great")]
    QuantityTooGreat { quantity: u32, name: String },
    /// Similarity cutoff outside [0, 1]
    #[error("similarity cutoff {0} must be between 0 and 1")]
    InvalidCutoff(f64),
    /// Failed to serialize the report
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for army_points operations
pub type Result<T> = std::result::Result<T, PointsError>;
