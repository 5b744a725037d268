//! Error taxonomy for artifact loading and prediction

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate a fitted artifact. Fatal at startup:
/// prediction is unavailable without a complete artifact set.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact file {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("artifact file {path} is corrupt")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("scaler artifact is invalid: {reason}")]
    InvalidScaler { reason: String },

    #[error("{artifact} expects {expected} features, got {actual}")]
    ShapeMismatch {
        artifact: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Failure to predict for a single record. Surfaced to the user as a
/// rejected submission; never coerced to a default and never retried.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("unknown {field} category {value:?}; fitted categories are {known:?}")]
    UnknownCategory {
        field: &'static str,
        value: String,
        known: Vec<String>,
    },

    #[error("{field} value {value} is outside the accepted domain 0..={max}")]
    OutOfDomain {
        field: &'static str,
        value: u32,
        max: u32,
    },

    /// A loaded artifact turned out unusable mid-prediction. Should not occur
    /// for a bundle that passed load-time checks.
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}
