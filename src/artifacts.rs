//! Loading the pre-fitted artifact set from disk
//!
//! The training process runs offline and leaves five JSON files in one
//! directory: three label encoders, a scaler, and a classifier. They are read
//! once at startup into an immutable [`Artifacts`] bundle that the pipeline
//! takes by reference, so tests can construct a bundle without touching the
//! filesystem.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::data::FEATURE_COUNT;
use crate::encode::CategoricalEncoder;
use crate::error::ArtifactError;
use crate::model::{ChurnClassifier, StandardScaler};

/// File names the training process writes, relative to the artifact directory
pub const GENDER_ENCODER_FILE: &str = "gender_encoder.json";
pub const CONTRACT_ENCODER_FILE: &str = "contract_encoder.json";
pub const SUBSCRIPTION_ENCODER_FILE: &str = "subscription_encoder.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const MODEL_FILE: &str = "model.json";

/// The complete read-only artifact set a prediction needs
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub gender_encoder: CategoricalEncoder,
    pub contract_encoder: CategoricalEncoder,
    pub subscription_encoder: CategoricalEncoder,
    pub scaler: StandardScaler,
    pub classifier: ChurnClassifier,
}

impl Artifacts {
    /// Bundle already-constructed artifacts, checking that the scaler and
    /// classifier agree with the pipeline's feature width.
    pub fn new(
        gender_encoder: CategoricalEncoder,
        contract_encoder: CategoricalEncoder,
        subscription_encoder: CategoricalEncoder,
        scaler: StandardScaler,
        classifier: ChurnClassifier,
    ) -> Result<Self, ArtifactError> {
        scaler.check()?;
        if scaler.n_features() != FEATURE_COUNT {
            return Err(ArtifactError::ShapeMismatch {
                artifact: "scaler",
                expected: FEATURE_COUNT,
                actual: scaler.n_features(),
            });
        }
        if classifier.n_features() != FEATURE_COUNT {
            return Err(ArtifactError::ShapeMismatch {
                artifact: "classifier",
                expected: FEATURE_COUNT,
                actual: classifier.n_features(),
            });
        }
        Ok(Self {
            gender_encoder,
            contract_encoder,
            subscription_encoder,
            scaler,
            classifier,
        })
    }
}

/// Load the full artifact set from a directory.
///
/// Any missing, unreadable, corrupt, or mutually inconsistent artifact fails
/// the whole load; there is no partial bundle.
pub fn load_artifacts(dir: &Path) -> Result<Artifacts, ArtifactError> {
    let gender_encoder = load_json(&dir.join(GENDER_ENCODER_FILE))?;
    let contract_encoder = load_json(&dir.join(CONTRACT_ENCODER_FILE))?;
    let subscription_encoder = load_json(&dir.join(SUBSCRIPTION_ENCODER_FILE))?;
    let scaler: StandardScaler = load_json(&dir.join(SCALER_FILE))?;
    let classifier: ChurnClassifier = load_json(&dir.join(MODEL_FILE))?;

    Artifacts::new(
        gender_encoder,
        contract_encoder,
        subscription_encoder,
        scaler,
        classifier,
    )
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}
