//! Fitted scaler and classifier artifacts, and the verdict they produce

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;

/// Pre-fitted standardization parameters: per-feature mean and standard
/// deviation computed by the offline training process. Never recomputed here.
///
/// The artifact file carries plain JSON lists (`{"mean": [...], "std": [...]}`),
/// so serialization goes through [`RawScaler`] instead of ndarray's own
/// versioned array format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawScaler", into = "RawScaler")]
pub struct StandardScaler {
    mean: Array1<f64>,
    std: Array1<f64>,
}

/// On-disk shape of the scaler artifact
#[derive(Serialize, Deserialize)]
struct RawScaler {
    mean: Vec<f64>,
    std: Vec<f64>,
}

impl From<RawScaler> for StandardScaler {
    fn from(raw: RawScaler) -> Self {
        // Parameter validation happens in check(), not here, so a bad file
        // still reports InvalidScaler rather than a generic parse failure
        Self {
            mean: Array1::from(raw.mean),
            std: Array1::from(raw.std),
        }
    }
}

impl From<StandardScaler> for RawScaler {
    fn from(scaler: StandardScaler) -> Self {
        Self {
            mean: scaler.mean.to_vec(),
            std: scaler.std.to_vec(),
        }
    }
}

impl StandardScaler {
    /// Build a scaler from already-fitted parameters, rejecting parameter
    /// vectors a standardizer could not have produced.
    pub fn from_fitted(mean: Array1<f64>, std: Array1<f64>) -> Result<Self, ArtifactError> {
        let scaler = Self { mean, std };
        scaler.check()?;
        Ok(scaler)
    }

    /// Validate fitted parameters. Called after deserialization as well,
    /// since serde accepts any pair of arrays.
    pub fn check(&self) -> Result<(), ArtifactError> {
        if self.mean.len() != self.std.len() {
            return Err(ArtifactError::InvalidScaler {
                reason: format!(
                    "mean has {} entries but std has {}",
                    self.mean.len(),
                    self.std.len()
                ),
            });
        }
        if let Some(bad) = self
            .std
            .iter()
            .find(|s| !s.is_finite() || **s <= 0.0)
        {
            return Err(ArtifactError::InvalidScaler {
                reason: format!("std entry {bad} is not a positive finite number"),
            });
        }
        if let Some(bad) = self.mean.iter().find(|m| !m.is_finite()) {
            return Err(ArtifactError::InvalidScaler {
                reason: format!("mean entry {bad} is not finite"),
            });
        }
        Ok(())
    }

    /// Standardize a raw feature vector: `(x - mean) / std` per feature.
    pub fn transform(&self, features: &Array1<f64>) -> Result<Array1<f64>, ArtifactError> {
        if features.len() != self.mean.len() {
            return Err(ArtifactError::ShapeMismatch {
                artifact: "scaler",
                expected: self.mean.len(),
                actual: features.len(),
            });
        }
        Ok((features - &self.mean) / &self.std)
    }

    /// Number of features the scaler was fitted on
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }
}

/// Binary outcome of one prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChurnLabel {
    Churn,
    NoChurn,
}

/// Final answer for one record: the predicted label and the probability of
/// that label. Built once per request, rendered, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub label: ChurnLabel,
    /// Probability of the predicted class, in [0, 1]
    pub probability: f64,
}

/// Pre-fitted binary logistic classifier: one weight per feature plus an
/// intercept. The positive class is "churn".
///
/// Like the scaler, the artifact file carries plain JSON lists, hence the
/// [`RawClassifier`] indirection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawClassifier", into = "RawClassifier")]
pub struct ChurnClassifier {
    weights: Array1<f64>,
    intercept: f64,
}

/// On-disk shape of the classifier artifact
#[derive(Serialize, Deserialize)]
struct RawClassifier {
    weights: Vec<f64>,
    intercept: f64,
}

impl From<RawClassifier> for ChurnClassifier {
    fn from(raw: RawClassifier) -> Self {
        Self {
            weights: Array1::from(raw.weights),
            intercept: raw.intercept,
        }
    }
}

impl From<ChurnClassifier> for RawClassifier {
    fn from(clf: ChurnClassifier) -> Self {
        Self {
            weights: clf.weights.to_vec(),
            intercept: clf.intercept,
        }
    }
}

impl ChurnClassifier {
    pub fn from_fitted(weights: Array1<f64>, intercept: f64) -> Self {
        Self { weights, intercept }
    }

    /// Probability of the positive ("churn") class for a scaled feature vector.
    pub fn predict_proba(&self, features: &Array1<f64>) -> Result<f64, ArtifactError> {
        if features.len() != self.weights.len() {
            return Err(ArtifactError::ShapeMismatch {
                artifact: "classifier",
                expected: self.weights.len(),
                actual: features.len(),
            });
        }
        let decision = self.weights.dot(features) + self.intercept;
        Ok(sigmoid(decision))
    }

    /// Binary label at the standard 0.5 decision threshold.
    pub fn predict(&self, features: &Array1<f64>) -> Result<ChurnLabel, ArtifactError> {
        let proba = self.predict_proba(features)?;
        Ok(if proba >= 0.5 {
            ChurnLabel::Churn
        } else {
            ChurnLabel::NoChurn
        })
    }

    /// Number of features the classifier was fitted on
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Assemble the verdict from the classifier's output. The reported
/// probability is always the probability of the *predicted* class, so a
/// no-churn call reports the exact complement of P(churn). Valid only for a
/// strictly binary classifier whose class probabilities sum to one.
pub fn assemble_verdict(label: ChurnLabel, churn_probability: f64) -> Verdict {
    let probability = match label {
        ChurnLabel::Churn => churn_probability,
        ChurnLabel::NoChurn => 1.0 - churn_probability,
    };
    Verdict { label, probability }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn identity_scaler(n: usize) -> StandardScaler {
        StandardScaler::from_fitted(Array1::zeros(n), Array1::ones(n)).unwrap()
    }

    #[test]
    fn test_standardization_arithmetic() {
        let scaler =
            StandardScaler::from_fitted(array![10.0, 0.0, -2.0], array![2.0, 1.0, 4.0]).unwrap();
        let scaled = scaler.transform(&array![14.0, 0.5, -2.0]).unwrap();
        assert_eq!(scaled, array![2.0, 0.5, 0.0]);
    }

    #[test]
    fn test_scaler_rejects_zero_std() {
        let result = StandardScaler::from_fitted(array![0.0, 0.0], array![1.0, 0.0]);
        assert!(matches!(result, Err(ArtifactError::InvalidScaler { .. })));
    }

    #[test]
    fn test_scaler_rejects_nan_parameters() {
        assert!(StandardScaler::from_fitted(array![f64::NAN], array![1.0]).is_err());
        assert!(StandardScaler::from_fitted(array![0.0], array![f64::NAN]).is_err());
    }

    #[test]
    fn test_scaler_rejects_length_mismatch() {
        let scaler = identity_scaler(3);
        assert!(matches!(
            scaler.transform(&array![1.0, 2.0]),
            Err(ArtifactError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_sigmoid_maps_decision_to_probability() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!(sigmoid(20.0) > 0.999);
        assert!(sigmoid(-20.0) < 0.001);
    }

    #[test]
    fn test_classifier_threshold() {
        // Single feature, weight 1, intercept 0: proba = sigmoid(x)
        let clf = ChurnClassifier::from_fitted(array![1.0], 0.0);
        assert_eq!(clf.predict(&array![3.0]).unwrap(), ChurnLabel::Churn);
        assert_eq!(clf.predict(&array![-3.0]).unwrap(), ChurnLabel::NoChurn);
        // Exactly at the threshold counts as churn
        assert_eq!(clf.predict(&array![0.0]).unwrap(), ChurnLabel::Churn);
    }

    #[test]
    fn test_verdict_complement_is_exact() {
        let p = 0.23;
        let verdict = assemble_verdict(ChurnLabel::NoChurn, p);
        assert_eq!(verdict.probability, 1.0 - p);

        let verdict = assemble_verdict(ChurnLabel::Churn, p);
        assert_eq!(verdict.probability, p);
    }

    #[test]
    fn test_classifier_rejects_wrong_width() {
        let clf = ChurnClassifier::from_fitted(array![1.0, 2.0], 0.0);
        assert!(clf.predict_proba(&array![1.0]).is_err());
    }

    #[test]
    fn test_fitted_parameters_deserialize_from_plain_lists() {
        // The artifact files carry bare JSON lists, not a wrapped array format
        let scaler: StandardScaler =
            serde_json::from_str(r#"{"mean":[10.0,0.0],"std":[2.0,1.0]}"#).unwrap();
        scaler.check().unwrap();
        assert_eq!(scaler.transform(&array![14.0, 0.5]).unwrap(), array![2.0, 0.5]);

        let clf: ChurnClassifier =
            serde_json::from_str(r#"{"weights":[1.0,0.0],"intercept":0.0}"#).unwrap();
        assert!((clf.predict_proba(&array![0.0, 5.0]).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_fitted_parameters_serialize_as_plain_lists() {
        let scaler = StandardScaler::from_fitted(array![1.0], array![2.0]).unwrap();
        assert_eq!(
            serde_json::to_value(&scaler).unwrap(),
            serde_json::json!({"mean": [1.0], "std": [2.0]})
        );

        let clf = ChurnClassifier::from_fitted(array![0.5], -0.25);
        assert_eq!(
            serde_json::to_value(&clf).unwrap(),
            serde_json::json!({"weights": [0.5], "intercept": -0.25})
        );
    }

    #[test]
    fn test_invalid_scaler_file_still_classified_after_deserialization() {
        // Deserialization itself stays permissive; check() flags the bad std
        let scaler: StandardScaler =
            serde_json::from_str(r#"{"mean":[0.0],"std":[0.0]}"#).unwrap();
        assert!(matches!(scaler.check(), Err(ArtifactError::InvalidScaler { .. })));
    }
}
