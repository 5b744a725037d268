//! ChurnForge: a CLI front-end for customer churn prediction
//!
//! This library turns one customer record into a churn verdict by running it
//! through pre-fitted artifacts loaded from disk: three categorical label
//! encoders, a standard scaler, and a binary logistic classifier. No training
//! happens here; the artifacts are produced offline and consumed read-only.

pub mod artifacts;
pub mod cli;
pub mod data;
pub mod encode;
pub mod error;
pub mod model;
pub mod pipeline;

// Re-export public items for easier access
pub use artifacts::{load_artifacts, Artifacts};
pub use cli::Args;
pub use data::{ContractLength, CustomerRecord, Gender, SubscriptionType};
pub use encode::CategoricalEncoder;
pub use error::{ArtifactError, PredictError};
pub use model::{ChurnClassifier, ChurnLabel, StandardScaler, Verdict};
pub use pipeline::predict_churn;

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
