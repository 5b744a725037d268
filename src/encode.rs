//! Ordinal label encoding against a fitted vocabulary

use serde::{Deserialize, Serialize};

/// A pre-fitted ordinal label encoder.
///
/// `classes` is the vocabulary fixed at fit time; a label's code is its index
/// in that list. The training process writes the classes in the order it
/// assigned codes, so the encoder never reorders them. One instance exists per
/// categorical field, all loaded from separate artifact files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalEncoder {
    classes: Vec<String>,
}

impl CategoricalEncoder {
    /// Build an encoder from an already-fitted class table.
    pub fn from_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// Map a category label to its fitted integer code.
    ///
    /// A label absent from the fitted vocabulary yields `None`, never a
    /// default code: silently coercing would feed the classifier a feature it
    /// was never trained on. Callers decide how to report the rejection.
    pub fn encode(&self, value: &str) -> Option<u32> {
        self.classes
            .iter()
            .position(|class| class == value)
            .map(|code| code as u32)
    }

    /// The fitted vocabulary, in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}
