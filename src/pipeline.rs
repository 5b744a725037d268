//! The request → features → prediction transformation
//!
//! Stateless and synchronous: one call per form submission, no shared mutable
//! state, same record plus same artifacts always yields the same verdict.

use ndarray::Array1;

use crate::artifacts::Artifacts;
use crate::data::CustomerRecord;
use crate::encode::CategoricalEncoder;
use crate::error::PredictError;
use crate::model::{assemble_verdict, Verdict};

/// Run one customer record through the fitted artifacts and produce a verdict.
///
/// Steps: domain validation, categorical encoding, feature assembly (the
/// customer id is dropped here), standardization, classifier inference, and
/// verdict assembly. Every failure is surfaced; nothing is coerced or retried.
pub fn predict_churn(
    artifacts: &Artifacts,
    record: &CustomerRecord,
) -> Result<Verdict, PredictError> {
    record.validate()?;

    let gender = encode_category(&artifacts.gender_encoder, "Gender", record.gender.as_str())?;
    let subscription = encode_category(
        &artifacts.subscription_encoder,
        "Subscription Type",
        record.subscription_type.as_str(),
    )?;
    let contract = encode_category(
        &artifacts.contract_encoder,
        "Contract Length",
        record.contract_length.as_str(),
    )?;

    // Raw vector in the fitted order; see data::FEATURE_NAMES
    let raw = Array1::from(vec![
        f64::from(record.age),
        f64::from(gender),
        f64::from(record.tenure_months),
        f64::from(record.usage_frequency),
        f64::from(record.support_calls),
        f64::from(record.payment_delay_days),
        f64::from(subscription),
        f64::from(contract),
        f64::from(record.total_spend),
        f64::from(record.last_interaction_days),
    ]);

    // Shape agreement was checked when the bundle was built, so scaling and
    // inference cannot fail for a well-formed bundle.
    let scaled = artifacts.scaler.transform(&raw)?;
    let label = artifacts.classifier.predict(&scaled)?;
    let churn_probability = artifacts.classifier.predict_proba(&scaled)?;

    Ok(assemble_verdict(label, churn_probability))
}

/// Attach the field name to an encoder miss. The encoder itself only knows
/// its vocabulary; which record field it serves is the pipeline's business.
fn encode_category(
    encoder: &CategoricalEncoder,
    field: &'static str,
    value: &str,
) -> Result<u32, PredictError> {
    encoder
        .encode(value)
        .ok_or_else(|| PredictError::UnknownCategory {
            field,
            value: value.to_string(),
            known: encoder.classes().to_vec(),
        })
}
