//! Customer record types, categorical domains, and feature naming

use clap::ValueEnum;

use crate::error::PredictError;

/// Canonical feature names in the exact order the scaler and classifier were
/// fitted with. The raw form labels contain spaces ("Usage Frequency"); the
/// canonical names replace them with underscores. This ordering is a contract
/// with the artifacts and must never change.
pub const FEATURE_NAMES: [&str; 10] = [
    "Age",
    "Gender",
    "Tenure",
    "Usage_Frequency",
    "Support_Calls",
    "Payment_Delay",
    "Subscription_Type",
    "Contract_Length",
    "Total_Spend",
    "Last_Interaction",
];

/// Number of features the artifacts expect
pub const FEATURE_COUNT: usize = FEATURE_NAMES.len();

/// Maximum accepted age, matching the form's upper bound
pub const MAX_AGE: u32 = 120;

/// Maximum accepted tenure in months, matching the form's upper bound
pub const MAX_TENURE_MONTHS: u32 = 240;

/// Customer gender as offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Category label as the encoders were fitted on it
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Subscription tier as offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SubscriptionType {
    Basic,
    Standard,
    Premium,
}

impl SubscriptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionType::Basic => "Basic",
            SubscriptionType::Standard => "Standard",
            SubscriptionType::Premium => "Premium",
        }
    }
}

/// Contract billing period as offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContractLength {
    Annual,
    Quarterly,
    Monthly,
}

impl ContractLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractLength::Annual => "Annual",
            ContractLength::Quarterly => "Quarterly",
            ContractLength::Monthly => "Monthly",
        }
    }
}

/// One customer's attributes at prediction time.
///
/// The id is kept for display only; every other field maps 1:1 to a slot in
/// the feature vector. Unsigned fields make the non-negative domains
/// unrepresentable by construction, so [`CustomerRecord::validate`] only has
/// to check upper bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    /// Opaque identifier, excluded from the feature vector
    pub customer_id: String,
    /// Age in years, 0..=120
    pub age: u32,
    pub gender: Gender,
    /// Months subscribed, 0..=240
    pub tenure_months: u32,
    /// Usage events per month
    pub usage_frequency: u32,
    /// Support calls in the last month
    pub support_calls: u32,
    /// Days the last payment was late
    pub payment_delay_days: u32,
    pub subscription_type: SubscriptionType,
    pub contract_length: ContractLength,
    /// Lifetime spend in whole currency units
    pub total_spend: u32,
    /// Days since the last interaction
    pub last_interaction_days: u32,
}

impl CustomerRecord {
    /// Defensive domain check for callers that bypass the form's own bounds.
    pub fn validate(&self) -> Result<(), PredictError> {
        if self.age > MAX_AGE {
            return Err(PredictError::OutOfDomain {
                field: "Age",
                value: self.age,
                max: MAX_AGE,
            });
        }
        if self.tenure_months > MAX_TENURE_MONTHS {
            return Err(PredictError::OutOfDomain {
                field: "Tenure",
                value: self.tenure_months,
                max: MAX_TENURE_MONTHS,
            });
        }
        Ok(())
    }
}
