//! Command-line interface definitions and argument parsing
//!
//! One invocation is one form submission: every record field is a flag, with
//! the defaults and bounds the intake form enforces.

use clap::Parser;

use crate::data::{
    ContractLength, CustomerRecord, Gender, SubscriptionType, MAX_AGE, MAX_TENURE_MONTHS,
};

/// Customer churn prediction from pre-fitted encoder, scaler, and classifier artifacts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the fitted artifact files
    #[arg(short, long, default_value = "artifacts")]
    pub artifacts: String,

    /// Customer ID (display only, never used for prediction)
    #[arg(long, default_value = "")]
    pub customer_id: String,

    /// Age in years
    #[arg(long, default_value = "25", value_parser = clap::value_parser!(u32).range(..=MAX_AGE as i64))]
    pub age: u32,

    /// Gender
    #[arg(long, value_enum)]
    pub gender: Gender,

    /// Tenure in months
    #[arg(long, default_value = "12", value_parser = clap::value_parser!(u32).range(..=MAX_TENURE_MONTHS as i64))]
    pub tenure: u32,

    /// Usage frequency (times per month)
    #[arg(long, default_value = "10")]
    pub usage_frequency: u32,

    /// Support calls in the last month
    #[arg(long, default_value = "1")]
    pub support_calls: u32,

    /// Payment delay in days
    #[arg(long, default_value = "0")]
    pub payment_delay: u32,

    /// Subscription type
    #[arg(long, value_enum)]
    pub subscription: SubscriptionType,

    /// Contract length
    #[arg(long, value_enum)]
    pub contract: ContractLength,

    /// Total spend in whole currency units
    #[arg(long, default_value = "500")]
    pub total_spend: u32,

    /// Last interaction (days ago)
    #[arg(long, default_value = "30")]
    pub last_interaction: u32,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Assemble the customer record from the submitted form fields.
    pub fn to_record(&self) -> CustomerRecord {
        CustomerRecord {
            customer_id: self.customer_id.clone(),
            age: self.age,
            gender: self.gender,
            tenure_months: self.tenure,
            usage_frequency: self.usage_frequency,
            support_calls: self.support_calls,
            payment_delay_days: self.payment_delay,
            subscription_type: self.subscription,
            contract_length: self.contract,
            total_spend: self.total_spend,
            last_interaction_days: self.last_interaction,
        }
    }
}
