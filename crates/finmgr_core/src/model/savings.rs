use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::income::PayFrequency;

/// Savings goal to reach by a deadline, saved from each paycheck
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsCalculationRequest {
    /// Target amount to have saved by the deadline
    #[serde(default)]
    pub goal: f64,
    /// Amount the user plans to set aside each pay
    #[serde(default)]
    pub amount: f64,
    pub deadline: Option<Timestamp>,
    pub pay_frequency: Option<PayFrequency>,
    pub next_pay: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsCalculationResponse {
    pub goal: f64,
    /// Amount to save each pay to reach `goal`
    pub per_pay: f64,
    /// Echo of the requested per-pay amount
    pub man_per_pay: f64,
    /// Total saved by the deadline at `man_per_pay`
    pub actual: f64,
    pub num_pays: u32,
    pub deadline: Option<Timestamp>,
}
