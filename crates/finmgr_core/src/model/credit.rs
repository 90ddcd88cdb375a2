//! Recurring obligations: credit cards and bills

use serde::{Deserialize, Serialize};

use super::ids::{RecordId, UserId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub user_id: UserId,
    pub name: String,
    pub balance: f64,
    pub limit: f64,
    #[serde(default)]
    pub apr: f64,
    pub min_payment: f64,
    /// Minimum payment as a percentage of the balance (2.0 = 2%)
    pub min_payment_percentage: f64,
}

impl CreditCard {
    /// This month's required payment: the larger of the flat minimum and the
    /// percentage of the balance.
    pub fn payment(&self) -> f64 {
        let by_percentage = self.balance * (self.min_payment_percentage / 100.0);
        self.min_payment.max(by_percentage)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub user_id: UserId,
    pub name: String,
    pub amount: f64,
}
