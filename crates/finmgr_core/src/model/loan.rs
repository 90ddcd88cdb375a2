//! Loans and their amortization schedules

use serde::{Deserialize, Serialize};

use super::ids::{RecordId, UserId};

/// A loan and, once calculated, its amortization
///
/// `total`, `interest_rate`, `loan_term` and the optional `monthly_payment`
/// are the terms supplied by the caller. Everything else is derived by
/// [`crate::amortization::calculate_loan`] and is overwritten on every
/// calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub user_id: UserId,
    #[serde(default)]
    pub name: String,
    /// Principal borrowed
    pub total: f64,
    /// Annual interest rate in percent (5.0 = 5%)
    pub interest_rate: f64,
    /// Term in months; after calculation, the number of months actually needed.
    /// Zero or negative means no term was given.
    #[serde(default)]
    pub loan_term: i32,
    /// Fixed monthly payment. When absent it is solved from the term.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<f64>,

    #[serde(default, alias = "interest")]
    pub total_interest: f64,
    #[serde(default)]
    pub total_cost: f64,
    #[serde(default)]
    pub total_payment: f64,
    #[serde(default)]
    pub payment_schedule: Vec<PaymentScheduleItem>,
}

impl Loan {
    /// Loan terms with no derived fields populated
    pub fn new(total: f64, interest_rate: f64, loan_term: i32) -> Self {
        Self {
            total,
            interest_rate,
            loan_term,
            ..Default::default()
        }
    }

    /// Same terms, repaid with a fixed monthly payment
    #[must_use]
    pub fn with_payment(mut self, payment: f64) -> Self {
        self.monthly_payment = Some(payment);
        self
    }

    /// Fixed payment supplied by the caller, if it is usable
    pub fn fixed_payment(&self) -> Option<f64> {
        self.monthly_payment.filter(|p| *p > 0.0)
    }
}

/// One month of an amortization schedule
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentScheduleItem {
    /// 1-based month index
    pub month: u32,
    pub principal: f64,
    pub interest: f64,
    pub interest_to_date: f64,
    pub principal_to_date: f64,
    pub remaining_balance: f64,
}

/// One month of a side-by-side comparison between two schedules
///
/// Unsuffixed fields come from the original schedule, `*_new` from the
/// candidate, and every `*_delta` is candidate minus original.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentScheduleComparisonItem {
    pub month: u32,
    pub principal: f64,
    pub principal_new: f64,
    pub principal_delta: f64,
    pub interest: f64,
    pub interest_new: f64,
    pub interest_delta: f64,
    pub interest_to_date: f64,
    pub interest_to_date_new: f64,
    pub interest_to_date_delta: f64,
    pub principal_to_date: f64,
    pub principal_to_date_new: f64,
    pub principal_to_date_delta: f64,
    pub remaining_balance: f64,
    pub remaining_balance_new: f64,
    pub remaining_balance_delta: f64,
}

/// Totals across a user's loans
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoansSummary {
    pub count: usize,
    pub total_balance: f64,
    pub monthly_cost: f64,
}

impl LoansSummary {
    pub fn from_loans(loans: &[Loan]) -> Self {
        loans.iter().fold(Self::default(), |mut acc, l| {
            acc.count += 1;
            acc.total_balance += l.total;
            acc.monthly_cost += l.monthly_payment.unwrap_or(0.0);
            acc
        })
    }
}
