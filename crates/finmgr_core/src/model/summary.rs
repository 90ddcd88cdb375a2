//! Month-level budget summary types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryItemType {
    Expense,
    Income,
}

/// What produced a summary line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummarySource {
    Loan,
    Income,
    Taxes,
    Bill,
    CreditCard,
}

impl SummarySource {
    pub fn as_str(self) -> &'static str {
        match self {
            SummarySource::Loan => "loan",
            SummarySource::Income => "income",
            SummarySource::Taxes => "taxes",
            SummarySource::Bill => "bill",
            SummarySource::CreditCard => "credit-card",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryItem {
    #[serde(rename = "type")]
    pub item_type: SummaryItemType,
    pub source: SummarySource,
    pub name: String,
    pub amount: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    pub expenses: Vec<SummaryItem>,
    pub total_cost: f64,
    pub total_balance: f64,
    pub loan_cost: f64,
    pub loan_balance: f64,
    pub taxes: f64,
    #[serde(rename = "bills")]
    pub bill_cost: f64,
    #[serde(rename = "creditCards")]
    pub credit_card_cost: f64,
    pub credit_card_balance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSummary {
    pub incomes: Vec<SummaryItem>,
    pub total_income: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditSummary {
    pub total: f64,
    pub available: f64,
    /// Percent of the combined limit in use, rounded to a whole number
    pub utilization: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub income_summary: IncomeSummary,
    pub expense_summary: ExpenseSummary,
    pub credit_summary: CreditSummary,
    pub net_funds: f64,
}
