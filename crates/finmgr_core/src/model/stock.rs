//! Stock holdings, price bars and portfolio aggregates

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ids::{RecordId, UserId};

/// A user's current position in one ticker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPosition {
    pub ticker: String,
    pub quantity: f64,
    /// quantity × current price, computed upstream
    pub value: f64,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    #[serde(rename = "asOf")]
    pub as_of_date: Timestamp,
}

/// Daily totals across every position
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub current_value: f64,
    pub current_high: f64,
    pub current_low: f64,
    pub current_open: f64,
    pub current_close: f64,
    /// Oldest as-of date among the positions; `None` when there are none
    #[serde(rename = "asOf")]
    pub as_of_date: Option<Timestamp>,
    pub positions: Vec<PortfolioPosition>,
}

/// Combined value of a user's holdings on one trading day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioBalanceHistory {
    pub date: Timestamp,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub close: f64,
}

/// Daily price bar for a ticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockBar {
    pub ticker: String,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub close: f64,
    pub date: Timestamp,
}

/// Quantity of a ticker held by a user over a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStock {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub user_id: UserId,
    pub ticker: String,
    pub quantity: f64,
    pub effective_dt: Timestamp,
    /// End of the holding; open-ended when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_dt: Option<Timestamp>,
}
