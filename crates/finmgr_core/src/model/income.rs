//! Income sources and their pay cycles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ids::{RecordId, UserId};
use crate::error::ParseEnumError;

/// How an income's rate is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PayType {
    /// `rate` is per hour; gross pay is rate × hours
    Hourly,
    /// `rate` is the gross pay per period
    Salary,
}

impl PayType {
    pub const ALL: [PayType; 2] = [PayType::Hourly, PayType::Salary];

    pub fn as_str(self) -> &'static str {
        match self {
            PayType::Hourly => "hourly",
            PayType::Salary => "salary",
        }
    }
}

impl FromStr for PayType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseEnumError::PayType(s.to_string()))
    }
}

impl TryFrom<String> for PayType {
    type Error = ParseEnumError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PayType> for String {
    fn from(t: PayType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for PayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often an income pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PayFrequency {
    Weekly,
    BiWeekly,
    Monthly,
}

impl PayFrequency {
    pub const ALL: [PayFrequency; 3] = [
        PayFrequency::Weekly,
        PayFrequency::BiWeekly,
        PayFrequency::Monthly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PayFrequency::Weekly => "weekly",
            PayFrequency::BiWeekly => "bi-weekly",
            PayFrequency::Monthly => "monthly",
        }
    }

    /// Fixed length of one cycle in days; `None` for calendar-month cycles
    pub fn cycle_days(self) -> Option<i32> {
        match self {
            PayFrequency::Weekly => Some(7),
            PayFrequency::BiWeekly => Some(14),
            PayFrequency::Monthly => None,
        }
    }
}

impl FromStr for PayFrequency {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ParseEnumError::PayFrequency(s.to_string()))
    }
}

impl TryFrom<String> for PayFrequency {
    type Error = ParseEnumError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PayFrequency> for String {
    fn from(f: PayFrequency) -> Self {
        f.as_str().to_string()
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's income source
///
/// Zero-valued `hours`, `gross_pay` and `taxes` mean "not supplied" and are
/// filled in by [`crate::income::project`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub user_id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub hours: f64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub pay_type: Option<PayType>,
    #[serde(default)]
    pub gross_pay: f64,
    #[serde(default)]
    pub taxes: f64,
    #[serde(default)]
    pub net_pay: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<PayFrequency>,
    /// Fraction of gross pay withheld (0.2 = 20%)
    #[serde(default)]
    pub tax_percentage: f64,
    /// Anchor date for the pay cycle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_dt: Option<jiff::Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_dt: Option<jiff::Timestamp>,
}
