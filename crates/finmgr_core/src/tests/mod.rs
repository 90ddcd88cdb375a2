//! Tests for the finance calculations
//!
//! Tests are organized by topic:
//! - `amortization` - Payment solving and schedule generation
//! - `comparison` - Side-by-side schedule comparison
//! - `income` - Pay-cycle projection and monthly pay counts
//! - `portfolio` - Portfolio totals and balance history
//! - `savings` - Savings goal calculator
//! - `budget` - Monthly budget summary
//! - `validation` - Save-time record checks

mod income;
mod validation;

use jiff::Timestamp;

/// Parse an RFC 3339 instant
pub(crate) fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

pub(crate) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual}"
    );
}
