//! Personal finance calculations
//!
//! This crate holds the computational core of a personal finance manager:
//! - Loan amortization schedules with payoff detection
//! - Month-by-month comparison of two schedules (refinance "what if")
//! - Pay-cycle projection for weekly, bi-weekly and monthly incomes
//! - Stock portfolio totals and balance history
//! - Savings goal and monthly budget summaries
//!
//! Everything here is a pure function of its inputs. Wherever "today"
//! matters the caller passes `now` explicitly.
//!
//! ```ignore
//! use finmgr_core::Loan;
//!
//! let loan = Loan::new(10_000.0, 5.0, 12).calculate()?;
//! assert_eq!(loan.payment_schedule.len(), 12);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod amortization;
pub mod batch;
pub mod budget;
pub mod comparison;
pub mod date_math;
pub mod error;
pub mod income;
pub mod portfolio;
pub mod savings;
pub mod validation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use batch::calculate_loans;
pub use budget::BudgetInputs;
pub use error::{IncomeError, LoanError, PortfolioError, SavingsError, ValidationError};
pub use model::{
    Bill, CreditCard, Income, Loan, LoansSummary, PayFrequency, PayType,
    PaymentScheduleComparisonItem, PaymentScheduleItem, PortfolioBalanceHistory,
    PortfolioPosition, PortfolioSummary, RecordId, SavingsCalculationRequest,
    SavingsCalculationResponse, StockBar, Summary, UserId, UserStock,
};
