//! Save-time checks for user records
//!
//! Each validator returns the first failing check as a [`ValidationError`]
//! and stops; callers report the field and message as-is.

use crate::error::ValidationError;
use crate::model::{Bill, CreditCard, Income, Loan, UserId, UserStock};

type Checked = Result<(), ValidationError>;

fn ensure(ok: bool, field: &'static str, message: &'static str) -> Checked {
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new(field, message))
    }
}

/// A calculated loan ready to persist
pub fn validate_can_save_loan(loan: &Loan) -> Checked {
    ensure(!loan.name.is_empty(), "name", "cannot save loan without loan name")?;
    ensure(loan.total > 0.0, "total", "cannot save loan without total loan amount")?;
    ensure(
        loan.interest_rate >= 0.0,
        "interestRate",
        "cannot save loan without interest rate",
    )?;
    ensure(loan.loan_term > 0, "loanTerm", "cannot save loan without loan term")?;
    ensure(loan.user_id.is_assigned(), "userId", "cannot save loan without userId")?;
    ensure(loan.total_cost > 0.0, "totalCost", "cannot save loan without total_cost")?;
    ensure(
        loan.total_payment > 0.0,
        "totalPayment",
        "cannot save loan without total payment",
    )?;
    ensure(
        loan.total_interest >= 0.0,
        "totalInterest",
        "cannot save loan without total interest",
    )
}

/// Pay type and frequency are both set
///
/// Unrecognised strings never reach this point: they are rejected when the
/// income is deserialized.
pub fn validate_type_and_frequency(income: &Income) -> Checked {
    ensure(
        income.pay_type.is_some() && income.frequency.is_some(),
        "type",
        "type and frequency are required",
    )
}

pub fn validate_can_save_income(income: &Income) -> Checked {
    ensure(!income.name.is_empty(), "name", "cannot save income without a name")?;
    ensure(income.gross_pay > 0.0, "grossPay", "gross pay is required")?;
    ensure(income.hours > 0.0, "hours", "hours are required")?;
    ensure(income.rate > 0.0, "rate", "pay rate is required")?;
    ensure(income.start_dt.is_some(), "startDt", "start date is required")?;
    ensure(
        income.tax_percentage > 0.0,
        "taxPercentage",
        "tax percentage is required",
    )?;
    ensure(income.user_id.is_assigned(), "userId", "userId is required")?;
    validate_type_and_frequency(income)
}

pub fn validate_can_save_bill(bill: &Bill) -> Checked {
    ensure(!bill.name.is_empty(), "name", "name is required")?;
    ensure(bill.amount >= 0.0, "amount", "amount cannot be negative")?;
    ensure(bill.user_id.is_assigned(), "userId", "userId is required")
}

pub fn validate_can_save_credit_card(card: &CreditCard) -> Checked {
    let complete = card.user_id.is_assigned()
        && !card.name.is_empty()
        && card.min_payment != 0.0
        && card.min_payment_percentage != 0.0;
    ensure(complete, "creditCard", "credit card is invalid")
}

pub fn validate_can_save_user_stock(stock: &UserStock) -> Checked {
    ensure(stock.user_id.is_assigned(), "userId", "userId is required")?;
    ensure(!stock.ticker.is_empty(), "ticker", "ticker is required")?;
    ensure(stock.quantity >= 0.0, "quantity", "quantity must be at least 0")
}

/// Whether `principal` may act on a record owned by `owner`
#[inline]
pub fn is_permitted(principal: UserId, owner: UserId, can_access_other_users: bool) -> bool {
    principal == owner || can_access_other_users
}
