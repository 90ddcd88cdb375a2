//! Loan amortization
//!
//! A loan's schedule is produced by walking its balance forward one month at
//! a time: each month accrues `balance × i` interest (where `i` is the annual
//! rate / 100 / 12) and the rest of the payment retires principal. When no
//! fixed payment is given, the payment solving the annuity equation for the
//! requested term is used.
//!
//! The calculation is a pure transform of the loan's terms; every derived
//! field on the returned [`Loan`] is recomputed from scratch.

use crate::error::LoanError;
use crate::model::{Loan, PaymentScheduleItem};

/// Remaining balance at or below this is treated as paid off. Keeps
/// floating-point residue from producing an extra near-zero month.
pub const PAYOFF_EPSILON: f64 = 0.009;

/// Upper bound on schedule length; a payment barely above the interest can
/// otherwise take effectively forever to retire the balance.
pub const MAX_SCHEDULE_MONTHS: usize = 12_000;

/// Monthly periodic rate for an annual percentage rate
#[inline]
pub fn periodic_rate(annual_rate: f64) -> f64 {
    (annual_rate / 100.0) / 12.0
}

/// Fixed monthly payment that retires `principal` over `term` months
///
/// `payment = P / [((1+i)^n − 1) / (i(1+i)^n)]`. When the growth factor
/// rounds to zero (a rate too small to register in `f64`) the loan is
/// repaid in equal principal installments of `P / n`.
pub fn solve_monthly_payment(principal: f64, annual_rate: f64, term: i32) -> f64 {
    let i = periodic_rate(annual_rate);
    let growth = (1.0 + i).powi(term);

    if i <= 0.0 || growth - 1.0 <= 0.0 {
        return principal / term as f64;
    }

    principal / ((growth - 1.0) / (i * growth))
}

/// Check the terms needed before any calculation can run
pub fn validate_can_perform_calc(loan: &Loan) -> Result<(), LoanError> {
    if loan.total <= 0.0 {
        return Err(LoanError::MissingTotal);
    }

    if loan.interest_rate <= 0.0 {
        return Err(LoanError::MissingInterestRate);
    }

    if loan.fixed_payment().is_none() && loan.loan_term <= 0 {
        return Err(LoanError::MissingLoanTerm);
    }

    Ok(())
}

/// Month-by-month amortization of `principal` at a fixed `payment`
///
/// The final month pays `balance − interest` as principal and leaves the
/// balance at exactly zero.
pub fn build_schedule(
    principal: f64,
    annual_rate: f64,
    payment: f64,
) -> Result<Vec<PaymentScheduleItem>, LoanError> {
    let i = periodic_rate(annual_rate);

    let first_interest = principal * i;
    if payment <= first_interest {
        return Err(LoanError::PaymentBelowInterest {
            payment,
            interest: first_interest,
        });
    }

    let mut schedule = Vec::new();
    let mut balance = principal;
    let mut interest_to_date = 0.0;
    let mut principal_to_date = 0.0;

    while balance > 0.0 {
        if schedule.len() == MAX_SCHEDULE_MONTHS {
            return Err(LoanError::ScheduleTooLong(MAX_SCHEDULE_MONTHS));
        }

        let interest = balance * i;
        let mut principal_paid = payment - interest;

        if balance - principal_paid > PAYOFF_EPSILON {
            balance -= principal_paid;
        } else {
            principal_paid = balance - interest;
            balance = 0.0;
        }

        interest_to_date += interest;
        principal_to_date += principal_paid;

        schedule.push(PaymentScheduleItem {
            month: schedule.len() as u32 + 1,
            principal: principal_paid,
            interest,
            interest_to_date,
            principal_to_date,
            remaining_balance: balance,
        });
    }

    Ok(schedule)
}

/// Compute the payment, schedule and totals for a loan
///
/// Returns a copy of `loan` with `monthly_payment`, `loan_term`,
/// `payment_schedule`, `total_payment`, `total_interest` and `total_cost`
/// populated. A supplied fixed payment is trusted over the nominal term, so
/// the realized `loan_term` may differ from the requested one.
pub fn calculate_loan(loan: &Loan) -> Result<Loan, LoanError> {
    validate_can_perform_calc(loan)?;

    let payment = match loan.fixed_payment() {
        Some(p) => p,
        None => solve_monthly_payment(loan.total, loan.interest_rate, loan.loan_term),
    };

    let schedule = build_schedule(loan.total, loan.interest_rate, payment)?;

    let total_payment: f64 = schedule.iter().map(|m| m.principal).sum();
    let total_interest: f64 = schedule.iter().map(|m| m.interest).sum();
    let months = schedule.len() as i32;

    tracing::debug!(
        total = loan.total,
        payment,
        months,
        total_payment,
        total_interest,
        residual = loan.total - total_payment,
        "loan amortized"
    );

    if loan.fixed_payment().is_some() && loan.loan_term > 0 && loan.loan_term != months {
        tracing::warn!(
            requested = loan.loan_term,
            realized = months,
            "fixed payment realizes a different term than requested"
        );
    }

    Ok(Loan {
        monthly_payment: Some(payment),
        loan_term: months,
        total_interest,
        total_payment,
        total_cost: total_payment + total_interest,
        payment_schedule: schedule,
        ..loan.clone()
    })
}

impl Loan {
    /// See [`calculate_loan`]
    pub fn calculate(&self) -> Result<Loan, LoanError> {
        calculate_loan(self)
    }
}
