//! Savings goal calculator
//!
//! Works out how many paychecks remain before a deadline and what has to be
//! set aside from each one.

use jiff::Timestamp;
use jiff::civil::Date;

use crate::date_math::{add_months, days_between, utc_date};
use crate::error::SavingsError;
use crate::model::{PayFrequency, SavingsCalculationRequest, SavingsCalculationResponse};
use crate::portfolio::round_cents;

/// Paydays from `next_pay` through `deadline` inclusive
///
/// Zero when the deadline has already passed or the next payday falls
/// after it.
pub fn pays_before_deadline(
    frequency: PayFrequency,
    next_pay: Date,
    deadline: Date,
    today: Date,
) -> Result<u32, jiff::Error> {
    if deadline < today || next_pay > deadline {
        return Ok(0);
    }

    match frequency.cycle_days() {
        Some(step) => Ok((days_between(next_pay, deadline)? / step) as u32 + 1),
        None => {
            let mut pays = 0;
            while add_months(next_pay, pays as i32)? <= deadline {
                pays += 1;
            }
            Ok(pays)
        }
    }
}

/// Evaluate a savings request relative to `now`
pub fn calculate(
    request: &SavingsCalculationRequest,
    now: Timestamp,
) -> Result<SavingsCalculationResponse, SavingsError> {
    if request.goal == 0.0 && request.amount == 0.0 {
        return Err(SavingsError::MissingGoalOrAmount);
    }

    let deadline = request.deadline.ok_or(SavingsError::MissingDeadline)?;
    let frequency = request.pay_frequency.ok_or(SavingsError::MissingFrequency)?;
    let next_pay = request.next_pay.ok_or(SavingsError::MissingNextPay)?;

    let num_pays = pays_before_deadline(
        frequency,
        utc_date(next_pay),
        utc_date(deadline),
        utc_date(now),
    )?;

    let mut response = SavingsCalculationResponse {
        deadline: Some(deadline),
        man_per_pay: request.amount,
        num_pays,
        ..Default::default()
    };

    if request.goal != 0.0 {
        if num_pays == 0 {
            return Err(SavingsError::NoPaysBeforeDeadline);
        }
        response.goal = request.goal;
        response.per_pay = round_cents(request.goal / num_pays as f64);
    }

    if request.amount > 0.0 {
        response.actual = num_pays as f64 * request.amount;
    }

    tracing::debug!(%frequency, num_pays, per_pay = response.per_pay, "savings calculated");

    Ok(response)
}

impl SavingsCalculationRequest {
    /// See [`calculate`]
    pub fn calculate(&self, now: Timestamp) -> Result<SavingsCalculationResponse, SavingsError> {
        calculate(self, now)
    }
}
