//! Pay-cycle projection for income sources
//!
//! All projections are relative to a caller-supplied `now` and work on UTC
//! calendar days, so the same inputs always produce the same paydays.

use jiff::Timestamp;
use jiff::civil::Date;

use crate::date_math::{
    add_days, add_months, days_between, days_until_weekday, month_begin, next_month_begin,
    utc_date, utc_midnight, weekdays_in_month,
};
use crate::error::IncomeError;
use crate::model::{Income, PayFrequency, PayType};

pub const HOURS_PER_WEEK: f64 = 40.0;
pub const HOURS_PER_WORKDAY: f64 = 8.0;

/// Smallest `k ≥ 0` such that `from + k × step ≥ target` (in days)
fn steps_to_reach(from: Date, target: Date, step: i32) -> Result<i32, jiff::Error> {
    let gap = days_between(from, target)?;
    Ok(if gap <= 0 { 0 } else { (gap + step - 1) / step })
}

/// Number of dates `first, first + step, ...` that fall before `end`
fn count_before(first: Date, end: Date, step: i32) -> Result<u32, jiff::Error> {
    let span = days_between(first, end)?;
    Ok(if span <= 0 { 0 } else { ((span - 1) / step + 1) as u32 })
}

/// First payday on or after `today`
///
/// Weekly incomes pay on `start`'s weekday; bi-weekly incomes every 14 days
/// from `start`; monthly incomes on `start`'s day of the month.
pub fn next_pay_date(
    frequency: PayFrequency,
    start: Date,
    today: Date,
) -> Result<Date, jiff::Error> {
    match frequency {
        PayFrequency::Weekly => add_days(
            today,
            days_until_weekday(today.weekday(), start.weekday()),
        ),
        PayFrequency::BiWeekly => add_days(start, 14 * steps_to_reach(start, today, 14)?),
        PayFrequency::Monthly => {
            let months_apart = (today.year() as i32 - start.year() as i32) * 12
                + (today.month() as i32 - start.month() as i32);
            let k = months_apart.max(0);
            let candidate = add_months(start, k)?;
            if candidate >= today {
                Ok(candidate)
            } else {
                add_months(start, k + 1)
            }
        }
    }
}

/// Hours worked in one pay period when the income doesn't say
///
/// Monthly periods count eight hours for each weekday of the month the next
/// payday falls in.
pub fn default_hours(frequency: PayFrequency, next_pay: Date) -> f64 {
    match frequency {
        PayFrequency::Weekly => HOURS_PER_WEEK,
        PayFrequency::BiWeekly => HOURS_PER_WEEK * 2.0,
        PayFrequency::Monthly => HOURS_PER_WORKDAY * weekdays_in_month(next_pay) as f64,
    }
}

/// Fill in the derived pay fields of an income
///
/// Computes `next_dt` and, when they were left at zero, `hours`,
/// `gross_pay`, `taxes` and `net_pay`. Values the caller supplied are kept.
pub fn project(income: &Income, now: Timestamp) -> Result<Income, IncomeError> {
    if income.rate <= 0.0 && income.gross_pay <= 0.0 {
        return Err(IncomeError::MissingRate);
    }

    if income.tax_percentage < 0.0 {
        return Err(IncomeError::NegativeTaxPercentage);
    }

    let frequency = income.frequency.ok_or(IncomeError::MissingFrequency)?;
    let start = income
        .start_dt
        .map(utc_date)
        .ok_or(IncomeError::MissingStartDate)?;

    let next = next_pay_date(frequency, start, utc_date(now))?;

    let mut projected = income.clone();
    projected.next_dt = Some(utc_midnight(next)?);

    if projected.hours == 0.0 {
        projected.hours = default_hours(frequency, next);
    }

    if projected.rate > 0.0 && projected.gross_pay == 0.0 {
        projected.gross_pay = match income.pay_type.ok_or(IncomeError::MissingPayType)? {
            PayType::Hourly => projected.rate * projected.hours,
            PayType::Salary => projected.rate,
        };
    }

    if projected.taxes == 0.0 {
        projected.taxes = projected.gross_pay * projected.tax_percentage;
        projected.net_pay = projected.gross_pay - projected.taxes;
    }

    tracing::debug!(
        name = %projected.name,
        %frequency,
        next = %next,
        hours = projected.hours,
        gross = projected.gross_pay,
        "income projected"
    );

    Ok(projected)
}

/// Paydays in the month containing `today`
///
/// Monthly incomes always pay once. Weekly incomes count their weekday from
/// the later of the month's first day and `start`. Bi-weekly incomes walk
/// 14-day steps from `start` into the month and count those before the
/// next month begins. December 9999 has no following month to bound it and
/// is reported as an error.
pub fn pays_in_month(
    frequency: PayFrequency,
    start: Date,
    today: Date,
) -> Result<u32, jiff::Error> {
    let begin = month_begin(today);

    match frequency {
        PayFrequency::Monthly => Ok(1),
        PayFrequency::Weekly => {
            let from = begin.max(start);
            let first = add_days(from, days_until_weekday(from.weekday(), start.weekday()))?;
            count_before(first, next_month_begin(today)?, 7)
        }
        PayFrequency::BiWeekly => {
            let first = add_days(start, 14 * steps_to_reach(start, begin, 14)?)?;
            count_before(first, next_month_begin(today)?, 14)
        }
    }
}

impl Income {
    /// See [`project`]
    pub fn project(&self, now: Timestamp) -> Result<Income, IncomeError> {
        project(self, now)
    }

    /// Paydays in the month containing `now`
    ///
    /// 0 when the cycle is unknown or the month cannot be bounded on the
    /// calendar, so monthly totals never fail.
    pub fn pays_this_month(&self, now: Timestamp) -> u32 {
        match (self.frequency, self.start_dt) {
            (Some(PayFrequency::Monthly), _) => 1,
            (Some(frequency), Some(start)) => {
                pays_in_month(frequency, utc_date(start), utc_date(now)).unwrap_or_else(|err| {
                    tracing::warn!(
                        income = %self.name,
                        %now,
                        error = %err,
                        "pay cycle runs past the end of the calendar, counting no paydays"
                    );
                    0
                })
            }
            _ => 0,
        }
    }

    pub fn monthly_gross_pay(&self, now: Timestamp) -> f64 {
        self.gross_pay * self.pays_this_month(now) as f64
    }

    pub fn monthly_net_pay(&self, now: Timestamp) -> f64 {
        self.net_pay * self.pays_this_month(now) as f64
    }

    pub fn monthly_taxes(&self, now: Timestamp) -> f64 {
        self.taxes * self.pays_this_month(now) as f64
    }
}
