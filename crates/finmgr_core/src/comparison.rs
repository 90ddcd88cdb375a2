//! Month-by-month comparison of two amortization schedules
//!
//! Used for "what if I refinance" views: the original schedule (e.g. an
//! existing loan) is lined up against a candidate and every field is
//! reported for both sides along with the candidate-minus-original delta.

use crate::model::{Loan, PaymentScheduleComparisonItem, PaymentScheduleItem};

/// Values one schedule contributes to a comparison row
#[derive(Debug, Clone, Copy, Default)]
struct Side {
    principal: f64,
    interest: f64,
    interest_to_date: f64,
    principal_to_date: f64,
    remaining_balance: f64,
}

impl Side {
    fn from_item(item: &PaymentScheduleItem) -> Self {
        Self {
            principal: item.principal,
            interest: item.interest,
            interest_to_date: item.interest_to_date,
            principal_to_date: item.principal_to_date,
            remaining_balance: item.remaining_balance,
        }
    }

    /// A schedule that has already paid off: nothing is paid this month and
    /// the running totals stay where the last payment left them.
    fn finished(last: Option<&PaymentScheduleItem>) -> Self {
        let (interest_to_date, principal_to_date) = last
            .map(|m| (m.interest_to_date, m.principal_to_date))
            .unwrap_or((0.0, 0.0));
        Self {
            interest_to_date,
            principal_to_date,
            ..Default::default()
        }
    }

    fn at(schedule: &[PaymentScheduleItem], idx: usize) -> Self {
        match schedule.get(idx) {
            Some(item) => Self::from_item(item),
            None => Self::finished(schedule.last()),
        }
    }
}

/// Compare `candidate` against `original`, one row per month
///
/// Rows run from month 1 through the longer schedule's final month. Where
/// one schedule has already finished, its per-month amounts are zero and
/// its cumulative totals are frozen at their final values.
pub fn compare_schedules(
    original: &[PaymentScheduleItem],
    candidate: &[PaymentScheduleItem],
) -> Vec<PaymentScheduleComparisonItem> {
    let months = original.len().max(candidate.len());

    (0..months)
        .map(|idx| {
            let o = Side::at(original, idx);
            let c = Side::at(candidate, idx);

            PaymentScheduleComparisonItem {
                month: idx as u32 + 1,
                principal: o.principal,
                principal_new: c.principal,
                principal_delta: c.principal - o.principal,
                interest: o.interest,
                interest_new: c.interest,
                interest_delta: c.interest - o.interest,
                interest_to_date: o.interest_to_date,
                interest_to_date_new: c.interest_to_date,
                interest_to_date_delta: c.interest_to_date - o.interest_to_date,
                principal_to_date: o.principal_to_date,
                principal_to_date_new: c.principal_to_date,
                principal_to_date_delta: c.principal_to_date - o.principal_to_date,
                remaining_balance: o.remaining_balance,
                remaining_balance_new: c.remaining_balance,
                remaining_balance_delta: c.remaining_balance - o.remaining_balance,
            }
        })
        .collect()
}

impl Loan {
    /// Compare this loan's schedule (as the original) against `candidate`'s.
    /// Both loans must already be calculated.
    pub fn compare_payments(&self, candidate: &Loan) -> Vec<PaymentScheduleComparisonItem> {
        compare_schedules(&self.payment_schedule, &candidate.payment_schedule)
    }
}
