use color_eyre::eyre::WrapErr;
use finmgr_core::model::{Loan, PaymentScheduleComparisonItem};
use serde::Serialize;

use super::Context;
use crate::cli::CompareArgs;
use crate::format::{Table, format_currency, key_values};
use crate::input::read_json;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Comparison {
    original: Loan,
    candidate: Loan,
    comparison: Vec<PaymentScheduleComparisonItem>,
}

fn render_table(c: &Comparison) -> String {
    let delta = |f: fn(&Loan) -> f64| format_currency(f(&c.candidate) - f(&c.original));

    let mut out = key_values(&[
        (
            "Months",
            format!("{} -> {}", c.original.loan_term, c.candidate.loan_term),
        ),
        ("Payment change", delta(|l| l.monthly_payment.unwrap_or(0.0))),
        ("Interest change", delta(|l| l.total_interest)),
        ("Cost change", delta(|l| l.total_cost)),
    ]);
    out.push('\n');

    let mut table = Table::new([
        "Month",
        "Interest",
        "New interest",
        "Delta",
        "Balance",
        "New balance",
        "Delta",
        "Interest to date delta",
    ]);
    for row in &c.comparison {
        table.row(vec![
            row.month.to_string(),
            format_currency(row.interest),
            format_currency(row.interest_new),
            format_currency(row.interest_delta),
            format_currency(row.remaining_balance),
            format_currency(row.remaining_balance_new),
            format_currency(row.remaining_balance_delta),
            format_currency(row.interest_to_date_delta),
        ]);
    }
    out.push_str(&table.render());
    out
}

pub fn run(args: &CompareArgs, ctx: &Context) -> color_eyre::Result<String> {
    let original = read_json::<Loan>(&args.original)?
        .calculate()
        .wrap_err("original loan calculation failed")?;
    let candidate = read_json::<Loan>(&args.candidate)?
        .calculate()
        .wrap_err("candidate loan calculation failed")?;

    let comparison = original.compare_payments(&candidate);
    tracing::info!(months = comparison.len(), "loans compared");

    ctx.render(
        &Comparison {
            original,
            candidate,
            comparison,
        },
        render_table,
    )
}
