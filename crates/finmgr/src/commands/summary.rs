use color_eyre::eyre::WrapErr;
use finmgr_core::budget::{BudgetInputs, summarize};
use finmgr_core::calculate_loans;
use finmgr_core::model::{LoansSummary, Summary, SummaryItem};
use serde::Serialize;

use super::Context;
use crate::cli::SummaryArgs;
use crate::format::{Table, format_currency, key_values};
use crate::input::{read_json, resolve_now};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    #[serde(flatten)]
    summary: Summary,
    loans: LoansSummary,
}

fn items_table(title: &str, items: &[SummaryItem]) -> String {
    let mut table = Table::new([title, "Source", "Amount", "Balance"]);
    for item in items {
        table.row(vec![
            item.name.clone(),
            item.source.as_str().to_string(),
            format_currency(item.amount),
            format_currency(item.balance),
        ]);
    }
    table.render()
}

fn render_table(r: &Report) -> String {
    let s = &r.summary;
    let e = &s.expense_summary;

    let mut out = items_table("Income", &s.income_summary.incomes);
    out.push('\n');
    out.push_str(&items_table("Expense", &e.expenses));
    out.push('\n');
    out.push_str(&key_values(&[
        ("Total income", format_currency(s.income_summary.total_income)),
        ("Loans", format_currency(e.loan_cost)),
        ("Taxes", format_currency(e.taxes)),
        ("Bills", format_currency(e.bill_cost)),
        ("Credit cards", format_currency(e.credit_card_cost)),
        ("Total cost", format_currency(e.total_cost)),
        ("Total balance", format_currency(e.total_balance)),
        ("Credit available", format_currency(s.credit_summary.available)),
        ("Credit utilization", format!("{:.0}%", s.credit_summary.utilization)),
        ("Net funds", format_currency(s.net_funds)),
    ]));
    out
}

pub fn run(args: &SummaryArgs, ctx: &Context) -> color_eyre::Result<String> {
    let now = resolve_now(args.now)?;
    let mut inputs: BudgetInputs = read_json(&args.file)?;

    inputs.loans = calculate_loans(&inputs.loans)
        .into_iter()
        .zip(&inputs.loans)
        .map(|(result, loan)| {
            result.wrap_err_with(|| format!("cannot calculate loan '{}'", loan.name))
        })
        .collect::<color_eyre::Result<Vec<_>>>()?;

    inputs.incomes = inputs
        .incomes
        .iter()
        .map(|income| {
            income
                .project(now)
                .wrap_err_with(|| format!("cannot project income '{}'", income.name))
        })
        .collect::<color_eyre::Result<Vec<_>>>()?;

    let report = Report {
        summary: summarize(&inputs, now),
        loans: LoansSummary::from_loans(&inputs.loans),
    };

    tracing::info!(net_funds = report.summary.net_funds, %now, "budget summarized");

    ctx.render(&report, render_table)
}
