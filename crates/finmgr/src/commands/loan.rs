use color_eyre::eyre::{WrapErr, eyre};
use finmgr_core::model::{Loan, PaymentScheduleItem};

use super::Context;
use crate::cli::LoanArgs;
use crate::format::{Table, format_currency, format_percent, key_values};
use crate::input::read_json;

fn loan_from_args(args: &LoanArgs) -> color_eyre::Result<Loan> {
    if let Some(path) = &args.file {
        return read_json(path);
    }

    let (Some(total), Some(rate)) = (args.total, args.rate) else {
        return Err(eyre!("either --file or both --total and --rate are required"));
    };

    let loan = Loan::new(total, rate, args.term.unwrap_or(0));
    Ok(match args.payment {
        Some(p) => loan.with_payment(p),
        None => loan,
    })
}

pub(super) fn loan_overview(loan: &Loan) -> String {
    key_values(&[
        ("Principal", format_currency(loan.total)),
        ("Interest rate", format_percent(loan.interest_rate)),
        ("Term", format!("{} months", loan.loan_term)),
        (
            "Monthly payment",
            format_currency(loan.monthly_payment.unwrap_or(0.0)),
        ),
        ("Total payment", format_currency(loan.total_payment)),
        ("Total interest", format_currency(loan.total_interest)),
        ("Total cost", format_currency(loan.total_cost)),
    ])
}

fn schedule_table(schedule: &[PaymentScheduleItem]) -> String {
    let mut table = Table::new([
        "Month",
        "Principal",
        "Interest",
        "Principal to date",
        "Interest to date",
        "Balance",
    ]);
    for m in schedule {
        table.row(vec![
            m.month.to_string(),
            format_currency(m.principal),
            format_currency(m.interest),
            format_currency(m.principal_to_date),
            format_currency(m.interest_to_date),
            format_currency(m.remaining_balance),
        ]);
    }
    table.render()
}

pub fn run(args: &LoanArgs, ctx: &Context) -> color_eyre::Result<String> {
    let loan = loan_from_args(args)?
        .calculate()
        .wrap_err("loan calculation failed")?;

    tracing::info!(
        total = loan.total,
        months = loan.loan_term,
        "loan calculated"
    );

    ctx.render(&loan, |loan| {
        let mut out = loan_overview(loan);
        if ctx.config.show_schedule {
            out.push('\n');
            out.push_str(&schedule_table(&loan.payment_schedule));
        }
        out
    })
}
