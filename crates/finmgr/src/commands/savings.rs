use color_eyre::eyre::WrapErr;
use finmgr_core::date_math::{utc_date, utc_midnight};
use finmgr_core::model::{SavingsCalculationRequest, SavingsCalculationResponse};

use super::Context;
use crate::cli::SavingsArgs;
use crate::format::{format_currency, key_values};
use crate::input::resolve_now;

fn render_table(r: &SavingsCalculationResponse) -> String {
    key_values(&[
        ("Goal", format_currency(r.goal)),
        (
            "Deadline",
            r.deadline
                .map(|d| utc_date(d).to_string())
                .unwrap_or_default(),
        ),
        ("Pays remaining", r.num_pays.to_string()),
        ("Save per pay", format_currency(r.per_pay)),
        ("Planned per pay", format_currency(r.man_per_pay)),
        ("Saved at plan", format_currency(r.actual)),
    ])
}

pub fn run(args: &SavingsArgs, ctx: &Context) -> color_eyre::Result<String> {
    let now = resolve_now(args.now)?;

    let request = SavingsCalculationRequest {
        goal: args.goal,
        amount: args.amount,
        deadline: Some(utc_midnight(args.deadline)?),
        pay_frequency: Some(args.pay_frequency),
        next_pay: Some(utc_midnight(args.next_pay)?),
    };

    let response = request
        .calculate(now)
        .wrap_err("savings calculation failed")?;

    ctx.render(&response, render_table)
}
