use color_eyre::eyre::WrapErr;
use finmgr_core::date_math::utc_date;
use finmgr_core::model::Income;
use jiff::Timestamp;

use super::Context;
use crate::cli::IncomeArgs;
use crate::format::{Table, format_currency};
use crate::input::{read_json_list, resolve_now};

fn render_table(incomes: &[Income], now: Timestamp) -> String {
    let mut table = Table::new([
        "Name",
        "Frequency",
        "Next pay",
        "Hours",
        "Gross",
        "Taxes",
        "Net",
        "Pays this month",
        "Monthly gross",
    ]);
    for i in incomes {
        table.row(vec![
            i.name.clone(),
            i.frequency.map(|f| f.to_string()).unwrap_or_default(),
            i.next_dt
                .map(|d| utc_date(d).to_string())
                .unwrap_or_default(),
            format!("{:.1}", i.hours),
            format_currency(i.gross_pay),
            format_currency(i.taxes),
            format_currency(i.net_pay),
            i.pays_this_month(now).to_string(),
            format_currency(i.monthly_gross_pay(now)),
        ]);
    }
    table.render()
}

pub fn run(args: &IncomeArgs, ctx: &Context) -> color_eyre::Result<String> {
    let now = resolve_now(args.now)?;

    let projected = read_json_list::<Income>(&args.file)?
        .iter()
        .map(|income| {
            income
                .project(now)
                .wrap_err_with(|| format!("cannot project income '{}'", income.name))
        })
        .collect::<color_eyre::Result<Vec<_>>>()?;

    tracing::info!(count = projected.len(), %now, "incomes projected");

    ctx.render(&projected, |incomes| render_table(incomes, now))
}
