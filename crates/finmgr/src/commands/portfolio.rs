use finmgr_core::date_math::utc_date;
use finmgr_core::model::{PortfolioPosition, PortfolioSummary};
use finmgr_core::portfolio::summarize;

use super::Context;
use crate::cli::PortfolioArgs;
use crate::format::{Table, format_currency, key_values};
use crate::input::read_json_list;

fn render_table(summary: &PortfolioSummary) -> String {
    let mut table = Table::new(["Ticker", "Quantity", "Open", "High", "Low", "Close", "Value"]);
    for p in &summary.positions {
        table.row(vec![
            p.ticker.clone(),
            format!("{:.4}", p.quantity),
            format_currency(p.open),
            format_currency(p.high),
            format_currency(p.low),
            format_currency(p.close),
            format_currency(p.value),
        ]);
    }

    let mut out = table.render();
    out.push('\n');
    out.push_str(&key_values(&[
        ("Value", format_currency(summary.current_value)),
        ("Open", format_currency(summary.current_open)),
        ("High", format_currency(summary.current_high)),
        ("Low", format_currency(summary.current_low)),
        ("Close", format_currency(summary.current_close)),
        (
            "As of",
            summary
                .as_of_date
                .map(|d| utc_date(d).to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
    ]));
    out
}

pub fn run(args: &PortfolioArgs, ctx: &Context) -> color_eyre::Result<String> {
    let positions: Vec<PortfolioPosition> = read_json_list(&args.file)?;
    let summary = summarize(positions);

    tracing::info!(
        positions = summary.positions.len(),
        value = summary.current_value,
        "portfolio summarized"
    );

    ctx.render(&summary, render_table)
}
