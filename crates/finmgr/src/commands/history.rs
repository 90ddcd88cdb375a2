use color_eyre::eyre::WrapErr;
use finmgr_core::date_math::utc_date;
use finmgr_core::model::{PortfolioBalanceHistory, StockBar, UserStock};
use finmgr_core::portfolio::{balance_history, history_window};
use finmgr_core::validation::validate_can_save_user_stock;

use super::Context;
use crate::cli::HistoryArgs;
use crate::format::{Table, format_currency};
use crate::input::{read_json_list, resolve_now};

fn render_table(history: &[PortfolioBalanceHistory]) -> String {
    let mut table = Table::new(["Date", "Open", "High", "Low", "Close"]);
    for day in history {
        table.row(vec![
            utc_date(day.date).to_string(),
            format_currency(day.open),
            format_currency(day.high),
            format_currency(day.low),
            format_currency(day.close),
        ]);
    }
    table.render()
}

pub fn run(args: &HistoryArgs, ctx: &Context) -> color_eyre::Result<String> {
    let now = resolve_now(args.now)?;
    let days = args.days.unwrap_or(ctx.config.history_days);
    let window = history_window(now, days)?;

    let holdings: Vec<UserStock> = read_json_list(&args.holdings)?;
    for holding in &holdings {
        validate_can_save_user_stock(holding)
            .wrap_err_with(|| format!("invalid holding '{}'", holding.ticker))?;
    }
    let bars: Vec<StockBar> = read_json_list(&args.bars)?;

    let history = balance_history(&holdings, &bars, window);
    tracing::info!(days, points = history.len(), "balance history built");

    ctx.render(&history, |h| render_table(h))
}
