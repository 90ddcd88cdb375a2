//! Stock portfolio aggregation
//!
//! Monetary totals are rounded to cents with [`round_cents`], which rounds
//! half away from zero (`f64::round`). The same rounding is applied to every
//! total.

use jiff::{Timestamp, ToSpan};
use rustc_hash::FxHashMap;

use crate::error::PortfolioError;
use crate::model::{
    PortfolioBalanceHistory, PortfolioPosition, PortfolioSummary, StockBar, UserStock,
};

/// Longest history window, in days, that can be requested
pub const MAX_HISTORY_DAYS: i64 = 365;

/// Round to two decimal places, half away from zero
#[inline]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Daily totals across positions
///
/// High/low/open/close are each `Σ price × quantity`; the value total sums
/// the per-position value as given. The summary's as-of date is the oldest
/// as-of date among the positions, so the summary is never reported as
/// fresher than its stalest position.
pub fn summarize(positions: Vec<PortfolioPosition>) -> PortfolioSummary {
    let mut high = 0.0;
    let mut low = 0.0;
    let mut open = 0.0;
    let mut close = 0.0;
    let mut value = 0.0;
    let mut as_of: Option<Timestamp> = None;

    for p in &positions {
        high += p.high * p.quantity;
        low += p.low * p.quantity;
        open += p.open * p.quantity;
        close += p.close * p.quantity;
        value += p.value;

        as_of = Some(match as_of {
            Some(d) if d <= p.as_of_date => d,
            _ => p.as_of_date,
        });
    }

    PortfolioSummary {
        current_value: round_cents(value),
        current_high: round_cents(high),
        current_low: round_cents(low),
        current_open: round_cents(open),
        current_close: round_cents(close),
        as_of_date: as_of,
        positions,
    }
}

/// Inclusive time range a history covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl HistoryWindow {
    /// The `days` days ending at `now`; `days` must be within 1..=365
    pub fn ending_at(now: Timestamp, days: i64) -> Result<Self, PortfolioError> {
        if !(1..=MAX_HISTORY_DAYS).contains(&days) {
            return Err(PortfolioError::InvalidHistoryDays(days));
        }

        let start = now.checked_sub((days * 24).hours())?;
        Ok(Self { start, end: now })
    }
}

/// See [`HistoryWindow::ending_at`]
pub fn history_window(now: Timestamp, days: i64) -> Result<HistoryWindow, PortfolioError> {
    HistoryWindow::ending_at(now, days)
}

/// Combined daily value of a user's holdings over `window`
///
/// Each holding contributes the bars of its ticker dated while it was held
/// (clipped to the window), scaled by the quantity held. Results are keyed
/// by bar date and returned oldest first.
pub fn balance_history(
    holdings: &[UserStock],
    bars: &[StockBar],
    window: HistoryWindow,
) -> Vec<PortfolioBalanceHistory> {
    let mut by_date: FxHashMap<Timestamp, PortfolioBalanceHistory> = FxHashMap::default();

    for holding in holdings {
        let from = holding.effective_dt.max(window.start);
        let to = match holding.expiration_dt {
            Some(exp) if exp < window.end => exp,
            _ => window.end,
        };

        let held_bars = bars
            .iter()
            .filter(|b| b.ticker == holding.ticker && b.date >= from && b.date <= to);

        for bar in held_bars {
            let entry = by_date.entry(bar.date).or_insert(PortfolioBalanceHistory {
                date: bar.date,
                high: 0.0,
                low: 0.0,
                open: 0.0,
                close: 0.0,
            });
            entry.high += holding.quantity * bar.high;
            entry.low += holding.quantity * bar.low;
            entry.open += holding.quantity * bar.open;
            entry.close += holding.quantity * bar.close;
        }
    }

    let mut history: Vec<_> = by_date.into_values().collect();
    history.sort_unstable_by_key(|h| h.date);

    tracing::debug!(
        holdings = holdings.len(),
        days = history.len(),
        "portfolio balance history built"
    );

    history
}
