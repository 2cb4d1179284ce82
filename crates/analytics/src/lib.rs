//! # Tradebook Analytics Engine
//!
//! This crate turns a journal of trades into the statistics shown on the dashboard:
//! time-bucketed summaries, winrate KPIs and session/trader breakdowns.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** It depends only on `core-types`. Trades are passed in by the
//!   caller; the crate never fetches them itself.
//! - **Stateless Calculation:** Every call recomputes its output from the slice it is
//!   given. Degenerate input (no trades, empty subsets) produces zeroed results rather
//!   than errors, so there is no error type.
//!
//! ## Public API
//!
//! - `Aggregator` and `bucket_key`: time-bucket grouping.
//! - `winrate_of`, `today`, `this_week`, `this_month`: KPI helpers.
//! - `session_breakdown`, `trader_ranking`: per-group winrates.
//! - The report structs in [`report`].

pub mod aggregator;
pub mod kpi;
pub mod report;

pub use aggregator::{Aggregator, DEFAULT_BUCKET_WINDOW, MONTH_ABBREVIATIONS, bucket_key};
pub use kpi::{session_breakdown, this_month, this_week, today, trader_ranking, winrate_of};
pub use report::{
    AggregateReport, BucketSummary, KpiSnapshot, SessionStat, TraderStat, WinrateStat,
};

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a percentage to a whole number, halves away from zero.
pub(crate) fn round_percent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
