use core_types::{Granularity, Session, TradeRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::winrate_of;

/// Aggregated statistics for one time bucket.
///
/// Summaries are recomputed on every aggregation call and are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketSummary {
    /// The bucket key, e.g. `2025-01-06`, `W2 - 2025`, `Ene 2025` or `2025`.
    pub key: String,
    pub trades: usize,
    pub wins: usize,
    /// Winrate in percent, rounded to a whole number.
    pub winrate: Decimal,
    /// Sum of the monetary results of the bucket's trades.
    pub pnl: Decimal,
    /// Sum of the R-multiples of the bucket's trades.
    pub r_total: Decimal,
    /// Running P&L from the first bucket of the window up to and including this one.
    pub cumulative_pnl: Decimal,
}

/// The output of [`Aggregator::aggregate`](crate::Aggregator::aggregate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub granularity: Granularity,
    /// The most recent buckets, in ascending key order.
    pub buckets: Vec<BucketSummary>,
    /// Percentage of buckets in the window with a positive P&L.
    pub consistency_score: Decimal,
    /// Mean of the bucket winrates, rounded to a whole number.
    pub average_winrate: Decimal,
    pub total_pnl_in_window: Decimal,
}

impl AggregateReport {
    pub fn empty(granularity: Granularity) -> Self {
        Self {
            granularity,
            buckets: Vec::new(),
            consistency_score: Decimal::ZERO,
            average_winrate: Decimal::ZERO,
            total_pnl_in_window: Decimal::ZERO,
        }
    }
}

/// Trade count, win count and unrounded winrate of a subset of trades.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinrateStat {
    pub trades: usize,
    pub wins: usize,
    pub winrate: Decimal,
}

impl WinrateStat {
    pub fn from_trades<'a, I>(trades: I) -> Self
    where
        I: IntoIterator<Item = &'a TradeRecord>,
    {
        let subset: Vec<&TradeRecord> = trades.into_iter().collect();
        Self {
            trades: subset.len(),
            wins: subset.iter().filter(|t| t.is_win()).count(),
            winrate: winrate_of(subset.iter().copied()),
        }
    }
}

/// Headline figures for the dashboard, relative to a given "today".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    pub today: WinrateStat,
    /// The last seven calendar days, today included.
    pub this_week: WinrateStat,
    /// From the first day of the current month up to today.
    pub this_month: WinrateStat,
    pub all_time: WinrateStat,
    /// Trades that have no outcome yet.
    pub open_trades: usize,
    pub total_pnl: Decimal,
    pub total_r: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStat {
    pub session: Session,
    pub stat: WinrateStat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraderStat {
    pub trader: String,
    pub stat: WinrateStat,
}
