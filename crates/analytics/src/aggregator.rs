use crate::report::{AggregateReport, BucketSummary};
use crate::round_percent;
use chrono::{Datelike, NaiveDate};
use core_types::{Granularity, TradeRecord};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Number of buckets kept by [`Aggregator::default`].
pub const DEFAULT_BUCKET_WINDOW: usize = 12;

/// Month abbreviations used in monthly bucket keys.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// Derives the bucket key of a date under the given granularity.
///
/// Weekly keys use the ISO-8601 week number paired with the calendar year of the
/// date itself, so the last days of December can land in `W1` of their own year.
pub fn bucket_key(date: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Day => date.format("%Y-%m-%d").to_string(),
        Granularity::Week => format!("W{} - {}", date.iso_week().week(), date.year()),
        Granularity::Month => format!(
            "{} {}",
            MONTH_ABBREVIATIONS[date.month0() as usize],
            date.year()
        ),
        Granularity::Year => date.year().to_string(),
    }
}

#[derive(Debug, Default)]
struct BucketAccumulator {
    trades: usize,
    wins: usize,
    pnl: Decimal,
    r_total: Decimal,
}

impl BucketAccumulator {
    fn add(&mut self, trade: &TradeRecord) {
        self.trades += 1;
        if trade.is_win() {
            self.wins += 1;
        }
        self.pnl += trade.risk_amount;
        self.r_total += trade.risk_multiple;
    }
}

/// A stateless calculator that groups trades into time buckets.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    window: usize,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET_WINDOW)
    }
}

impl Aggregator {
    /// Creates an aggregator that keeps the last `window` buckets.
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Groups `trades` by bucket and summarizes the most recent window.
    ///
    /// Buckets are ordered by plain string comparison of their keys. For weekly and
    /// monthly keys this is not calendar order (`W10` sorts before `W9`), and the
    /// window is taken from the end of that ordering.
    pub fn aggregate(&self, trades: &[TradeRecord], granularity: Granularity) -> AggregateReport {
        if trades.is_empty() || self.window == 0 {
            return AggregateReport::empty(granularity);
        }

        let mut groups: BTreeMap<String, BucketAccumulator> = BTreeMap::new();
        for trade in trades {
            groups
                .entry(bucket_key(trade.entry_date, granularity))
                .or_default()
                .add(trade);
        }

        let skip = groups.len().saturating_sub(self.window);
        let mut cumulative_pnl = Decimal::ZERO;
        let buckets: Vec<BucketSummary> = groups
            .into_iter()
            .skip(skip)
            .map(|(key, acc)| {
                cumulative_pnl += acc.pnl;
                BucketSummary {
                    key,
                    trades: acc.trades,
                    wins: acc.wins,
                    winrate: bucket_winrate(acc.wins, acc.trades),
                    pnl: acc.pnl,
                    r_total: acc.r_total,
                    cumulative_pnl,
                }
            })
            .collect();

        let bucket_count = Decimal::from(buckets.len());
        let positive = buckets.iter().filter(|b| b.pnl > Decimal::ZERO).count();
        let consistency_score = round_percent(Decimal::from(positive * 100) / bucket_count);
        let winrate_sum: Decimal = buckets.iter().map(|b| b.winrate).sum();
        let average_winrate = round_percent(winrate_sum / bucket_count);

        tracing::debug!(
            %granularity,
            trades = trades.len(),
            buckets = buckets.len(),
            skipped = skip,
            "Aggregated trades into buckets."
        );

        AggregateReport {
            granularity,
            consistency_score,
            average_winrate,
            total_pnl_in_window: cumulative_pnl,
            buckets,
        }
    }
}

fn bucket_winrate(wins: usize, trades: usize) -> Decimal {
    if trades == 0 {
        return Decimal::ZERO;
    }
    round_percent(Decimal::from(wins * 100) / Decimal::from(trades))
}
