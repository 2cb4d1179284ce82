use crate::report::{KpiSnapshot, SessionStat, TraderStat, WinrateStat};
use chrono::{Datelike, Days, NaiveDate};
use core_types::{Session, TradeRecord};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Percentage of winning trades in `trades`, unrounded. Zero for an empty subset.
pub fn winrate_of<'a, I>(trades: I) -> Decimal
where
    I: IntoIterator<Item = &'a TradeRecord>,
{
    let (count, wins) = trades
        .into_iter()
        .fold((0usize, 0usize), |(count, wins), trade| {
            (count + 1, wins + usize::from(trade.is_win()))
        });
    if count == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(wins * 100) / Decimal::from(count)
}

/// Trades entered on `today`.
pub fn today(trades: &[TradeRecord], today: NaiveDate) -> Vec<&TradeRecord> {
    between(trades, today, today)
}

/// Trades entered during the last seven calendar days, `today` included.
pub fn this_week(trades: &[TradeRecord], today: NaiveDate) -> Vec<&TradeRecord> {
    let start = today.checked_sub_days(Days::new(6)).unwrap_or(NaiveDate::MIN);
    between(trades, start, today)
}

/// Trades entered from the first day of `today`'s month up to `today`.
pub fn this_month(trades: &[TradeRecord], today: NaiveDate) -> Vec<&TradeRecord> {
    let start = today.with_day(1).unwrap_or(today);
    between(trades, start, today)
}

fn between(trades: &[TradeRecord], start: NaiveDate, end: NaiveDate) -> Vec<&TradeRecord> {
    trades
        .iter()
        .filter(|t| t.entry_date >= start && t.entry_date <= end)
        .collect()
}

impl KpiSnapshot {
    pub fn compute(trades: &[TradeRecord], now: NaiveDate) -> Self {
        let snapshot = Self {
            today: WinrateStat::from_trades(today(trades, now)),
            this_week: WinrateStat::from_trades(this_week(trades, now)),
            this_month: WinrateStat::from_trades(this_month(trades, now)),
            all_time: WinrateStat::from_trades(trades),
            open_trades: trades.iter().filter(|t| t.is_open()).count(),
            total_pnl: trades.iter().map(|t| t.risk_amount).sum(),
            total_r: trades.iter().map(|t| t.risk_multiple).sum(),
        };
        tracing::debug!(
            %now,
            trades = trades.len(),
            global_winrate = %snapshot.all_time.winrate,
            "Computed KPI snapshot."
        );
        snapshot
    }
}

/// Winrate per recognized session, in session order. Sessions without trades are
/// omitted and unrecognized labels are ignored.
pub fn session_breakdown(trades: &[TradeRecord]) -> Vec<SessionStat> {
    let mut groups: BTreeMap<Session, Vec<&TradeRecord>> = BTreeMap::new();
    for trade in trades {
        if let Some(session) = trade.session() {
            groups.entry(session).or_default().push(trade);
        }
    }
    groups
        .into_iter()
        .map(|(session, group)| SessionStat {
            session,
            stat: WinrateStat::from_trades(group),
        })
        .collect()
}

/// Winrate per trader, best first. Trades without a name count as "Unknown".
pub fn trader_ranking(trades: &[TradeRecord]) -> Vec<TraderStat> {
    let mut groups: BTreeMap<&str, Vec<&TradeRecord>> = BTreeMap::new();
    for trade in trades {
        groups.entry(trade.trader()).or_default().push(trade);
    }
    let mut ranking: Vec<TraderStat> = groups
        .into_iter()
        .map(|(trader, group)| TraderStat {
            trader: trader.to_string(),
            stat: WinrateStat::from_trades(group),
        })
        .collect();
    // Stable, so equal winrates stay in name order.
    ranking.sort_by(|a, b| b.stat.winrate.cmp(&a.stat.winrate));
    ranking
}
