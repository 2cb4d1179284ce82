use crate::error::ProjectionError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One compounding day of a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub day: u32,
    pub start_balance: f64,
    pub profit: f64,
    /// Closing balance, rounded to cents.
    pub end_balance: f64,
    /// Growth relative to the initial capital, in percent.
    pub growth_pct: f64,
}

/// A balance on the growth chart. Day 0 is the initial capital.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub day: u32,
    pub balance: f64,
}

/// A day-by-day compounding simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundingSchedule {
    pub initial_capital: Decimal,
    pub daily_rate_pct: Decimal,
    pub final_balance: f64,
    pub total_profit: f64,
    pub roi_pct: f64,
    /// Most recent day first.
    pub rows: Vec<ScheduleRow>,
    /// Chronological, from day 0 to the last day.
    pub series: Vec<BalancePoint>,
}

/// Running balance of a schedule.
///
/// Days are settled in `Decimal` so the cent rounding is exact. Once a balance no
/// longer fits a `Decimal` the remaining days are settled in `f64`, saturating at
/// `f64::MAX` so every value stays finite.
#[derive(Debug, Clone, Copy)]
enum Balance {
    Exact(Decimal),
    Float(f64),
}

impl Balance {
    fn value(self) -> f64 {
        match self {
            Balance::Exact(balance) => balance.to_f64().unwrap_or(f64::MAX),
            Balance::Float(balance) => balance,
        }
    }

    /// Applies one day of growth, returning the profit and the closing balance.
    fn settle(self, rate: Decimal) -> (f64, Balance) {
        if let Balance::Exact(start) = self {
            let settled = start.checked_mul(rate).and_then(|profit| {
                let end = start
                    .checked_add(profit)?
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                Some((profit, end))
            });
            if let Some((profit, end)) = settled {
                return (profit.to_f64().unwrap_or(0.0), Balance::Exact(end));
            }
        }

        let start = self.value();
        let profit = finite(start * rate.to_f64().unwrap_or(0.0));
        // Past the Decimal range an f64 cannot resolve cents, so no rounding.
        (profit, Balance::Float(finite(start + profit)))
    }
}

fn finite(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}

/// Simulates compounding `daily_rate_pct` on `initial_capital` for `num_days` days.
///
/// Each closing balance is rounded to two decimals before it is carried into the
/// next day, so the result drifts from the closed-form `(1 + r)^n` value.
///
/// Returns `Ok(None)` when an input is missing or `num_days` is not positive.
pub fn compounding_schedule(
    initial_capital: Option<Decimal>,
    daily_rate_pct: Option<Decimal>,
    num_days: Option<i64>,
) -> Result<Option<CompoundingSchedule>, ProjectionError> {
    let (Some(initial_capital), Some(daily_rate_pct), Some(num_days)) =
        (initial_capital, daily_rate_pct, num_days)
    else {
        return Ok(None);
    };
    let num_days = match u32::try_from(num_days) {
        Ok(days) if days > 0 => days,
        _ if num_days <= 0 => return Ok(None),
        _ => {
            return Err(ProjectionError::InvalidParameters(format!(
                "num_days {num_days} is out of range"
            )));
        }
    };

    let rate = daily_rate_pct / dec!(100);
    let initial = initial_capital.to_f64().unwrap_or(0.0);
    let mut balance = Balance::Exact(initial_capital);
    let mut rows = Vec::new();
    let mut series = vec![BalancePoint {
        day: 0,
        balance: initial,
    }];

    for day in 1..=num_days {
        let start_balance = balance.value();
        let (profit, end) = balance.settle(rate);
        let end_balance = end.value();

        rows.push(ScheduleRow {
            day,
            start_balance,
            profit,
            end_balance,
            growth_pct: growth_pct(initial, end_balance),
        });
        series.push(BalancePoint {
            day,
            balance: end_balance,
        });
        balance = end;
    }
    rows.reverse();

    let final_balance = balance.value();
    tracing::debug!(
        %initial_capital,
        %daily_rate_pct,
        num_days,
        final_balance,
        exact = matches!(balance, Balance::Exact(_)),
        "Generated compounding schedule."
    );

    Ok(Some(CompoundingSchedule {
        initial_capital,
        daily_rate_pct,
        final_balance,
        total_profit: finite(final_balance - initial),
        roi_pct: growth_pct(initial, final_balance),
        rows,
        series,
    }))
}

fn growth_pct(initial: f64, balance: f64) -> f64 {
    if initial == 0.0 {
        return 0.0;
    }
    finite((balance - initial) / initial * 100.0)
}
