use analytics::{AggregateReport, KpiSnapshot, SessionStat, TraderStat, WinrateStat};
use comfy_table::{Table, presets::UTF8_FULL};
use projector::{CompoundingSchedule, HorizonProjection};
use rust_decimal::{Decimal, RoundingStrategy};

fn two_places(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn money(value: Decimal) -> String {
    format!("{:.2}", two_places(value))
}

fn percent(value: Decimal) -> String {
    format!("{:.2}%", two_places(value))
}

fn money_f64(value: f64) -> String {
    format!("{value:.2}")
}

fn percent_f64(value: f64) -> String {
    format!("{value:.2}%")
}

fn table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

fn winrate_cells(stat: &WinrateStat) -> Vec<String> {
    vec![
        stat.trades.to_string(),
        stat.wins.to_string(),
        percent(stat.winrate),
    ]
}

pub fn kpi_table(kpi: &KpiSnapshot) -> Table {
    let mut table = table(vec!["Period", "Trades", "Wins", "Winrate"]);
    for (label, stat) in [
        ("Today", &kpi.today),
        ("Last 7 days", &kpi.this_week),
        ("This month", &kpi.this_month),
        ("All time", &kpi.all_time),
    ] {
        let mut row = vec![label.to_string()];
        row.extend(winrate_cells(stat));
        table.add_row(row);
    }
    table
}

pub fn kpi_totals(kpi: &KpiSnapshot) -> String {
    format!(
        "Open trades: {}  |  Total P&L: {}  |  Total R: {}",
        kpi.open_trades,
        money(kpi.total_pnl),
        two_places(kpi.total_r)
    )
}

pub fn bucket_table(report: &AggregateReport) -> Table {
    let mut table = table(vec![
        "Bucket", "Trades", "Wins", "Winrate", "P&L", "R", "Cumulative P&L",
    ]);
    for bucket in &report.buckets {
        table.add_row(vec![
            bucket.key.clone(),
            bucket.trades.to_string(),
            bucket.wins.to_string(),
            percent(bucket.winrate),
            money(bucket.pnl),
            two_places(bucket.r_total).to_string(),
            money(bucket.cumulative_pnl),
        ]);
    }
    table
}

pub fn bucket_summary(report: &AggregateReport) -> String {
    format!(
        "Consistency: {}  |  Average winrate: {}  |  P&L in window: {}",
        percent(report.consistency_score),
        percent(report.average_winrate),
        money(report.total_pnl_in_window)
    )
}

pub fn session_table(sessions: &[SessionStat]) -> Table {
    let mut table = table(vec!["Session", "Trades", "Wins", "Winrate"]);
    for entry in sessions {
        let mut row = vec![entry.session.to_string()];
        row.extend(winrate_cells(&entry.stat));
        table.add_row(row);
    }
    table
}

pub fn trader_table(ranking: &[TraderStat]) -> Table {
    let mut table = table(vec!["#", "Trader", "Trades", "Wins", "Winrate"]);
    for (rank, entry) in ranking.iter().enumerate() {
        let mut row = vec![(rank + 1).to_string(), entry.trader.clone()];
        row.extend(winrate_cells(&entry.stat));
        table.add_row(row);
    }
    table
}

pub fn projection_table(projections: &[HorizonProjection]) -> Table {
    let mut table = table(vec![
        "Horizon", "Periods", "Risk / period", "Projected P&L", "Final balance", "ROI",
    ]);
    for p in projections {
        table.add_row(vec![
            p.horizon.to_string(),
            p.periods.to_string(),
            money(p.effective_risk),
            money_f64(p.delta),
            money_f64(p.final_balance),
            percent_f64(p.roi_pct),
        ]);
    }
    table
}

pub fn schedule_table(schedule: &CompoundingSchedule) -> Table {
    let mut table = table(vec!["Day", "Start", "Profit", "End", "Growth"]);
    for row in &schedule.rows {
        table.add_row(vec![
            row.day.to_string(),
            money_f64(row.start_balance),
            money_f64(row.profit),
            money_f64(row.end_balance),
            percent_f64(row.growth_pct),
        ]);
    }
    table
}

pub fn schedule_summary(schedule: &CompoundingSchedule) -> String {
    format!(
        "Initial: {}  |  Final: {}  |  Profit: {}  |  ROI: {}",
        money(schedule.initial_capital),
        money_f64(schedule.final_balance),
        money_f64(schedule.total_profit),
        percent_f64(schedule.roi_pct)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use projector::compounding_schedule;
    use rust_decimal_macros::dec;

    #[test]
    fn formats_money_and_percent() {
        assert_eq!(money(dec!(5151.125)), "5151.13");
        assert_eq!(money(dec!(75)), "75.00");
        assert_eq!(percent(dec!(33.3333)), "33.33%");
    }

    #[test]
    fn schedule_table_lists_the_latest_day_first() {
        let schedule = compounding_schedule(Some(dec!(100)), Some(dec!(10)), Some(2))
            .unwrap()
            .unwrap();
        let rendered = schedule_table(&schedule).to_string();
        let day2 = rendered.find("121.00").unwrap();
        let day1 = rendered.find("100.00").unwrap();
        assert!(day2 < day1);
        assert!(schedule_summary(&schedule).contains("ROI: 21.00%"));
    }

    #[test]
    fn yearly_projection_at_full_risk_renders_a_number() {
        use core_types::Horizon;
        use projector::{ProjectionParameters, Projector};

        let projector = Projector::new(
            ProjectionParameters::new(dec!(10000))
                .with_risk_pct(dec!(100))
                .with_horizon(Horizon::Yearly),
        )
        .unwrap();
        let rendered = projection_table(&[projector.project()]).to_string();
        assert!(rendered.contains("yearly"));
        assert!(!rendered.contains("inf"));
        assert!(!rendered.contains("NaN"));
    }
}
