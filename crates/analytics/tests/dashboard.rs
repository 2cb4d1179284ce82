use analytics::{Aggregator, KpiSnapshot, session_breakdown, trader_ranking};
use chrono::{Days, NaiveDate};
use core_types::{Granularity, Outcome, Session, TradeRecord};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn journal() -> Vec<TradeRecord> {
    let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let sessions = ["Asia", "London", "New York", "New York PM", "Overnight"];
    let traders = [Some("Ana"), Some("Bea"), None];

    (0..120u64)
        .map(|i| {
            let outcome = match i % 4 {
                0 | 1 => Some(Outcome::Winning),
                2 => Some(Outcome::Losing),
                _ if i % 8 == 3 => Some(Outcome::Breakeven),
                _ => None,
            };
            let pnl = match outcome {
                Some(Outcome::Winning) => dec!(150),
                Some(Outcome::Losing) => dec!(-100),
                _ => Decimal::ZERO,
            };
            let mut trade = TradeRecord::new(
                start.checked_add_days(Days::new(i * 3)).unwrap(),
                sessions[(i % 5) as usize],
            )
            .with_result(pnl / dec!(100), pnl);
            trade.outcome = outcome;
            if let Some(name) = traders[(i % 3) as usize] {
                trade = trade.with_trader(name);
            }
            trade
        })
        .collect()
}

#[test]
fn every_trade_lands_in_exactly_one_bucket() {
    let trades = journal();
    // 120 trades every three days from June 2025 run into May 2026.
    let report = Aggregator::default().aggregate(&trades, Granularity::Year);

    let counted: usize = report.buckets.iter().map(|b| b.trades).sum();
    assert_eq!(report.buckets.len(), 2);
    assert_eq!(counted, trades.len());

    let total: Decimal = trades.iter().map(|t| t.risk_amount).sum();
    assert_eq!(report.total_pnl_in_window, total);
}

#[test]
fn windowed_reports_stay_within_bounds() {
    let trades = journal();
    for granularity in [Granularity::Day, Granularity::Week, Granularity::Month] {
        let report = Aggregator::default().aggregate(&trades, granularity);
        assert!(report.buckets.len() <= 12);
        assert!(report.consistency_score >= Decimal::ZERO && report.consistency_score <= dec!(100));
        assert!(report.average_winrate >= Decimal::ZERO && report.average_winrate <= dec!(100));
        for bucket in &report.buckets {
            assert!(bucket.wins <= bucket.trades);
            assert!(bucket.winrate >= Decimal::ZERO && bucket.winrate <= dec!(100));
        }
        let last = report.buckets.last().unwrap();
        assert_eq!(last.cumulative_pnl, report.total_pnl_in_window);
    }
}

#[test]
fn breakdowns_cover_the_journal() {
    let trades = journal();

    let sessions = session_breakdown(&trades);
    assert_eq!(
        sessions.iter().map(|s| s.session).collect::<Vec<_>>(),
        Session::ALL.to_vec()
    );
    let session_total: usize = sessions.iter().map(|s| s.stat.trades).sum();
    assert_eq!(session_total, trades.len() / 5 * 4);

    let ranking = trader_ranking(&trades);
    assert_eq!(ranking.len(), 3);
    let trader_total: usize = ranking.iter().map(|t| t.stat.trades).sum();
    assert_eq!(trader_total, trades.len());
    assert!(ranking.windows(2).all(|w| w[0].stat.winrate >= w[1].stat.winrate));
}

#[test]
fn kpis_against_a_fixed_today() {
    let trades = journal();
    let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let kpi = KpiSnapshot::compute(&trades, today);

    // June 1, 4, 7 and 10 are logged; the week window starts on June 4.
    assert_eq!(kpi.today.trades, 1);
    assert_eq!(kpi.this_week.trades, 3);
    assert_eq!(kpi.this_month.trades, 4);
    assert_eq!(kpi.all_time.trades, 120);
    assert_eq!(kpi.all_time.winrate, dec!(50));
}
