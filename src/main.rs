use analytics::{Aggregator, KpiSnapshot, session_breakdown, trader_ranking};
use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use configuration::{Config, load_config};
use core_types::{Granularity, Horizon};
use journal::{JsonFileSource, TradeSource};
use projector::{ProjectionParameters, Projector, compounding_schedule};
use rust_decimal::Decimal;
use std::path::PathBuf;

mod logging;
mod render;

/// The main entry point for the Tradebook command-line dashboard.
fn main() -> anyhow::Result<()> {
    // A .env file is optional; it may carry TRADEBOOK_* overrides and RUST_LOG.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    let _log_guard = logging::init(&config.logging);

    // Execute the appropriate command
    match cli.command {
        Commands::Stats(args) => handle_stats(args, &config),
        Commands::Project(args) => handle_project(args, &config),
        Commands::Schedule(args) => handle_schedule(args, &config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Trade journal statistics and growth projections.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show winrate KPIs, time buckets and session/trader breakdowns.
    Stats(StatsArgs),
    /// Project capital growth over a horizon.
    Project(ProjectArgs),
    /// Simulate day-by-day compounding with per-day rounding.
    Schedule(ScheduleArgs),
}

#[derive(Parser)]
struct StatsArgs {
    /// Bucket size: day, week, month or year.
    #[arg(long, default_value = "week")]
    granularity: Granularity,

    /// The date treated as today (format: YYYY-MM-DD). Defaults to the local date.
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Journal file to read instead of the configured one.
    #[arg(long)]
    journal: Option<PathBuf>,
}

#[derive(Parser)]
struct ProjectArgs {
    #[arg(long)]
    capital: Option<Decimal>,

    /// Percentage of capital risked per period (1 means 1%).
    #[arg(long)]
    risk_pct: Option<Decimal>,

    /// Fixed amount risked per period; replaces the percentage when positive.
    #[arg(long)]
    fixed_risk: Option<Decimal>,

    /// daily, weekly, monthly or yearly.
    #[arg(long)]
    horizon: Option<Horizon>,

    /// Project every horizon instead of a single one.
    #[arg(long, conflicts_with = "horizon")]
    all: bool,
}

#[derive(Parser)]
struct ScheduleArgs {
    #[arg(long)]
    capital: Option<Decimal>,

    /// Daily growth rate in percent.
    #[arg(long)]
    rate: Option<Decimal>,

    /// Number of days to simulate.
    #[arg(long, allow_negative_numbers = true)]
    days: Option<i64>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_stats(args: StatsArgs, config: &Config) -> anyhow::Result<()> {
    let path = args.journal.unwrap_or_else(|| config.journal.path.clone());
    let source = JsonFileSource::new(path);
    let trades = source.fetch_trades()?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    if trades.is_empty() {
        tracing::warn!(path = %source.path().display(), "Journal contains no trades.");
    }

    let aggregator = Aggregator::new(config.journal.bucket_window);
    let report = aggregator.aggregate(&trades, args.granularity);
    let kpi = KpiSnapshot::compute(&trades, today);

    println!("Performance as of {today}");
    println!("{}", render::kpi_table(&kpi));
    println!("{}", render::kpi_totals(&kpi));
    println!();
    println!("Last {} {} buckets", aggregator.window(), args.granularity);
    println!("{}", render::bucket_table(&report));
    println!("{}", render::bucket_summary(&report));
    println!();
    println!("By session");
    println!("{}", render::session_table(&session_breakdown(&trades)));
    println!();
    println!("Trader ranking");
    println!("{}", render::trader_table(&trader_ranking(&trades)));

    Ok(())
}

fn handle_project(args: ProjectArgs, config: &Config) -> anyhow::Result<()> {
    let defaults = &config.projection;
    let params = ProjectionParameters::new(args.capital.unwrap_or(defaults.capital))
        .with_risk_pct(args.risk_pct.unwrap_or(defaults.risk_pct))
        .with_fixed_risk(args.fixed_risk.unwrap_or(defaults.fixed_risk))
        .with_horizon(args.horizon.unwrap_or(defaults.horizon));
    let projector = Projector::new(params)?;

    let projections = if args.all {
        projector.project_all()
    } else {
        vec![projector.project()]
    };

    let params = projector.params();
    println!(
        "Capital {}  |  risk {}% per period  |  fixed risk {}",
        params.capital, params.risk_pct, params.fixed_risk
    );
    println!("{}", render::projection_table(&projections));
    Ok(())
}

fn handle_schedule(args: ScheduleArgs, config: &Config) -> anyhow::Result<()> {
    let defaults = &config.projection;
    let schedule = compounding_schedule(
        Some(args.capital.unwrap_or(defaults.capital)),
        Some(args.rate.unwrap_or(defaults.daily_rate_pct)),
        Some(args.days.unwrap_or(defaults.schedule_days)),
    )?;

    match schedule {
        Some(schedule) => {
            println!("{}", render::schedule_table(&schedule));
            println!("{}", render::schedule_summary(&schedule));
        }
        None => {
            tracing::warn!("Nothing to project: the number of days must be positive.");
        }
    }
    Ok(())
}
