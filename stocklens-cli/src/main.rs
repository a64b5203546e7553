//! StockLens CLI — indicator snapshots and crossover backtests over CSV
//! history.
//!
//! Commands:
//! - `indicators` — clean a CSV history and print the latest-row snapshot
//! - `backtest` — run the SMA(50/200) crossover simulation and print the
//!   full result (KPIs, equity curve, trades, chart data)
//!
//! Output is JSON on stdout, exactly the bodies the product's web layer
//! serves; logs go to stderr.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde_json::json;

use stocklens_core::data::{read_bar_records, CsvHistoryProvider};
use stocklens_core::engine::{run_backtest, run_sma_crossover_backtest};
use stocklens_core::indicators::calculate_indicators;

#[derive(Parser)]
#[command(
    name = "stocklens",
    about = "StockLens CLI — historical price analytics"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the indicator snapshot for a CSV price history.
    Indicators {
        /// CSV file with at least date,close columns.
        #[arg(long)]
        csv: PathBuf,
    },
    /// Run the SMA crossover backtest over a CSV price history.
    Backtest {
        /// CSV file with date,open,high,low,close columns.
        #[arg(long)]
        csv: PathBuf,

        /// Symbol label used in logs and results.
        #[arg(long, default_value = "CSV")]
        symbol: String,

        /// Starting capital for the simulation.
        #[arg(long, default_value_t = 10_000.0)]
        capital: f64,

        /// Window start (YYYY-MM-DD). With --end, runs through the
        /// orchestration wrapper including the warm-up lookback.
        #[arg(long, requires = "end")]
        start: Option<String>,

        /// Window end (YYYY-MM-DD).
        #[arg(long, requires = "start")]
        end: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Indicators { csv } => run_indicators(&csv, cli.pretty),
        Commands::Backtest {
            csv,
            symbol,
            capital,
            start,
            end,
        } => run_backtest_cmd(&csv, &symbol, capital, start, end, cli.pretty),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug,stocklens_core=debug")
    } else {
        EnvFilter::new("warn,stocklens_core=info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn run_indicators(csv: &Path, pretty: bool) -> Result<()> {
    let records = read_bar_records(csv)
        .with_context(|| format!("failed to read {}", csv.display()))?;

    match calculate_indicators(&records) {
        Ok(report) => print_json(&serde_json::to_value(&report)?, pretty),
        Err(err) => {
            // The web layer serves calculation failures as a JSON error
            // body rather than a transport error; mirror that shape here.
            print_json(&json!({ "error": err.to_string() }), pretty)?;
            std::process::exit(1);
        }
    }
}

fn run_backtest_cmd(
    csv: &Path,
    symbol: &str,
    capital: f64,
    start: Option<String>,
    end: Option<String>,
    pretty: bool,
) -> Result<()> {
    let result = match (start, end) {
        (Some(start), Some(end)) => {
            let start = parse_cli_date(&start)?;
            let end = parse_cli_date(&end)?;
            if end < start {
                bail!("--end must not precede --start");
            }
            let provider = CsvHistoryProvider::new(csv);
            run_sma_crossover_backtest(&provider, symbol, start, end, capital)?
        }
        _ => {
            let records = read_bar_records(csv)
                .with_context(|| format!("failed to read {}", csv.display()))?;
            run_backtest(symbol, &records, capital)?
        }
    };

    print_json(&serde_json::to_value(&result)?, pretty)
}

fn parse_cli_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{input}', expected YYYY-MM-DD"))
}

fn print_json(value: &serde_json::Value, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
