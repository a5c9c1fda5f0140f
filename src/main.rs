mod engine;
mod ledger;
mod models;
mod report;
mod schema;
mod source;
mod types;
mod validation;

use std::fs::File;
use std::io::{stderr, stdout, BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::Aggregator;
use crate::report::Report;
use crate::source::{ensure_default_fixture, CsvRowSource, DEFAULT_FIXTURE_ATTEMPTS, DEFAULT_FIXTURE_PATH};
use crate::types::CurrencySymbols;

/// Computes per-customer balances from a CSV ledger of CREDIT and DEBIT transactions.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Transaction file to read. Defaults to transactions.csv, which is created on first run.
    input: Option<PathBuf>,

    /// Diagnostics level written to stderr: error, warn, info, debug or trace
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Currency glyph stripped from the start of amounts. Repeat to allow several.
    #[arg(short = 's', long = "currency-symbol", default_value = "£")]
    currency_symbols: Vec<String>
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let (path, file) = open_input(cli.input.as_deref())?;
    let aggregator = Aggregator::new(CurrencySymbols::new(cli.currency_symbols));

    let timer = Instant::now();
    let summary = aggregator
        .run(CsvRowSource::from_reader(BufReader::new(file)))
        .with_context(|| format!("Unable to process {}", path.display()))?;
    let duration = timer.elapsed();

    info!("Processed {} in: {duration:?}", path.display());

    if summary.skipped > 0 {
        warn!("{} of {} rows were skipped", summary.skipped, summary.skipped + summary.applied);
    }

    write_results_to_stdout(Report::from_ledger(summary.ledger))?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'warn'", level);
            LevelFilter::WARN
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Balances go to stdout, so every diagnostic has to go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

/// Resolves the transaction file to read, provisioning the default one when no path is given.
fn open_input(input: Option<&Path>) -> Result<(PathBuf, File)> {
    let path = match input {
        Some(path) => {
            if !has_csv_extension(path) {
                bail!("{} is not a CSV", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let path = PathBuf::from(DEFAULT_FIXTURE_PATH);
            ensure_default_fixture(&path, DEFAULT_FIXTURE_ATTEMPTS)?;
            path
        }
    };

    if path.is_dir() {
        bail!("{} is not a file", path.display());
    }

    let file = File::open(&path).map_err(|error| match error.kind() {
        ErrorKind::NotFound => anyhow!("{} does not exist", path.display()),
        _ => anyhow!(error).context(format!("Unable to read {}", path.display()))
    })?;

    Ok((path, file))
}

/// The extension is everything after the last `.` of the file name, so a file
/// named just `.csv` qualifies.
fn has_csv_extension(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.rsplit_once('.').map(|(_, extension)| extension.to_lowercase()))
        .is_some_and(|extension| extension.ends_with("csv"))
}

fn write_results_to_stdout(report: Report) -> Result<()> {
    let output = BufWriter::new(stdout().lock());

    report.write_to(output)?;

    Ok(())
}
