mod cli;
mod engine;
mod models;
mod reports;
mod storage;
mod types;

use std::io::{stderr, stdin, stdout, BufWriter, Write};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Result};
use clap::Parser;
use tokio::task::spawn_blocking;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::cli::Cli;
use crate::engine::{load_ledger_async, run_concurrently};
use crate::models::ParserConfig;
use crate::storage::Ledger;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    setup_logging(args.log_level.into());

    if !args.input_file.exists() {
        bail!("File not found: {}", args.input_file.display());
    }

    let config = args.parser_config();

    let timer = Instant::now();
    let ledger = Arc::new(load_ledger_async(&args.input_file, config.clone()).await?);
    let duration = timer.elapsed();

    info!("Loaded {} transactions ({} field warnings) in: {duration:?}", ledger.len(), ledger.warnings().len());

    let kinds = args.selected_reports();

    if kinds.is_empty() {
        spawn_blocking(move || interactive(&ledger, &config)).await??;
    } else {
        let reports = run_concurrently(ledger, &kinds).await?;
        let mut output = BufWriter::new(stdout().lock());

        for report in reports {
            report.write_to(&mut output, config.primary_currency())?;
        }

        output.flush()?;
    }

    Ok(())
}

fn interactive(ledger: &Ledger, config: &ParserConfig) -> Result<()> {
    let mut output = stdout().lock();

    cli::print_banner(&mut output)?;
    cli::print_load_summary(&mut output, ledger)?;
    cli::run_menu(ledger, config, stdin().lock(), &mut output)?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Reports go to stdout, so diagnostics stay on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
