use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

use crate::models::{ParserConfig, DEFAULT_CURRENCY};
use crate::reports::{ReportKind, ReportSelection};

/// Descriptive statistics over a CSV ledger of transactions
#[derive(Parser, Debug)]
#[command(name = "ledger-analyzer")]
#[command(about = "Descriptive statistics over a CSV ledger of transactions", long_about = None)]
pub struct Cli {
    /// Ledger file with columns ID, Counterparty, Amount, Fee, Type, Date, Time
    #[arg(value_name = "INPUT")]
    pub input_file: PathBuf,

    /// Diagnostics written to stderr at or above this level
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: LogLevel,

    /// Currency code accepted after amounts and fees; the first one is printed in reports
    #[arg(long = "currency", value_name = "CODE", default_values_t = [DEFAULT_CURRENCY.to_string()])]
    pub currencies: Vec<String>,

    /// Report number (1-11) or 'all' to print and exit instead of starting the menu
    #[arg(long = "report", value_name = "REPORT")]
    pub reports: Vec<ReportSelection>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl Cli {
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::with_currencies(self.currencies.iter().cloned())
    }

    /// Reports requested on the command line, in order, without repeats.
    pub fn selected_reports(&self) -> Vec<ReportKind> {
        let mut kinds: Vec<ReportKind> = Vec::new();

        for kind in self.reports.iter().flat_map(|selection| selection.kinds()) {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }

        kinds
    }
}
