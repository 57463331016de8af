use crate::engine::LoadError;
use crate::models::{ParserConfig, ParsedRecord, RecordError, Transaction};
use crate::storage::{Ledger, LoadWarning};
use csv::{Position, ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tokio::task::spawn_blocking;
use tracing::{debug, error, info};

/// `ID, Counterparty, Amount, Fee, Type, Date, Time`
pub const COLUMN_COUNT: usize = 7;

/// Reads a ledger file into memory.
///
/// The header row is skipped without being checked. Loading is all-or-nothing: the first row
/// with the wrong shape or an unreadable timestamp aborts the load and no transactions are
/// returned.
pub fn load_ledger(path: impl AsRef<Path>, config: &ParserConfig) -> Result<Ledger, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|error| {
        error!("Error opening CSV at path: {} | {error}", path.display());
        LoadError::open(path, error)
    })?;

    read_ledger(BufReader::new(file), config)
}

/// Same as [`load_ledger`], run on the blocking pool so async callers are not stalled.
pub async fn load_ledger_async(path: impl Into<PathBuf>, config: ParserConfig) -> Result<Ledger, LoadError> {
    let path = path.into();
    spawn_blocking(move || load_ledger(&path, &config)).await?
}

pub fn read_ledger<R: Read>(input: R, config: &ParserConfig) -> Result<Ledger, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::None)
        .flexible(true)
        .from_reader(input);

    let mut transactions = Vec::new();
    let mut warnings = Vec::new();

    for result in reader.records() {
        let record = result.inspect_err(|error| error!("CSV read error: {error}"))?;
        let line = record.position().map(Position::line).unwrap_or_default();

        let parsed = parse_row(&record, config).map_err(|source| {
            let error = LoadError::row(line, &record, source);
            error!("{error}");
            error
        })?;

        debug!("Row at line {line} parsed as transaction [{}]", parsed.transaction.id());

        warnings.extend(parsed.warnings.into_iter().map(|warning| LoadWarning { line, warning }));
        transactions.push(parsed.transaction);
    }

    info!("Loaded {} transactions with {} field warnings", transactions.len(), warnings.len());

    Ok(Ledger::new(transactions, warnings))
}

fn parse_row(record: &StringRecord, config: &ParserConfig) -> Result<ParsedRecord, RecordError> {
    let columns: Vec<&str> = record.iter().collect();
    let found = columns.len();

    let [id, counterparty, amount, fee, transaction_type, date, time] = <[&str; COLUMN_COUNT]>::try_from(columns)
        .map_err(|_| RecordError::column_count(COLUMN_COUNT, found))?;

    let timestamp = format!("{date},{time}");

    Transaction::parse([id, counterparty, amount, fee, transaction_type, &timestamp], config)
}
