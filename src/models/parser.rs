use chrono::NaiveDateTime;
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::warn;

use crate::models::{RecordError, Transaction};
use crate::types::{Monetary, MonetaryError};

pub const DEFAULT_CURRENCY: &str = "IQD";
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y,%H:%M:%S";

/// Knobs for turning raw ledger text into typed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Currency codes accepted as a trailing marker on amount and fee fields.
    pub currency_suffixes: Vec<String>,
    /// `chrono` pattern applied to the joined `date,time` text.
    pub timestamp_format: String
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            currency_suffixes: vec![DEFAULT_CURRENCY.to_string()],
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string()
        }
    }
}

impl ParserConfig {
    pub fn with_currencies<I, S>(currencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            currency_suffixes: currencies.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Code printed after amounts in reports.
    pub fn primary_currency(&self) -> Option<&str> {
        self.currency_suffixes.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    Amount,
    Fee
}

impl Display for AmountField {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AmountField::Amount => formatter.write_str("amount"),
            AmountField::Fee => formatter.write_str("fee")
        }
    }
}

/// A recoverable field problem: the value was replaced with zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWarning {
    pub field: AmountField,
    pub raw: String,
    pub reason: MonetaryError
}

impl Display for FieldWarning {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "Invalid {} data '{}' - defaulting to 0 ({})", self.field, self.raw, self.reason)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    pub transaction: Transaction,
    pub warnings: Vec<FieldWarning>
}

impl Transaction {
    /// Builds a transaction from `[id, counterparty, amount, fee, type, "date,time"]`.
    ///
    /// Bad amount or fee text falls back to zero and is reported in
    /// [`ParsedRecord::warnings`] as well as through a `warn!` event.
    ///
    /// # Errors
    /// Returns [`RecordError::InvalidTimestamp`] when the date-time does not match
    /// [`ParserConfig::timestamp_format`].
    pub fn parse(fields: [&str; 6], config: &ParserConfig) -> Result<ParsedRecord, RecordError> {
        let [id, counterparty, amount, fee, transaction_type, timestamp] = fields;

        let timestamp = NaiveDateTime::parse_from_str(timestamp, &config.timestamp_format)
            .map_err(|error| RecordError::invalid_timestamp(timestamp, error))?;

        let mut warnings = Vec::new();
        let amount = coerce_amount(AmountField::Amount, amount, config, &mut warnings);
        let fee = coerce_amount(AmountField::Fee, fee, config, &mut warnings);

        Ok(ParsedRecord {
            transaction: Transaction::new(id, counterparty, amount, fee, transaction_type, timestamp),
            warnings
        })
    }
}

fn coerce_amount(field: AmountField, raw: &str, config: &ParserConfig, warnings: &mut Vec<FieldWarning>) -> Monetary {
    match Monetary::parse_with_suffix(raw, &config.currency_suffixes) {
        Ok(value) => value,
        Err(reason) => {
            let warning = FieldWarning { field, raw: raw.to_string(), reason };
            warn!("{warning}");
            warnings.push(warning);
            Monetary::new()
        }
    }
}
