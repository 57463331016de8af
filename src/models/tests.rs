use super::{AmountField, ParserConfig, RecordError, Transaction, MONEY_BOX_TRANSFER};

use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;

use crate::types::{Monetary, MonetaryError};

fn fields<'a>(amount: &'a str, fee: &'a str, timestamp: &'a str) -> [&'a str; 6] {
    ["1", "Coffee Shop", amount, fee, "PAYMENT", timestamp]
}

#[test]
fn test_parse_builds_typed_transaction() -> Result<()> {
    let parsed = Transaction::parse(fields("-2500 IQD", "0 IQD", "03/04/2023,14:05:09"), &ParserConfig::default())?;
    let transaction = parsed.transaction;

    assert!(parsed.warnings.is_empty());
    assert_eq!(transaction.id(), "1");
    assert_eq!(transaction.counterparty(), "Coffee Shop");
    assert_eq!(transaction.amount(), Monetary::from_str("-2500")?);
    assert_eq!(transaction.fee(), Monetary::new());
    assert_eq!(transaction.transaction_type(), "PAYMENT");
    assert_eq!(transaction.timestamp().date(), NaiveDate::from_ymd_opt(2023, 4, 3).unwrap());
    assert_eq!(transaction.timestamp().format("%H:%M:%S").to_string(), "14:05:09");

    Ok(())
}

#[test]
fn test_parse_is_deterministic() -> Result<()> {
    let config = ParserConfig::default();
    let first = Transaction::parse(fields("10.50 IQD", "0.25 IQD", "01/01/2021,10:00:00"), &config)?;
    let second = Transaction::parse(fields("10.50 IQD", "0.25 IQD", "01/01/2021,10:00:00"), &config)?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_empty_amount_defaults_to_zero_with_warning() -> Result<()> {
    let parsed = Transaction::parse(fields("", "1 IQD", "01/01/2021,10:00:00"), &ParserConfig::default())?;

    assert!(parsed.transaction.amount().is_zero());
    assert_eq!(parsed.warnings.len(), 1);
    assert_eq!(parsed.warnings[0].field, AmountField::Amount);
    assert_eq!(parsed.warnings[0].raw, "");
    assert_eq!(parsed.warnings[0].reason, MonetaryError::Empty);

    Ok(())
}

#[test]
fn test_malformed_fee_defaults_to_zero_and_names_raw_text() -> Result<()> {
    let parsed = Transaction::parse(fields("100 IQD", "n/a", "01/01/2021,10:00:00"), &ParserConfig::default())?;

    assert_eq!(parsed.transaction.amount(), Monetary::from_str("100")?);
    assert!(parsed.transaction.fee().is_zero());
    assert_eq!(parsed.warnings.len(), 1);
    assert_eq!(parsed.warnings[0].field, AmountField::Fee);
    assert!(parsed.warnings[0].to_string().contains("'n/a'"));
    assert!(parsed.warnings[0].to_string().starts_with("Invalid fee data"));

    Ok(())
}

#[test]
fn test_unknown_currency_is_a_field_warning_unless_configured() -> Result<()> {
    let parsed = Transaction::parse(fields("5 USD", "0", "01/01/2021,10:00:00"), &ParserConfig::default())?;

    assert!(parsed.transaction.amount().is_zero());
    assert_eq!(parsed.warnings.len(), 1);

    let config = ParserConfig::with_currencies(["IQD", "USD"]);
    let parsed = Transaction::parse(fields("5 USD", "0", "01/01/2021,10:00:00"), &config)?;

    assert_eq!(parsed.transaction.amount(), Monetary::from_str("5")?);
    assert!(parsed.warnings.is_empty());
    assert_eq!(config.primary_currency(), Some("IQD"));

    Ok(())
}

#[test]
fn test_malformed_timestamp_is_a_record_error() {
    let config = ParserConfig::default();

    let result = Transaction::parse(fields("1", "0", "31-02-2021,10:00:00"), &config);
    assert!(matches!(result, Err(RecordError::InvalidTimestamp { ref raw, .. }) if raw == "31-02-2021,10:00:00"));

    let result = Transaction::parse(fields("1", "0", "31/02/2021,10:00:00"), &config);
    assert!(matches!(result, Err(RecordError::InvalidTimestamp { .. })));

    let result = Transaction::parse(fields("1", "0", ""), &config);
    assert!(matches!(result, Err(RecordError::InvalidTimestamp { .. })));
}

#[test]
fn test_sign_and_transfer_classification() -> Result<()> {
    let config = ParserConfig::default();
    let spend = Transaction::parse(fields("-1", "0", "01/01/2021,10:00:00"), &config)?.transaction;
    let zero = Transaction::parse(fields("0", "0", "01/01/2021,10:00:00"), &config)?.transaction;
    let transfer = Transaction::parse(["9", "Me", "-5", "0", MONEY_BOX_TRANSFER, "01/01/2021,10:00:00"], &config)?.transaction;

    assert!(spend.is_spending());
    assert!(!zero.is_spending());
    assert!(!spend.is_internal_transfer());
    assert!(transfer.is_internal_transfer());

    Ok(())
}

#[test]
fn test_display_matches_listing_layout() -> Result<()> {
    let parsed = Transaction::parse(["7", "A", "100 IQD", "1 IQD", "DEPOSIT", "01/01/2021,10:00:00"], &ParserConfig::default())?;

    assert_eq!(
        parsed.transaction.to_string(),
        "ID: 7, Counterparty: A, Amount: 100, Fee: 1, Type: DEPOSIT, Timestamp: 2021-01-01 10:00:00"
    );

    Ok(())
}
