use super::args::LogLevel;
use super::{run_menu, Cli};

use anyhow::Result;
use clap::Parser;

use crate::models::{ParserConfig, Transaction};
use crate::reports::ReportKind;
use crate::storage::Ledger;

fn sample_ledger() -> Result<Ledger> {
    let config = ParserConfig::default();
    let transactions = vec![
        Transaction::parse(["1", "A", "100 IQD", "1 IQD", "DEPOSIT", "01/01/2021,10:00:00"], &config)?.transaction,
        Transaction::parse(["2", "B", "-50 IQD", "0 IQD", "WITHDRAWAL", "02/01/2021,11:00:00"], &config)?.transaction,
    ];

    Ok(Ledger::from(transactions))
}

fn drive_menu(input: &str) -> Result<String> {
    let ledger = sample_ledger()?;
    let mut output = Vec::new();

    run_menu(&ledger, &ParserConfig::default(), input.as_bytes(), &mut output)?;

    Ok(String::from_utf8(output)?)
}

#[test]
fn test_cli_defaults() -> Result<()> {
    let cli = Cli::try_parse_from(["ledger-analyzer", "ledger.csv"])?;

    assert_eq!(cli.input_file.to_str(), Some("ledger.csv"));
    assert_eq!(cli.log_level, LogLevel::Warn);
    assert_eq!(cli.parser_config(), ParserConfig::default());
    assert!(cli.selected_reports().is_empty());

    Ok(())
}

#[test]
fn test_cli_options() -> Result<()> {
    let cli = Cli::try_parse_from([
        "ledger-analyzer", "--log-level", "debug", "--currency", "USD", "--currency", "IQD",
        "--report", "5", "--report", "all", "ledger.csv",
    ])?;

    assert_eq!(cli.log_level, LogLevel::Debug);
    assert_eq!(cli.parser_config().currency_suffixes, vec!["USD".to_string(), "IQD".to_string()]);

    let reports = cli.selected_reports();
    assert_eq!(reports.len(), ReportKind::ALL.len());
    assert_eq!(reports[0], ReportKind::RevenueAndExpenditure);

    Ok(())
}

#[test]
fn test_cli_rejects_bad_arguments() {
    assert!(Cli::try_parse_from(["ledger-analyzer"]).is_err());
    assert!(Cli::try_parse_from(["ledger-analyzer", "--report", "12", "ledger.csv"]).is_err());
    assert!(Cli::try_parse_from(["ledger-analyzer", "--log-level", "loud", "ledger.csv"]).is_err());
}

#[test]
fn test_menu_runs_selected_report_then_exits() -> Result<()> {
    let output = drive_menu("5\n0\n")?;

    assert!(output.contains("11. Analyze vendor loyalty by frequency"));
    assert!(output.contains("Total Revenue: 100 IQD\nTotal Expenditure: -50 IQD\n"));
    assert!(output.ends_with("Thank you for using the Transaction Analyzer!\n"));

    Ok(())
}

#[test]
fn test_menu_reprompts_on_invalid_command() -> Result<()> {
    let output = drive_menu("abc\n42\n6\n0\n")?;

    assert!(output.contains("Invalid command 'abc'"));
    assert!(output.contains("Invalid command '42'"));
    assert!(output.contains("Average Transaction Size: 25 IQD"));

    Ok(())
}

#[test]
fn test_menu_stops_at_end_of_input() -> Result<()> {
    let output = drive_menu("1\n")?;

    assert!(output.contains("Transaction types sorted by frequency:"));
    assert!(output.contains("Exiting the Transaction Analyzer."));

    Ok(())
}
