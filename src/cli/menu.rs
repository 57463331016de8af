use std::io;
use std::io::{BufRead, Write};

use crate::engine::timed;
use crate::models::ParserConfig;
use crate::reports::{Command, ReportKind};
use crate::storage::Ledger;

const SEPARATOR: &str = "************************************************************";

pub fn print_banner<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "{SEPARATOR}")?;
    writeln!(output, "Welcome to the Transaction Analyzer!")?;
    writeln!(output, "{SEPARATOR}")
}

pub fn print_load_summary<W: Write>(output: &mut W, ledger: &Ledger) -> io::Result<()> {
    writeln!(output, "transaction data loaded.")?;

    if ledger.is_empty() {
        writeln!(output, "No transaction data available.")
    } else {
        writeln!(output, "transactions loaded: {}", ledger.len())
    }
}

fn print_commands<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "Available commands:")?;

    for kind in ReportKind::ALL {
        writeln!(output, "{}. {}", kind.number(), kind.title())?;
    }

    writeln!(output, "0. Exit")
}

fn read_command<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();

    match input.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line))
    }
}

/// Interactive loop: prints the command list, runs the chosen report, repeats until `0` or
/// end of input.
pub fn run_menu<R: BufRead, W: Write>(ledger: &Ledger, config: &ParserConfig, mut input: R, output: &mut W) -> io::Result<()> {
    let currency = config.primary_currency();

    'menu: loop {
        writeln!(output, "{SEPARATOR}")?;
        writeln!(output, "Enter the number of the command you want to execute (e.g., 1) or 0 to exit:")?;
        print_commands(output)?;
        output.flush()?;

        let command = loop {
            let Some(line) = read_command(&mut input)? else {
                break 'menu;
            };

            match line.parse::<Command>() {
                Ok(command) => break command,
                Err(error) => {
                    writeln!(output, "{error}")?;
                    output.flush()?;
                }
            }
        };

        match command {
            Command::Exit => break 'menu,
            Command::Report(kind) => {
                let report = timed(kind.name(), || kind.run(ledger.transactions()));
                report.write_to(output, currency)?;
            }
        }
    }

    writeln!(output, "Exiting the Transaction Analyzer.")?;
    writeln!(output, "{SEPARATOR}")?;
    writeln!(output, "Thank you for using the Transaction Analyzer!")?;
    output.flush()
}
