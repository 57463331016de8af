use std::io;
use std::io::Write;

use crate::models::Transaction;
use crate::reports::{
    average_transaction_size, counterparty_frequency, listing, revenue_and_expenditure, spending_habits,
    top_counterparties, top_transaction_types, total_amount_by_type, transaction_type_frequency,
    vendor_loyalty_by_amount, vendor_loyalty_by_frequency, Ranking, ReportKind
};
use crate::types::{Monetary, MonetaryError};
use tracing::error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Count { label: String, count: usize },
    Amount { label: String, amount: Monetary },
    Text(String)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub heading: Option<String>,
    pub lines: Vec<Line>
}

/// The printable result of running one [`ReportKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub kind: ReportKind,
    pub sections: Vec<Section>
}

impl ReportKind {
    /// Runs the report. A total that no longer fits in a [`Monetary`] replaces the output with a
    /// single explanatory line instead of a wrong figure.
    pub fn run(self, transactions: &[Transaction]) -> Report {
        let sections = self.sections(transactions).unwrap_or_else(|error| {
            error!("Report [{}] could not be computed: {error}", self.name());
            vec![Section {
                heading: None,
                lines: vec![Line::Text(format!("Unable to compute report: {error}"))]
            }]
        });

        Report { kind: self, sections }
    }

    fn sections(self, transactions: &[Transaction]) -> Result<Vec<Section>, MonetaryError> {
        let sections = match self {
            ReportKind::TransactionTypes => {
                vec![counts("Transaction types sorted by frequency:", transaction_type_frequency(transactions))]
            }
            ReportKind::TopTransactionTypes => {
                vec![counts("Top 5 transaction types:", top_transaction_types(transactions))]
            }
            ReportKind::Counterparties => {
                vec![counts("Counterparties sorted by frequency:", counterparty_frequency(transactions))]
            }
            ReportKind::TopCounterparties => {
                vec![counts("Top 5 counterparties:", top_counterparties(transactions))]
            }
            ReportKind::RevenueAndExpenditure => {
                let cash_flow = revenue_and_expenditure(transactions)?;
                vec![Section {
                    heading: None,
                    lines: vec![
                        Line::Amount { label: "Total Revenue".to_string(), amount: cash_flow.revenue },
                        Line::Amount { label: "Total Expenditure".to_string(), amount: cash_flow.expenditure }
                    ]
                }]
            }
            ReportKind::AverageTransactionSize => {
                let line = match average_transaction_size(transactions)? {
                    Some(amount) => Line::Amount { label: "Average Transaction Size".to_string(), amount },
                    None => Line::Text("No transactions to calculate average size.".to_string())
                };
                vec![Section { heading: None, lines: vec![line] }]
            }
            ReportKind::TotalAmountByType => {
                vec![amounts("Transaction types sorted by total amount:", total_amount_by_type(transactions)?)]
            }
            ReportKind::Listing => {
                let mut lines = vec![Line::Text("ID, COUNTERPARTY, AMOUNT, FEE, TRANSACTION TYPE, DATE,TIME".to_string())];
                lines.extend(listing(transactions).into_iter().map(Line::Text));
                vec![Section { heading: Some("All transactions:".to_string()), lines }]
            }
            ReportKind::SpendingHabits => {
                let habits = spending_habits(transactions)?;
                vec![
                    amounts("Spending by Day of the Week:", habits.by_weekday),
                    amounts("Spending by Month:", habits.by_month)
                ]
            }
            ReportKind::VendorLoyaltyByAmount => {
                vec![amounts("Vendor Loyalty by Total Spending:", vendor_loyalty_by_amount(transactions)?)]
            }
            ReportKind::VendorLoyaltyByFrequency => {
                vec![counts("Vendor Loyalty by Frequency:", vendor_loyalty_by_frequency(transactions))]
            }
        };

        Ok(sections)
    }
}

fn counts(heading: &str, ranking: Ranking<usize>) -> Section {
    Section {
        heading: Some(heading.to_string()),
        lines: ranking.into_iter().map(|(label, count)| Line::Count { label, count }).collect()
    }
}

fn amounts(heading: &str, ranking: Ranking<Monetary>) -> Section {
    Section {
        heading: Some(heading.to_string()),
        lines: ranking.into_iter().map(|(label, amount)| Line::Amount { label, amount }).collect()
    }
}

impl Report {
    /// Writes the report as text, appending `currency` after every amount when given.
    pub fn write_to<W: Write>(&self, output: &mut W, currency: Option<&str>) -> io::Result<()> {
        for section in &self.sections {
            if let Some(heading) = &section.heading {
                writeln!(output, "{heading}")?;
            }

            for line in &section.lines {
                match line {
                    Line::Count { label, count } => writeln!(output, "{label}: {count} transactions")?,
                    Line::Amount { label, amount } => match currency {
                        Some(currency) => writeln!(output, "{label}: {amount} {currency}")?,
                        None => writeln!(output, "{label}: {amount}")?
                    },
                    Line::Text(text) => writeln!(output, "{text}")?
                }
            }
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn render(&self, currency: Option<&str>) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer, currency)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
