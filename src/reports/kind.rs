use std::str::FromStr;

use crate::reports::CommandError;

/// The closed set of reports the analyzer can produce, numbered as in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    TransactionTypes,
    TopTransactionTypes,
    Counterparties,
    TopCounterparties,
    RevenueAndExpenditure,
    AverageTransactionSize,
    TotalAmountByType,
    Listing,
    SpendingHabits,
    VendorLoyaltyByAmount,
    VendorLoyaltyByFrequency
}

impl ReportKind {
    pub const ALL: [ReportKind; 11] = [
        ReportKind::TransactionTypes,
        ReportKind::TopTransactionTypes,
        ReportKind::Counterparties,
        ReportKind::TopCounterparties,
        ReportKind::RevenueAndExpenditure,
        ReportKind::AverageTransactionSize,
        ReportKind::TotalAmountByType,
        ReportKind::Listing,
        ReportKind::SpendingHabits,
        ReportKind::VendorLoyaltyByAmount,
        ReportKind::VendorLoyaltyByFrequency
    ];

    pub fn number(self) -> u8 {
        match self {
            ReportKind::TransactionTypes => 1,
            ReportKind::TopTransactionTypes => 2,
            ReportKind::Counterparties => 3,
            ReportKind::TopCounterparties => 4,
            ReportKind::RevenueAndExpenditure => 5,
            ReportKind::AverageTransactionSize => 6,
            ReportKind::TotalAmountByType => 7,
            ReportKind::Listing => 8,
            ReportKind::SpendingHabits => 9,
            ReportKind::VendorLoyaltyByAmount => 10,
            ReportKind::VendorLoyaltyByFrequency => 11
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.number() == number)
    }

    /// Menu caption.
    pub fn title(self) -> &'static str {
        match self {
            ReportKind::TransactionTypes => "Analyze transaction types",
            ReportKind::TopTransactionTypes => "Most common transaction types",
            ReportKind::Counterparties => "Analyze counterparties",
            ReportKind::TopCounterparties => "Most common counterparties",
            ReportKind::RevenueAndExpenditure => "Calculate total revenue and expenditure",
            ReportKind::AverageTransactionSize => "Calculate average transaction size",
            ReportKind::TotalAmountByType => "Sort transaction types by total amount",
            ReportKind::Listing => "Show all transactions",
            ReportKind::SpendingHabits => "Analyze spending habits",
            ReportKind::VendorLoyaltyByAmount => "Analyze vendor loyalty by total amount",
            ReportKind::VendorLoyaltyByFrequency => "Analyze vendor loyalty by frequency"
        }
    }

    /// Short name used in timing logs.
    pub fn name(self) -> &'static str {
        match self {
            ReportKind::TransactionTypes => "transaction_type_frequency",
            ReportKind::TopTransactionTypes => "top_transaction_types",
            ReportKind::Counterparties => "counterparty_frequency",
            ReportKind::TopCounterparties => "top_counterparties",
            ReportKind::RevenueAndExpenditure => "revenue_and_expenditure",
            ReportKind::AverageTransactionSize => "average_transaction_size",
            ReportKind::TotalAmountByType => "total_amount_by_type",
            ReportKind::Listing => "listing",
            ReportKind::SpendingHabits => "spending_habits",
            ReportKind::VendorLoyaltyByAmount => "vendor_loyalty_by_amount",
            ReportKind::VendorLoyaltyByFrequency => "vendor_loyalty_by_frequency"
        }
    }
}

/// One line of menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Report(ReportKind),
    Exit
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        match value.parse::<u8>() {
            Ok(0) => Ok(Command::Exit),
            Ok(number) => ReportKind::from_number(number)
                .map(Command::Report)
                .ok_or_else(|| CommandError::Unrecognized(value.to_string())),
            Err(_) => Err(CommandError::Unrecognized(value.to_string()))
        }
    }
}

/// A `--report` argument: a single report number or every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSelection {
    All,
    One(ReportKind)
}

impl ReportSelection {
    pub fn kinds(self) -> Vec<ReportKind> {
        match self {
            ReportSelection::All => ReportKind::ALL.to_vec(),
            ReportSelection::One(kind) => vec![kind]
        }
    }
}

impl FromStr for ReportSelection {
    type Err = CommandError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.eq_ignore_ascii_case("all") {
            return Ok(ReportSelection::All);
        }

        value.parse::<u8>().ok()
            .and_then(ReportKind::from_number)
            .map(ReportSelection::One)
            .ok_or_else(|| CommandError::UnrecognizedReport(value.to_string()))
    }
}
