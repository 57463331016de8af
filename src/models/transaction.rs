use chrono::NaiveDateTime;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::types::{Monetary, TransactionId};

/// Transaction type marking a move between the holder's own money boxes.
///
/// These are not economic activity and are left out of every revenue, expenditure and spending
/// report.
pub const MONEY_BOX_TRANSFER: &str = "MONEY_BOX_TRANSFER";

/// A single parsed row of the ledger.
///
/// Values are fixed once parsed; every report reads them through the accessors below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: TransactionId,
    counterparty: String,
    /// Non-negative values are inflows, negative values are outflows.
    amount: Monetary,
    fee: Monetary,
    transaction_type: String,
    timestamp: NaiveDateTime
}

impl Transaction {
    pub fn new(
        id: impl Into<TransactionId>,
        counterparty: impl Into<String>,
        amount: Monetary,
        fee: Monetary,
        transaction_type: impl Into<String>,
        timestamp: NaiveDateTime
    ) -> Self {
        Self {
            id: id.into(),
            counterparty: counterparty.into(),
            amount,
            fee,
            transaction_type: transaction_type.into(),
            timestamp
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn counterparty(&self) -> &str {
        &self.counterparty
    }

    pub fn amount(&self) -> Monetary {
        self.amount
    }

    pub fn fee(&self) -> Monetary {
        self.fee
    }

    pub fn transaction_type(&self) -> &str {
        &self.transaction_type
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn is_internal_transfer(&self) -> bool {
        self.transaction_type == MONEY_BOX_TRANSFER
    }

    /// Zero counts as revenue, never as spending.
    pub fn is_spending(&self) -> bool {
        self.amount.is_negative()
    }
}

impl Display for Transaction {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "ID: {}, Counterparty: {}, Amount: {}, Fee: {}, Type: {}, Timestamp: {}",
            self.id,
            self.counterparty,
            self.amount(),
            self.fee(),
            self.transaction_type,
            self.timestamp.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
