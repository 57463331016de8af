use std::ops::Deref;

use crate::models::{FieldWarning, Transaction};

/// A field warning raised while loading, tagged with the file line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub line: u64,
    pub warning: FieldWarning
}

/// The full, ordered set of transactions read from one ledger file.
///
/// Built once by the loader and only ever read afterwards. Dereferences to
/// `[Transaction]` so it can be handed straight to any report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    warnings: Vec<LoadWarning>
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>, warnings: Vec<LoadWarning>) -> Self {
        Self { transactions, warnings }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }
}

impl Deref for Ledger {
    type Target = [Transaction];

    fn deref(&self) -> &Self::Target {
        &self.transactions
    }
}

impl From<Vec<Transaction>> for Ledger {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self::new(transactions, Vec::new())
    }
}
