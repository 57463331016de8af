//! Aggregations over a loaded ledger.
//!
//! Every function here is a pure fold over `&[Transaction]`: no state is kept between calls, so
//! the same ledger can be reported on repeatedly or from several threads at once.
//!
//! Ranked results use a stable sort by value, descending; ties keep the order in which the group
//! was first seen in the ledger.

mod cash_flow;
mod errors;
mod frequency;
mod grouping;
mod kind;
mod render;
mod spending;

use crate::models::Transaction;

pub use cash_flow::{average_transaction_size, listing, revenue_and_expenditure, total_amount_by_type};
pub use errors::CommandError;
pub use frequency::{counterparty_frequency, top_counterparties, top_transaction_types, transaction_type_frequency};
pub use kind::{Command, ReportKind, ReportSelection};
pub use render::Report;
pub use spending::{spending_habits, vendor_loyalty_by_amount, vendor_loyalty_by_frequency};

/// Ordered `(label, value)` pairs produced by a report.
pub type Ranking<V> = Vec<(String, V)>;

/// Transactions that represent economic activity, i.e. everything except money box transfers.
fn economic(transactions: &[Transaction]) -> impl Iterator<Item = &Transaction> {
    transactions.iter().filter(|transaction| !transaction.is_internal_transfer())
}
