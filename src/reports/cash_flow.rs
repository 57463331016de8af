use crate::models::Transaction;
use crate::reports::grouping::Grouped;
use crate::reports::{economic, Ranking};
use crate::types::{Monetary, MonetaryError};

/// Inflow and outflow totals. `expenditure` keeps its sign and is never positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CashFlow {
    pub revenue: Monetary,
    pub expenditure: Monetary
}

pub fn revenue_and_expenditure(transactions: &[Transaction]) -> Result<CashFlow, MonetaryError> {
    let mut cash_flow = CashFlow::default();

    for transaction in economic(transactions) {
        if transaction.is_spending() {
            cash_flow.expenditure.try_add_assign(transaction.amount())?;
        } else {
            cash_flow.revenue.try_add_assign(transaction.amount())?;
        }
    }

    Ok(cash_flow)
}

/// Mean amount over every transaction, money box transfers included.
///
/// Returns `Ok(None)` when there is nothing to average.
pub fn average_transaction_size(transactions: &[Transaction]) -> Result<Option<Monetary>, MonetaryError> {
    let total = Monetary::try_sum(transactions.iter().map(Transaction::amount))?;
    Ok(total.checked_div_count(transactions.len()))
}

pub fn total_amount_by_type(transactions: &[Transaction]) -> Result<Ranking<Monetary>, MonetaryError> {
    let mut totals = Grouped::<Monetary>::new();

    for transaction in economic(transactions) {
        totals.entry(transaction.transaction_type()).try_add_assign(transaction.amount())?;
    }

    Ok(totals.into_ranked())
}

/// Every transaction in file order.
pub fn listing(transactions: &[Transaction]) -> Vec<String> {
    transactions.iter().map(Transaction::to_string).collect()
}
