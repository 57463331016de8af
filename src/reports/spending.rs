use crate::models::Transaction;
use crate::reports::frequency::count_spending_by_counterparty;
use crate::reports::grouping::Grouped;
use crate::reports::{economic, Ranking};
use crate::types::{Monetary, MonetaryError};

/// Outflows bucketed by weekday name and by month name.
///
/// Buckets appear in the order they were first seen, not in calendar order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpendingHabits {
    pub by_weekday: Ranking<Monetary>,
    pub by_month: Ranking<Monetary>
}

fn spending(transactions: &[Transaction]) -> impl Iterator<Item = &Transaction> {
    economic(transactions).filter(|transaction| transaction.is_spending())
}

pub fn spending_habits(transactions: &[Transaction]) -> Result<SpendingHabits, MonetaryError> {
    let mut by_weekday = Grouped::<Monetary>::new();
    let mut by_month = Grouped::<Monetary>::new();

    for transaction in spending(transactions) {
        let timestamp = transaction.timestamp();
        by_weekday.entry(&timestamp.format("%A").to_string()).try_add_assign(transaction.amount())?;
        by_month.entry(&timestamp.format("%B").to_string()).try_add_assign(transaction.amount())?;
    }

    Ok(SpendingHabits {
        by_weekday: by_weekday.into_first_seen(),
        by_month: by_month.into_first_seen()
    })
}

/// Total outflow per counterparty, ranked by signed sum (so the smallest spend comes first).
pub fn vendor_loyalty_by_amount(transactions: &[Transaction]) -> Result<Ranking<Monetary>, MonetaryError> {
    let mut totals = Grouped::<Monetary>::new();

    for transaction in spending(transactions) {
        totals.entry(transaction.counterparty()).try_add_assign(transaction.amount())?;
    }

    Ok(totals.into_ranked())
}

pub fn vendor_loyalty_by_frequency(transactions: &[Transaction]) -> Ranking<usize> {
    count_spending_by_counterparty(economic(transactions))
}
