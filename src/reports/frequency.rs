use crate::models::Transaction;
use crate::reports::grouping::Grouped;
use crate::reports::Ranking;

/// Size of the "most common" reports.
pub const TOP_N: usize = 5;

fn count_by<'a>(transactions: impl Iterator<Item = &'a Transaction>, key: fn(&Transaction) -> &str) -> Ranking<usize> {
    let mut counts = Grouped::new();

    for transaction in transactions {
        *counts.entry(key(transaction)) += 1;
    }

    counts.into_ranked()
}

pub fn transaction_type_frequency(transactions: &[Transaction]) -> Ranking<usize> {
    count_by(transactions.iter(), Transaction::transaction_type)
}

pub fn top_transaction_types(transactions: &[Transaction]) -> Ranking<usize> {
    let mut ranking = transaction_type_frequency(transactions);
    ranking.truncate(TOP_N);
    ranking
}

pub fn counterparty_frequency(transactions: &[Transaction]) -> Ranking<usize> {
    count_by(transactions.iter(), Transaction::counterparty)
}

pub fn top_counterparties(transactions: &[Transaction]) -> Ranking<usize> {
    let mut ranking = counterparty_frequency(transactions);
    ranking.truncate(TOP_N);
    ranking
}

pub(crate) fn count_spending_by_counterparty<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> Ranking<usize> {
    count_by(transactions.filter(|transaction| transaction.is_spending()), Transaction::counterparty)
}
