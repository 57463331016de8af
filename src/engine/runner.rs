use std::sync::Arc;

use tokio::task::{spawn_blocking, JoinError, JoinHandle};

use crate::engine::timed;
use crate::reports::{Report, ReportKind};
use crate::storage::Ledger;

/// Runs each requested report on its own blocking task over the shared ledger.
///
/// Results come back in the order of `kinds`, whatever order the tasks finish in.
pub async fn run_concurrently(ledger: Arc<Ledger>, kinds: &[ReportKind]) -> Result<Vec<Report>, JoinError> {
    let handles: Vec<JoinHandle<Report>> = kinds.iter()
        .map(|&kind| {
            let ledger = ledger.clone();
            spawn_blocking(move || timed(kind.name(), || kind.run(ledger.transactions())))
        })
        .collect();

    let mut reports = Vec::with_capacity(handles.len());

    for handle in handles {
        reports.push(handle.await?);
    }

    Ok(reports)
}
