use std::time::Instant;

use tracing::{debug, info};

/// Runs `work`, logging when the named operation starts and how long it took.
pub fn timed<T>(operation: &str, work: impl FnOnce() -> T) -> T {
    debug!("{operation} started");

    let timer = Instant::now();
    let result = work();
    let duration = timer.elapsed();

    info!("{operation} took {duration:?}");

    result
}
