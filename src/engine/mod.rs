mod errors;
mod instrument;
mod loader;
mod runner;

pub use errors::LoadError;
pub use instrument::timed;
pub use loader::load_ledger_async;
pub use runner::run_concurrently;
