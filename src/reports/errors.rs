use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Invalid command '{0}'. Please enter a valid command number (0-11)")]
    Unrecognized(String),
    #[error("Invalid report '{0}'. Expected a report number (1-11) or 'all'")]
    UnrecognizedReport(String)
}
