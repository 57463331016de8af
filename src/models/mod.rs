mod errors;
mod parser;
#[cfg(test)]
mod tests;
mod transaction;

pub use errors::RecordError;
pub use parser::{FieldWarning, ParsedRecord, ParserConfig, DEFAULT_CURRENCY};
pub use transaction::Transaction;

#[cfg(test)]
pub use parser::AmountField;
#[cfg(test)]
pub use transaction::MONEY_BOX_TRANSFER;
