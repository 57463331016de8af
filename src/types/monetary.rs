use crate::types::errors::MonetaryError;
use rust_decimal::Decimal;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Exact base-10 amount used for every balance, sum and average in the ledger.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Monetary(Decimal);

impl Monetary {
    pub fn new() -> Self {
        Monetary(Decimal::ZERO)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_add(rhs.0).map(Monetary)
    }

    /// Adds `rhs` in place, leaving the total untouched on overflow.
    pub fn try_add_assign(&mut self, rhs: Monetary) -> Result<(), MonetaryError> {
        *self = self.checked_add(rhs).ok_or(MonetaryError::Overflow)?;
        Ok(())
    }

    pub fn try_sum<I: IntoIterator<Item = Monetary>>(values: I) -> Result<Monetary, MonetaryError> {
        values.into_iter().try_fold(Monetary::new(), |total, value| {
            total.checked_add(value).ok_or(MonetaryError::Overflow)
        })
    }

    /// Divides by a record count, trimming trailing zeros from the quotient.
    ///
    /// Returns `None` for a zero count.
    pub fn checked_div_count(self, count: usize) -> Option<Monetary> {
        if count == 0 {
            return None;
        }

        self.0.checked_div(Decimal::from(count)).map(|value| Monetary(value.normalize()))
    }

    /// Parses a ledger amount such as `"-50 IQD"`.
    ///
    /// Surrounding whitespace is trimmed and one trailing currency marker is removed when it
    /// matches one of `suffixes` exactly, separated from the number by a single space.
    pub fn parse_with_suffix<S: AsRef<str>>(value: &str, suffixes: &[S]) -> Result<Self, MonetaryError> {
        let value = value.trim();

        let stripped = suffixes.iter()
            .find_map(|suffix| {
                value.strip_suffix(suffix.as_ref())
                    .and_then(|rest| rest.strip_suffix(' '))
            })
            .unwrap_or(value);

        Monetary::from_str(stripped)
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, formatter)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::Empty);
        }

        Decimal::from_str(value)
            .map(Monetary)
            .map_err(|error| MonetaryError::InvalidFormat(format!("'{value}' is not a decimal number: {error}")))
    }
}
