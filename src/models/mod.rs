mod errors;
mod transaction;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

pub use errors::UnknownTransactionKind;
pub use transaction::Transaction;

/// Direction of a ledger movement. Credits increase a balance, debits decrease it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TransactionKind {
    Credit,
    Debit
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Credit => "CREDIT",
            TransactionKind::Debit => "DEBIT"
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = UnknownTransactionKind;

    /// Matching is case-insensitive; the rejected value is reported upper-cased.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.to_uppercase();

        match normalized.as_str() {
            "CREDIT" => Ok(TransactionKind::Credit),
            "DEBIT" => Ok(TransactionKind::Debit),
            _ => Err(UnknownTransactionKind(normalized))
        }
    }
}
