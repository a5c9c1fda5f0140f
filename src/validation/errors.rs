use crate::types::{AmountError, CustomerId, RowNumber};
use thiserror::Error;

/// Reasons a single data row is skipped. None of these abort a run.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("Record on row [{row}] has {found} columns but at least {required} are required")]
    InsufficientColumns {
        row: RowNumber,
        found: usize,
        required: usize
    },
    #[error("Record on row [{row}] has an amount of [{value}] which cannot be converted to a number")]
    InvalidAmount {
        row: RowNumber,
        value: String,
        #[source]
        reason: AmountError
    },
    #[error("Record on row [{row}] has a transaction type of [{value}] which is not one of DEBIT or CREDIT")]
    InvalidTransactionType {
        row: RowNumber,
        value: String
    },
    #[error("Record on row [{row}] could not be read: {message}")]
    Malformed {
        row: RowNumber,
        message: String
    },
    #[error("Record on row [{row}] would overflow the balance of customer [{customer_id}]")]
    Overflow {
        row: RowNumber,
        customer_id: CustomerId
    }
}

impl RowError {
    pub fn row(&self) -> RowNumber {
        match self {
            Self::InsufficientColumns { row, .. }
            | Self::InvalidAmount { row, .. }
            | Self::InvalidTransactionType { row, .. }
            | Self::Malformed { row, .. }
            | Self::Overflow { row, .. } => *row
        }
    }
}
