use csv::StringRecord;

use crate::models::{Transaction, TransactionKind, UnknownTransactionKind};
use crate::schema::ColumnIndices;
use crate::types::{parse_amount, CurrencySymbols, RowNumber};
use crate::validation::errors::RowError;

/// Turns raw records into [`Transaction`]s using resolved column positions.
///
/// Checks run in a fixed order and stop at the first failure: record width,
/// amount, transaction type. The customer id is taken verbatim, so an empty id
/// is a valid key.
#[derive(Debug, Clone)]
pub struct RecordValidator {
    columns: ColumnIndices,
    currency_symbols: CurrencySymbols
}

impl RecordValidator {
    pub fn new(columns: ColumnIndices, currency_symbols: CurrencySymbols) -> Self {
        Self {
            columns,
            currency_symbols
        }
    }

    /// Validates one data row. `row` is the 1-based data row number used in diagnostics.
    pub fn validate(&self, row: RowNumber, record: &StringRecord) -> Result<Transaction, RowError> {
        let required = self.columns.required_width();

        if record.len() < required {
            return Err(RowError::InsufficientColumns {
                row,
                found: record.len(),
                required
            });
        }

        let field = |index: usize| record.get(index).unwrap_or_default();

        let raw_amount = field(self.columns.amount);
        let amount = parse_amount(raw_amount, &self.currency_symbols).map_err(|reason| RowError::InvalidAmount {
            row,
            value: raw_amount.to_string(),
            reason
        })?;

        let kind: TransactionKind = field(self.columns.transaction_type)
            .parse()
            .map_err(|error: UnknownTransactionKind| RowError::InvalidTransactionType {
                row,
                value: error.0
            })?;

        Ok(Transaction {
            customer_id: field(self.columns.customer_id).to_string(),
            amount,
            kind
        })
    }
}
