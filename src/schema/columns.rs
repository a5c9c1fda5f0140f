use csv::StringRecord;

use crate::schema::errors::SchemaError;
use crate::schema::{AMOUNT_COLUMN, CUSTOMER_ID_COLUMN, REQUIRED_COLUMNS, TRANSACTION_TYPE_COLUMN};

/// Zero-based positions of the three columns the aggregator reads.
///
/// Names are matched exactly and case-sensitively. Extra columns are ignored and
/// a duplicated name resolves to its first occurrence, so the three indices are
/// always distinct.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ColumnIndices {
    pub customer_id: usize,
    pub amount: usize,
    pub transaction_type: usize
}

impl ColumnIndices {
    pub fn resolve(header: &StringRecord) -> Result<Self, SchemaError> {
        let position = |name: &str| header.iter().position(|column| column == name);

        match (
            position(CUSTOMER_ID_COLUMN),
            position(AMOUNT_COLUMN),
            position(TRANSACTION_TYPE_COLUMN)
        ) {
            (Some(customer_id), Some(amount), Some(transaction_type)) => Ok(Self {
                customer_id,
                amount,
                transaction_type
            }),
            _ => Err(SchemaError::MissingColumns {
                missing: REQUIRED_COLUMNS
                    .iter()
                    .filter(|name| position(**name).is_none())
                    .map(|name| name.to_string())
                    .collect()
            })
        }
    }

    /// The minimum number of fields a record needs for every index to be readable.
    pub fn required_width(&self) -> usize {
        self.customer_id.max(self.amount).max(self.transaction_type) + 1
    }
}
