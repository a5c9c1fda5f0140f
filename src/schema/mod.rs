mod columns;
mod errors;
#[cfg(test)]
mod tests;

pub use columns::ColumnIndices;
pub use errors::SchemaError;

pub const CUSTOMER_ID_COLUMN: &str = "customer_id";
pub const AMOUNT_COLUMN: &str = "amount";
pub const TRANSACTION_TYPE_COLUMN: &str = "transaction_type";

pub const REQUIRED_COLUMNS: [&str; 3] = [CUSTOMER_ID_COLUMN, AMOUNT_COLUMN, TRANSACTION_TYPE_COLUMN];
