mod amount;
mod errors;
#[cfg(test)]
mod tests;

pub use amount::{format_balance, parse_amount, CurrencySymbols};
pub use errors::AmountError;

pub type CustomerId = String;
pub type RowNumber = usize;
