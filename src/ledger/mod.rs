mod balance_ledger;
mod errors;

pub use balance_ledger::BalanceLedger;
pub use errors::LedgerError;
