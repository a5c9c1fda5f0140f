use crate::types::CustomerId;
use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum LedgerError {
    #[error("Balance for customer [{customer_id}] would overflow")]
    Overflow {
        customer_id: CustomerId
    }
}
