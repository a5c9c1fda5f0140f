use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
#[error("Transaction type [{0}] is not one of CREDIT or DEBIT")]
pub struct UnknownTransactionKind(pub String);
