use rust_decimal::Decimal;

use crate::models::TransactionKind;
use crate::types::CustomerId;

/// A validated ledger row, ready to be applied to a balance.
///
/// Produced by the record validator and consumed by the balance ledger; it is
/// never stored beyond the row that created it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Transaction {
    /// Opaque customer key, taken verbatim from the input.
    pub customer_id: CustomerId,
    /// Amount as written in the input, which may itself be negative. `kind` decides
    /// whether it is added to or subtracted from the balance.
    pub amount: Decimal,
    pub kind: TransactionKind
}

impl Transaction {
    /// The amount with the direction applied: positive for credits, negative for debits.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Credit => self.amount,
            TransactionKind::Debit => -self.amount
        }
    }
}

#[cfg(test)]
impl Transaction {
    pub fn credit(customer_id: impl Into<CustomerId>, amount: Decimal) -> Self {
        Self {
            customer_id: customer_id.into(),
            amount,
            kind: TransactionKind::Credit
        }
    }

    pub fn debit(customer_id: impl Into<CustomerId>, amount: Decimal) -> Self {
        Self {
            customer_id: customer_id.into(),
            amount,
            kind: TransactionKind::Debit
        }
    }
}
