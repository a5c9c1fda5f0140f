use crate::ledger::errors::LedgerError;
use crate::models::Transaction;
use crate::types::CustomerId;
use rust_decimal::Decimal;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// Running signed balance per customer for a single run.
///
/// Customers are added lazily at zero the first time a transaction names them
/// and are never removed.
#[derive(Debug, Default)]
pub struct BalanceLedger {
    balances: HashMap<CustomerId, Decimal>
}

impl BalanceLedger {
    /// Credits add to the customer's balance and debits subtract from it.
    ///
    /// # Errors
    /// Returns `LedgerError::Overflow` if the new balance falls outside the decimal
    /// range. The ledger, including whether the customer exists, is left untouched.
    pub fn apply(&mut self, transaction: &Transaction) -> Result<(), LedgerError> {
        let current = self.balances.get(&transaction.customer_id).copied().unwrap_or(Decimal::ZERO);

        let updated = current.checked_add(transaction.signed_amount()).ok_or_else(|| LedgerError::Overflow {
            customer_id: transaction.customer_id.clone()
        })?;

        match self.balances.entry(transaction.customer_id.clone()) {
            Entry::Occupied(mut entry) => {
                entry.insert(updated);
            }
            Entry::Vacant(entry) => {
                debug!("Opening balance for customer [{}]", transaction.customer_id);
                entry.insert(updated);
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }
}

#[cfg(test)]
impl BalanceLedger {
    pub fn new() -> Self {
        Self {
            balances: HashMap::new()
        }
    }

    pub fn balance(&self, customer_id: &str) -> Option<Decimal> {
        self.balances.get(customer_id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

impl IntoIterator for BalanceLedger {
    type Item = (CustomerId, Decimal);
    type IntoIter = std::collections::hash_map::IntoIter<CustomerId, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.balances.into_iter()
    }
}
