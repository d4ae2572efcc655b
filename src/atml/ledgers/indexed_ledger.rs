use super::Ledger;

use crate::ids::AccountId;
use crate::models::Account;
use crate::{BankError, BankResult};

use std::collections::{hash_map::Entry, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;

/// Ledger keyed directly by account identifier
#[derive(Debug, Default)]
pub struct IndexedLedger {
    accounts: RwLock<HashMap<AccountId, Arc<Account>>>,
}

impl IndexedLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ledger for IndexedLedger {
    fn lookup(&self, id: &AccountId) -> Option<Arc<Account>> {
        return self.accounts.read().get(id).cloned();
    }

    fn register(&self, account: Account) -> BankResult<Arc<Account>> {
        let mut accounts = self.accounts.write();

        let entry = match accounts.entry(account.id().clone()) {
            Entry::Occupied(entry) => Err(BankError::DuplicateAccount(entry.key().clone()))?,
            Entry::Vacant(entry) => entry,
        };

        let account = Arc::new(account);
        entry.insert(Arc::clone(&account));

        return Ok(account);
    }

    fn accounts(&self) -> Vec<Arc<Account>> {
        return self.accounts.read().values().cloned().collect();
    }

    fn len(&self) -> usize {
        return self.accounts.read().len();
    }
}
