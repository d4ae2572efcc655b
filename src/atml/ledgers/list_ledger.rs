use super::Ledger;

use crate::ids::AccountId;
use crate::models::Account;
use crate::{BankError, BankResult};

use std::sync::Arc;

use parking_lot::RwLock;

/// Ledger kept as a plain list, resolving accounts by linear scan
#[derive(Debug, Default)]
pub struct ListLedger {
    accounts: RwLock<Vec<Arc<Account>>>,
}

impl ListLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ledger for ListLedger {
    fn lookup(&self, id: &AccountId) -> Option<Arc<Account>> {
        return self
            .accounts
            .read()
            .iter()
            .find(|account| account.id() == id)
            .cloned();
    }

    fn register(&self, account: Account) -> BankResult<Arc<Account>> {
        let mut accounts = self.accounts.write();

        if accounts.iter().any(|existing| existing.id() == account.id()) {
            Err(BankError::DuplicateAccount(account.id().clone()))?
        }

        let account = Arc::new(account);
        accounts.push(Arc::clone(&account));

        return Ok(account);
    }

    fn accounts(&self) -> Vec<Arc<Account>> {
        return self.accounts.read().clone();
    }

    fn len(&self) -> usize {
        return self.accounts.read().len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Money;

    const SOME_BALANCE: Money = Money(10000);

    fn build_account(id: &str) -> Account {
        Account::open(AccountId::from(id), "Some Client", SOME_BALANCE).unwrap()
    }

    #[test]
    fn register_and_lookup() {
        let ledger = ListLedger::new();

        assert!(ledger.is_empty());
        assert!(ledger.lookup(&AccountId::from("P1")).is_none());

        let registered = ledger.register(build_account("P1")).unwrap();
        ledger.register(build_account("P2")).unwrap();

        let found = ledger.lookup(&AccountId::from("P1")).unwrap();

        assert!(Arc::ptr_eq(&registered, &found));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn fail_to_register_duplicate() {
        let ledger = ListLedger::new();

        ledger.register(build_account("P1")).unwrap();

        let err = ledger.register(build_account("P1")).unwrap_err();

        assert_eq!(err, BankError::DuplicateAccount(AccountId::from("P1")));
        assert_eq!(ledger.len(), 1);
    }
}
