use crate::ids::AccountId;
use crate::ledgers::{Backend, Ledger};
use crate::models::Account;
use crate::transfer::{self, TransferReceipt};
use crate::{BankError, BankResult, Money};

use std::sync::Arc;
use std::time::Instant;

use serde::Deserialize;

/// Settings a bank is built from
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BankConfig {
    pub name: String,

    #[serde(default)]
    pub backend: Backend,
}

/// A bank as terminals see it: authorization, lookup and transfer over a ledger it owns.
///
/// Callers never learn which [`Backend`] the ledger was built with.
#[derive(Debug)]
pub struct Bank {
    name: String,
    ledger: Box<dyn Ledger>,
}

impl Bank {
    pub fn new(config: BankConfig) -> Self {
        log::debug!("Opening bank {} on {} ledger", config.name, config.backend);

        return Self {
            name: config.name,
            ledger: config.backend.build(),
        };
    }

    pub fn with_backend(name: impl Into<String>, backend: Backend) -> Self {
        return Self::new(BankConfig {
            name: name.into(),
            backend,
        });
    }

    pub fn name(&self) -> &str {
        return &self.name;
    }

    /// Registers a new client with a non-negative opening balance
    pub fn register(
        &self,
        id: AccountId,
        display_name: impl Into<String>,
        opening_balance: Money,
    ) -> BankResult<Arc<Account>> {
        let account = Account::open(id, display_name, opening_balance)?;
        let account = self.ledger.register(account)?;

        log::debug!("{}: registered account {}", self.name, account.id());

        return Ok(account);
    }

    /// Resolves a card to its account. `None` means authorization is denied.
    pub fn authorize(&self, id: &AccountId) -> Option<Arc<Account>> {
        let account = self.ledger.lookup(id);

        match &account {
            Some(account) => log::info!(
                "{}: client {} authorized on account {}",
                self.name,
                account.display_name(),
                account.id()
            ),
            None => log::info!("{}: authorization denied for card {id}", self.name),
        }

        return account;
    }

    pub fn lookup(&self, id: &AccountId) -> Option<Arc<Account>> {
        return self.ledger.lookup(id);
    }

    /// Moves `amount` from `from`, an account of this bank, to `to_id` at `counterparty`.
    ///
    /// `counterparty` may be this very bank; the same debit then credit sequence runs either
    /// way. A failed transfer leaves both balances untouched. Handing in an account this bank
    /// does not hold is rejected with `ForeignAccount` before anything is locked.
    pub fn transfer(
        &self,
        from: &Arc<Account>,
        to_id: &AccountId,
        amount: Money,
        counterparty: &Bank,
    ) -> BankResult<TransferReceipt> {
        self.check_holds(from)?;

        let receipt = transfer::execute(from, to_id, amount, counterparty, None)?;

        self.log_transfer(&receipt, counterparty);

        return Ok(receipt);
    }

    /// Same as [`Bank::transfer`], giving up with `DeadlineExceeded` if the accounts cannot
    /// be locked before `deadline`
    pub fn transfer_until(
        &self,
        from: &Arc<Account>,
        to_id: &AccountId,
        amount: Money,
        counterparty: &Bank,
        deadline: Instant,
    ) -> BankResult<TransferReceipt> {
        self.check_holds(from)?;

        let receipt = transfer::execute(from, to_id, amount, counterparty, Some(deadline))?;

        self.log_transfer(&receipt, counterparty);

        return Ok(receipt);
    }

    pub fn accounts(&self) -> Vec<Arc<Account>> {
        return self.ledger.accounts();
    }

    pub fn len(&self) -> usize {
        return self.ledger.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.ledger.is_empty();
    }

    fn check_holds(&self, account: &Arc<Account>) -> BankResult {
        let held = self
            .ledger
            .lookup(account.id())
            .map_or(false, |held| Arc::ptr_eq(&held, account));

        if !held {
            Err(BankError::ForeignAccount {
                account: account.id().clone(),
                bank: self.name.clone(),
            })?
        }

        return Ok(());
    }

    fn log_transfer(&self, receipt: &TransferReceipt, counterparty: &Bank) {
        log::info!(
            "{}: transferred {} from {} to {} at {}",
            self.name,
            receipt.amount,
            receipt.from,
            receipt.to,
            counterparty.name
        );
    }
}
