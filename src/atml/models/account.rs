use crate::ids::AccountId;
use crate::{BankError, BankResult, Money, MoneyError};

use std::time::Instant;

use parking_lot::{Mutex, MutexGuard};

/// A client's entry in a bank's ledger.
///
/// The balance sits behind its own lock, so every deposit or withdrawal is a single critical
/// section and two concurrent withdrawals can never both pass the funds check.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    display_name: String,
    balance: Mutex<Money>,
}

impl Account {
    pub fn open(
        id: AccountId,
        display_name: impl Into<String>,
        opening_balance: Money,
    ) -> BankResult<Self> {
        if opening_balance.is_negative() {
            Err(MoneyError::Negative(opening_balance))?
        }

        return Ok(Self {
            id,
            display_name: display_name.into(),
            balance: Mutex::new(opening_balance),
        });
    }

    pub fn id(&self) -> &AccountId {
        return &self.id;
    }

    pub fn display_name(&self) -> &str {
        return &self.display_name;
    }

    pub fn balance(&self) -> Money {
        return *self.balance.lock();
    }

    /// Returns the balance after the deposit
    pub fn deposit(&self, amount: Money) -> BankResult<Money> {
        amount.require_positive()?;

        let mut balance = self.balance.lock();
        credit(&mut balance, amount)?;

        log::debug!("Deposited {amount} into {}, balance {}", self.id, *balance);

        return Ok(*balance);
    }

    /// Returns the balance after the withdrawal
    pub fn withdraw(&self, amount: Money) -> BankResult<Money> {
        amount.require_positive()?;

        let mut balance = self.balance.lock();
        debit(&self.id, &mut balance, amount)?;

        log::debug!("Withdrew {amount} from {}, balance {}", self.id, *balance);

        return Ok(*balance);
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Money> {
        return self.balance.lock();
    }

    pub(crate) fn try_lock_until(&self, deadline: Instant) -> Option<MutexGuard<'_, Money>> {
        return self.balance.try_lock_until(deadline);
    }
}

/// Removes `amount` from `balance`, refusing to take it below zero.
pub(crate) fn debit(account: &AccountId, balance: &mut Money, amount: Money) -> BankResult {
    if amount > *balance {
        Err(BankError::InsufficientFunds {
            account: account.clone(),
            requested: amount,
            available: *balance,
        })?
    }

    balance.sub(&amount)?;

    return Ok(());
}

pub(crate) fn credit(balance: &mut Money, amount: Money) -> BankResult {
    balance.add(&amount)?;

    return Ok(());
}
