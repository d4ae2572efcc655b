use crate::ids::AccountId;
use crate::models::{credit, debit, Account};
use crate::{Bank, BankError, BankResult, Money};

use std::sync::Arc;
use std::time::Instant;

use parking_lot::MutexGuard;

/// Outcome of a completed transfer, as seen from the paying side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: Money,
    /// Balance of the paying account once the transfer completed
    pub from_balance: Money,
}

/// Moves `amount` from `source` to the account `to_id` held by `counterparty`.
///
/// Every check happens before either balance is touched: the recipient is resolved first,
/// then both accounts are locked and the debit and credit are computed against the locked
/// balances. Only when both legs are known to succeed are the new balances written, while
/// both locks are still held, so no reader ever observes money in flight.
///
/// Locks are always taken in ascending `(AccountId, address)` order so two transfers running
/// in opposite directions between the same pair of accounts cannot deadlock.
pub(crate) fn execute(
    source: &Arc<Account>,
    to_id: &AccountId,
    amount: Money,
    counterparty: &Bank,
    deadline: Option<Instant>,
) -> BankResult<TransferReceipt> {
    amount.require_positive()?;

    let destination = counterparty
        .lookup(to_id)
        .ok_or_else(|| BankError::RecipientNotFound(to_id.clone()))?;

    log::debug!(
        "Resolved recipient {} at {} for transfer from {}",
        destination.id(),
        counterparty.name(),
        source.id()
    );

    let from_balance = if Arc::ptr_eq(source, &destination) {
        let mut balance = acquire(source, deadline)?;

        let mut debited = *balance;
        debit(source.id(), &mut debited, amount)?;
        credit(&mut debited, amount)?;

        *balance = debited;
        debited
    } else {
        let (mut from_guard, mut to_guard) = lock_pair(source, &destination, deadline)?;

        let mut debited = *from_guard;
        debit(source.id(), &mut debited, amount)?;

        let mut credited = *to_guard;
        credit(&mut credited, amount)?;

        *from_guard = debited;
        *to_guard = credited;
        debited
    };

    return Ok(TransferReceipt {
        from: source.id().clone(),
        to: destination.id().clone(),
        amount,
        from_balance,
    });
}

fn lock_pair<'a>(
    source: &'a Account,
    destination: &'a Account,
    deadline: Option<Instant>,
) -> BankResult<(MutexGuard<'a, Money>, MutexGuard<'a, Money>)> {
    if lock_key(source) < lock_key(destination) {
        let from_guard = acquire(source, deadline)?;
        let to_guard = acquire(destination, deadline)?;

        return Ok((from_guard, to_guard));
    }

    let to_guard = acquire(destination, deadline)?;
    let from_guard = acquire(source, deadline)?;

    return Ok((from_guard, to_guard));
}

/// Total order over accounts; the address separates equal ids held by different banks
fn lock_key(account: &Account) -> (&AccountId, usize) {
    return (account.id(), account as *const Account as usize);
}

fn acquire(account: &Account, deadline: Option<Instant>) -> BankResult<MutexGuard<'_, Money>> {
    return match deadline {
        None => Ok(account.lock()),
        Some(deadline) => account
            .try_lock_until(deadline)
            .ok_or(BankError::DeadlineExceeded),
    };
}
