use crate::ids::{AccountId, TerminalId};
use crate::{Money, MoneyError};

use thiserror::Error;

/// Every way a ledger, bank or terminal operation can be turned down.
///
/// All variants except [`BankError::Precondition`] and [`BankError::ForeignAccount`] are
/// expected business outcomes which the caller is meant to handle. Those two mark programming
/// errors, such as a zero amount or a source account held by another bank, and are never
/// produced by correct usage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("Account already registered: {0}")]
    DuplicateAccount(AccountId),

    #[error("Authorization denied for card: {0}")]
    AuthorizationDenied(AccountId),

    #[error("No active session on {0}")]
    NoActiveSession(TerminalId),

    #[error("A card is already inserted in {0}")]
    SessionInProgress(TerminalId),

    #[error("Insufficient funds in account {account}: requested {requested}, available {available}")]
    InsufficientFunds {
        account: AccountId,
        requested: Money,
        available: Money,
    },

    #[error("Recipient not found: {0}")]
    RecipientNotFound(AccountId),

    #[error("{0} is out of service")]
    OutOfService(TerminalId),

    #[error("Account {account} is not held by bank {bank}")]
    ForeignAccount { account: AccountId, bank: String },

    #[error("Deadline exceeded before the accounts could be locked")]
    DeadlineExceeded,

    #[error("Precondition violated: {0}")]
    Precondition(#[from] MoneyError),
}

impl BankError {
    pub fn is_precondition_violation(&self) -> bool {
        return matches!(
            self,
            BankError::Precondition(_) | BankError::ForeignAccount { .. }
        );
    }
}
