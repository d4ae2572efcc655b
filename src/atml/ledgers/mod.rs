mod indexed_ledger;
mod list_ledger;

pub use indexed_ledger::IndexedLedger;
pub use list_ledger::ListLedger;

use crate::ids::AccountId;
use crate::models::Account;
use crate::BankResult;

use std::{fmt, str::FromStr, sync::Arc};

use serde::Deserialize;

use thiserror::Error;

/// Authoritative mapping from account identifier to account within one bank.
///
/// Implementations differ only in how they store the mapping; every observable outcome of
/// `register`, `lookup` and `accounts` must be the same whichever one backs a bank.
pub trait Ledger: Send + Sync + fmt::Debug {
    fn lookup(&self, id: &AccountId) -> Option<Arc<Account>>;

    fn register(&self, account: Account) -> BankResult<Arc<Account>>;

    /// Snapshot of every registered account, in no particular order
    fn accounts(&self) -> Vec<Arc<Account>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown ledger backend: {0}")]
pub struct UnknownBackend(pub String);

/// Selects which ledger implementation a bank is built on
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    List,
    #[default]
    Indexed,
}

impl Backend {
    pub fn build(self) -> Box<dyn Ledger> {
        return match self {
            Backend::List => Box::new(ListLedger::new()),
            Backend::Indexed => Box::new(IndexedLedger::new()),
        };
    }
}

impl FromStr for Backend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        return match s {
            "list" => Ok(Backend::List),
            "indexed" => Ok(Backend::Indexed),
            other => Err(UnknownBackend(other.to_string())),
        };
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Backend::List => write!(f, "list"),
            Backend::Indexed => write!(f, "indexed"),
        };
    }
}
