use crate::ids::{AccountId, TerminalId, TransactionId};
use crate::Money;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferEvent {
    pub terminal_id: TerminalId,
    pub transaction_id: TransactionId,
    pub from: AccountId,
    pub to: AccountId,
    /// Name of the bank holding the recipient account
    pub counterparty: String,
    pub amount: Money,
    /// Balance left in the paying account
    pub balance: Money,
    pub recorded_at: DateTime<Utc>,
}
