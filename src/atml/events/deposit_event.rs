use crate::ids::{AccountId, TerminalId, TransactionId};
use crate::Money;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositEvent {
    pub terminal_id: TerminalId,
    pub transaction_id: TransactionId,
    pub account_id: AccountId,
    pub amount: Money,
    pub balance: Money,
    pub recorded_at: DateTime<Utc>,
}
