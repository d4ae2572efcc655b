use crate::ids::{AccountId, TerminalId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEvent {
    pub terminal_id: TerminalId,
    pub account_id: AccountId,
    pub display_name: String,
}
