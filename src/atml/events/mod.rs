mod card_event;
mod deposit_event;
mod transfer_event;
mod withdrawal_event;

pub use card_event::CardEvent;
pub use deposit_event::DepositEvent;
pub use transfer_event::TransferEvent;
pub use withdrawal_event::WithdrawalEvent;

/// Typed record of everything a terminal did, kept in its journal in the order it happened.
///
/// Rendering these for a client (screen, receipt, log) is left to whoever holds the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    CardInserted(CardEvent),
    CardRemoved(CardEvent),
    Withdrawal(WithdrawalEvent),
    Deposit(DepositEvent),
    Transfer(TransferEvent),
}
