mod account_report;
mod bank;
mod error;
pub mod events;
pub mod ids;
pub mod input;
pub mod ledgers;
pub mod models;
mod money;
mod result;
mod terminal;
mod transfer;

pub use account_report::{build_report, AccountReport};
pub use bank::{Bank, BankConfig};
pub use error::BankError;
pub use money::{Money, MoneyError};
pub use result::{BankResult, Result};
pub use terminal::{Terminal, TerminalCondition, TerminalState};
pub use transfer::TransferReceipt;
