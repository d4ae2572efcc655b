mod account_id;
mod terminal_id;
mod transaction_id;

pub use account_id::AccountId;
pub use terminal_id::TerminalId;
pub use transaction_id::TransactionId;
