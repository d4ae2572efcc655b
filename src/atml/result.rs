use crate::BankError;

/// Convenience type to make error mapping cleaner
pub type Result<T = ()> = anyhow::Result<T>;

/// Typed outcome of every ledger, bank and terminal operation
pub type BankResult<T = ()> = std::result::Result<T, BankError>;
