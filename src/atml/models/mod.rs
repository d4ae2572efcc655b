mod account;

pub use account::Account;

pub(crate) use account::{credit, debit};
