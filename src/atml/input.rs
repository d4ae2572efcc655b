use crate::ids::{AccountId, TerminalId};
use crate::ledgers::Backend;
use crate::Money;
use crate::Result;

use serde::Deserialize;

use thiserror::Error;

/// One client of one bank, as listed in a roster file
#[derive(Deserialize, Debug, Clone)]
pub struct RosterRecord {
    pub bank: String,
    pub backend: Backend,
    pub account: String,
    pub name: String,
    pub balance: String,
}

/// One terminal operation, as listed in a script file
#[derive(Deserialize, Debug, Clone)]
pub struct ScriptRecord {
    pub terminal: TerminalId,
    pub bank: String,
    pub op: ScriptOp,
    pub account: Option<String>,
    pub amount: Option<String>,
    pub counterparty: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScriptOp {
    Insert,
    Remove,
    Withdraw,
    Deposit,
    Transfer,
    Fault,
    Restore,
}

/// Typed terminal command, forcing correct handling through the type-system
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    InsertCard(AccountId),
    RemoveCard,
    Withdraw(Money),
    Deposit(Money),
    Transfer {
        to: AccountId,
        amount: Money,
        counterparty: String,
    },
    ReportFault,
    Restore,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input record: account value missing: {0:?}")]
    NoAccount(ScriptRecord),

    #[error("Error parsing input record: amount value missing: {0:?}")]
    NoAmount(ScriptRecord),

    #[error("Error parsing input record: negative amount values not supported: {0}")]
    NegativeAmount(String),
}

impl RosterRecord {
    pub fn parse_opening_balance(&self) -> Result<Money> {
        return parse_amount(&self.balance);
    }
}

impl ScriptRecord {
    pub fn parse_command(self) -> Result<Command> {
        let command = match self.op {
            ScriptOp::Insert => Command::InsertCard(self.parse_account()?),
            ScriptOp::Remove => Command::RemoveCard,
            ScriptOp::Withdraw => Command::Withdraw(self.parse_amount()?),
            ScriptOp::Deposit => Command::Deposit(self.parse_amount()?),
            ScriptOp::Transfer => Command::Transfer {
                to: self.parse_account()?,
                amount: self.parse_amount()?,
                counterparty: self
                    .counterparty
                    .clone()
                    .unwrap_or_else(|| self.bank.clone()),
            },
            ScriptOp::Fault => Command::ReportFault,
            ScriptOp::Restore => Command::Restore,
        };

        Ok(command)
    }

    fn parse_account(&self) -> Result<AccountId> {
        let account = self
            .account
            .clone()
            .ok_or_else(|| InputParseError::NoAccount(self.clone()))?;

        return Ok(AccountId::from(account));
    }

    fn parse_amount(&self) -> Result<Money> {
        let amount = self
            .amount
            .as_deref()
            .ok_or_else(|| InputParseError::NoAmount(self.clone()))?;

        return parse_amount(amount);
    }
}

fn parse_amount(amount: &str) -> Result<Money> {
    let money = Money::parse(amount)?;

    if money.is_negative() {
        Err(InputParseError::NegativeAmount(amount.to_string()))?
    }

    return Ok(money);
}
