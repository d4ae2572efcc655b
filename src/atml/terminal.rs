use crate::events::{CardEvent, DepositEvent, TerminalEvent, TransferEvent, WithdrawalEvent};
use crate::ids::{AccountId, TerminalId, TransactionId};
use crate::models::Account;
use crate::{Bank, BankError, BankResult, Money};

use std::sync::Arc;

use chrono::Utc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalState {
    Idle,
    Authorized,
}

/// Whether the terminal hardware can currently serve clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCondition {
    InService,
    OutOfService,
}

#[derive(Debug)]
enum Session {
    Idle,
    Authorized(Arc<Account>),
}

/// Automated teller bound to a single bank, serving one card at a time.
///
/// Terminal is a finite state-machine with the following structure:
///
/// Idle
/// -> insert_card: Authorized (or AuthorizationDenied, staying Idle)
///
/// Authorized
/// -> withdraw | deposit | transfer_to: Authorized
/// -> remove_card: Idle
///
/// Every operation but `insert_card` fails with `NoActiveSession` while Idle.
///
/// Independently of the session, a terminal reported faulty is `OutOfService` until restored.
/// It then refuses new cards and money operations, but still reports the balance and returns
/// the card so a client is never stuck.
#[derive(Debug)]
pub struct Terminal {
    id: TerminalId,
    location: String,
    bank: Arc<Bank>,
    session: Session,
    condition: TerminalCondition,
    last_transaction_id: TransactionId,
    journal: Vec<TerminalEvent>,
}

impl Terminal {
    pub fn new(id: TerminalId, location: impl Into<String>, bank: Arc<Bank>) -> Self {
        let location = location.into();

        log::debug!("{id}: ready at {location}, serving {}", bank.name());

        return Self {
            id,
            location,
            bank,
            session: Session::Idle,
            condition: TerminalCondition::InService,
            last_transaction_id: TransactionId::default(),
            journal: vec![],
        };
    }

    pub fn id(&self) -> TerminalId {
        return self.id;
    }

    pub fn location(&self) -> &str {
        return &self.location;
    }

    pub fn bank(&self) -> &Arc<Bank> {
        return &self.bank;
    }

    pub fn state(&self) -> TerminalState {
        return match self.session {
            Session::Idle => TerminalState::Idle,
            Session::Authorized(_) => TerminalState::Authorized,
        };
    }

    pub fn current_account(&self) -> Option<&Arc<Account>> {
        return match &self.session {
            Session::Idle => None,
            Session::Authorized(account) => Some(account),
        };
    }

    pub fn condition(&self) -> TerminalCondition {
        return self.condition;
    }

    /// Every event this terminal produced since the journal was last drained, oldest first
    pub fn journal(&self) -> &[TerminalEvent] {
        return &self.journal;
    }

    /// Hands the journal over to the caller, leaving it empty
    pub fn drain_journal(&mut self) -> Vec<TerminalEvent> {
        return std::mem::take(&mut self.journal);
    }

    pub fn report_fault(&mut self) {
        log::warn!("{}: fault reported at {}", self.id, self.location);

        self.condition = TerminalCondition::OutOfService;
    }

    pub fn restore(&mut self) {
        log::info!("{}: back in service at {}", self.id, self.location);

        self.condition = TerminalCondition::InService;
    }

    pub fn insert_card(&mut self, card: &AccountId) -> BankResult<CardEvent> {
        self.check_in_service()?;

        if let Session::Authorized(_) = self.session {
            Err(BankError::SessionInProgress(self.id))?
        }

        let account = self
            .bank
            .authorize(card)
            .ok_or_else(|| BankError::AuthorizationDenied(card.clone()))?;

        let event = CardEvent {
            terminal_id: self.id,
            account_id: account.id().clone(),
            display_name: account.display_name().to_string(),
        };

        self.session = Session::Authorized(account);
        self.journal.push(TerminalEvent::CardInserted(event.clone()));

        return Ok(event);
    }

    pub fn remove_card(&mut self) -> BankResult<CardEvent> {
        let account = self.active_account()?;

        let event = CardEvent {
            terminal_id: self.id,
            account_id: account.id().clone(),
            display_name: account.display_name().to_string(),
        };

        self.session = Session::Idle;
        self.journal.push(TerminalEvent::CardRemoved(event.clone()));

        log::debug!("{}: card {} removed", self.id, event.account_id);

        return Ok(event);
    }

    pub fn balance(&self) -> BankResult<Money> {
        return Ok(self.active_account()?.balance());
    }

    pub fn withdraw(&mut self, amount: Money) -> BankResult<WithdrawalEvent> {
        let account = self.active_account()?;
        self.check_in_service()?;

        let balance = account.withdraw(amount)?;

        let event = WithdrawalEvent {
            terminal_id: self.id,
            transaction_id: self.next_transaction_id(),
            account_id: account.id().clone(),
            amount,
            balance,
            recorded_at: Utc::now(),
        };

        self.journal.push(TerminalEvent::Withdrawal(event.clone()));

        return Ok(event);
    }

    pub fn deposit(&mut self, amount: Money) -> BankResult<DepositEvent> {
        let account = self.active_account()?;
        self.check_in_service()?;

        let balance = account.deposit(amount)?;

        let event = DepositEvent {
            terminal_id: self.id,
            transaction_id: self.next_transaction_id(),
            account_id: account.id().clone(),
            amount,
            balance,
            recorded_at: Utc::now(),
        };

        self.journal.push(TerminalEvent::Deposit(event.clone()));

        return Ok(event);
    }

    /// Transfers from the authorized account to `to` at `counterparty`, which may be the
    /// terminal's own bank
    pub fn transfer_to(
        &mut self,
        to: &AccountId,
        amount: Money,
        counterparty: &Bank,
    ) -> BankResult<TransferEvent> {
        let account = self.active_account()?;
        self.check_in_service()?;

        let receipt = self.bank.transfer(&account, to, amount, counterparty)?;

        let event = TransferEvent {
            terminal_id: self.id,
            transaction_id: self.next_transaction_id(),
            from: receipt.from,
            to: receipt.to,
            counterparty: counterparty.name().to_string(),
            amount: receipt.amount,
            balance: receipt.from_balance,
            recorded_at: Utc::now(),
        };

        self.journal.push(TerminalEvent::Transfer(event.clone()));

        return Ok(event);
    }

    fn active_account(&self) -> BankResult<Arc<Account>> {
        return match &self.session {
            Session::Authorized(account) => Ok(Arc::clone(account)),
            Session::Idle => Err(BankError::NoActiveSession(self.id)),
        };
    }

    fn check_in_service(&self) -> BankResult {
        if self.condition == TerminalCondition::OutOfService {
            Err(BankError::OutOfService(self.id))?
        }

        return Ok(());
    }

    fn next_transaction_id(&mut self) -> TransactionId {
        self.last_transaction_id = self.last_transaction_id.next();

        return self.last_transaction_id;
    }
}
