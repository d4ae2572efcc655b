use crate::reader;

use atml::ids::{AccountId, TerminalId};
use atml::input::{Command, RosterRecord, ScriptRecord};
use atml::ledgers::Backend;
use atml::{Bank, BankConfig, Result, Terminal};

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

pub type Banks = BTreeMap<String, Arc<Bank>>;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Unknown bank: {0}")]
    UnknownBank(String),

    #[error("Bank {0} already runs on the {1} backend, ignoring {2}")]
    BackendConflict(String, Backend, Backend),

    #[error("{0} is bound to bank {1}, cannot serve bank {2}")]
    TerminalRebound(TerminalId, String, String),
}

/// Builds every bank listed in the roster and registers its clients.
///
/// The first row seen for a bank decides its backend; rows that can't be applied are logged
/// and skipped.
pub fn load_banks(roster: &Path) -> Result<Banks> {
    let mut rdr = reader::build_csv_reader(roster)?;
    let mut banks = Banks::new();
    let mut backends: HashMap<String, Backend> = HashMap::new();

    log::debug!("Deserializing roster...");
    for record in rdr.deserialize::<RosterRecord>() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        let backend = *backends
            .entry(record.bank.clone())
            .or_insert(record.backend);

        if backend != record.backend {
            log::warn!(
                "{}",
                ScriptError::BackendConflict(record.bank.clone(), backend, record.backend)
            );
        }

        let bank = banks.entry(record.bank.clone()).or_insert_with(|| {
            Arc::new(Bank::new(BankConfig {
                name: record.bank.clone(),
                backend,
            }))
        });

        if let Err(e) = register(bank, &record) {
            log::warn!("{e}");
        }
    }

    log::debug!("Loaded {} banks", banks.len());

    return Ok(banks);
}

fn register(bank: &Bank, record: &RosterRecord) -> Result {
    let opening_balance = record.parse_opening_balance()?;

    bank.register(
        AccountId::from(record.account.as_str()),
        record.name.as_str(),
        opening_balance,
    )?;

    return Ok(());
}

/// Replays every terminal operation of the script against `banks`.
///
/// A terminal is created the first time its id appears and stays bound to that row's bank.
/// Rejected operations are logged and the script carries on.
pub fn run_script(banks: &Banks, script: &Path) -> Result {
    let mut rdr = reader::build_csv_reader(script)?;
    let mut terminals: HashMap<TerminalId, Terminal> = HashMap::new();

    log::debug!("Deserializing script...");
    for record in rdr.deserialize::<ScriptRecord>() {
        log::debug!("Parsing record into ScriptRecord: {record:?}");
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        if let Err(e) = run_record(banks, &mut terminals, record) {
            log::warn!("{e}");
        }
    }

    return Ok(());
}

fn run_record(
    banks: &Banks,
    terminals: &mut HashMap<TerminalId, Terminal>,
    record: ScriptRecord,
) -> Result {
    let bank = find_bank(banks, &record.bank)?;

    let terminal = terminals
        .entry(record.terminal)
        .or_insert_with(|| Terminal::new(record.terminal, bank.name(), Arc::clone(bank)));

    if !Arc::ptr_eq(terminal.bank(), bank) {
        Err(ScriptError::TerminalRebound(
            terminal.id(),
            terminal.bank().name().to_string(),
            record.bank.clone(),
        ))?
    }

    log::debug!("Parsing record into Command: {record:?}");
    let command = record.parse_command()?;

    match command {
        Command::InsertCard(card) => {
            let event = terminal.insert_card(&card)?;
            log::info!("{event:?}");
        }
        Command::RemoveCard => {
            let event = terminal.remove_card()?;
            log::info!("{event:?}");
        }
        Command::Withdraw(amount) => {
            let event = terminal.withdraw(amount)?;
            log::info!("{event:?}");
        }
        Command::Deposit(amount) => {
            let event = terminal.deposit(amount)?;
            log::info!("{event:?}");
        }
        Command::Transfer {
            to,
            amount,
            counterparty,
        } => {
            let counterparty = find_bank(banks, &counterparty)?;
            let event = terminal.transfer_to(&to, amount, counterparty)?;
            log::info!("{event:?}");
        }
        Command::ReportFault => terminal.report_fault(),
        Command::Restore => terminal.restore(),
    }

    return Ok(());
}

fn find_bank<'a>(banks: &'a Banks, name: &str) -> Result<&'a Arc<Bank>> {
    let bank = banks
        .get(name)
        .ok_or_else(|| ScriptError::UnknownBank(name.to_string()))?;

    return Ok(bank);
}
