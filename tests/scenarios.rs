use atml::ids::{AccountId, TerminalId};
use atml::ledgers::Backend;
use atml::{Bank, BankConfig, BankError, Money, Terminal, TerminalState};

use std::sync::Arc;

const SOME_TERMINAL_ID: TerminalId = TerminalId(1);

fn build_bank(name: &str, backend: Backend, accounts: &[(&str, &str, i64)]) -> Arc<Bank> {
    let bank = Bank::new(BankConfig {
        name: name.to_string(),
        backend,
    });

    for (id, display_name, balance) in accounts {
        bank.register(AccountId::from(*id), *display_name, Money(*balance))
            .unwrap();
    }

    Arc::new(bank)
}

fn balance_of(bank: &Bank, id: &str) -> Money {
    bank.lookup(&AccountId::from(id)).unwrap().balance()
}

#[test]
fn withdraw_until_insufficient() {
    for backend in [Backend::List, Backend::Indexed] {
        let bank = build_bank("X", backend, &[("A", "Ivan", 10000)]);
        let mut terminal = Terminal::new(SOME_TERMINAL_ID, "Centre", Arc::clone(&bank));

        terminal.insert_card(&AccountId::from("A")).unwrap();

        assert_eq!(terminal.withdraw(Money(2000)).unwrap().balance, Money(8000));
        assert!(matches!(
            terminal.withdraw(Money(9000)),
            Err(BankError::InsufficientFunds { .. })
        ));
        assert_eq!(balance_of(&bank, "A"), Money(8000));
    }
}

#[test]
fn transfer_across_banks() {
    let x = build_bank("X", Backend::List, &[("P1", "Ivan", 10000)]);
    let y = build_bank("Y", Backend::Indexed, &[("P2", "Petr", 7000)]);

    let mut terminal = Terminal::new(SOME_TERMINAL_ID, "Centre", Arc::clone(&x));

    terminal.insert_card(&AccountId::from("P1")).unwrap();
    assert_eq!(terminal.state(), TerminalState::Authorized);

    terminal
        .transfer_to(&AccountId::from("P2"), Money(1000), &y)
        .unwrap();

    assert_eq!(balance_of(&x, "P1"), Money(9000));
    assert_eq!(balance_of(&y, "P2"), Money(8000));
}

#[test]
fn transfer_to_unknown_recipient() {
    let x = build_bank("X", Backend::List, &[("P1", "Ivan", 10000)]);
    let y = build_bank("Y", Backend::Indexed, &[("P2", "Petr", 7000)]);

    let mut terminal = Terminal::new(SOME_TERMINAL_ID, "Centre", Arc::clone(&x));

    terminal.insert_card(&AccountId::from("P1")).unwrap();

    let err = terminal
        .transfer_to(&AccountId::from("P9"), Money(1000), &y)
        .unwrap_err();

    assert_eq!(err, BankError::RecipientNotFound(AccountId::from("P9")));
    assert_eq!(balance_of(&x, "P1"), Money(10000));
    assert_eq!(balance_of(&y, "P2"), Money(7000));
}

#[test]
fn transfer_conserves_money() {
    let x = build_bank("X", Backend::Indexed, &[("P1", "Ivan", 10000), ("P3", "Olga", 0)]);
    let y = build_bank("Y", Backend::List, &[("P2", "Petr", 7000)]);

    let mut terminal = Terminal::new(SOME_TERMINAL_ID, "Centre", Arc::clone(&x));
    terminal.insert_card(&AccountId::from("P1")).unwrap();

    let transfers: [(&str, &Bank, i64); 4] = [
        ("P2", &*y, 1),
        ("P3", &*x, 2500),
        ("P2", &*y, 7499),
        ("P3", &*x, 1),
    ];

    for (to, counterparty, amount) in transfers {
        let before_from = balance_of(&x, "P1");
        let before_to = balance_of(counterparty, to);

        let result = terminal.transfer_to(&AccountId::from(to), Money(amount), counterparty);

        let after_from = balance_of(&x, "P1");
        let after_to = balance_of(counterparty, to);

        assert_eq!(after_from.0 + after_to.0, before_from.0 + before_to.0);

        match result {
            Ok(event) => {
                assert_eq!(after_from.0, before_from.0 - amount);
                assert_eq!(event.balance, after_from);
            }
            Err(BankError::InsufficientFunds { .. }) => {
                assert_eq!(after_from, before_from);
                assert_eq!(after_to, before_to);
            }
            Err(e) => panic!("Unexpected error: {e}"),
        }
    }

    assert_eq!(balance_of(&x, "P1"), Money(0));
    assert_eq!(balance_of(&x, "P3"), Money(2500));
    assert_eq!(balance_of(&y, "P2"), Money(14500));
}

#[test]
fn idle_terminal_never_mutates() {
    let x = build_bank("X", Backend::List, &[("P1", "Ivan", 10000)]);
    let y = build_bank("Y", Backend::Indexed, &[("P2", "Petr", 7000)]);

    let mut terminal = Terminal::new(SOME_TERMINAL_ID, "Centre", Arc::clone(&x));

    terminal.insert_card(&AccountId::from("P1")).unwrap();
    terminal.remove_card().unwrap();

    let idle = BankError::NoActiveSession(SOME_TERMINAL_ID);

    assert_eq!(terminal.withdraw(Money(1)).unwrap_err(), idle);
    assert_eq!(terminal.deposit(Money(1)).unwrap_err(), idle);
    assert_eq!(
        terminal
            .transfer_to(&AccountId::from("P2"), Money(1), &y)
            .unwrap_err(),
        idle
    );

    assert_eq!(balance_of(&x, "P1"), Money(10000));
    assert_eq!(balance_of(&y, "P2"), Money(7000));
}
