use crate::models::Account;
use crate::Bank;

use serde::{Deserialize, Serialize};

/// One output row describing a client's standing at a bank
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct AccountReport {
    pub bank: String,
    pub account: String,
    pub name: String,
    pub balance: String,
}

impl AccountReport {
    pub fn new(bank: &Bank, account: &Account) -> Self {
        return Self {
            bank: bank.name().to_string(),
            account: account.id().to_string(),
            name: account.display_name().to_string(),
            balance: account.balance().to_string(),
        };
    }
}

/// Builds a report over every account of every bank, ordered by bank then account
pub fn build_report<'a>(banks: impl IntoIterator<Item = &'a Bank>) -> Vec<AccountReport> {
    let mut report = banks
        .into_iter()
        .flat_map(|bank| {
            bank.accounts()
                .into_iter()
                .map(move |account| AccountReport::new(bank, &account))
        })
        .collect::<Vec<_>>();

    report.sort();

    return report;
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ids::AccountId;
    use crate::ledgers::Backend;
    use crate::Money;

    #[test]
    fn build_sorted_report() {
        let x = Bank::with_backend("X", Backend::Indexed);
        x.register(AccountId::from("P2"), "Petr", Money(50000)).unwrap();
        x.register(AccountId::from("P1"), "Ivan", Money(12345)).unwrap();

        let y = Bank::with_backend("Y", Backend::List);
        y.register(AccountId::from("A1"), "Anna", Money::ZERO).unwrap();

        let report = build_report([&y, &x]);

        let rows = report
            .iter()
            .map(|row| (row.bank.as_str(), row.account.as_str(), row.balance.as_str()))
            .collect::<Vec<_>>();

        assert_eq!(
            rows,
            vec![
                ("X", "P1", "1.2345"),
                ("X", "P2", "5.0000"),
                ("Y", "A1", "0.0000"),
            ]
        );
    }
}
