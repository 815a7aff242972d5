use std::collections::HashMap;

use crate::common::money::Money;
use crate::domain::account::Account;

/// Exclusive owner of all accounts, keyed by account number. The map key is
/// what enforces number uniqueness; callers refer to accounts by number
/// rather than holding references.
#[derive(Debug, Default)]
pub struct Bank {
    accounts: HashMap<u64, Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    /// The demonstration fixture the ATM boots with: one standard and one
    /// premium account.
    pub fn with_demo_accounts() -> Self {
        let mut bank = Bank::new();
        bank.add(Account::open(12345, 1234, Money::from_major(1000)));
        bank.add(Account::open(54321, 4321, Money::from_major(15_000)));
        bank
    }

    pub fn contains(&self, number: u64) -> bool {
        self.accounts.contains_key(&number)
    }

    pub fn get(&self, number: u64) -> Option<&Account> {
        self.accounts.get(&number)
    }

    pub fn get_mut(&mut self, number: u64) -> Option<&mut Account> {
        self.accounts.get_mut(&number)
    }

    /// Owner-only insert; the handlers check for collisions first.
    pub fn add(&mut self, account: Account) {
        self.accounts.insert(account.number(), account);
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
