use std::{fs, path::Path};
use tracing::debug;

use crate::{
    account::{create_usernames, demo_accounts, Account, AccountSeed},
    error::StoreError,
};

/// In-memory list of accounts, kept in insertion order.
///
/// Lookups are linear scans by username and return the first match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    pub fn new(mut accounts: Vec<Account>) -> Self {
        create_usernames(&mut accounts);
        Self { accounts }
    }

    /// Store holding the demo accounts
    pub fn demo() -> Self {
        Self::new(demo_accounts())
    }

    /// Build a store from a JSON array of [`AccountSeed`]s.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let seeds: Vec<AccountSeed> = serde_json::from_str(json)?;
        debug!("Loaded {} account seeds", seeds.len());
        Ok(Self::new(seeds.into_iter().map(Account::from).collect()))
    }

    /// Read a seed file, see [`AccountStore::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        debug!("Reading account seeds from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn find(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username == *username)
    }

    pub fn position(&self, username: &str) -> Option<usize> {
        self.accounts.iter().position(|a| a.username == *username)
    }

    /// Position and account of `username`, first match
    pub(crate) fn entry(&self, username: &str) -> Option<(usize, &Account)> {
        self.accounts
            .iter()
            .enumerate()
            .find(|(_, a)| a.username == *username)
    }

    /// Panics when `index` is out of bounds, like [`Vec::remove`].
    pub(crate) fn account_mut(&mut self, index: usize) -> &mut Account {
        &mut self.accounts[index]
    }

    pub(crate) fn remove(&mut self, index: usize) -> Account {
        self.accounts.remove(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
