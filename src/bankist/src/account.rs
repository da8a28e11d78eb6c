use serde::{Deserialize, Serialize};

use crate::types::{Pin, Username};

/// A bank account
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Display name of the customer
    pub owner: String,
    /// Lowercase initials of `owner`, set by [`create_usernames`]
    pub username: Username,
    /// Signed amounts in chronological order, deposits are positive
    pub movements: Vec<f64>,
    /// Percentage applied to each qualifying deposit
    pub interest_rate: f64,
    #[serde(skip_serializing)]
    pub pin: Pin,
}

impl Account {
    pub fn new(owner: &str, movements: Vec<f64>, interest_rate: f64, pin: Pin) -> Self {
        Self {
            owner: owner.to_owned(),
            username: derive_username(owner),
            movements,
            interest_rate,
            pin,
        }
    }

    /// First token of the owner's name, used to greet them
    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or_default()
    }
}

/// An account as it appears in a seed file, before its username is derived
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSeed {
    pub owner: String,
    pub movements: Vec<f64>,
    pub interest_rate: f64,
    pub pin: Pin,
}

impl From<AccountSeed> for Account {
    fn from(seed: AccountSeed) -> Self {
        Account::new(&seed.owner, seed.movements, seed.interest_rate, seed.pin)
    }
}

/// Lowercase first letter of every whitespace separated token of `owner`.
pub fn derive_username(owner: &str) -> Username {
    owner
        .split_whitespace()
        .filter_map(|name| name.chars().next())
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .into()
}

/// Recompute the username of every account from its owner.
pub fn create_usernames(accounts: &mut [Account]) {
    for account in accounts.iter_mut() {
        account.username = derive_username(&account.owner);
    }
}

/// The four accounts the demo starts with
pub fn demo_accounts() -> Vec<Account> {
    vec![
        Account::new(
            "Jonas Schmedtmann",
            vec![200.0, 450.0, -400.0, 3000.0, -650.0, -130.0, 70.0, 1300.0],
            1.2,
            Pin::new(1111),
        ),
        Account::new(
            "Jessica Davis",
            vec![5000.0, 3400.0, -150.0, -790.0, -3210.0, -1000.0, 8500.0, -30.0],
            1.5,
            Pin::new(2222),
        ),
        Account::new(
            "Steven Thomas Williams",
            vec![200.0, -200.0, 340.0, -300.0, -20.0, 50.0, 400.0, -460.0],
            0.7,
            Pin::new(3333),
        ),
        Account::new(
            "Sarah Smith",
            vec![430.0, 1000.0, 700.0, 50.0, 90.0],
            1.0,
            Pin::new(4444),
        ),
    ]
}
