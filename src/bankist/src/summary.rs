use serde::Serialize;

use crate::{account::Account, constants::MIN_INTEREST};

/// Figures derived from an account's movements. Recomputed on every call,
/// never stored on the account.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub balance: f64,
    pub total_deposits: f64,
    pub total_withdrawals: f64,
    pub interest: f64,
}

impl Summary {
    pub fn of(account: &Account) -> Self {
        Self {
            balance: balance(account),
            total_deposits: total_deposits(account),
            total_withdrawals: total_withdrawals(account),
            interest: qualifying_interest(account),
        }
    }
}

pub fn balance(account: &Account) -> f64 {
    account.movements.iter().sum()
}

pub fn total_deposits(account: &Account) -> f64 {
    deposits(account).sum()
}

/// Sum of all withdrawals, as a positive number
pub fn total_withdrawals(account: &Account) -> f64 {
    account
        .movements
        .iter()
        .filter(|mov| **mov < 0.0)
        .map(|mov| mov.abs())
        .sum()
}

/// Interest earned on each deposit at the account's rate, counting only the
/// deposits whose interest reaches [`MIN_INTEREST`].
pub fn qualifying_interest(account: &Account) -> f64 {
    deposits(account)
        .map(|deposit| deposit * account.interest_rate / 100.0)
        .filter(|interest| *interest >= MIN_INTEREST)
        .sum()
}

fn deposits(account: &Account) -> impl Iterator<Item = f64> + '_ {
    account.movements.iter().copied().filter(|mov| *mov > 0.0)
}
