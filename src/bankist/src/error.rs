use thiserror::Error;

use crate::types::ValueError;

/// Why an action was rejected. A rejected action never changes the store or
/// the session.
#[derive(Debug, Error, PartialEq)]
pub enum ActionError {
    #[error(transparent)]
    Authentication(#[from] AuthError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please log in first")]
    NotLoggedIn,
    #[error("Unknown user")]
    UnknownUser,
    #[error("Wrong pin")]
    WrongPin,
    #[error("Credentials do not match the logged in account")]
    NotSessionOwner,
    #[error("The logged in account no longer exists")]
    SessionExpired,
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Amount must be a positive number")]
    InvalidAmount,
    #[error("Receiver account not found")]
    UnknownReceiver,
    #[error("Cannot transfer to your own account")]
    SelfTransfer,
    #[error("Insufficient funds: balance is {balance}, requested {amount}")]
    InsufficientFunds { balance: f64, amount: f64 },
    #[error("Loan denied: no movement of at least {required}")]
    InsufficientCollateral { required: f64 },
}

impl From<ValueError> for ActionError {
    fn from(e: ValueError) -> Self {
        match e {
            ValueError::Pin => AuthError::WrongPin.into(),
            ValueError::Amount => ValidationError::InvalidAmount.into(),
        }
    }
}

/// Errors raised while loading account seed data
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read seed file")]
    Io(#[from] std::io::Error),
    #[error("failed to deserialize seed data")]
    Json(#[from] serde_json::Error),
}
