use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("invalid pin: must be a non-negative whole number")]
    Pin,
    #[error("invalid amount: must be a number")]
    Amount,
}

/// Lowercase initials of an account owner, e.g. `js` for "Jonas Schmedtmann"
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Display, From, Serialize)]
#[serde(transparent)]
pub struct Username(String);
impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl From<&str> for Username {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl PartialEq<str> for Username {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Account secret. Compared in plaintext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into, Deserialize)]
#[serde(transparent)]
pub struct Pin(u32);
impl Pin {
    pub fn new(v: u32) -> Self {
        Self(v)
    }
    pub fn get(self) -> u32 {
        self.0
    }
}
/// Accepts any number with no fractional part that fits a `u32`, so
/// `1111`, `1111.0` and `1.111e3` are the same pin.
impl FromStr for Pin {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if let Ok(v) = t.parse::<u32>() {
            return Ok(Self(v));
        }
        match t.parse::<f64>() {
            Ok(v) if v.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&v) => Ok(Self(v as u32)),
            _ => Err(ValueError::Pin),
        }
    }
}

/// Parse a user supplied amount.
///
/// Surrounding whitespace is ignored and an empty input reads as `0`, which
/// later fails the positive-amount check of the action it is passed to.
/// Range checks are left to the actions themselves.
pub fn parse_amount(s: &str) -> Result<f64, ValueError> {
    let t = s.trim();
    if t.is_empty() {
        return Ok(0.0);
    }
    t.parse::<f64>().map_err(|_| ValueError::Amount)
}
