/// Interest on a single deposit below this value is left out of the summary
pub const MIN_INTEREST: f64 = 1.0;
/// A loan needs at least one past movement worth this share of the amount
pub const LOAN_COLLATERAL_RATIO: f64 = 0.1;
pub const DEFAULT_CURRENCY: &str = "€";
