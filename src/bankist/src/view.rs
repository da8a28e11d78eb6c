//! View model handed to a rendering collaborator.

use std::fmt;

use crate::{account::Account, summary::Summary};

/// Order in which movements are presented. Flipped by the sort button and
/// independent of who is logged in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MovementOrder {
    #[default]
    Chronological,
    Ascending,
}

impl MovementOrder {
    pub fn toggle(self) -> Self {
        match self {
            MovementOrder::Chronological => MovementOrder::Ascending,
            MovementOrder::Ascending => MovementOrder::Chronological,
        }
    }

    /// Copy of `movements` in this order. The input is left as is.
    pub fn arrange(self, movements: &[f64]) -> Vec<f64> {
        let mut movs = movements.to_vec();
        if self == MovementOrder::Ascending {
            // stable, so equal amounts keep their chronological order
            movs.sort_by(f64::total_cmp);
        }
        movs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    pub fn of(amount: f64) -> Self {
        if amount > 0.0 {
            MovementKind::Deposit
        } else {
            MovementKind::Withdrawal
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovementKind::Deposit => write!(f, "deposit"),
            MovementKind::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementRow {
    /// Position in the arranged list
    pub index: usize,
    pub kind: MovementKind,
    pub amount: f64,
}

/// Everything needed to display one account
#[derive(Debug, Clone, PartialEq)]
pub struct AccountView {
    pub owner: String,
    pub first_name: String,
    pub summary: Summary,
    pub order: MovementOrder,
    pub movements: Vec<MovementRow>,
}

impl AccountView {
    pub fn new(account: &Account, order: MovementOrder) -> Self {
        let movements = order
            .arrange(&account.movements)
            .into_iter()
            .enumerate()
            .map(|(index, amount)| MovementRow {
                index,
                kind: MovementKind::of(amount),
                amount,
            })
            .collect();

        Self {
            owner: account.owner.clone(),
            first_name: account.first_name().to_owned(),
            summary: Summary::of(account),
            order,
            movements,
        }
    }
}

/// Rendering collaborator. Receives a fresh view after every change.
pub trait Render {
    fn render(&mut self, view: &AccountView);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pin;

    fn account() -> Account {
        Account::new("Jonas Schmedtmann", vec![200.0, -400.0, 3000.0, -400.0, 70.0], 1.2, Pin::new(1))
    }

    #[test]
    fn test_ascending_view_leaves_account_untouched() {
        let account = account();
        let view = AccountView::new(&account, MovementOrder::Ascending);
        let amounts: Vec<f64> = view.movements.iter().map(|m| m.amount).collect();
        assert_eq!(amounts, vec![-400.0, -400.0, 70.0, 200.0, 3000.0]);
        assert_eq!(account.movements, vec![200.0, -400.0, 3000.0, -400.0, 70.0]);
    }

    #[test]
    fn test_double_toggle_restores_order() {
        let account = account();
        let order = MovementOrder::default();
        let before = AccountView::new(&account, order);
        let after = AccountView::new(&account, order.toggle().toggle());
        assert_eq!(before, after);
        assert_eq!(order.toggle(), MovementOrder::Ascending);
    }

    #[test]
    fn test_rows() {
        let view = AccountView::new(&account(), MovementOrder::Chronological);
        assert_eq!(view.first_name, "Jonas");
        assert_eq!(view.movements.len(), 5);
        assert_eq!(
            view.movements[1],
            MovementRow {
                index: 1,
                kind: MovementKind::Withdrawal,
                amount: -400.0
            }
        );
        assert_eq!(view.movements[4].kind, MovementKind::Deposit);
        assert_eq!(MovementKind::Deposit.to_string(), "deposit");
    }
}
