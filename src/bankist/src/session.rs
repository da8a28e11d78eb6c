//! Login state and the actions a logged in customer can take.
//!
//! The session is a plain value owned by the caller. Actions borrow it and
//! hand back a new one when they change who is logged in, so a rejected
//! action leaves the caller's session exactly as it was.

use tracing::{debug, info, warn};

use crate::{
    account::Account,
    constants::LOAN_COLLATERAL_RATIO,
    error::{ActionError, AuthError, ValidationError},
    store::AccountStore,
    summary::balance,
    types::{Pin, Username},
    view::{AccountView, MovementOrder},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(Username),
}

impl Session {
    pub fn username(&self) -> Option<&Username> {
        match self {
            Session::LoggedOut => None,
            Session::LoggedIn(username) => Some(username),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }
}

/// Result of a successful money movement
#[derive(Debug, Clone, PartialEq)]
pub enum Receipt {
    Transfer {
        from: Username,
        to: Username,
        amount: f64,
    },
    Loan {
        to: Username,
        amount: f64,
    },
}

fn check_amount(amount: f64) -> Result<f64, ValidationError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(ValidationError::InvalidAmount)
    }
}

impl AccountStore {
    /// Position and account of whoever is logged in
    fn active(&self, session: &Session) -> Result<(usize, &Account), AuthError> {
        let username = session.username().ok_or(AuthError::NotLoggedIn)?;
        self.entry(username.as_str())
            .ok_or(AuthError::SessionExpired)
    }

    pub fn login(&self, username: &str, pin: Pin) -> Result<Session, ActionError> {
        let account = self.find(username).ok_or(AuthError::UnknownUser)?;
        if account.pin != pin {
            warn!("Wrong pin for {}", username);
            return Err(AuthError::WrongPin.into());
        }
        info!("{} logged in", account.username);
        Ok(Session::LoggedIn(account.username.clone()))
    }

    /// Move `amount` from the logged in account to `to`.
    ///
    /// The sender is debited before the receiver is credited. Both happen
    /// only once every check has passed.
    pub fn transfer(
        &mut self,
        session: &Session,
        to: &str,
        amount: f64,
    ) -> Result<Receipt, ActionError> {
        let (sender_index, sender) = self.active(session)?;
        let sender_balance = balance(sender);
        let amount = check_amount(amount)?;
        let receiver_index = self
            .position(to)
            .ok_or(ValidationError::UnknownReceiver)?;
        if receiver_index == sender_index {
            return Err(ValidationError::SelfTransfer.into());
        }
        if sender_balance < amount {
            return Err(ValidationError::InsufficientFunds {
                balance: sender_balance,
                amount,
            }
            .into());
        }

        let from = self.push_movement(sender_index, -amount);
        let to = self.push_movement(receiver_index, amount);
        info!("Transferred {} from {} to {}", amount, from, to);

        Ok(Receipt::Transfer { from, to, amount })
    }

    /// Grant a loan when some past movement is worth at least 10% of it.
    pub fn request_loan(&mut self, session: &Session, amount: f64) -> Result<Receipt, ActionError> {
        let (index, account) = self.active(session)?;
        let amount = check_amount(amount)?;
        let required = amount * LOAN_COLLATERAL_RATIO;
        if !account.movements.iter().any(|mov| *mov >= required) {
            debug!("Loan of {} refused, needs a movement of {}", amount, required);
            return Err(ValidationError::InsufficientCollateral { required }.into());
        }

        let to = self.push_movement(index, amount);
        info!("Granted a loan of {} to {}", amount, to);

        Ok(Receipt::Loan { to, amount })
    }

    /// Remove the logged in account. `username` and `pin` must be its own.
    pub fn close(
        &mut self,
        session: &Session,
        username: &str,
        pin: Pin,
    ) -> Result<Session, ActionError> {
        let (index, account) = self.active(session)?;
        if account.username != *username || account.pin != pin {
            return Err(AuthError::NotSessionOwner.into());
        }

        let closed = self.remove(index);
        info!("Closed account of {}", closed.username);

        Ok(Session::LoggedOut)
    }

    /// View of the logged in account
    pub fn view(&self, session: &Session, order: MovementOrder) -> Result<AccountView, ActionError> {
        let (_, account) = self.active(session)?;
        Ok(AccountView::new(account, order))
    }

    fn push_movement(&mut self, index: usize, amount: f64) -> Username {
        let account = self.account_mut(index);
        account.movements.push(amount);
        account.username.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in(store: &AccountStore, username: &str, pin: u32) -> Session {
        store.login(username, Pin::new(pin)).unwrap()
    }

    fn pair() -> AccountStore {
        AccountStore::new(vec![
            Account::new("Ann Lee", vec![1000.0], 1.0, Pin::new(1)),
            Account::new("Bob Kay", vec![50.0], 1.0, Pin::new(2)),
            Account::new("Cid Moe", vec![70.0], 1.0, Pin::new(3)),
        ])
    }

    #[test]
    fn test_login() {
        let store = AccountStore::demo();
        assert_eq!(
            store.login("js", Pin::new(1111)).unwrap(),
            Session::LoggedIn(Username::from("js"))
        );
        assert_eq!(
            store.login("js", Pin::new(2222)),
            Err(ActionError::Authentication(AuthError::WrongPin))
        );
        assert_eq!(
            store.login("nobody", Pin::new(1111)),
            Err(ActionError::Authentication(AuthError::UnknownUser))
        );
    }

    #[test]
    fn test_transfer() {
        let mut store = pair();
        let session = logged_in(&store, "al", 1);

        let receipt = store.transfer(&session, "bk", 200.0).unwrap();

        assert_eq!(
            receipt,
            Receipt::Transfer {
                from: Username::from("al"),
                to: Username::from("bk"),
                amount: 200.0
            }
        );
        assert_eq!(balance(store.find("al").unwrap()), 800.0);
        assert_eq!(balance(store.find("bk").unwrap()), 250.0);
        assert_eq!(store.find("cm").unwrap().movements, vec![70.0]);
        assert_eq!(store.find("al").unwrap().movements, vec![1000.0, -200.0]);
    }

    #[test]
    fn test_transfer_rejections_leave_store_unchanged() {
        let mut store = pair();
        let session = logged_in(&store, "al", 1);
        let before = store.clone();

        let cases = [
            ("bk", 0.0, ValidationError::InvalidAmount),
            ("bk", -10.0, ValidationError::InvalidAmount),
            ("bk", f64::NAN, ValidationError::InvalidAmount),
            ("zz", 10.0, ValidationError::UnknownReceiver),
            ("al", 10.0, ValidationError::SelfTransfer),
            (
                "bk",
                1000.5,
                ValidationError::InsufficientFunds {
                    balance: 1000.0,
                    amount: 1000.5,
                },
            ),
        ];
        for (to, amount, expected) in cases {
            assert_eq!(
                store.transfer(&session, to, amount),
                Err(ActionError::Validation(expected))
            );
        }
        assert_eq!(store, before);
    }

    #[test]
    fn test_transfer_whole_balance() {
        let mut store = pair();
        let session = logged_in(&store, "bk", 2);
        assert!(store.transfer(&session, "al", 50.0).is_ok());
        assert_eq!(balance(store.find("bk").unwrap()), 0.0);
    }

    #[test]
    fn test_actions_require_login() {
        let mut store = pair();
        let before = store.clone();
        let session = Session::LoggedOut;
        let not_logged_in = ActionError::Authentication(AuthError::NotLoggedIn);

        assert_eq!(store.transfer(&session, "bk", 1.0).unwrap_err(), not_logged_in);
        assert_eq!(store.request_loan(&session, 1.0).unwrap_err(), not_logged_in);
        assert_eq!(store.close(&session, "al", Pin::new(1)).unwrap_err(), not_logged_in);
        assert_eq!(
            store.view(&session, MovementOrder::default()).unwrap_err(),
            not_logged_in
        );
        assert_eq!(store, before);
    }

    #[test]
    fn test_loan() {
        let mut store = AccountStore::new(vec![Account::new(
            "Dee Fox",
            vec![200.0, 450.0, -400.0],
            1.0,
            Pin::new(9),
        )]);
        let session = logged_in(&store, "df", 9);

        assert_eq!(
            store.request_loan(&session, 10000.0),
            Err(ActionError::Validation(
                ValidationError::InsufficientCollateral { required: 1000.0 }
            ))
        );
        assert_eq!(store.find("df").unwrap().movements, vec![200.0, 450.0, -400.0]);

        assert!(store.request_loan(&session, 100.0).is_ok());
        assert_eq!(
            store.find("df").unwrap().movements,
            vec![200.0, 450.0, -400.0, 100.0]
        );
    }

    #[test]
    fn test_loan_rejects_invalid_amount() {
        let mut store = AccountStore::demo();
        let session = logged_in(&store, "js", 1111);
        assert_eq!(
            store.request_loan(&session, -5.0),
            Err(ActionError::Validation(ValidationError::InvalidAmount))
        );
        assert_eq!(
            store.request_loan(&session, f64::INFINITY),
            Err(ActionError::Validation(ValidationError::InvalidAmount))
        );
    }

    #[test]
    fn test_close() {
        let mut store = AccountStore::demo();
        let session = logged_in(&store, "jd", 2222);

        assert_eq!(
            store.close(&session, "jd", Pin::new(1111)),
            Err(ActionError::Authentication(AuthError::NotSessionOwner))
        );
        assert_eq!(
            store.close(&session, "js", Pin::new(1111)),
            Err(ActionError::Authentication(AuthError::NotSessionOwner))
        );
        assert_eq!(store.len(), 4);

        let session = store.close(&session, "jd", Pin::new(2222)).unwrap();
        assert_eq!(session, Session::LoggedOut);
        assert_eq!(store.len(), 3);
        assert!(store.find("jd").is_none());
    }

    #[test]
    fn test_stale_session() {
        let mut store = AccountStore::demo();
        let session = logged_in(&store, "ss", 4444);
        let stale = session.clone();
        store.close(&session, "ss", Pin::new(4444)).unwrap();

        assert_eq!(
            store.request_loan(&stale, 10.0),
            Err(ActionError::Authentication(AuthError::SessionExpired))
        );
    }

    #[test]
    fn test_transfer_after_earlier_account_closed() {
        let mut store = AccountStore::demo();
        let jd = logged_in(&store, "jd", 2222);
        store.close(&jd, "jd", Pin::new(2222)).unwrap();

        let ss = logged_in(&store, "ss", 4444);
        store.transfer(&ss, "js", 70.0).unwrap();
        store.request_loan(&ss, 500.0).unwrap();

        assert_eq!(store.find("ss").unwrap().movements[5..], [-70.0, 500.0]);
        assert_eq!(store.find("js").unwrap().movements.last(), Some(&70.0));
        assert_eq!(store.find("stw").unwrap().movements.len(), 8);
    }

    #[test]
    fn test_stale_session_cannot_move_money() {
        let mut store = AccountStore::demo();
        let session = logged_in(&store, "js", 1111);
        store.close(&session, "js", Pin::new(1111)).unwrap();
        let before = store.clone();

        assert_eq!(
            store.transfer(&session, "jd", 10.0),
            Err(ActionError::Authentication(AuthError::SessionExpired))
        );
        assert_eq!(
            store.view(&session, MovementOrder::default()).unwrap_err(),
            ActionError::Authentication(AuthError::SessionExpired)
        );
        assert_eq!(store, before);
    }

    #[test]
    fn test_balance_tracks_movements() {
        let mut store = AccountStore::demo();
        let js = logged_in(&store, "js", 1111);
        let jd = logged_in(&store, "jd", 2222);

        store.transfer(&js, "jd", 840.0).unwrap();
        store.request_loan(&jd, 5000.0).unwrap();
        store.transfer(&jd, "stw", 123.5).unwrap();
        let _ = store.transfer(&js, "ss", 1_000_000.0);

        for account in store.iter() {
            let sum: f64 = account.movements.iter().sum();
            assert_eq!(balance(account), sum);
        }
        assert_eq!(balance(store.find("js").unwrap()), 3000.0);
    }

    #[test]
    fn test_view() {
        let store = AccountStore::demo();
        let session = logged_in(&store, "stw", 3333);
        let view = store.view(&session, MovementOrder::Ascending).unwrap();
        assert_eq!(view.first_name, "Steven");
        assert_eq!(view.movements.first().map(|m| m.amount), Some(-460.0));
    }
}
