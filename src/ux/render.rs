use bankist::{
    account::Account,
    summary::Summary,
    view::{AccountView, MovementKind, Render},
};
use std::io::Write;

/// Prints account views as plain text.
pub struct TerminalRenderer<W: Write> {
    out: W,
    currency: String,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, currency: &str) -> Self {
        Self {
            out,
            currency: currency.to_owned(),
        }
    }

    pub fn money(&self, amount: f64) -> String {
        format!("{:.2}{}", amount, self.currency)
    }

    pub fn message(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", message);
    }

    pub fn prompt(&mut self) {
        let _ = write!(self.out, "> ");
        let _ = self.out.flush();
    }

    /// One line per account: username, owner, balance and summary
    pub fn account_line(&self, account: &Account) -> String {
        let summary = Summary::of(account);
        format!(
            "{:<5} {:<24} balance {:>12}  in {:>12}  out {:>12}  interest {:>10}",
            account.username.as_str(),
            account.owner,
            self.money(summary.balance),
            self.money(summary.total_deposits),
            self.money(summary.total_withdrawals),
            self.money(summary.interest),
        )
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for TerminalRenderer<W> {
    fn render(&mut self, view: &AccountView) {
        let summary = &view.summary;
        let mut text = format!(
            "Welcome back, {}\nCurrent balance: {}\n",
            view.first_name,
            self.money(summary.balance)
        );
        // newest row on top
        for row in view.movements.iter().rev() {
            let kind = match row.kind {
                MovementKind::Deposit => "DEPOSIT",
                MovementKind::Withdrawal => "WITHDRAWAL",
            };
            text += &format!(
                "  {:>3} {:<10} {:>14}\n",
                row.index,
                kind,
                self.money(row.amount)
            );
        }
        text += &format!(
            "In: {}  Out: {}  Interest: {}",
            self.money(summary.total_deposits),
            self.money(summary.total_withdrawals),
            self.money(summary.interest)
        );
        self.message(&text);
    }
}
