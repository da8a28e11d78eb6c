//! Line oriented front end of the bank.
//!
//! Each input line is parsed into a [`ShellCommand`] and applied to the
//! account store. The shell owns the session and the sort flag; the store
//! only ever sees them as arguments.

use anyhow::{bail, Result};
use bankist::{
    types::{parse_amount, Pin},
    view::{MovementOrder, Render},
    AccountStore, ActionError, Receipt, Session,
};
use std::{io::BufRead, io::Write, str::FromStr};
use tracing::{debug, info, warn};

use crate::{
    services::auth::{resolve_pin, CredentialsProvider},
    ux::TerminalRenderer,
};

const HELP: &str = "\
Commands:
  login <user> [pin]      log in (the pin is asked for when omitted)
  logout                  log out
  transfer <to> <amount>  send money to another account
  loan <amount>           request a loan
  close <user> [pin]      close the logged in account
  sort                    toggle sorting of movements by amount
  show                    show the logged in account
  accounts                list all accounts
  help                    show this help
  quit                    leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Login { username: String, pin: Option<String> },
    Logout,
    Transfer { to: String, amount: String },
    Loan { amount: String },
    Close { username: String, pin: Option<String> },
    Sort,
    Show,
    Accounts,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(name) = words.next() else {
            bail!("Empty command");
        };
        let args: Vec<String> = words.map(str::to_owned).collect();

        let command = match (name.to_lowercase().as_str(), args.as_slice()) {
            ("login", [username]) => ShellCommand::Login {
                username: username.clone(),
                pin: None,
            },
            ("login", [username, pin]) => ShellCommand::Login {
                username: username.clone(),
                pin: Some(pin.clone()),
            },
            ("login", _) => bail!("Usage: login <user> [pin]"),
            ("logout", []) => ShellCommand::Logout,
            ("transfer", [to, amount]) => ShellCommand::Transfer {
                to: to.clone(),
                amount: amount.clone(),
            },
            ("transfer", _) => bail!("Usage: transfer <to> <amount>"),
            ("loan", [amount]) => ShellCommand::Loan {
                amount: amount.clone(),
            },
            ("loan", _) => bail!("Usage: loan <amount>"),
            ("close", [username]) => ShellCommand::Close {
                username: username.clone(),
                pin: None,
            },
            ("close", [username, pin]) => ShellCommand::Close {
                username: username.clone(),
                pin: Some(pin.clone()),
            },
            ("close", _) => bail!("Usage: close <user> [pin]"),
            ("sort", []) => ShellCommand::Sort,
            ("show", []) => ShellCommand::Show,
            ("accounts", []) => ShellCommand::Accounts,
            ("help", _) => ShellCommand::Help,
            ("quit" | "exit", []) => ShellCommand::Quit,
            ("logout" | "sort" | "show" | "accounts" | "quit" | "exit", _) => {
                bail!("'{}' takes no arguments", name)
            }
            _ => bail!("Unknown command '{}', type `help` for a list of commands", name),
        };
        Ok(command)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a, W: Write> {
    store: AccountStore,
    session: Session,
    order: MovementOrder,
    renderer: TerminalRenderer<W>,
    credentials_provider: &'a dyn CredentialsProvider,
}

impl<'a, W: Write> Shell<'a, W> {
    pub fn new(
        store: AccountStore,
        renderer: TerminalRenderer<W>,
        credentials_provider: &'a dyn CredentialsProvider,
    ) -> Self {
        Self {
            store,
            session: Session::default(),
            order: MovementOrder::default(),
            renderer,
            credentials_provider,
        }
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn order(&self) -> MovementOrder {
        self.order
    }

    pub fn into_renderer(self) -> TerminalRenderer<W> {
        self.renderer
    }

    /// Read commands until the input ends or `quit` is entered.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.renderer.message("Welcome to Bankist, type `help` for a list of commands");
        self.renderer.prompt();
        for line in input.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                match line.parse::<ShellCommand>() {
                    Ok(command) => {
                        if self.execute(command)? == Flow::Quit {
                            break;
                        }
                    }
                    Err(e) => self.renderer.message(&e.to_string()),
                }
            }
            self.renderer.prompt();
        }
        Ok(())
    }

    pub fn execute(&mut self, command: ShellCommand) -> Result<Flow> {
        debug!(?command, "Executing");
        match command {
            ShellCommand::Login { username, pin } => {
                let pin = resolve_pin(self.credentials_provider, &username, pin.as_deref())?;
                let outcome = pin
                    .parse::<Pin>()
                    .map_err(ActionError::from)
                    .and_then(|pin| self.store.login(&username, pin));
                match outcome {
                    Ok(session) => {
                        self.session = session;
                        self.show();
                    }
                    Err(e) => self.reject("Login failed", &e),
                }
            }
            ShellCommand::Logout => {
                self.session = Session::LoggedOut;
                self.renderer.message("Logged out");
            }
            ShellCommand::Transfer { to, amount } => {
                let outcome = parse_amount(&amount)
                    .map_err(ActionError::from)
                    .and_then(|amount| self.store.transfer(&self.session, &to, amount));
                self.settle("Transfer failed", outcome);
            }
            ShellCommand::Loan { amount } => {
                let outcome = parse_amount(&amount)
                    .map_err(ActionError::from)
                    .and_then(|amount| self.store.request_loan(&self.session, amount));
                self.settle("Loan refused", outcome);
            }
            ShellCommand::Close { username, pin } => {
                let pin = resolve_pin(self.credentials_provider, &username, pin.as_deref())?;
                let outcome = pin
                    .parse::<Pin>()
                    .map_err(ActionError::from)
                    .and_then(|pin| self.store.close(&self.session, &username, pin));
                match outcome {
                    Ok(session) => {
                        self.session = session;
                        self.renderer.message("Account closed, goodbye");
                    }
                    Err(e) => self.reject("Close failed", &e),
                }
            }
            ShellCommand::Sort => {
                self.order = self.order.toggle();
                info!(order = ?self.order, "Sort toggled");
                if self.session.is_logged_in() {
                    self.show();
                }
            }
            ShellCommand::Show => self.show(),
            ShellCommand::Accounts => {
                let lines: Vec<String> = self
                    .store
                    .iter()
                    .map(|account| self.renderer.account_line(account))
                    .collect();
                for line in lines {
                    self.renderer.message(&line);
                }
            }
            ShellCommand::Help => self.renderer.message(HELP),
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn show(&mut self) {
        match self.store.view(&self.session, self.order) {
            Ok(view) => self.renderer.render(&view),
            Err(e) => self.reject("Nothing to show", &e),
        }
    }

    fn settle(&mut self, context: &str, outcome: Result<Receipt, ActionError>) {
        match outcome {
            Ok(receipt) => {
                let message = match &receipt {
                    Receipt::Transfer { to, amount, .. } => {
                        format!("Sent {} to {}", self.renderer.money(*amount), to)
                    }
                    Receipt::Loan { amount, .. } => {
                        format!("Loan of {} granted", self.renderer.money(*amount))
                    }
                };
                self.renderer.message(&message);
                self.show();
            }
            Err(e) => self.reject(context, &e),
        }
    }

    fn reject(&mut self, context: &str, e: &ActionError) {
        warn!("{}: {}", context, e);
        self.renderer.message(&format!("{}: {}", context, e));
    }
}
