use anyhow::{Context, Result};
use bankist::{account::Account, summary::Summary, AccountStore};
use serde::Serialize;
use std::io::stdout;
use tracing::info;

use crate::{cli::AccountsArgs, ux::TerminalRenderer, AppCtx};

/// An account with its computed figures, as printed by `--json`
#[derive(Serialize)]
struct AccountReport<'a> {
    #[serde(flatten)]
    account: &'a Account,
    summary: Summary,
}

pub fn handle(args: AccountsArgs, ctx: &AppCtx) -> Result<()> {
    let settings = ctx.settings_store.load()?;
    let store = settings.account_store()?;
    let mut renderer = TerminalRenderer::new(stdout(), settings.currency());

    let accounts = select(&store, args.user.as_deref())?;
    info!("Found {} accounts", accounts.len());

    if args.json {
        renderer.message(&to_json(&accounts)?);
    } else {
        for account in accounts {
            let line = renderer.account_line(account);
            renderer.message(&line);
        }
    }
    Ok(())
}

fn select<'a>(store: &'a AccountStore, user: Option<&str>) -> Result<Vec<&'a Account>> {
    match user {
        Some(username) => {
            let account = store.find(username).with_context(|| {
                format!("Account '{}' not found. Run `bankist accounts` to list the accounts", username)
            })?;
            Ok(vec![account])
        }
        None => Ok(store.iter().collect()),
    }
}

fn to_json(accounts: &[&Account]) -> Result<String> {
    let reports: Vec<AccountReport> = accounts
        .iter()
        .map(|&account| AccountReport {
            account,
            summary: Summary::of(account),
        })
        .collect();
    serde_json::to_string_pretty(&reports).context("Failed to serialize accounts")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bankist::types::Pin;
    use serde_json::{json, Value};

    #[test]
    fn test_select() {
        let store = AccountStore::demo();
        assert_eq!(select(&store, None).unwrap().len(), 4);
        assert_eq!(select(&store, Some("stw")).unwrap()[0].owner, "Steven Thomas Williams");
        assert!(select(&store, Some("zz")).is_err());
    }

    #[test]
    fn test_to_json_hides_pin() {
        let store = AccountStore::new(vec![Account::new("Agent 007", vec![100.0, -40.0], 2.0, Pin::new(7))]);
        let accounts = select(&store, Some("a0")).unwrap();
        let value: Value = serde_json::from_str(&to_json(&accounts).unwrap()).unwrap();

        assert_eq!(
            value,
            json!([{
                "owner": "Agent 007",
                "username": "a0",
                "movements": [100.0, -40.0],
                "interestRate": 2.0,
                "summary": {
                    "balance": 60.0,
                    "totalDeposits": 100.0,
                    "totalWithdrawals": 40.0,
                    "interest": 2.0
                }
            }])
        );
    }
}
