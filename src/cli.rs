use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, author, about, long_about = None)]
pub struct Cli {
    /// Optional path to a settings JSON file, instead of the platform config directory
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Print more logs (-v debug, -vv trace). `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure the CLI
    Config(ConfigArgs),

    /// List the accounts of the bank with their balance and summary
    Accounts(AccountsArgs),

    /// Open an interactive session: log in, transfer, borrow, sort and close accounts
    Shell,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// JSON file with the accounts to start from (owner, movements, interestRate, pin)
    #[arg(long, value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// Currency symbol printed after amounts (e.g: "€", "$")
    #[arg(long, value_name = "SYMBOL")]
    pub currency: Option<String>,
}

#[derive(Args)]
pub struct AccountsArgs {
    /// Only show the account with this username (e.g: "js")
    #[arg(short, long, value_name = "USERNAME", value_parser = parse_username)]
    pub user: Option<String>,

    /// Print the accounts as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

fn parse_username(s: &str) -> Result<String, String> {
    let t = s.trim();
    if t.is_empty() {
        return Err("Username cannot be empty".into());
    }
    Ok(t.to_owned())
}
