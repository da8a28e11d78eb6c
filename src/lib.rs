use anyhow::Result;

pub mod cli;
mod commands;
pub mod services;
pub mod settings;
pub mod ux;

use cli::{Cli, Commands};
use settings::{FileSettingsStore, JsonFileSettingsStore, SettingsStore};

pub struct AppCtx {
    pub settings_store: Box<dyn SettingsStore>,
}

impl AppCtx {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let settings_store: Box<dyn SettingsStore> = match &cli.settings {
            Some(path) => Box::new(JsonFileSettingsStore::new(path.clone())),
            None => Box::new(FileSettingsStore::new()?),
        };
        Ok(Self { settings_store })
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let ctx = AppCtx::from_cli(&cli)?;
    match cli.command {
        Commands::Config(args) => commands::config::handle(args, &ctx),
        Commands::Accounts(args) => commands::accounts::handle(args, &ctx),
        Commands::Shell => commands::shell::handle(&ctx),
    }
}
