use anyhow::Result;
use std::io::{stdin, stdout};
use tracing::info;

use crate::{
    services::{Shell, StdinCredentialsProvider},
    ux::TerminalRenderer,
    AppCtx,
};

#[cfg(not(tarpaulin_include))]
pub fn handle(ctx: &AppCtx) -> Result<()> {
    let settings = ctx.settings_store.load()?;
    let store = settings.account_store()?;
    info!("Loaded {} accounts", store.len());

    let renderer = TerminalRenderer::new(stdout(), settings.currency());
    let mut shell = Shell::new(store, renderer, &StdinCredentialsProvider);
    shell.run(stdin().lock())?;

    info!("Bye 👋");
    Ok(())
}
