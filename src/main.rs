use anyhow::Result;
use clap::Parser;

use bankist_cli::{cli::Cli, settings::init_logger};

fn main() -> Result<()> {
    let cli = Cli::parse();
    #[cfg(not(tarpaulin_include))]
    init_logger(cli.verbose)?;
    bankist_cli::run(cli)?;
    Ok(())
}
