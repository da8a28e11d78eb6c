use anyhow::Result;
use tracing::info;

use crate::{cli::ConfigArgs, AppCtx};

pub fn handle(args: ConfigArgs, ctx: &AppCtx) -> Result<()> {
    let mut settings = ctx.settings_store.load()?;
    if args.seed.is_none() && args.currency.is_none() {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    if let Some(seed) = args.seed {
        settings.seed_file = Some(seed);
    }
    if let Some(currency) = args.currency {
        settings.currency = Some(currency);
    }
    ctx.settings_store.save(&settings)?;
    info!("Configuration saved successfully ✅");
    Ok(())
}
