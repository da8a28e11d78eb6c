use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use std::{
    fs,
    io::{stderr, IsTerminal},
    path::PathBuf,
};
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

use crate::settings::consts::{
    APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, DEFAULT_LOG_LEVEL, LOG_FILE,
};

/// Human readable events on stderr, and a JSON copy of everything in
/// `<data dir>/bankist.log`.
///
/// `RUST_LOG` wins over `verbosity` for the console. The file always gets
/// every level so a session can be replayed after the fact.
#[cfg(not(tarpaulin_include))]
pub fn init_logger(verbosity: u8) -> Result<()> {
    let directory = log_directory()?;
    fs::create_dir_all(&directory)?;

    // shell output already goes to stdout, keep logs terse and off it
    let console = fmt::layer()
        .with_writer(stderr)
        .with_ansi(stderr().is_terminal())
        .with_target(verbosity > 1)
        .without_time()
        .compact()
        .with_filter(console_filter(verbosity));

    let journal = fmt::layer()
        .json()
        .with_writer(rolling::never(&directory, LOG_FILE))
        .flatten_event(true)
        .with_current_span(false)
        .with_filter(LevelFilter::TRACE);

    registry().with(console).with(journal).try_init()?;
    Ok(())
}

fn log_directory() -> Result<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| anyhow!("Could not determine project directories"))
}

fn console_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(console_level(verbosity)))
}

fn console_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_LOG_LEVEL,
        1 => "debug",
        _ => "trace",
    }
}
