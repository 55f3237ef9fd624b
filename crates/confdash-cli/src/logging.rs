//! Tracing setup for the confdash CLI
//!
//! `RUST_LOG` takes precedence over `--log-level`, e.g.
//! `RUST_LOG=confdash_index=debug confdash stats --conference AAAI`.
//! Output goes to stderr.

use crate::types::LogLevel;
use anyhow::{Result, anyhow};
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

pub fn init_logging(level: LogLevel) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(matches!(level, LogLevel::Debug | LogLevel::Trace))
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
