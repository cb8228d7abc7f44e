//! tracing setup.
//!
//! The terminal is the game surface, so log lines go to a file. `RUST_LOG`
//! overrides the default `info` filter.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a file-backed subscriber. Without a path logging stays off.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    // Ignore a second init; tests may already have installed one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
