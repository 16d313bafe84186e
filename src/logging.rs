//! Tracing subscriber setup.
//!
//! The terminal belongs to the UI, so logs only go to a file. Filter
//! priority: `POKEDEX_LOG`, then `RUST_LOG`, then `warn`.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "warn";

/// Install the global subscriber writing to `path`. Without a path nothing is
/// installed and every event is dropped.
pub fn init(path: Option<&Path>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_env_filter())
        .with(layer)
        .try_init()
        .map_err(io::Error::other)
}

fn build_env_filter() -> EnvFilter {
    if let Ok(directives) = std::env::var("POKEDEX_LOG") {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}
