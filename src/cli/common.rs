//! Shared context and output helpers for the subcommands.

use crate::config::Config;
use crate::store::FileStore;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Configuration loaded for a subcommand.
pub struct CliContext {
    pub config: Config,
    pub config_path: PathBuf,
}

impl CliContext {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config =
            Config::load_or_create(config_path).context("Failed to load configuration")?;
        Ok(Self {
            config,
            config_path: config_path.to_path_buf(),
        })
    }

    /// Flag store used by the TUI
    pub fn store(&self) -> FileStore {
        FileStore::open(&self.config.state_path(&self.config_path))
    }
}

/// Print a success message with a check mark prefix.
pub fn print_success(msg: &str) {
    println!("\u{2713} {}", msg);
}

/// Print an error message with an X prefix to stderr.
pub fn print_error(msg: &str) {
    eprintln!("\u{2717} {}", msg);
}

/// Print an info message with an info sign prefix.
pub fn print_info(msg: &str) {
    println!("\u{2139}\u{FE0F} {}", msg);
}
