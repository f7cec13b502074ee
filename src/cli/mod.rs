//! Command-line interface.
//!
//! Without a subcommand `disruption` launches the TUI; the subcommands work
//! on the same config and state files without opening it.

mod commands;
mod common;
mod completions;

pub use common::*;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Terminal client for the Disruption Community business network
#[derive(Parser, Debug)]
#[command(
    name = "disruption",
    version,
    about = "Terminal client for the Disruption Community business network",
    long_about = None,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to use instead of ~/.config/disruption/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color theme, overriding the config file
    #[arg(long, global = true, value_parser = ["dark", "light", "nocolor"])]
    pub theme: Option<String>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,

    /// Keep the onboarding flag in memory for this session only
    #[arg(long)]
    pub ephemeral: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List directory members
    Members {
        /// Case-insensitive match on name or company
        #[arg(short, long)]
        search: Option<String>,
        /// Exact segment name, e.g. "Tecnologia" ("all" for every segment)
        #[arg(long)]
        segment: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show onboarding again on the next login
    ResetOnboarding,
    /// Shows logs location and how to view them
    Logs,
    /// Generate shell completions
    Completions {
        /// Target shell (detected from $SHELL when omitted)
        #[arg(value_enum)]
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Config file location: `--config` or the default path
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Run a subcommand. Returns `false` when there is none and the TUI
    /// should start.
    pub fn execute(&self) -> Result<bool> {
        let Some(command) = &self.command else {
            return Ok(false);
        };
        match command {
            Commands::Members {
                search,
                segment,
                json,
            } => commands::members(search.as_deref(), segment.as_deref(), *json)?,
            Commands::ResetOnboarding => {
                let ctx = CliContext::load(&self.config_path())?;
                commands::reset_onboarding(&ctx)?;
            }
            Commands::Logs => commands::logs(),
            Commands::Completions { shell } => completions::generate(*shell)?,
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_members() {
        let cli = Cli::parse_from(["disruption", "members", "--search", "ana", "--segment", "Varejo"]);
        match cli.command {
            Some(Commands::Members {
                search,
                segment,
                json,
            }) => {
                assert!(!json);
                assert_eq!(search.as_deref(), Some("ana"));
                assert_eq!(segment.as_deref(), Some("Varejo"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["disruption", "--theme", "light", "--no-colors", "--ephemeral"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.theme.as_deref(), Some("light"));
        assert!(cli.no_colors);
        assert!(cli.ephemeral);
        assert!(Cli::try_parse_from(["disruption", "--theme", "pink"]).is_err());
    }

    #[test]
    fn test_config_path_override() {
        let cli = Cli::parse_from(["disruption", "--config", "/tmp/d/config.toml"]);
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/d/config.toml"));
    }
}
