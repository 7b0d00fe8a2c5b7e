//! CLI for herofaces.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use herofaces_core::config::{self, HeroFacesConfig};
use std::path::PathBuf;

use commands::{run_completions, run_faces, run_plan, run_renew, run_sync, run_update};

/// Top-level CLI for herofaces.
#[derive(Debug, Parser)]
#[command(name = "herofaces")]
#[command(about = "Mirror unit face portraits from the wiki into a local asset store", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/herofaces/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the data directory from the config.
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every missing unit face.
    Faces,

    /// List the face downloads a run would perform, without downloading.
    Plan,

    /// Refresh dataset and helper scripts from the upstream repository.
    Sync,

    /// Run the upstream renew-data script.
    Renew,

    /// Sync, renew, then download faces.
    Update,

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub fn wants_logging(&self) -> bool {
        !matches!(self.command, CliCommand::Completions { .. })
    }

    fn load_config(&self) -> Result<HeroFacesConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_or_init_at(path)?,
            None => config::load_or_init()?,
        };
        if let Some(dir) = &self.data_dir {
            cfg.data_dir = dir.clone();
        }
        Ok(cfg)
    }

    pub fn run(self) -> Result<()> {
        if let CliCommand::Completions { shell } = self.command {
            run_completions(shell);
            return Ok(());
        }

        let cfg = self.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match self.command {
            CliCommand::Faces => run_faces(&cfg)?,
            CliCommand::Plan => run_plan(&cfg)?,
            CliCommand::Sync => run_sync(&cfg)?,
            CliCommand::Renew => run_renew(&cfg)?,
            CliCommand::Update => run_update(&cfg)?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
