//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the config file path
    Path(ConfigPathArgs),
    /// Write a default config file
    Init(ConfigInitArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Print the config file path
#[derive(Args, Debug)]
pub struct ConfigPathArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write a default config file
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    force: bool,
}

#[derive(Serialize, Debug)]
struct ConfigPathOutput {
    path: String,
    exists: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(ctx),
            ConfigCommand::Path(args) => args.execute(ctx),
            ConfigCommand::Init(args) => args.execute(ctx),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let config = ctx.config()?;

        if self.json {
            print_json(&config)?;
        } else {
            let content = toml::to_string_pretty(&config)
                .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?;
            println!("# {} configuration ({})", APP_NAME, ctx.config_path().display());
            print!("{content}");
        }

        Ok(())
    }
}

impl ConfigPathArgs {
    /// Execute path command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let path = ctx.config_path();

        if self.json {
            print_json(&ConfigPathOutput {
                path: path.display().to_string(),
                exists: path.exists(),
            })?;
        } else {
            println!("{}", path.display());
        }

        Ok(())
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let path = ctx.config_path();

        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        Config::new()
            .save_to(path)
            .map_err(|e| CliError::io(format!("Failed to write configuration: {e:#}")))?;

        println!("Wrote {}", path.display());
        Ok(())
    }
}
