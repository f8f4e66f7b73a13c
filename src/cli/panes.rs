//! Pane route table command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::{pane_by_key, pane_for_path, panes, Pane};
use clap::Args;
use serde::Serialize;

/// List configurator panes, or look one up by key or route
#[derive(Debug, Clone, Args)]
pub struct PanesArgs {
    /// Look up a pane by key (e.g. "test")
    #[arg(long, value_name = "KEY", conflicts_with = "path")]
    pub key: Option<String>,

    /// Look up the pane served at a route (e.g. "/design")
    #[arg(long, value_name = "PATH")]
    pub path: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PanesOutput<'a> {
    panes: &'a [Pane],
}

impl PanesArgs {
    /// Execute the panes command
    pub fn execute(&self) -> CliResult<()> {
        let selected: &[Pane] = if let Some(key) = &self.key {
            std::slice::from_ref(
                pane_by_key(key)
                    .ok_or_else(|| CliError::validation(format!("Unknown pane: {key}")))?,
            )
        } else if let Some(path) = &self.path {
            std::slice::from_ref(
                pane_for_path(path)
                    .ok_or_else(|| CliError::validation(format!("No pane at route: {path}")))?,
            )
        } else {
            panes()
        };

        if self.json {
            print_json(&PanesOutput { panes: selected })?;
        } else {
            for pane in selected {
                println!("{:<10} {:<10} {}", pane.key, pane.path, pane.title);
            }
        }

        Ok(())
    }
}
