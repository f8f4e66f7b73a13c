//! Keycode menu listing command.

use crate::cli::common::{load_catalog, print_json, CliResult};
use clap::Args;
use serde::Serialize;

/// List keycode menus in picker order
#[derive(Debug, Clone, Args)]
pub struct MenusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct MenuInfo<'a> {
    id: &'a str,
    label: &'a str,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    detailed: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct MenusOutput<'a> {
    menus: Vec<MenuInfo<'a>>,
}

impl MenusArgs {
    /// Execute the menus command
    pub fn execute(&self) -> CliResult<()> {
        let db = load_catalog()?;

        let menus: Vec<MenuInfo> = db
            .menus()
            .iter()
            .map(|menu| MenuInfo {
                id: &menu.id,
                label: &menu.label,
                count: menu.keycodes.len(),
                detailed: menu.detailed.as_deref(),
            })
            .collect();

        if self.json {
            print_json(&MenusOutput { menus })?;
        } else {
            for menu in &menus {
                println!("{:<14} {:<24} {:>4}", menu.id, menu.label, menu.count);
            }
        }

        Ok(())
    }
}
