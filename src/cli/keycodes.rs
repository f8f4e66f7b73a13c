//! Keycode listing command.

use crate::cli::common::{load_catalog, print_json, CliContext, CliError, CliResult};
use crate::keycode_db::display::short_name_for_keycode;
use crate::keycode_db::search_keycodes;
use crate::models::{KeyboardCapabilities, Keycode, KeycodeModule};
use crate::parser::load_capabilities;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// List keycodes, optionally filtered by keyboard, menu or search text
#[derive(Debug, Clone, Args)]
pub struct KeycodesArgs {
    /// Only keycodes in this menu (see `menus`)
    #[arg(long, value_name = "ID")]
    pub menu: Option<String>,

    /// Case-insensitive search over code, name and title
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Keyboard definition to filter by (overrides the configured one)
    #[arg(short, long, value_name = "FILE")]
    pub definition: Option<PathBuf>,

    /// Comma-separated keycode modules to filter by (e.g. "default,qmk_lighting")
    #[arg(long, value_name = "LIST", conflicts_with = "definition")]
    pub modules: Option<String>,

    /// Number of dynamic macros on the device
    #[arg(long, value_name = "N")]
    pub macro_count: Option<u8>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct KeycodeInfo {
    code: String,
    name: String,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

#[derive(Debug, Serialize)]
struct KeycodesOutput {
    keycodes: Vec<KeycodeInfo>,
    count: usize,
}

impl KeycodesArgs {
    /// Execute the keycodes command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let config = ctx.config()?;
        let db = load_catalog()?;

        let capabilities = self.capabilities(config.keyboard.definition.as_ref())?;
        let mut keycodes: Vec<Keycode> = match capabilities {
            Some(capabilities) => {
                let list = db.keycodes_for_keyboard(&capabilities);
                match &self.search {
                    // Searched after filtering so keyboard-specific names match
                    Some(query) => search_keycodes(&list, query).into_iter().cloned().collect(),
                    None => list,
                }
            }
            None => db
                .search(self.search.as_deref().unwrap_or_default())
                .into_iter()
                .cloned()
                .collect(),
        };

        if let Some(menu_id) = &self.menu {
            let menu = db
                .menu(menu_id)
                .ok_or_else(|| CliError::validation(format!("Unknown menu: {menu_id}")))?;
            keycodes.retain(|k| menu.get(&k.code).is_some());
        }

        let size = config.display.label_size;
        let infos: Vec<KeycodeInfo> = keycodes
            .iter()
            .map(|k| KeycodeInfo {
                code: k.code.clone(),
                name: k.name.clone(),
                label: short_name_for_keycode(k, size),
                title: k.title.clone(),
            })
            .collect();

        if self.json {
            print_json(&KeycodesOutput {
                count: infos.len(),
                keycodes: infos,
            })?;
        } else {
            for info in &infos {
                println!("{:<20} {:<12} {}", info.code, info.label, info.name);
            }
            println!();
            println!("{} keycodes", infos.len());
        }

        Ok(())
    }

    /// Resolves the capability filter, if any was requested.
    fn capabilities(
        &self,
        configured: Option<&PathBuf>,
    ) -> CliResult<Option<KeyboardCapabilities>> {
        let capabilities = if let Some(list) = &self.modules {
            let modules = list
                .split(',')
                .filter(|name| !name.trim().is_empty())
                .map(|name| {
                    KeycodeModule::parse(name).ok_or_else(|| {
                        CliError::validation(format!("Unknown keycode module: {}", name.trim()))
                    })
                })
                .collect::<CliResult<Vec<_>>>()?;
            Some(KeyboardCapabilities::from_modules(modules))
        } else if let Some(path) = self.definition.as_ref().or(configured) {
            Some(load_capabilities(path).map_err(|e| CliError::io(format!("{e:#}")))?)
        } else if self.macro_count.is_some() {
            Some(KeyboardCapabilities::standard())
        } else {
            None
        };

        Ok(match (capabilities, self.macro_count) {
            (Some(capabilities), Some(count)) => Some(capabilities.with_macro_count(count)),
            (capabilities, _) => capabilities,
        })
    }
}
