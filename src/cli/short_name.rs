//! Display name command.

use crate::cli::common::{load_catalog, print_json, CliContext, CliError, CliResult};
use crate::keycode_db::display::short_name_for_keycode;
use clap::Args;
use serde::Serialize;

/// Show the key cap label of a catalog keycode at a render size
#[derive(Debug, Clone, Args)]
pub struct ShortNameArgs {
    /// Catalog keycode (e.g. "KC_BSPC")
    #[arg(value_name = "CODE")]
    pub code: String,

    /// Key cap render size (defaults to the configured size)
    #[arg(long, value_name = "N")]
    pub size: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ShortNameOutput<'a> {
    code: &'a str,
    name: &'a str,
    size: u32,
    short_name: String,
}

impl ShortNameArgs {
    /// Execute the short-name command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let size = match self.size {
            Some(size) => size,
            None => ctx.config()?.display.label_size,
        };
        let db = load_catalog()?;

        let keycode = db
            .get(&self.code)
            .ok_or_else(|| CliError::validation(format!("Unknown keycode: {}", self.code)))?;

        let output = ShortNameOutput {
            code: &keycode.code,
            name: &keycode.name,
            size,
            short_name: short_name_for_keycode(keycode, size),
        };

        if self.json {
            print_json(&output)?;
        } else {
            println!("{}", output.short_name);
        }

        Ok(())
    }
}
