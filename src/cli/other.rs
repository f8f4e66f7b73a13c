//! "Other" menu command: table codes the catalog does not list.

use crate::cli::common::{print_json, CliContext, CliResult, CodecArgs};
use clap::Args;
use serde::Serialize;

/// List byte table codes missing from the catalog
#[derive(Debug, Clone, Args)]
pub struct OtherArgs {
    #[command(flatten)]
    pub codec: CodecArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct OtherKeycode<'a> {
    code: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct OtherOutput<'a> {
    keycodes: Vec<OtherKeycode<'a>>,
    count: usize,
}

impl OtherArgs {
    /// Execute the other command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let config = ctx.config()?;
        let codec = self.codec.build(&config)?;
        let menu = codec.other_menu();

        let keycodes: Vec<OtherKeycode> = menu
            .keycodes
            .iter()
            .map(|k| OtherKeycode {
                code: &k.code,
                name: &k.name,
            })
            .collect();

        if self.json {
            print_json(&OtherOutput {
                count: keycodes.len(),
                keycodes,
            })?;
        } else {
            for keycode in &keycodes {
                println!("{:<24} {}", keycode.code, keycode.name);
            }
        }

        Ok(())
    }
}
