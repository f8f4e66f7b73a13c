//! String keycode to byte conversion command.

use crate::cli::common::{print_json, CliContext, CliError, CliResult, CodecArgs};
use clap::Args;
use serde::Serialize;

/// Encode a keycode (e.g. "KC_A", "MO(2)", "LCTL(KC_C)") into its protocol byte
#[derive(Debug, Clone, Args)]
pub struct EncodeArgs {
    /// Keycode to encode
    #[arg(value_name = "CODE")]
    pub code: String,

    #[command(flatten)]
    pub codec: CodecArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct EncodeOutput<'a> {
    code: &'a str,
    byte: u16,
    hex: String,
}

impl EncodeArgs {
    /// Execute the encode command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let config = ctx.config()?;
        let codec = self.codec.build(&config)?;

        let byte = codec
            .byte_for_code(&self.code)
            .map_err(|e| CliError::validation(e.to_string()))?;

        let output = EncodeOutput {
            code: &self.code,
            byte,
            hex: format!("0x{byte:04x}"),
        };

        if self.json {
            print_json(&output)?;
        } else {
            println!("{} = {} ({})", output.code, output.hex, output.byte);
        }

        Ok(())
    }
}
