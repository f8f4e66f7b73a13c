//! Byte to string keycode conversion command.

use crate::cli::common::{print_json, CliContext, CliError, CliResult, CodecArgs};
use clap::Args;
use serde::Serialize;

/// Decode a protocol byte into its keycode and key cap label
#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    /// Byte to decode, decimal or 0x-prefixed hex
    #[arg(value_name = "BYTE")]
    pub byte: String,

    /// Key cap render size for the label (defaults to the configured size)
    #[arg(long, value_name = "N")]
    pub size: Option<u32>,

    #[command(flatten)]
    pub codec: CodecArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct DecodeOutput {
    byte: u16,
    hex: String,
    code: String,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    macro_index: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_index: Option<u16>,
}

impl DecodeArgs {
    /// Execute the decode command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let byte = parse_byte(&self.byte)?;
        let config = ctx.config()?;
        let codec = self.codec.build(&config)?;
        let size = self.size.unwrap_or(config.display.label_size);

        let output = DecodeOutput {
            byte,
            hex: format!("0x{byte:04x}"),
            code: codec.code_for_byte(byte),
            label: codec.label_for_byte(byte, size),
            macro_index: codec
                .is_macro_keycode_byte(byte)
                .then(|| codec.macro_keycode_index(byte))
                .flatten(),
            custom_index: codec
                .is_custom_keycode_byte(byte)
                .then(|| codec.custom_keycode_index(byte))
                .flatten(),
        };

        if self.json {
            print_json(&output)?;
        } else {
            println!("{} = {}", output.hex, output.code);
            println!("Label: {}", output.label);
            if let Some(idx) = output.macro_index {
                println!("Macro: {idx}");
            }
            if let Some(idx) = output.custom_index {
                println!("Custom keycode: {idx}");
            }
        }

        Ok(())
    }
}

/// Parses a byte given as decimal or `0x` hex.
fn parse_byte(text: &str) -> CliResult<u16> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|_| {
        CliError::validation(format!(
            "Invalid byte '{text}': expected a decimal or 0x-prefixed hex value up to 0xffff"
        ))
    })
}
