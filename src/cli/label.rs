//! Label classification command.

use crate::cli::common::{print_json, CliResult};
use crate::keycode_db::labels::{self, LabelClass};
use clap::Args;
use serde::Serialize;

/// Classify a key cap label (alpha, arrow, numpad symbol, ...)
#[derive(Debug, Clone, Args)]
pub struct LabelArgs {
    /// Label text; use "\n" to separate two legends
    #[arg(value_name = "LABEL")]
    pub label: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LabelOutput<'a> {
    label: &'a str,
    class: LabelClass,
    alpha: bool,
    numpad_number: bool,
    arrow: bool,
    numpad_symbol: bool,
    multi_legend: bool,
    numeric_or_shifted_symbol: bool,
    numeric_symbol: bool,
}

impl LabelArgs {
    /// Execute the label command
    pub fn execute(&self) -> CliResult<()> {
        // Shells pass "\n" literally
        let label = self.label.replace("\\n", "\n");

        let output = LabelOutput {
            label: &label,
            class: labels::classify(&label),
            alpha: labels::is_alpha(&label),
            numpad_number: labels::is_numpad_number(&label),
            arrow: labels::is_arrow_key(&label),
            numpad_symbol: labels::is_numpad_symbol(&label),
            multi_legend: labels::is_multi_legend(&label),
            numeric_or_shifted_symbol: labels::is_numeric_or_shifted_symbol(&label),
            numeric_symbol: labels::is_numeric_symbol(&label),
        };

        if self.json {
            print_json(&output)?;
        } else {
            println!("{}", output.class.as_str());
        }

        Ok(())
    }
}
