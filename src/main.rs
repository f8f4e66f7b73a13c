//! Keycat - keycode catalog and converter
//!
//! This binary exposes the keycode catalog, the code/byte converter and
//! the label helpers as scriptable subcommands with JSON output.

use clap::{Parser, Subcommand};
use keycat::cli::{
    CliContext, CliResult, ConfigArgs, DecodeArgs, EncodeArgs, KeycodesArgs, LabelArgs, MenusArgs,
    OtherArgs, PanesArgs, ShortNameArgs,
};
use keycat::constants::{APP_BINARY_NAME, APP_VERSION};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Keycat - keycode catalog and code/byte converter for VIA-style keyboards
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, version = APP_VERSION, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List keycodes
    Keycodes(KeycodesArgs),
    /// List keycode menus
    Menus(MenusArgs),
    /// Encode a keycode into its byte
    Encode(EncodeArgs),
    /// Decode a byte into its keycode
    Decode(DecodeArgs),
    /// Classify a key cap label
    Label(LabelArgs),
    /// Show a keycode's key cap label
    ShortName(ShortNameArgs),
    /// List byte table codes missing from the catalog
    Other(OtherArgs),
    /// List configurator panes
    Panes(PanesArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn run(cli: Cli) -> CliResult<()> {
    let ctx = CliContext::new(cli.config)?;

    match cli.command {
        Commands::Keycodes(args) => args.execute(&ctx),
        Commands::Menus(args) => args.execute(),
        Commands::Encode(args) => args.execute(&ctx),
        Commands::Decode(args) => args.execute(&ctx),
        Commands::Label(args) => args.execute(),
        Commands::ShortName(args) => args.execute(&ctx),
        Commands::Other(args) => args.execute(&ctx),
        Commands::Panes(args) => args.execute(),
        Commands::Config(args) => args.execute(&ctx),
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays parseable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err.message);
        std::process::exit(err.exit_code());
    }
}
