//! CabinMap - aircraft seat-map configuration tool
//!
//! Headless access to the seat-map configuration engine: browse aircraft
//! templates, generate seat maps, validate configuration documents and
//! manage named saved configurations.

use cabinmap::cli::{
    CliError, ConfigArgs, ExitCode, GenerateArgs, StoreArgs, TemplateArgs, ValidateArgs,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CabinMap - aircraft seat-map configuration tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse built-in aircraft templates
    Template(TemplateArgs),
    /// Generate a seat map
    Generate(GenerateArgs),
    /// Validate a configuration document
    Validate(ValidateArgs),
    /// Manage named saved configurations
    Store(StoreArgs),
    /// Show or change application settings
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays clean
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result: Result<(), CliError> = match &cli.command {
        Command::Template(args) => args.execute(),
        Command::Generate(args) => args.execute(),
        Command::Validate(args) => args.execute(),
        Command::Store(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code() as i32);
    }

    std::process::exit(ExitCode::Success as i32);
}
