//! LazyZMK - Vial to ZMK keymap converter and layer diagram renderer
//!
//! Converts Vial .vil layout exports to ZMK keymap files and renders
//! each keymap layer as a labeled PNG diagram of the split board.

use clap::{Parser, Subcommand};
use lazyzmk::cli::{ConvertArgs, RenderArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// LazyZMK - Vial to ZMK keymap converter and layer diagram renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a Vial .vil layout to a ZMK keymap file
    Convert(ConvertArgs),
    /// Render per-layer PNG diagrams from a ZMK keymap file
    Render(RenderArgs),
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Commands::Convert(args) => args.execute(),
        Commands::Render(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.code as i32);
    }
}
