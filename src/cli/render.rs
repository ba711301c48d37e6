//! Render command: ZMK keymap file to per-layer PNG diagrams.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export;
use clap::Args;
use std::path::PathBuf;

/// Default diagram output directory.
const DEFAULT_OUTPUT_DIR: &str = "images";

/// Render per-layer PNG diagrams from a ZMK keymap file
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Path to ZMK keymap file
    #[arg(value_name = "FILE")]
    pub keymap: PathBuf,

    /// Output directory for the diagrams (defaults to config or ./images)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// TrueType font for key labels (defaults to config or system fonts)
    #[arg(long, value_name = "FILE")]
    pub font: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();

        let output_dir = self
            .output
            .clone()
            .or(config.render.output_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        let font = self.font.clone().or(config.render.font);

        let files = export::render_keymap_file(&self.keymap, &output_dir, font.as_deref())
            .map_err(|e| CliError::io(format!("Failed to render keymap: {e:#}")))?;

        for file in &files {
            println!("✓ {}", output_dir.join(file).display());
        }
        println!("Rendered {} layer diagrams", files.len());

        Ok(())
    }
}
