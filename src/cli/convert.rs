//! Convert command: Vial .vil layout to ZMK keymap file.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::firmware;
use crate::keycode_db::KeycodeDb;
use crate::parser;
use clap::Args;
use std::path::PathBuf;

/// Default keymap output when neither flag nor config names one.
const DEFAULT_KEYMAP_PATH: &str = "corne.keymap";

/// Convert a Vial .vil layout to a ZMK keymap file
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Path to Vial .vil layout file
    #[arg(value_name = "FILE")]
    pub layout: PathBuf,

    /// Output path for the keymap (defaults to config or corne.keymap)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let doc = parser::parse_vial_layout(&self.layout)
            .map_err(|e| CliError::io(format!("Failed to load layout: {e:#}")))?;

        let db = KeycodeDb::load()
            .map_err(|e| CliError::validation(format!("Failed to load keycode table: {e:#}")))?;

        let keymap = firmware::generate_keymap(&db, &doc);
        let output_path = self.output_path();

        firmware::save_keymap(&keymap, &output_path)
            .map_err(|e| CliError::io(format!("Failed to write keymap: {e:#}")))?;

        println!(
            "✓ Generated {} with {} layers",
            output_path.display(),
            doc.layer_count()
        );

        Ok(())
    }

    /// Output path: flag, then config, then the built-in default.
    fn output_path(&self) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        let config = Config::load().unwrap_or_default();
        config
            .keymap
            .output
            .unwrap_or_else(|| PathBuf::from(DEFAULT_KEYMAP_PATH))
    }
}
