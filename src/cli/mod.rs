//! CLI command handlers for LazyZMK.
//!
//! Each subcommand lives in its own module with a clap `Args` struct
//! exposing `execute()`, giving scriptable access for automation and
//! CI use.

pub mod common;
pub mod convert;
pub mod render;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use convert::ConvertArgs;
pub use render::RenderArgs;
