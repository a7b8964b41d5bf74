// NOTE: Command Organization Rationale
//
// Why a namespaced `item` command (not flat add/edit/delete)?
// - Keeps the top level free for the TUI and future namespaces
// - `item add` vs `item list` reads the same as the buttons in the TUI

mod commands;
mod common;

pub use commands::*;
pub use common::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "stockkeep")]
#[command(about = "Keep track of stock items in a local inventory", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $STOCKKEEP_PATH, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
