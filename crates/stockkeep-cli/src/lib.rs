// NOTE: stockkeep Architecture Rationale
//
// Why a workspace context object (not module-level state)?
// - The store handle and the view flags share one lifetime: opened at startup, dropped at exit
// - Tests drive the whole add/edit/search/delete loop without a terminal
//
// Why ids on rows (not list positions)?
// - A position is only meaningful for the list currently on screen
// - `--position` survives as a shim and resolves against the same filter the user sees
//
// Why two surfaces (TUI and `item` subcommands)?
// - The TUI is the day-to-day tool
// - Subcommands make every operation scriptable and end-to-end testable

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ItemCommand};
pub use commands::run;
