//! # Presentation Layer
//!
//! Turns workspace results into something a person (or a script) reads.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                               ==(Text)==> [ View ]
//! ```
//!
//! The interactive screen reuses the same row view models:
//!
//! ```text
//! [ Key ] --> [ TuiEvent ] --> [ AppState ] --> [ InventoryWorkspace ] --> Refresh
//!                                  |
//!                                  v
//!                           [ Component ] (ratatui widgets)
//! ```
//!
//! * `view_models/`: serializable data only; this is the `--format json` contract.
//! * `presenters/`: domain `Item`/`Listing` into view models, badges and tips.
//! * `formatters/`: text fragments shared by console views and TUI rows.
//! * `views/`: `fmt::Display` layouts for plain output.
//! * `renderers/`: console (text/JSON) and the ratatui TUI.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiOptions, TuiRenderer};
pub use view_models::{CommandResultViewModel, Guidance, OutputFormat, StatusBadge, StatusLevel};
