use anyhow::{Result, anyhow};
use is_terminal::IsTerminal;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use crate::types::LogLevel;

/// Where log lines go for the current process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// One-shot commands: plain stderr, stdout stays clean for output
    Stderr,
    /// The TUI owns the screen, so logs are appended to a file
    File(&'a Path),
}

/// Install the global `fmt` subscriber. Call once, before any command runs.
pub fn init(level: LogLevel, target: LogTarget<'_>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level.as_filter())
        .with_target(false);

    let installed = match target {
        LogTarget::Stderr => builder
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|e| anyhow!("Failed to install logger: {}", e))
}
