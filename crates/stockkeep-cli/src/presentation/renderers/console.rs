use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, TextStyle,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    style: TextStyle,
}

impl ConsoleRenderer {
    /// Colors only when stdout is a terminal.
    pub fn new(format: OutputFormat) -> Self {
        let style = if std::io::stdout().is_terminal() {
            TextStyle::Colored
        } else {
            TextStyle::Plain
        };
        Self { format, style }
    }

    pub fn with_style(format: OutputFormat, style: TextStyle) -> Self {
        Self { format, style }
    }

    /// Write the result to `out`; `render` points this at stdout.
    pub fn write_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.format == OutputFormat::Json {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        let colored = self.style == TextStyle::Colored;

        if let Some(badge) = &result.badge {
            if colored {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.style))?;

        if !result.suggestions.is_empty() {
            if colored {
                writeln!(out, "\n{}", "Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\nTips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if colored {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, &result)
    }
}
