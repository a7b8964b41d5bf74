use anyhow::{Result, bail};
use is_terminal::IsTerminal;

use crate::context::ExecutionContext;
use crate::presentation::{TuiOptions, TuiRenderer};

pub fn handle(ctx: &ExecutionContext, no_splash: bool) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("The inventory manager needs an interactive terminal; use `stockkeep item ...` instead");
    }

    // Store problems surface here, before the terminal is taken over.
    let workspace = ctx.open_workspace()?;
    let options = TuiOptions::from_config(ctx.config()?, no_splash);

    tracing::info!(data_dir = %ctx.data_dir().display(), "starting inventory manager");
    TuiRenderer::run(workspace, options)
}
