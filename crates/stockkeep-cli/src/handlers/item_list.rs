use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext, search: Option<String>) -> Result<()> {
    let mut workspace = ctx.open_workspace()?;
    let refresh = workspace.set_search(search.unwrap_or_default())?;

    let view_model = presenters::present_item_list(&refresh.listing);
    ConsoleRenderer::new(ctx.format.into()).render(view_model)
}
