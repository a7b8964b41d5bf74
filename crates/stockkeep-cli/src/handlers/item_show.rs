use anyhow::Result;
use stockkeep_types::ItemId;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext, id: ItemId) -> Result<()> {
    let renderer = ConsoleRenderer::new(ctx.format.into());
    let workspace = ctx.open_workspace()?;

    match workspace.repository().get(id)? {
        Some(item) => renderer.render(presenters::present_item_detail(&item)),
        None => renderer.render(presenters::present_lookup_miss(id.get())),
    }
}
