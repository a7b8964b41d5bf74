use anyhow::{Result, anyhow};
use stockkeep_types::ItemDraft;

use crate::args::ItemFieldArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext, fields: &ItemFieldArgs) -> Result<()> {
    let mut workspace = ctx.open_workspace()?;

    *workspace.state_mut().form_mut() = fields.apply_to(ItemDraft::default());
    let refresh = workspace.submit()?;

    let id = refresh
        .saved
        .ok_or_else(|| anyhow!("Insert did not report a new item id"))?;
    let item = workspace
        .repository()
        .get(id)?
        .ok_or_else(|| anyhow!("Item {} is missing right after insert", id))?;

    let view_model = presenters::present_item_saved(&item, refresh.notice.as_ref());
    ConsoleRenderer::new(ctx.format.into()).render(view_model)
}
