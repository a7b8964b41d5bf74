use anyhow::Result;

use super::target;
use crate::args::TargetArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext, target: &TargetArgs, search: Option<String>) -> Result<()> {
    let renderer = ConsoleRenderer::new(ctx.format.into());
    let mut workspace = ctx.open_workspace()?;

    let Some(id) = target::resolve(&mut workspace, target, search.as_deref())? else {
        return renderer.render(presenters::present_not_found(None, target.position, search));
    };

    let Some(item) = workspace.repository().get(id)? else {
        return renderer.render(presenters::present_not_found(Some(id.get()), None, None));
    };

    let refresh = workspace.delete(id)?;
    if refresh.notice.is_none() {
        return renderer.render(presenters::present_not_found(Some(id.get()), None, None));
    }

    renderer.render(presenters::present_item_deleted(&item))
}
