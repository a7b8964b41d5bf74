use anyhow::{Result, bail};

use super::target;
use crate::args::{ItemFieldArgs, TargetArgs};
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(
    ctx: &ExecutionContext,
    target: &TargetArgs,
    search: Option<String>,
    fields: &ItemFieldArgs,
) -> Result<()> {
    if fields.is_empty() {
        bail!("Nothing to change: pass at least one of --name, --category, --quantity, --min-stock");
    }

    let renderer = ConsoleRenderer::new(ctx.format.into());
    let mut workspace = ctx.open_workspace()?;

    let Some(id) = target::resolve(&mut workspace, target, search.as_deref())? else {
        return renderer.render(presenters::present_not_found(None, target.position, search));
    };

    // Same path as the form: load the stored values, overlay the flags, submit.
    workspace.edit(id)?;
    if workspace.state().edit_target() != Some(id) {
        return renderer.render(presenters::present_not_found(Some(id.get()), None, None));
    }

    let draft = fields.apply_to(workspace.state().form().clone());
    *workspace.state_mut().form_mut() = draft;
    let refresh = workspace.submit()?;

    match workspace.repository().get(id)? {
        Some(item) => {
            renderer.render(presenters::present_item_saved(&item, refresh.notice.as_ref()))
        }
        None => renderer.render(presenters::present_not_found(Some(id.get()), None, None)),
    }
}
