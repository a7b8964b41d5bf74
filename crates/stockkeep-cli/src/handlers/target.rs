use anyhow::{Result, bail};
use stockkeep_runtime::InventoryWorkspace;
use stockkeep_types::ItemId;

use crate::args::TargetArgs;

/// Turn an id or a `--position` (under `search`) into an item id.
///
/// A position is resolved against the filtered, name-ordered list, the same
/// rows the TUI would show for that search term.
pub(crate) fn resolve(
    workspace: &mut InventoryWorkspace,
    target: &TargetArgs,
    search: Option<&str>,
) -> Result<Option<ItemId>> {
    match (target.id, target.position) {
        (Some(id), _) => Ok(Some(id)),
        (None, Some(position)) => {
            workspace.set_search(search.unwrap_or_default())?;
            Ok(workspace.resolve(position)?)
        }
        (None, None) => bail!("Pass an item id or --position"),
    }
}
