use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::formatters::item::count_label;

/// Printed instead of the TUI when stdout is not a terminal.
pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let db_path = ctx.database_path()?;

    println!("stockkeep - terminal inventory manager\n");

    if db_path.exists() {
        let workspace = ctx.open_workspace()?;
        let count = workspace.repository().count()?;
        println!("Inventory: {} ({})\n", db_path.display(), count_label(count));
    } else {
        println!("Inventory: {} (not created yet)\n", db_path.display());
    }

    println!("Quick commands:");
    println!("  stockkeep                                  # Open the interactive manager");
    println!("  stockkeep item list [--search TEXT]        # List items");
    println!("  stockkeep item add --name N --quantity Q   # Register an item");
    println!("  stockkeep item edit <ID> --quantity Q      # Change an item");
    println!("  stockkeep item delete <ID>                 # Delete an item\n");

    println!("For more commands:");
    println!("  stockkeep --help");
    Ok(())
}
