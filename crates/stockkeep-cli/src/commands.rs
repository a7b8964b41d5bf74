use anyhow::Result;
use is_terminal::IsTerminal;
use stockkeep_runtime::resolve_data_dir;

use super::args::{Cli, Commands, ItemCommand};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging::{self, LogTarget};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir, cli.format);

    let Some(command) = cli.command else {
        // Bare `stockkeep`: the TUI when interactive, a short guide otherwise.
        if !std::io::stdout().is_terminal() {
            logging::init(cli.log_level, LogTarget::Stderr)?;
            return handlers::guidance::handle(&ctx);
        }
        logging::init(cli.log_level, LogTarget::File(&ctx.log_path()))?;
        return handlers::tui::handle(&ctx, false);
    };

    match command {
        Commands::Tui { no_splash } => {
            logging::init(cli.log_level, LogTarget::File(&ctx.log_path()))?;
            handlers::tui::handle(&ctx, no_splash)
        }

        Commands::Item { command } => {
            logging::init(cli.log_level, LogTarget::Stderr)?;

            match command {
                ItemCommand::Add { fields } => handlers::item_add::handle(&ctx, &fields),
                ItemCommand::Edit {
                    target,
                    search,
                    fields,
                } => handlers::item_edit::handle(&ctx, &target, search, &fields),
                ItemCommand::Delete { target, search } => {
                    handlers::item_delete::handle(&ctx, &target, search)
                }
                ItemCommand::Show { id } => handlers::item_show::handle(&ctx, id),
                ItemCommand::List { search } => handlers::item_list::handle(&ctx, search),
            }
        }
    }
}
