use super::common::{ItemFieldArgs, TargetArgs};
use clap::Subcommand;
use stockkeep_types::ItemId;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive inventory manager (default)")]
    Tui {
        /// Skip the welcome screen
        #[arg(long)]
        no_splash: bool,
    },

    #[command(about = "Add, edit, delete and list items")]
    Item {
        #[command(subcommand)]
        command: ItemCommand,
    },
}

#[derive(Subcommand)]
pub enum ItemCommand {
    #[command(about = "Register a new item")]
    Add {
        #[command(flatten)]
        fields: ItemFieldArgs,
    },

    #[command(about = "Change an existing item; omitted fields keep their value")]
    Edit {
        #[command(flatten)]
        target: TargetArgs,

        /// Filter applied before resolving --position
        #[arg(long, requires = "position")]
        search: Option<String>,

        #[command(flatten)]
        fields: ItemFieldArgs,
    },

    #[command(about = "Delete an item")]
    Delete {
        #[command(flatten)]
        target: TargetArgs,

        /// Filter applied before resolving --position
        #[arg(long, requires = "position")]
        search: Option<String>,
    },

    #[command(about = "Show a single item")]
    Show { id: ItemId },

    #[command(about = "List items ordered by name")]
    List {
        /// Case-insensitive match on name or category
        #[arg(long)]
        search: Option<String>,
    },
}
