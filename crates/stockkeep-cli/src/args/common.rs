use clap::Args;
use stockkeep_types::{ItemDraft, ItemId};

/// Which item an edit or delete acts on.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct TargetArgs {
    /// Item id, as shown by `item list`
    pub id: Option<ItemId>,

    /// Zero-based row in the name-ordered list (filtered by --search)
    #[arg(long)]
    pub position: Option<usize>,
}

// Form fields as command-line flags.
//
// Values are kept as raw text and validated the same way the TUI form is,
// so `--quantity abc` is reported as a validation error rather than a usage
// error.
#[derive(Args, Debug, Clone, Default)]
pub struct ItemFieldArgs {
    #[arg(long)]
    pub name: Option<String>,

    /// Empty string clears the category
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub quantity: Option<String>,

    /// Empty string clears the minimum
    #[arg(long, allow_negative_numbers = true)]
    pub min_stock: Option<String>,
}

impl ItemFieldArgs {
    /// Overlay the given flags on `base`; absent flags keep the base value.
    pub fn apply_to(&self, base: ItemDraft) -> ItemDraft {
        ItemDraft {
            name: self.name.clone().unwrap_or(base.name),
            category: self.category.clone().unwrap_or(base.category),
            quantity: self.quantity.clone().unwrap_or(base.quantity),
            min_stock: self.min_stock.clone().unwrap_or(base.min_stock),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.quantity.is_none()
            && self.min_stock.is_none()
    }
}
