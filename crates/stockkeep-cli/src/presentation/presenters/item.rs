use crate::presentation::formatters::item::{count_label, empty_placeholder};
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ItemDeletedViewModel, ItemDetailViewModel,
    ItemListViewModel, ItemNotFoundViewModel, ItemRowViewModel, StatusBadge, StockStatus,
};
use stockkeep_runtime::{Listing, Notice, NoticeLevel};
use stockkeep_types::{Item, StockLevel};

impl From<StockLevel> for StockStatus {
    fn from(level: StockLevel) -> Self {
        match level {
            StockLevel::Normal => StockStatus::Normal,
            StockLevel::Low => StockStatus::Low,
            StockLevel::Out => StockStatus::Out,
        }
    }
}

pub fn present_row(item: &Item) -> ItemRowViewModel {
    ItemRowViewModel {
        id: item.id.get(),
        name: item.name.clone(),
        category: item.category.clone(),
        quantity: item.quantity,
        min_stock: item.min_stock,
        status: item.stock_level().into(),
        last_updated: item.last_updated.clone(),
    }
}

pub fn present_rows(items: &[Item]) -> Vec<ItemRowViewModel> {
    items.iter().map(present_row).collect()
}

pub fn badge_for(notice: &Notice) -> StatusBadge {
    match notice.level {
        NoticeLevel::Success => StatusBadge::success(&notice.message),
        NoticeLevel::Info => StatusBadge::info(&notice.message),
        NoticeLevel::Error => StatusBadge::error(&notice.message),
    }
}

pub fn present_item_list(listing: &Listing) -> CommandResultViewModel<ItemListViewModel> {
    let content = ItemListViewModel {
        items: present_rows(&listing.items),
        total_count: listing.items.len(),
        filter: listing.filter.clone(),
    };

    let result = CommandResultViewModel::new(content);

    if listing.is_empty() {
        let result =
            result.with_badge(StatusBadge::info(empty_placeholder(listing.is_filtered())));
        return if listing.is_filtered() {
            result.with_suggestion(
                Guidance::new("Drop the search to see every item").with_command("stockkeep item list"),
            )
        } else {
            result.with_suggestion(
                Guidance::new("Register your first item")
                    .with_command("stockkeep item add --name <NAME> --quantity <N>"),
            )
        };
    }

    let label = match &listing.filter {
        Some(term) => format!("{} matching '{}'", count_label(listing.items.len()), term),
        None => count_label(listing.items.len()),
    };
    result.with_badge(StatusBadge::success(label))
}

pub fn present_item_detail(item: &Item) -> CommandResultViewModel<ItemDetailViewModel> {
    CommandResultViewModel::new(ItemDetailViewModel {
        item: present_row(item),
    })
}

/// Result of an add or update, badged with the workspace notice.
pub fn present_item_saved(
    item: &Item,
    notice: Option<&Notice>,
) -> CommandResultViewModel<ItemDetailViewModel> {
    let result = present_item_detail(item);
    match notice {
        Some(notice) => result.with_badge(badge_for(notice)),
        None => result,
    }
}

pub fn present_item_deleted(item: &Item) -> CommandResultViewModel<ItemDeletedViewModel> {
    CommandResultViewModel::new(ItemDeletedViewModel {
        id: item.id.get(),
        name: item.name.clone(),
    })
    .with_badge(StatusBadge::success("Item deleted"))
}

/// An edit or delete whose target is missing; nothing was changed.
pub fn present_not_found(
    id: Option<i64>,
    position: Option<usize>,
    filter: Option<String>,
) -> CommandResultViewModel<ItemNotFoundViewModel> {
    let label = match (id, position) {
        (Some(id), _) => format!("No item with id {}", id),
        (None, Some(position)) => format!("No item at position {}", position),
        (None, None) => "Item not found".to_string(),
    };

    let list_command = match &filter {
        Some(term) => format!("stockkeep item list --search {}", term),
        None => "stockkeep item list".to_string(),
    };

    CommandResultViewModel::new(ItemNotFoundViewModel {
        mutation: true,
        id,
        position,
        filter,
    })
    .with_badge(StatusBadge::info(label))
    .with_suggestion(Guidance::new("List items to find the right one").with_command(list_command))
}

/// A read-only lookup by id that found nothing.
pub fn present_lookup_miss(id: i64) -> CommandResultViewModel<ItemNotFoundViewModel> {
    let mut result = present_not_found(Some(id), None, None);
    result.content.mutation = false;
    result
}
