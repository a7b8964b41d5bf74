//! Text fragments shared by the console views and the TUI rows.

pub const NO_CATEGORY: &str = "No category";
pub const EMPTY_INVENTORY: &str = "No items registered";
pub const NO_MATCHES: &str = "No items found";

pub fn subtitle(category: Option<&str>) -> String {
    match category {
        Some(c) if !c.is_empty() => format!("Category: {}", c),
        _ => NO_CATEGORY.to_string(),
    }
}

pub fn stock_text(quantity: u32) -> String {
    format!("Stock: {}", quantity)
}

pub fn last_updated_text(ts: &str) -> String {
    format!("Last updated: {}", ts)
}

/// Placeholder for an empty list; a filtered list says nothing matched.
pub fn empty_placeholder(filtered: bool) -> &'static str {
    if filtered { NO_MATCHES } else { EMPTY_INVENTORY }
}

pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}
