use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::item::{
    empty_placeholder, last_updated_text, stock_text, subtitle,
};
use crate::presentation::view_models::{
    ItemDeletedViewModel, ItemListViewModel, ItemNotFoundViewModel, ItemRowViewModel,
    StockStatus, TextStyle,
};

// --------------------------------------------------------
// Item Row View
// --------------------------------------------------------

pub struct ItemRowView<'a> {
    data: &'a ItemRowViewModel,
    style: TextStyle,
}

impl<'a> ItemRowView<'a> {
    pub fn new(data: &'a ItemRowViewModel, style: TextStyle) -> Self {
        Self { data, style }
    }

    fn stock_line(&self) -> String {
        let text = stock_text(self.data.quantity);
        if self.style == TextStyle::Plain {
            return text;
        }
        match self.data.status {
            StockStatus::Normal => text.green().to_string(),
            StockStatus::Low => text.yellow().to_string(),
            StockStatus::Out => text.red().to_string(),
        }
    }
}

impl<'a> fmt::Display for ItemRowView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = if self.style == TextStyle::Colored {
            self.data.name.bold().to_string()
        } else {
            self.data.name.clone()
        };
        writeln!(f, "[{}] {}", self.data.id, name)?;
        writeln!(f, "    {}", subtitle(self.data.category.as_deref()))?;
        writeln!(f, "    {}", self.stock_line())?;
        writeln!(f, "    {}", last_updated_text(&self.data.last_updated))
    }
}

// --------------------------------------------------------
// Item List View
// --------------------------------------------------------

pub struct ItemListView<'a> {
    data: &'a ItemListViewModel,
    style: TextStyle,
}

impl<'a> ItemListView<'a> {
    pub fn new(data: &'a ItemListViewModel, style: TextStyle) -> Self {
        Self { data, style }
    }
}

impl<'a> fmt::Display for ItemListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.items.is_empty() {
            return writeln!(f, "{}", empty_placeholder(self.data.filter.is_some()));
        }

        for (i, row) in self.data.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", ItemRowView::new(row, self.style))?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Delete / Not Found Views
// --------------------------------------------------------

pub struct ItemDeletedView<'a> {
    data: &'a ItemDeletedViewModel,
}

impl<'a> ItemDeletedView<'a> {
    pub fn new(data: &'a ItemDeletedViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ItemDeletedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Removed [{}] {}", self.data.id, self.data.name)
    }
}

pub struct ItemNotFoundView<'a> {
    data: &'a ItemNotFoundViewModel,
}

impl<'a> ItemNotFoundView<'a> {
    pub fn new(data: &'a ItemNotFoundViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ItemNotFoundView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.data.mutation {
            return writeln!(f, "No such item.");
        }
        match &self.data.filter {
            Some(term) => writeln!(f, "Nothing changed (search: '{}').", term),
            None => writeln!(f, "Nothing changed."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn row(id: i64, name: &str, category: Option<&str>, quantity: u32, status: StockStatus) -> ItemRowViewModel {
        ItemRowViewModel {
            id,
            name: name.to_string(),
            category: category.map(String::from),
            quantity,
            min_stock: Some(5),
            status,
            last_updated: "2025-03-01 09:30:00".to_string(),
        }
    }

    #[test]
    fn test_list_view_plain() {
        let data = ItemListViewModel {
            items: vec![
                row(2, "Bolt", None, 3, StockStatus::Low),
                row(1, "Widget", Some("Tools"), 10, StockStatus::Normal),
            ],
            total_count: 2,
            filter: None,
        };

        assert_snapshot!(ItemListView::new(&data, TextStyle::Plain).to_string(), @r"
        [2] Bolt
            No category
            Stock: 3
            Last updated: 2025-03-01 09:30:00

        [1] Widget
            Category: Tools
            Stock: 10
            Last updated: 2025-03-01 09:30:00
        ");
    }

    #[test]
    fn test_empty_list_placeholders() {
        let mut data = ItemListViewModel {
            items: vec![],
            total_count: 0,
            filter: None,
        };
        assert_snapshot!(ItemListView::new(&data, TextStyle::Plain).to_string(), @"No items registered");

        data.filter = Some("zzz".to_string());
        assert_snapshot!(ItemListView::new(&data, TextStyle::Plain).to_string(), @"No items found");
    }

    #[test]
    fn test_colored_stock_line_differs_by_status() {
        let out = row(3, "Nail", None, 0, StockStatus::Out);
        let normal = row(3, "Nail", None, 0, StockStatus::Normal);

        let out_text = ItemRowView::new(&out, TextStyle::Colored).to_string();
        let normal_text = ItemRowView::new(&normal, TextStyle::Colored).to_string();

        assert!(out_text.contains("Stock: 0"));
        assert_ne!(out_text, normal_text);
        assert!(!ItemRowView::new(&out, TextStyle::Plain).to_string().contains('\u{1b}'));
    }

    #[test]
    fn test_deleted_and_not_found_views() {
        let deleted = ItemDeletedViewModel {
            id: 4,
            name: "Bolt".to_string(),
        };
        assert_snapshot!(ItemDeletedView::new(&deleted).to_string(), @"Removed [4] Bolt");

        let missing = ItemNotFoundViewModel {
            mutation: true,
            id: None,
            position: Some(2),
            filter: Some("bolt".to_string()),
        };
        assert_snapshot!(ItemNotFoundView::new(&missing).to_string(), @"Nothing changed (search: 'bolt').");

        let lookup = ItemNotFoundViewModel {
            mutation: false,
            id: Some(7),
            position: None,
            filter: None,
        };
        assert_snapshot!(ItemNotFoundView::new(&lookup).to_string(), @"No such item.");
    }
}
