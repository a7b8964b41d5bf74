use serde::Serialize;
use std::fmt;

use super::{CreateView, TextStyle};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Normal,
    Low,
    Out,
}

/// One inventory row: what the list shows for a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRowViewModel {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub quantity: u32,
    pub min_stock: Option<u32>,
    pub status: StockStatus,
    pub last_updated: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemListViewModel {
    pub items: Vec<ItemRowViewModel>,
    pub total_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemDetailViewModel {
    pub item: ItemRowViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemDeletedViewModel {
    pub id: i64,
    pub name: String,
}

/// Target that did not resolve to a stored item.
#[derive(Debug, Clone, Serialize)]
pub struct ItemNotFoundViewModel {
    /// `false` for read-only lookups such as `item show`
    pub mutation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for ItemListViewModel {
    fn create_view<'a>(&'a self, style: TextStyle) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::item::ItemListView;
        Box::new(ItemListView::new(self, style))
    }
}

impl CreateView for ItemDetailViewModel {
    fn create_view<'a>(&'a self, style: TextStyle) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::item::ItemRowView;
        Box::new(ItemRowView::new(&self.item, style))
    }
}

impl CreateView for ItemDeletedViewModel {
    fn create_view<'a>(&'a self, _style: TextStyle) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::item::ItemDeletedView;
        Box::new(ItemDeletedView::new(self))
    }
}

impl CreateView for ItemNotFoundViewModel {
    fn create_view<'a>(&'a self, _style: TextStyle) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::item::ItemNotFoundView;
        Box::new(ItemNotFoundView::new(self))
    }
}
