pub mod common;
pub mod item;
pub mod result;

use std::fmt;

pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, TextStyle};
pub use item::{
    ItemDeletedViewModel, ItemDetailViewModel, ItemListViewModel, ItemNotFoundViewModel,
    ItemRowViewModel, StockStatus,
};
pub use result::CommandResultViewModel;

/// Bridge from a view model to its text layout.
pub trait CreateView {
    fn create_view<'a>(&'a self, style: TextStyle) -> Box<dyn fmt::Display + 'a>;
}
