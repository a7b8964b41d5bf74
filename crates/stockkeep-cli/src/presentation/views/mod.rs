pub mod item;

pub use item::{ItemDeletedView, ItemListView, ItemNotFoundView, ItemRowView};
