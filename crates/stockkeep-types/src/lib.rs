pub mod draft;
pub mod error;
pub mod item;
mod time;

pub use draft::{ItemDraft, ItemFields};
pub use error::{Result, ValidationError};
pub use item::{Item, ItemId, StockLevel};
pub use time::{TIMESTAMP_FORMAT, format_timestamp};
