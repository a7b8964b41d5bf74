pub mod clock;
pub mod config;
pub mod error;
pub mod repository;
pub mod view_state;
pub mod workspace;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Config, UiConfig, resolve_data_dir};
pub use error::{Error, Result};
pub use repository::ItemRepository;
pub use view_state::{FormField, Panel, ViewState};
pub use workspace::{Intent, InventoryWorkspace, Listing, Notice, NoticeLevel, Refresh};
