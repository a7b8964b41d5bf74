mod target;

pub mod guidance;
pub mod item_add;
pub mod item_delete;
pub mod item_edit;
pub mod item_list;
pub mod item_show;
pub mod tui;
