pub mod item;

pub use item::{
    badge_for, present_item_deleted, present_item_detail, present_item_list, present_item_saved,
    present_lookup_miss, present_not_found, present_row, present_rows,
};
