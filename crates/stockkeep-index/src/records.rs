/// Column values for an insert or a full-row update.
///
/// `last_updated` is supplied by the caller so the store never reads a clock.
#[derive(Debug, Clone)]
pub struct NewItemRecord {
    pub name: String,
    pub category: Option<String>,
    pub quantity: u32,
    pub min_stock: Option<u32>,
    /// `YYYY-MM-DD HH:MM:SS`
    pub last_updated: String,
}
