use stockkeep_index::{Database, NewItemRecord};
use stockkeep_types::{Item, ItemDraft, ItemFields, ItemId, format_timestamp};

use crate::Result;
use crate::clock::{Clock, SystemClock};

/// Typed item operations over the store.
///
/// Validation and timestamping happen here; the store only runs statements.
pub struct ItemRepository {
    db: Database,
    clock: Box<dyn Clock>,
}

impl ItemRepository {
    pub fn new(db: Database) -> Self {
        Self::with_clock(db, Box::new(SystemClock))
    }

    pub fn with_clock(db: Database, clock: Box<dyn Clock>) -> Self {
        Self { db, clock }
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Database::open_in_memory()?))
    }

    /// All items ordered by name.
    pub fn list_all(&self) -> Result<Vec<Item>> {
        Ok(self.db.list_items()?)
    }

    /// Items whose name or category contains `term`, ignoring case.
    /// A blank term lists everything.
    pub fn search(&self, term: &str) -> Result<Vec<Item>> {
        match normalize_term(term) {
            Some(term) => Ok(self.db.search_items(term)?),
            None => self.list_all(),
        }
    }

    pub fn get(&self, id: ItemId) -> Result<Option<Item>> {
        Ok(self.db.get_item(id)?)
    }

    /// Map a zero-based row position in the list filtered by `term` to an id.
    ///
    /// The ordering is re-queried on every call, so the answer always
    /// matches what a fresh render would show.
    pub fn resolve_position(&self, index: usize, term: Option<&str>) -> Result<Option<ItemId>> {
        let term = term.and_then(normalize_term);
        let ids = self.db.ordered_ids(term)?;
        Ok(ids.get(index).copied())
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.db.count_items()?)
    }

    pub fn insert(&self, draft: &ItemDraft) -> Result<ItemId> {
        let fields = draft.validate()?;
        let record = self.stamp(fields);

        let id = self.db.insert_item(&record)?;
        tracing::info!(%id, name = %record.name, "item added");

        Ok(id)
    }

    /// Replace every field of `id`. Returns `false` when no such row exists.
    pub fn update(&self, id: ItemId, draft: &ItemDraft) -> Result<bool> {
        let fields = draft.validate()?;
        let record = self.stamp(fields);

        let affected = self.db.update_item(id, &record)?;
        if affected == 0 {
            tracing::debug!(%id, "update skipped, item does not exist");
        } else {
            tracing::info!(%id, name = %record.name, "item updated");
        }

        Ok(affected > 0)
    }

    /// Returns `false` when no such row exists.
    pub fn delete(&self, id: ItemId) -> Result<bool> {
        let affected = self.db.delete_item(id)?;
        if affected == 0 {
            tracing::debug!(%id, "delete skipped, item does not exist");
        } else {
            tracing::info!(%id, "item deleted");
        }

        Ok(affected > 0)
    }

    fn stamp(&self, fields: ItemFields) -> NewItemRecord {
        NewItemRecord {
            name: fields.name,
            category: fields.category,
            quantity: fields.quantity,
            min_stock: fields.min_stock,
            last_updated: format_timestamp(self.clock.now()),
        }
    }
}

fn normalize_term(term: &str) -> Option<&str> {
    let term = term.trim();
    if term.is_empty() { None } else { Some(term) }
}
