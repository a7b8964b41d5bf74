use rusqlite::Connection;
use std::path::Path;
use stockkeep_types::{Item, ItemId};

use crate::{Result, queries, records::NewItemRecord, schema};

// NOTE: Store Design Rationale
//
// Why one connection for the whole process?
// - Exactly one reader/writer exists (the UI loop), so pooling buys nothing
// - Every call is one auto-committed statement; no transaction spans calls
//
// Why ids (not row positions) in the API?
// - Positions shift on every insert/delete/search; ids never change
// - `ordered_ids` exists only to translate a visible position into an id

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        tracing::debug!(path = %db_path.display(), "opened inventory database");

        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        queries::register_functions(&conn)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn init_schema(&self) -> Result<()> {
        schema::init_schema(&self.conn)
    }

    pub fn list_items(&self) -> Result<Vec<Item>> {
        queries::item::list(&self.conn)
    }

    /// Case-insensitive substring match on name or category.
    pub fn search_items(&self, term: &str) -> Result<Vec<Item>> {
        queries::item::search(&self.conn, &term.to_lowercase())
    }

    pub fn ordered_ids(&self, term: Option<&str>) -> Result<Vec<ItemId>> {
        let needle = term.map(str::to_lowercase);
        queries::item::ordered_ids(&self.conn, needle.as_deref())
    }

    pub fn get_item(&self, id: ItemId) -> Result<Option<Item>> {
        queries::item::get(&self.conn, id)
    }

    pub fn insert_item(&self, record: &NewItemRecord) -> Result<ItemId> {
        queries::item::insert(&self.conn, record)
    }

    pub fn update_item(&self, id: ItemId, record: &NewItemRecord) -> Result<usize> {
        queries::item::update(&self.conn, id, record)
    }

    pub fn delete_item(&self, id: ItemId) -> Result<usize> {
        queries::item::delete(&self.conn, id)
    }

    pub fn count_items(&self) -> Result<usize> {
        queries::item::count(&self.conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, category: Option<&str>, quantity: u32) -> NewItemRecord {
        NewItemRecord {
            name: name.to_string(),
            category: category.map(String::from),
            quantity,
            min_stock: None,
            last_updated: "2025-12-10 10:00:00".to_string(),
        }
    }

    #[test]
    fn test_schema_initialization() {
        let db = Database::open_in_memory().unwrap();

        assert_eq!(db.list_items().unwrap().len(), 0);
        assert_eq!(db.count_items().unwrap(), 0);

        // idempotent
        db.init_schema().unwrap();
    }

    #[test]
    fn test_insert_and_get_item() {
        let db = Database::open_in_memory().unwrap();

        let mut rec = record("Widget", Some("Tools"), 10);
        rec.min_stock = Some(5);
        let id = db.insert_item(&rec).unwrap();

        let item = db.get_item(id).unwrap().unwrap();
        assert_eq!(item.id, id);
        assert_eq!(item.name, "Widget");
        assert_eq!(item.category.as_deref(), Some("Tools"));
        assert_eq!(item.quantity, 10);
        assert_eq!(item.min_stock, Some(5));
        assert_eq!(item.last_updated, "2025-12-10 10:00:00");
    }

    #[test]
    fn test_ids_are_never_reused() {
        let db = Database::open_in_memory().unwrap();

        let first = db.insert_item(&record("A", None, 1)).unwrap();
        db.delete_item(first).unwrap();
        let second = db.insert_item(&record("B", None, 1)).unwrap();

        assert!(second > first);
    }

    #[test]
    fn test_list_is_ordered_by_name() {
        let db = Database::open_in_memory().unwrap();

        db.insert_item(&record("Nail", None, 1)).unwrap();
        db.insert_item(&record("Bolt", None, 1)).unwrap();
        db.insert_item(&record("Widget", None, 1)).unwrap();

        let names: Vec<String> = db.list_items().unwrap().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Bolt", "Nail", "Widget"]);
    }

    #[test]
    fn test_search_matches_name_or_category_case_insensitively() {
        let db = Database::open_in_memory().unwrap();

        db.insert_item(&record("Hammer", Some("Tools"), 1)).unwrap();
        db.insert_item(&record("Screwdriver", Some("TOOLS"), 1)).unwrap();
        db.insert_item(&record("Toolbox", None, 1)).unwrap();
        db.insert_item(&record("Apple", Some("Food"), 1)).unwrap();

        let names: Vec<String> = db
            .search_items("tOOl")
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Hammer", "Screwdriver", "Toolbox"]);
    }

    #[test]
    fn test_search_folds_non_ascii_case() {
        let db = Database::open_in_memory().unwrap();

        let nandu = db.insert_item(&record("ÑANDÚ", Some("Categoría"), 1)).unwrap();
        db.insert_item(&record("Tornillo", Some("Ferretería"), 1)).unwrap();

        for term in ["ÑANDÚ", "ñandú", "Ñandú"] {
            let hits = db.search_items(term).unwrap();
            assert_eq!(hits.len(), 1, "term {:?}", term);
            assert_eq!(hits[0].id, nandu);
        }

        let hits = db.search_items("CATEGORÍA").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(db.search_items("RÍA").unwrap().len(), 2);

        assert_eq!(db.ordered_ids(Some("ÑAND")).unwrap(), vec![nandu]);
    }

    #[test]
    fn test_search_treats_like_wildcards_literally() {
        let db = Database::open_in_memory().unwrap();

        db.insert_item(&record("100% cotton", None, 1)).unwrap();
        db.insert_item(&record("cotton", None, 1)).unwrap();

        let hits = db.search_items("%").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "100% cotton");
    }

    #[test]
    fn test_update_and_delete_report_affected_rows() {
        let db = Database::open_in_memory().unwrap();

        let id = db.insert_item(&record("A", None, 1)).unwrap();
        let missing = ItemId::new(id.get() + 100);

        assert_eq!(db.update_item(id, &record("B", None, 2)).unwrap(), 1);
        assert_eq!(db.update_item(missing, &record("C", None, 3)).unwrap(), 0);

        assert_eq!(db.delete_item(id).unwrap(), 1);
        assert_eq!(db.delete_item(id).unwrap(), 0);
    }

    #[test]
    fn test_ordered_ids_follow_filter() {
        let db = Database::open_in_memory().unwrap();

        let zed = db.insert_item(&record("Zed", Some("Tools"), 1)).unwrap();
        let alpha = db.insert_item(&record("Alpha", None, 1)).unwrap();
        let mid = db.insert_item(&record("Mid", Some("tools"), 1)).unwrap();

        assert_eq!(db.ordered_ids(None).unwrap(), vec![alpha, mid, zed]);
        assert_eq!(db.ordered_ids(Some("TOOLS")).unwrap(), vec![mid, zed]);
    }
}
