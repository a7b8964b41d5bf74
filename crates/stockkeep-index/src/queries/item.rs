use rusqlite::{Connection, OptionalExtension, Row, params};
use stockkeep_types::{Item, ItemId};

use crate::{Result, records::NewItemRecord};

const ITEM_COLUMNS: &str = "id, name, category, quantity, min_stock, last_updated";

fn map_item(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: ItemId::new(row.get(0)?),
        name: row.get(1)?,
        category: row.get(2)?,
        quantity: row.get(3)?,
        min_stock: row.get(4)?,
        last_updated: row.get(5)?,
    })
}

// name then id keeps duplicate names in a stable order, which position
// resolution depends on
pub fn list(conn: &Connection) -> Result<Vec<Item>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM items ORDER BY name, id",
        ITEM_COLUMNS
    ))?;

    let items = stmt
        .query_map([], map_item)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(items)
}

/// `needle` must already be lowercased with `str::to_lowercase`.
pub fn search(conn: &Connection, needle: &str) -> Result<Vec<Item>> {
    let mut stmt = conn.prepare(&format!(
        r#"
        SELECT {}
        FROM items
        WHERE instr(fold_case(name), ?1) > 0
           OR instr(fold_case(COALESCE(category, '')), ?1) > 0
        ORDER BY name, id
        "#,
        ITEM_COLUMNS
    ))?;

    let items = stmt
        .query_map([needle], map_item)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(items)
}

/// Ids in display order, optionally restricted to a lowercased needle.
pub fn ordered_ids(conn: &Connection, needle: Option<&str>) -> Result<Vec<ItemId>> {
    let ids = match needle {
        Some(needle) => {
            let mut stmt = conn.prepare(
                r#"
                SELECT id
                FROM items
                WHERE instr(fold_case(name), ?1) > 0
                   OR instr(fold_case(COALESCE(category, '')), ?1) > 0
                ORDER BY name, id
                "#,
            )?;
            stmt.query_map([needle], |row| row.get::<_, i64>(0).map(ItemId::new))?
                .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?
        }
        None => {
            let mut stmt = conn.prepare("SELECT id FROM items ORDER BY name, id")?;
            stmt.query_map([], |row| row.get::<_, i64>(0).map(ItemId::new))?
                .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?
        }
    };

    Ok(ids)
}

pub fn get(conn: &Connection, id: ItemId) -> Result<Option<Item>> {
    let item = conn
        .query_row(
            &format!("SELECT {} FROM items WHERE id = ?1", ITEM_COLUMNS),
            [id.get()],
            map_item,
        )
        .optional()?;

    Ok(item)
}

pub fn insert(conn: &Connection, record: &NewItemRecord) -> Result<ItemId> {
    conn.execute(
        r#"
        INSERT INTO items (name, category, quantity, min_stock, last_updated)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        params![
            &record.name,
            &record.category,
            record.quantity,
            record.min_stock,
            &record.last_updated
        ],
    )?;

    Ok(ItemId::new(conn.last_insert_rowid()))
}

/// Returns the number of rows touched (0 when `id` is absent).
pub fn update(conn: &Connection, id: ItemId, record: &NewItemRecord) -> Result<usize> {
    let affected = conn.execute(
        r#"
        UPDATE items SET
            name = ?1,
            category = ?2,
            quantity = ?3,
            min_stock = ?4,
            last_updated = ?5
        WHERE id = ?6
        "#,
        params![
            &record.name,
            &record.category,
            record.quantity,
            record.min_stock,
            &record.last_updated,
            id.get()
        ],
    )?;

    Ok(affected)
}

pub fn delete(conn: &Connection, id: ItemId) -> Result<usize> {
    let affected = conn.execute("DELETE FROM items WHERE id = ?1", [id.get()])?;
    Ok(affected)
}

pub fn count(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?;
    Ok(count as usize)
}
