use rusqlite::Connection;
use rusqlite::functions::FunctionFlags;

use crate::Result;

pub mod item;

/// Register connection-local SQL functions. Needed on every new connection.
///
/// `fold_case(text)` lowercases with `str::to_lowercase`, the same folding
/// applied to search needles. SQLite's own `lower()` only folds ASCII.
pub fn register_functions(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        "fold_case",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| Ok(ctx.get::<String>(0)?.to_lowercase()),
    )?;
    Ok(())
}
