// SQLite item store
// One table, every call is a single auto-committed statement

mod db;
mod error;
mod queries;
mod records;
mod schema;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use records::NewItemRecord;
pub use schema::SCHEMA_VERSION;
