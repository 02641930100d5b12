//! Schema guard for the externally owned Zotero tables.
//!
//! Only presence is checked. Column types and constraints belong to Zotero.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

/// Tables and columns read by the item query.
const REQUIRED_SCHEMA: &[(&str, &[&str])] = &[
    ("items", &["itemID", "itemTypeID", "key"]),
    ("itemData", &["itemID", "fieldID", "valueID"]),
    ("itemDataValues", &["valueID", "value"]),
    ("itemTypes", &["itemTypeID", "display"]),
    ("fields", &["fieldID", "fieldName"]),
    ("tags", &["tagID", "name"]),
    ("itemTags", &["itemID", "tagID"]),
    ("itemAttachments", &["itemID", "parentItemID", "path"]),
];

/// Verifies that every table/column the item query relies on exists.
///
/// Returns the first missing table or column in declaration order.
pub fn ensure_library_schema(conn: &Connection) -> DbResult<()> {
    for &(table, columns) in REQUIRED_SCHEMA {
        if !table_exists(conn, table)? {
            return Err(DbError::MissingRequiredTable(table));
        }

        for &column in columns {
            if !table_has_column(conn, table, column)? {
                return Err(DbError::MissingRequiredColumn { table, column });
            }
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> DbResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
