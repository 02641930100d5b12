//! Item repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Own the single item query over the Zotero schema.
//! - Translate list filters into bound SQL conditions.
//!
//! # Invariants
//! - Child attachment rows are never returned as items.
//! - Only displayable item types with a title are returned.
//! - The tag filter never narrows the aggregated tag list of a returned item.
//! - Filter text is matched literally (`%`, `_`, `\` are escaped).

use crate::db::{ensure_library_schema, DbError};
use crate::model::item::{Item, ItemKey};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ITEM_SELECT_SQL: &str = "SELECT
    i.key AS item_key,
    title_value.value AS title,
    GROUP_CONCAT(DISTINCT t.name) AS tags,
    GROUP_CONCAT(DISTINCT attachment_item.key || ':' || COALESCE(ia.path, '')) AS attachments
FROM items i
LEFT JOIN itemData title_data ON title_data.itemID = i.itemID
LEFT JOIN itemDataValues title_value ON title_value.valueID = title_data.valueID
LEFT JOIN itemTypes it ON it.itemTypeID = i.itemTypeID
LEFT JOIN itemTags item_tag ON item_tag.itemID = i.itemID
LEFT JOIN tags t ON t.tagID = item_tag.tagID
LEFT JOIN itemAttachments ia ON (ia.parentItemID = i.itemID OR ia.itemID = i.itemID)
LEFT JOIN items attachment_item ON attachment_item.itemID = ia.itemID
WHERE it.display = 1
  AND title_data.fieldID = (SELECT fieldID FROM fields WHERE fieldName = 'title')
  AND NOT EXISTS (
      SELECT 1
      FROM itemAttachments child
      WHERE child.itemID = i.itemID
        AND child.parentItemID IS NOT NULL
  )";

const ITEM_GROUP_SQL: &str = " GROUP BY i.itemID ORDER BY i.itemID ASC";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for item queries.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid library item data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Filters for listing items.
///
/// Both filters are case-insensitive substring matches and combine with AND.
/// Blank values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemListQuery {
    pub title: Option<String>,
    pub tag: Option<String>,
}

impl ItemListQuery {
    pub fn new(title: Option<String>, tag: Option<String>) -> Self {
        Self {
            title: normalize_filter(title),
            tag: normalize_filter(tag),
        }
    }
}

/// Repository interface for item reads.
pub trait ItemRepository {
    /// Fetches one item by its stable key.
    fn get_item(&self, key: &ItemKey) -> RepoResult<Option<Item>>;
    /// Lists items matching all present filters.
    fn list_items(&self, query: &ItemListQuery) -> RepoResult<Vec<Item>>;
}

/// SQLite-backed item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Constructs a repository after checking the connection exposes the
    /// Zotero tables the item query reads.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_library_schema(conn)?;
        Ok(Self { conn })
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn get_item(&self, key: &ItemKey) -> RepoResult<Option<Item>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} AND i.key = ?1{ITEM_GROUP_SQL}"))?;

        let mut rows = stmt.query([key.as_str()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_item_row(row)?));
        }

        Ok(None)
    }

    fn list_items(&self, query: &ItemListQuery) -> RepoResult<Vec<Item>> {
        let mut sql = String::from(ITEM_SELECT_SQL);
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(title) = query.title.as_deref().filter(|value| !value.trim().is_empty()) {
            sql.push_str(" AND title_value.value LIKE ? ESCAPE '\\'");
            bind_values.push(Value::Text(like_pattern(title)));
        }

        if let Some(tag) = query.tag.as_deref().filter(|value| !value.trim().is_empty()) {
            sql.push_str(
                " AND EXISTS (
                    SELECT 1
                    FROM itemTags filter_item_tag
                    INNER JOIN tags filter_tag ON filter_tag.tagID = filter_item_tag.tagID
                    WHERE filter_item_tag.itemID = i.itemID
                      AND filter_tag.name LIKE ? ESCAPE '\\'
                )",
            );
            bind_values.push(Value::Text(like_pattern(tag)));
        }

        sql.push_str(ITEM_GROUP_SQL);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }

        Ok(items)
    }
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<Item> {
    let key: String = row.get("item_key")?;
    let title = match row.get::<_, Value>("title")? {
        Value::Text(text) => text,
        Value::Integer(number) => number.to_string(),
        Value::Real(number) => number.to_string(),
        Value::Null => {
            return Err(RepoError::InvalidData(format!(
                "item `{key}` has a NULL title value"
            )));
        }
        Value::Blob(_) => {
            return Err(RepoError::InvalidData(format!(
                "item `{key}` has a BLOB title value"
            )));
        }
    };

    Ok(Item {
        key: ItemKey::from_db(key),
        title,
        tags: row.get("tags")?,
        attachments: row.get("attachments")?,
    })
}

fn normalize_filter(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Builds a `%substring%` LIKE pattern with wildcard characters escaped.
fn like_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for ch in value.trim().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
