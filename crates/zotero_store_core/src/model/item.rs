//! Library item model.
//!
//! # Responsibility
//! - Define the read model built from one grouped query row.
//! - Parse the aggregated tag and attachment columns on demand.
//!
//! # Invariants
//! - `key` is unique per source row.
//! - `tags` and `attachments` keep the raw comma-joined database text.
//! - Items are never mutated after construction.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

static ITEM_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[23456789ABCDEFGHIJKLMNPQRSTUVWXYZ]{8}$").expect("valid item key regex")
});

/// Stable, human-referenceable Zotero item key (e.g. `ABCD2345`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemKey(String);

/// Rejected user input for an item key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemKeyError {
    pub input: String,
}

impl Display for ItemKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid item key `{}`; expected 8 characters from 2-9 and A-Z (no O, 0 or 1)",
            self.input
        )
    }
}

impl Error for ItemKeyError {}

impl ItemKey {
    /// Parses user input into a key.
    ///
    /// Input is trimmed and uppercased before validation.
    pub fn parse(input: &str) -> Result<Self, ItemKeyError> {
        let normalized = input.trim().to_ascii_uppercase();
        if ITEM_KEY_RE.is_match(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(ItemKeyError {
                input: input.to_string(),
            })
        }
    }

    /// Wraps a key read from the library database without validation.
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ItemKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One `attachmentKey:path` pair from an item's attachment column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentRef<'a> {
    /// Key of the attachment item; names its storage subdirectory.
    pub key: &'a str,
    /// Stored path, usually `storage:<file name>`. May be empty.
    pub path: &'a str,
}

/// Bibliographic item projected from the library database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub key: ItemKey,
    pub title: String,
    /// Comma-joined tag names, `None` when the item has no tags.
    pub tags: Option<String>,
    /// Comma-joined `attachmentKey:path` pairs, `None` when nothing is attached.
    pub attachments: Option<String>,
}

impl Item {
    /// Returns tag names in stored order, dropping empty entries.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| tags.split(',').filter(|tag| !tag.is_empty()).collect())
            .unwrap_or_default()
    }

    /// Parses attachment pairs, skipping entries without a `:` separator.
    pub fn attachment_refs(&self) -> Vec<AttachmentRef<'_>> {
        let Some(raw) = self.attachments.as_deref() else {
            return Vec::new();
        };

        raw.split(',')
            .filter_map(|pair| {
                let (key, path) = pair.split_once(':')?;
                Some(AttachmentRef { key, path })
            })
            .collect()
    }

    /// Returns the first attachment pair, if any.
    pub fn first_attachment(&self) -> Option<AttachmentRef<'_>> {
        let raw = self.attachments.as_deref()?;
        let first = raw.split(',').next()?;
        let (key, path) = first.split_once(':')?;
        Some(AttachmentRef { key, path })
    }
}
