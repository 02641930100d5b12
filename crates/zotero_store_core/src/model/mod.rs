//! Read models for library data.
//!
//! # Responsibility
//! - Define the item shape returned by repository queries.
//!
//! # Invariants
//! - Every item is identified by its stable Zotero key.
//! - Models are read-only projections; nothing here is written back.

pub mod item;
