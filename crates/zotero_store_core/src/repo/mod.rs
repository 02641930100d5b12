//! Repository layer over the Zotero library schema.
//!
//! # Responsibility
//! - Define the read contract used by services.
//! - Keep SQL against Zotero tables inside this module.
//!
//! # Invariants
//! - Repositories only read; no statement here mutates the library.
//! - Absence is reported as `Ok(None)`, not as an error.

pub mod item_repo;
