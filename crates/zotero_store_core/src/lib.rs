//! Core library for querying a local Zotero database.
//! Everything here reads; nothing writes to the library.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod service;
pub mod storage;

pub use config::{Config, ConfigError, ConfigOverrides};
pub use logging::{default_log_level, init_logging, LogTarget};
pub use model::item::{AttachmentRef, Item, ItemKey, ItemKeyError};
pub use repo::item_repo::{
    ItemListQuery, ItemRepository, RepoError, RepoResult, SqliteItemRepository,
};
pub use service::library_service::{LibraryService, ServiceError, ServiceResult};
