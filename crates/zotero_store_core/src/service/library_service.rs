//! Library use-case service.
//!
//! # Responsibility
//! - Combine repository reads with storage path resolution.
//! - Produce the values CLI commands print or hand to the OS.
//!
//! # Invariants
//! - Opening and citing both require the item's first attachment.
//! - Service APIs never bypass the repository.

use crate::config::Config;
use crate::model::item::{Item, ItemKey};
use crate::render::reference_line;
use crate::repo::item_repo::{ItemListQuery, ItemRepository, RepoError};
use crate::storage::first_attachment_path;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for library use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// No displayable item carries this key.
    ItemNotFound(ItemKey),
    /// The item exists but has no attachment pair.
    NoAttachment(ItemKey),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemNotFound(key) => write!(f, "item not found: {key}"),
            Self::NoAttachment(key) => write!(f, "no attachment found for item: {key}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service over an item repository and resolved configuration.
pub struct LibraryService<R: ItemRepository> {
    repo: R,
    config: Config,
}

impl<R: ItemRepository> LibraryService<R> {
    pub fn new(repo: R, config: Config) -> Self {
        Self { repo, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lists items matching the query filters.
    pub fn list(&self, query: &ItemListQuery) -> ServiceResult<Vec<Item>> {
        let items = self.repo.list_items(query)?;
        debug!(
            "event=items_list module=service status=ok title_filter={} tag_filter={} count={}",
            query.title.is_some(),
            query.tag.is_some(),
            items.len()
        );
        Ok(items)
    }

    /// Fetches one item by key.
    pub fn get(&self, key: &ItemKey) -> ServiceResult<Item> {
        match self.repo.get_item(key)? {
            Some(item) => Ok(item),
            None => {
                warn!("event=item_get module=service status=not_found key={key}");
                Err(ServiceError::ItemNotFound(key.clone()))
            }
        }
    }

    /// Resolves the filesystem path of the item's first attachment.
    pub fn attachment_path(&self, item: &Item) -> ServiceResult<PathBuf> {
        first_attachment_path(&self.config.storage_path, item)
            .ok_or_else(|| ServiceError::NoAttachment(item.key.clone()))
    }

    /// Returns the file to hand to the OS opener for `key`.
    pub fn open_target(&self, key: &ItemKey) -> ServiceResult<PathBuf> {
        let item = self.get(key)?;
        let path = self.attachment_path(&item)?;
        debug!(
            "event=open_target module=service status=ok key={key} path={}",
            path.display()
        );
        Ok(path)
    }

    /// Renders the reference link for `key`.
    pub fn reference(&self, key: &ItemKey) -> ServiceResult<String> {
        let item = self.get(key)?;
        let path = self.attachment_path(&item)?;
        Ok(reference_line(&item, &path, &self.config.version))
    }
}
