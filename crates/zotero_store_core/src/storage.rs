//! Attachment path resolution under the Zotero storage root.
//!
//! Imported files live at `<storage root>/<attachment key>/<file name>` and are
//! recorded in the database as `storage:<file name>`.

use crate::model::item::{AttachmentRef, Item};
use std::path::{Path, PathBuf};

/// Prefix Zotero writes in front of files copied into its storage directory.
pub const STORAGE_PATH_PREFIX: &str = "storage:";

/// Resolves one attachment pair to a filesystem path.
///
/// - `storage:` is stripped from the stored path.
/// - An empty stored path resolves to the attachment directory itself.
/// - An absolute stored path (linked file) is returned unchanged.
pub fn resolve_attachment_path(storage_root: &Path, attachment: AttachmentRef<'_>) -> PathBuf {
    let file = attachment
        .path
        .strip_prefix(STORAGE_PATH_PREFIX)
        .unwrap_or(attachment.path);

    let dir = storage_root.join(attachment.key);
    if file.is_empty() {
        return dir;
    }

    // PathBuf::join keeps an absolute right-hand side as-is.
    dir.join(file)
}

/// Resolves the first attachment of `item`, if it has one.
pub fn first_attachment_path(storage_root: &Path, item: &Item) -> Option<PathBuf> {
    item.first_attachment()
        .map(|attachment| resolve_attachment_path(storage_root, attachment))
}
