//! Plain-text rendering of items for terminal output.
//!
//! # Invariants
//! - Widths and truncation count characters, not bytes.
//! - Non-verbose listing prints the key only, never a truncated value.

use crate::model::item::Item;
use crate::storage::resolve_attachment_path;
use std::path::Path;

pub const KEY_COLUMN_WIDTH: usize = 8;
pub const TITLE_COLUMN_WIDTH: usize = 25;
pub const TAGS_COLUMN_WIDTH: usize = 15;

const ELLIPSIS: &str = "...";

/// Shortens `value` to at most `max_chars` characters, ending in `...` when cut.
pub fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut truncated = value.chars().take(keep).collect::<String>();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Renders the listing lines for one item.
///
/// Verbose output has one tab-separated line per attachment:
/// `key  title  tags  path`. Items without attachments get a single line
/// with an empty path column.
pub fn list_lines(item: &Item, storage_root: &Path, verbose: bool) -> Vec<String> {
    if !verbose {
        return vec![item.key.to_string()];
    }

    let title = truncate(&item.title, TITLE_COLUMN_WIDTH);
    let tags = item
        .tags
        .as_deref()
        .map(|tags| truncate(tags, TAGS_COLUMN_WIDTH))
        .unwrap_or_default();
    let row = |path: &str| {
        format!(
            "{key:<kw$}\t{title:<tw$}\t{tags:<gw$}\t{path}",
            key = item.key.as_str(),
            kw = KEY_COLUMN_WIDTH,
            tw = TITLE_COLUMN_WIDTH,
            gw = TAGS_COLUMN_WIDTH,
        )
    };

    if item.attachments.as_deref().is_some_and(|raw| !raw.is_empty()) {
        return item
            .attachment_refs()
            .into_iter()
            .map(|attachment| {
                let path = resolve_attachment_path(storage_root, attachment);
                row(&path.display().to_string())
            })
            .collect();
    }

    vec![row("")]
}

/// Renders the markdown reference link for an item's attachment.
///
/// `[zotero: TITLE, stableid: KEY, tags: {TAGS}, version: VERSION](PATH)`
pub fn reference_line(item: &Item, attachment_path: &Path, version: &str) -> String {
    format!(
        "[zotero: {}, stableid: {}, tags: {{{}}}, version: {}]({})",
        item.title,
        item.key,
        item.tags.as_deref().unwrap_or(""),
        version,
        attachment_path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::{list_lines, reference_line, truncate};
    use crate::model::item::{Item, ItemKey};
    use std::path::Path;

    fn sample(tags: Option<&str>, attachments: Option<&str>) -> Item {
        Item {
            key: ItemKey::from_db("ABCD2345"),
            title: "Attention Is All You Need: Transformers Revisited".to_string(),
            tags: tags.map(str::to_string),
            attachments: attachments.map(str::to_string),
        }
    }

    #[test]
    fn truncate_keeps_short_values() {
        assert_eq!(truncate("short", 25), "short");
        assert_eq!(truncate("exactly5", 8), "exactly5");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("ÄÖÜäöüßéè", 6), "ÄÖÜ...");
        assert_eq!(truncate("abcdefghij", 5), "ab...");
    }

    #[test]
    fn non_verbose_prints_key_only() {
        let item = sample(Some("ml"), Some("KEY22222:storage:a.pdf"));
        assert_eq!(list_lines(&item, Path::new("/s"), false), vec!["ABCD2345"]);
    }

    #[test]
    fn verbose_prints_one_line_per_attachment() {
        let item = sample(
            Some("machine-learning,transformers"),
            Some("KEY22222:storage:a.pdf,KEY33333:storage:b.pdf"),
        );

        let lines = list_lines(&item, Path::new("/s"), true);
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "ABCD2345\tAttention Is All You N...\tmachine-lear...\t/s/KEY22222/a.pdf"
        );
        assert!(lines[1].ends_with("\t/s/KEY33333/b.pdf"));
    }

    #[test]
    fn verbose_without_attachments_pads_columns_and_leaves_path_empty() {
        let item = Item {
            title: "Short".to_string(),
            ..sample(None, None)
        };

        let lines = list_lines(&item, Path::new("/s"), true);
        assert_eq!(
            lines,
            vec![format!("ABCD2345\t{:<25}\t{:<15}\t", "Short", "")]
        );
    }

    #[test]
    fn reference_wraps_tags_in_braces() {
        let item = Item {
            title: "Deep nets".to_string(),
            ..sample(Some("ml,vision"), None)
        };
        assert_eq!(
            reference_line(&item, Path::new("/s/KEY22222/a.pdf"), "1.0"),
            "[zotero: Deep nets, stableid: ABCD2345, tags: {ml,vision}, version: 1.0](/s/KEY22222/a.pdf)"
        );

        let untagged = Item { tags: None, ..item };
        assert!(reference_line(&untagged, Path::new("/p"), "1.0").contains("tags: {},"));
    }
}
