//! CLI argument definitions via clap derive.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use zotero_store_core::{ConfigOverrides, ItemKey};

/// store-zotero: list, open and cite items from a local Zotero library.
///
/// Without a subcommand, lists items (optionally filtered by title and tag).
#[derive(Debug, Parser)]
#[command(name = "store-zotero", version)]
pub struct Cli {
    #[command(flatten)]
    pub list: ListArgs,

    /// Path to zotero.sqlite [env: ZOTERO_STORE_DB_PATH; default: ~/Zotero/zotero.sqlite].
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Attachment storage root [env: ZOTERO_STORE_STORAGE_PATH; default: next to the database].
    #[arg(long, global = true, value_name = "DIR")]
    pub storage: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write rotating log files to this absolute directory instead of stderr.
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            db_path: self.db.clone(),
            storage_path: self.storage.clone(),
        }
    }
}

/// Listing options, used when no subcommand is given.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Find items by title (case-insensitive substring).
    #[arg(short = 'f', long = "find", value_name = "TITLE")]
    pub title: Option<String>,

    /// Find items by tag (case-insensitive substring).
    #[arg(short = 't', long = "tag", value_name = "TAG")]
    pub tag: Option<String>,

    /// Print title, tags and attachment paths instead of keys only.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print items as a JSON array.
    #[arg(long, conflicts_with = "verbose")]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the item's first attachment with the system opener.
    Open {
        /// Item key, e.g. ABCD2345.
        #[arg(value_name = "STABLEID", value_parser = parse_item_key)]
        id: ItemKey,
    },
    /// Print a markdown reference link to the item's attachment.
    Reference {
        /// Item key, e.g. ABCD2345.
        #[arg(value_name = "STABLEID", value_parser = parse_item_key)]
        id: ItemKey,
    },
}

fn parse_item_key(value: &str) -> Result<ItemKey, zotero_store_core::ItemKeyError> {
    ItemKey::parse(value)
}
