//! Process configuration: library database path, storage root, version label.
//!
//! # Responsibility
//! - Resolve paths from explicit overrides, environment, then defaults.
//!
//! # Invariants
//! - A resolved `Config` is immutable for the process lifetime.
//! - Blank override or environment values are ignored.
//! - When only the database path is known, storage sits next to it.

use directories::BaseDirs;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DB_PATH_ENV: &str = "ZOTERO_STORE_DB_PATH";
pub const STORAGE_PATH_ENV: &str = "ZOTERO_STORE_STORAGE_PATH";
pub const DATA_DIR_ENV: &str = "ZOTERO_STORE_DATA_DIR";

/// Zotero's default data directory name under the user's home.
const DEFAULT_DATA_DIR_NAME: &str = "Zotero";
const DB_FILE_NAME: &str = "zotero.sqlite";
const STORAGE_DIR_NAME: &str = "storage";
/// Version label embedded in rendered references.
pub const REFERENCE_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub storage_path: PathBuf,
    pub version: String,
}

/// Explicit values that take precedence over environment and defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub db_path: Option<PathBuf>,
    pub storage_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No override was given and the home directory could not be determined.
    MissingHomeDir,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHomeDir => write!(
                f,
                "cannot locate home directory; set {DB_PATH_ENV} or pass --db"
            ),
        }
    }
}

impl Error for ConfigError {}

impl Config {
    /// Builds a config rooted at a Zotero data directory.
    pub fn from_data_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            db_path: data_dir.join(DB_FILE_NAME),
            storage_path: data_dir.join(STORAGE_DIR_NAME),
            version: REFERENCE_VERSION.to_string(),
        }
    }

    /// Resolves configuration from overrides, process environment and home.
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        Self::resolve_with(
            overrides,
            |name| std::env::var(name).ok(),
            BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()),
        )
    }

    /// Resolution with injected environment lookup and home directory.
    pub fn resolve_with(
        overrides: &ConfigOverrides,
        env: impl Fn(&str) -> Option<String>,
        home_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let env_path = |name: &str| non_blank(env(name)).map(PathBuf::from);

        let db_path = overrides
            .db_path
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| env_path(DB_PATH_ENV));
        let storage_path = overrides
            .storage_path
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| env_path(STORAGE_PATH_ENV));

        let data_dir = || {
            env_path(DATA_DIR_ENV)
                .or_else(|| home_dir.as_ref().map(|home| home.join(DEFAULT_DATA_DIR_NAME)))
                .ok_or(ConfigError::MissingHomeDir)
        };

        let db_path = match db_path {
            Some(path) => path,
            None => data_dir()?.join(DB_FILE_NAME),
        };
        let storage_path = match storage_path {
            Some(path) => path,
            None => storage_next_to(&db_path),
        };

        Ok(Self {
            db_path,
            storage_path,
            version: REFERENCE_VERSION.to_string(),
        })
    }
}

fn storage_next_to(db_path: &Path) -> PathBuf {
    db_path
        .parent()
        .map_or_else(|| PathBuf::from(STORAGE_DIR_NAME), |dir| dir.join(STORAGE_DIR_NAME))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError, ConfigOverrides, DATA_DIR_ENV, DB_PATH_ENV, STORAGE_PATH_ENV};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_to_zotero_dir_under_home() {
        let config = Config::resolve_with(
            &ConfigOverrides::default(),
            env_from(&[]),
            Some(PathBuf::from("/home/reader")),
        )
        .unwrap();

        assert_eq!(config, Config::from_data_dir("/home/reader/Zotero"));
        assert_eq!(config.version, "1.0");
    }

    #[test]
    fn data_dir_env_replaces_home_default() {
        let config = Config::resolve_with(
            &ConfigOverrides::default(),
            env_from(&[(DATA_DIR_ENV, "/srv/zotero")]),
            Some(PathBuf::from("/home/reader")),
        )
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/srv/zotero/zotero.sqlite"));
        assert_eq!(config.storage_path, PathBuf::from("/srv/zotero/storage"));
    }

    #[test]
    fn overrides_win_over_environment() {
        let overrides = ConfigOverrides {
            db_path: Some(PathBuf::from("/flag/lib.sqlite")),
            storage_path: None,
        };
        let config = Config::resolve_with(
            &overrides,
            env_from(&[
                (DB_PATH_ENV, "/env/zotero.sqlite"),
                (STORAGE_PATH_ENV, "/env/files"),
            ]),
            None,
        )
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/flag/lib.sqlite"));
        assert_eq!(config.storage_path, PathBuf::from("/env/files"));
    }

    #[test]
    fn storage_defaults_next_to_database() {
        let config = Config::resolve_with(
            &ConfigOverrides::default(),
            env_from(&[(DB_PATH_ENV, " /env/zotero.sqlite ")]),
            None,
        )
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/env/zotero.sqlite"));
        assert_eq!(config.storage_path, PathBuf::from("/env/storage"));
    }

    #[test]
    fn blank_environment_values_are_ignored() {
        let err = Config::resolve_with(
            &ConfigOverrides::default(),
            env_from(&[(DB_PATH_ENV, "   "), (DATA_DIR_ENV, "")]),
            None,
        )
        .unwrap_err();

        assert_eq!(err, ConfigError::MissingHomeDir);
    }
}
