use rusqlite::Connection;
use std::path::PathBuf;
use zotero_store_core::db::open_library;
use zotero_store_core::{
    Config, ItemKey, ItemListQuery, LibraryService, ServiceError, SqliteItemRepository,
};

const FIXTURE_SQL: &str = include_str!("fixtures/zotero_library.sql");

fn test_config() -> Config {
    Config {
        db_path: PathBuf::from("/library/zotero.sqlite"),
        storage_path: PathBuf::from("/library/storage"),
        version: "1.0".to_string(),
    }
}

fn key(value: &str) -> ItemKey {
    ItemKey::parse(value).unwrap()
}

#[test]
fn open_target_resolves_first_attachment_under_storage_root() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(FIXTURE_SQL).unwrap();
    let service = LibraryService::new(SqliteItemRepository::try_new(&conn).unwrap(), test_config());

    let path = service.open_target(&key("abcd2345")).unwrap();
    assert_eq!(path, PathBuf::from("/library/storage/PDFA2222/He 2016.pdf"));
}

#[test]
fn reference_renders_title_key_tags_version_and_path() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(FIXTURE_SQL).unwrap();
    let service = LibraryService::new(SqliteItemRepository::try_new(&conn).unwrap(), test_config());

    let reference = service.reference(&key("STND5555")).unwrap();
    assert_eq!(
        reference,
        "[zotero: Standalone scan, stableid: STND5555, tags: {}, version: 1.0](/library/storage/STND5555/scan.pdf)"
    );
}

#[test]
fn item_without_attachment_is_reported() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(FIXTURE_SQL).unwrap();
    let service = LibraryService::new(SqliteItemRepository::try_new(&conn).unwrap(), test_config());

    let err = service.open_target(&key("BKXY3333")).unwrap_err();
    assert!(matches!(&err, ServiceError::NoAttachment(k) if k.as_str() == "BKXY3333"));
    assert_eq!(err.to_string(), "no attachment found for item: BKXY3333");

    let err = service.reference(&key("BKXY3333")).unwrap_err();
    assert!(matches!(err, ServiceError::NoAttachment(_)));
}

#[test]
fn unknown_key_is_not_found() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(FIXTURE_SQL).unwrap();
    let service = LibraryService::new(SqliteItemRepository::try_new(&conn).unwrap(), test_config());

    let err = service.get(&key("ZZZZ2222")).unwrap_err();
    assert_eq!(err.to_string(), "item not found: ZZZZ2222");
}

#[test]
fn list_reads_through_read_only_file_connection() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("zotero.sqlite");
    let seed = Connection::open(&db_path).unwrap();
    seed.execute_batch(FIXTURE_SQL).unwrap();
    drop(seed);

    let conn = open_library(&db_path).unwrap();
    let config = Config::from_data_dir(dir.path());
    let service = LibraryService::new(SqliteItemRepository::try_new(&conn).unwrap(), config);

    let items = service
        .list(&ItemListQuery::new(None, Some("data".to_string())))
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].key.as_str(), "PCTX7777");
    assert_eq!(service.config().storage_path, dir.path().join("storage"));
}
