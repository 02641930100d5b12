use rusqlite::Connection;
use zotero_store_core::db::{open_library, DbError};
use zotero_store_core::{RepoError, SqliteItemRepository};

const FIXTURE_SQL: &str = include_str!("fixtures/zotero_library.sql");

#[test]
fn open_library_returns_read_only_connection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zotero.sqlite");
    let seed = Connection::open(&path).unwrap();
    seed.execute_batch(FIXTURE_SQL).unwrap();
    drop(seed);

    let conn = open_library(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM items;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 9);

    assert!(conn.execute("DELETE FROM tags;", []).is_err());
    let query_only: i64 = conn
        .query_row("PRAGMA query_only;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(query_only, 1);
}

#[test]
fn missing_database_file_is_an_error_and_not_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.sqlite");

    let err = open_library(&path).unwrap_err();
    assert!(matches!(err, DbError::Sqlite(_)));
    assert!(!path.exists());
}

#[test]
fn database_without_zotero_schema_is_rejected_by_repository() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("other.sqlite");
    let seed = Connection::open(&path).unwrap();
    seed.execute_batch("CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT);")
        .unwrap();
    drop(seed);

    let conn = open_library(&path).unwrap();
    let err = match SqliteItemRepository::try_new(&conn) {
        Ok(_) => panic!("schema check should fail"),
        Err(err) => err,
    };
    assert!(matches!(
        err,
        RepoError::Db(DbError::MissingRequiredTable("items"))
    ));
}
