use focusboard_core::db::migrations::latest_version;
use focusboard_core::db::{open_db, open_db_in_memory, DbError};
use focusboard_core::{
    KeyValueStorage, SqliteStorage, StorageError, Task, TaskStore, Theme, ThemeStore,
    TASKS_STORAGE_KEY, THEME_STORAGE_KEY,
};
use rusqlite::Connection;
use std::rc::Rc;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(schema_version(&conn), latest_version());

    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_entries');",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(
        SqliteStorage::open(&path),
        Err(StorageError::Db(DbError::UnsupportedSchemaVersion { .. }))
    ));
}

#[test]
fn set_get_remove_items() {
    let storage = SqliteStorage::open_in_memory().unwrap();
    assert_eq!(storage.get_item("missing").unwrap(), None);

    storage.set_item("theme", "light").unwrap();
    storage.set_item("theme", "dark").unwrap();
    storage.set_item("eisenhower-tasks", "[]").unwrap();
    assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(storage.keys().unwrap(), vec!["eisenhower-tasks", "theme"]);

    storage.remove_item("theme").unwrap();
    assert_eq!(storage.get_item("theme").unwrap(), None);
}

#[test]
fn from_connection_migrates_raw_connection() {
    let storage = SqliteStorage::from_connection(Connection::open_in_memory().unwrap()).unwrap();
    storage.set_item("k", "v").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn stores_share_one_file_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("focusboard.db");
    let task = Task::new("persisted");

    {
        let storage: Rc<dyn KeyValueStorage> = Rc::new(SqliteStorage::open(&path).unwrap());
        let mut tasks = TaskStore::open(Rc::clone(&storage)).unwrap();
        let mut theme = ThemeStore::open(storage).unwrap();
        tasks.add_task(task.clone()).unwrap();
        theme.set(Theme::Light).unwrap();
    }

    let storage = Rc::new(SqliteStorage::open(&path).unwrap());
    assert!(storage.get_item(TASKS_STORAGE_KEY).unwrap().is_some());
    assert_eq!(
        storage.get_item(THEME_STORAGE_KEY).unwrap().as_deref(),
        Some("light")
    );

    let tasks = TaskStore::open(storage.clone()).unwrap();
    let theme = ThemeStore::open(storage).unwrap();
    assert_eq!(tasks.tasks().to_vec(), vec![task]);
    assert_eq!(theme.current(), Theme::Light);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}
