#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use focusboard_core::{
    KeyValueStorage, ManualClock, MemoryStorage, StorageError, StorageResult, TaskStore,
};
use std::cell::Cell;
use std::rc::Rc;

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()
}

/// Store over fresh memory storage, driven by a manual clock at `t0()`.
pub fn memory_store() -> (TaskStore, Rc<MemoryStorage>, ManualClock) {
    let storage = Rc::new(MemoryStorage::new());
    let clock = ManualClock::new(t0());
    let store = TaskStore::open(storage.clone())
        .unwrap()
        .with_clock(clock.clone());
    (store, storage, clock)
}

/// Memory storage whose writes can be switched to fail.
#[derive(Default)]
pub struct FlakyStorage {
    inner: MemoryStorage,
    pub fail_writes: Cell<bool>,
}

impl KeyValueStorage for FlakyStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes.get() {
            return Err(StorageError::Backend("quota exceeded".to_string()));
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.inner.remove_item(key)
    }
}
