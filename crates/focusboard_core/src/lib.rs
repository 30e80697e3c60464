//! Core state model for Focusboard.
//! This crate is the single source of truth for task, tracking and
//! preference invariants.

pub mod clock;
pub mod codec;
pub mod db;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod tools;
pub mod views;

pub use clock::{Clock, ManualClock, SystemClock};
pub use codec::{deserialize, deserialize_strict, serialize, CodecError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Quadrant, Task, TaskDraft, TaskId, TaskStatus, TimeEntry, TimeEntryId};
pub use model::theme::Theme;
pub use storage::{
    KeyValueStorage, MemoryStorage, SqliteStorage, StorageError, StorageResult,
    TASKS_STORAGE_KEY, THEME_STORAGE_KEY,
};
pub use store::{StoreError, StoreResult, SubscriptionId, TaskStore, ThemeStore};
pub use tools::{find_tool, Tool, TOOLS};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
