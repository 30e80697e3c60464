//! Observable state owners for tasks and preferences.
//!
//! # Responsibility
//! - Own the authoritative in-memory state and mirror it to storage.
//! - Notify subscribers synchronously after each effective change.
//!
//! # Invariants
//! - State is replaced, never edited in place: each mutation builds a new
//!   value and swaps it in.
//! - Storage is written before the swap; a failed write leaves state and
//!   subscribers untouched.
//! - A store without storage still updates in memory.

use crate::codec::CodecError;
use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod subscribers;
pub mod task_store;
pub mod theme_store;

pub use subscribers::SubscriptionId;
pub use task_store::TaskStore;
pub use theme_store::ThemeStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failure during a store operation.
///
/// Unknown IDs are never errors; they are reported as `Ok(false)`.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Codec(CodecError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<CodecError> for StoreError {
    fn from(value: CodecError) -> Self {
        Self::Codec(value)
    }
}
