//! Domain model for tasks and user preferences.
//!
//! # Responsibility
//! - Define canonical data structures used by the stores and the codec.
//! - Keep classification enums (quadrant, kanban status) in one place.
//!
//! # Invariants
//! - Every task and time entry is identified by a fresh UUID v4.
//! - Time spent on a task is derived from its time entries, never stored.

pub mod task;
pub mod theme;
