//! Text encoding of the task collection for durable storage.
//!
//! # Responsibility
//! - Map tasks to a JSON array of camelCase records and back.
//! - Keep timestamps typed across a save/reload cycle.
//!
//! # Invariants
//! - Timestamps are written as RFC 3339 text and decoded into `DateTime<Utc>`.
//! - `timeSpent` and `isTracking` are written for readers of the stored
//!   document but ignored on decode; both are derived from other fields.
//! - Stored entry durations are recomputed from their timestamps, and a
//!   reversed interval is clamped to zero minutes.
//! - Non-finite scores and goals are written as `null` and read back as `None`.
//! - `deserialize` never fails: unreadable input decodes to an empty list.

use crate::model::task::{
    whole_minutes, Quadrant, Task, TaskId, TaskStatus, TimeEntry, TimeEntryId,
};
use chrono::{DateTime, Utc};
use log::warn;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub struct CodecError(serde_json::Error);

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "task collection codec error: {}", self.0)
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(value: serde_json::Error) -> Self {
        Self(value)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    id: TaskId,
    #[serde(default)]
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    importance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    urgency: Option<f64>,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    quadrant: Quadrant,
    #[serde(default)]
    status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    goal_time: Option<f64>,
    #[serde(default, deserialize_with = "skip_derived")]
    time_spent: u64,
    #[serde(default)]
    time_entries: Vec<TimeEntryRecord>,
    #[serde(default)]
    is_tracking: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_tracking_start: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimeEntryRecord {
    id: TimeEntryId,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    #[serde(default, deserialize_with = "skip_derived")]
    duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

/// Accepts any stored value for a derived field and yields the default.
fn skip_derived<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default,
{
    IgnoredAny::deserialize(deserializer).map(|_| T::default())
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
            priority: task.priority,
            importance: task.importance,
            urgency: task.urgency,
            completed: task.completed,
            quadrant: task.quadrant,
            status: task.status,
            goal_time: task.goal_time,
            time_spent: task.time_spent(),
            time_entries: task.time_entries.iter().map(TimeEntryRecord::from).collect(),
            is_tracking: task.is_tracking(),
            last_tracking_start: task.tracking_since,
        }
    }
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        // `isTracking` without a start instant cannot be resumed.
        let tracking_since = record.last_tracking_start.filter(|_| record.is_tracking);
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            due_date: record.due_date,
            priority: record.priority,
            importance: record.importance,
            urgency: record.urgency,
            completed: record.completed,
            quadrant: record.quadrant,
            status: record.status,
            goal_time: record.goal_time,
            time_entries: record.time_entries.into_iter().map(TimeEntry::from).collect(),
            tracking_since,
        }
    }
}

impl From<&TimeEntry> for TimeEntryRecord {
    fn from(entry: &TimeEntry) -> Self {
        Self {
            id: entry.id,
            start_time: entry.start_time,
            end_time: entry.end_time,
            duration: entry.duration,
            note: entry.note.clone(),
        }
    }
}

impl From<TimeEntryRecord> for TimeEntry {
    fn from(record: TimeEntryRecord) -> Self {
        let end_time = record.end_time.max(record.start_time);
        Self {
            id: record.id,
            start_time: record.start_time,
            end_time,
            duration: whole_minutes(record.start_time, end_time),
            note: record.note,
        }
    }
}

/// Encodes the full collection as a JSON array.
pub fn serialize(tasks: &[Task]) -> Result<String, CodecError> {
    let records: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Decodes stored text, surfacing parse failures.
pub fn deserialize_strict(text: &str) -> Result<Vec<Task>, CodecError> {
    let records: Vec<TaskRecord> = serde_json::from_str(text)?;
    Ok(records.into_iter().map(Task::from).collect())
}

/// Decodes stored text; absent or unreadable input yields no tasks.
pub fn deserialize(text: Option<&str>) -> Vec<Task> {
    let Some(text) = text else {
        return Vec::new();
    };
    match deserialize_strict(text) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!(
                "event=tasks_decode module=codec status=error bytes={} error={}",
                text.len(),
                err
            );
            Vec::new()
        }
    }
}
