//! Task domain model.
//!
//! # Responsibility
//! - Define the task record shared by matrix, kanban, calendar and
//!   time-tracking projections.
//! - Provide the factory that assigns identifiers and defaults.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - A task is tracking iff `tracking_since` is set, so at most one session
//!   can be open per task.
//! - `time_spent()` is always the sum of entry durations.
//! - A time entry's `end_time` is never earlier than its `start_time`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of a task.
pub type TaskId = Uuid;

/// Stable identifier of a recorded time entry.
pub type TimeEntryId = Uuid;

/// Eisenhower matrix cell a task is filed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    /// Do first.
    UrgentImportant,
    /// Schedule.
    NotUrgentImportant,
    /// Delegate.
    UrgentNotImportant,
    /// Drop.
    NotUrgentNotImportant,
    /// Not yet classified.
    #[default]
    Unassigned,
}

impl Quadrant {
    /// All quadrants in matrix display order, `Unassigned` last.
    pub const ALL: [Quadrant; 5] = [
        Quadrant::UrgentImportant,
        Quadrant::NotUrgentImportant,
        Quadrant::UrgentNotImportant,
        Quadrant::NotUrgentNotImportant,
        Quadrant::Unassigned,
    ];

    /// Classifies a task from its urgency and importance scores.
    ///
    /// A score counts as urgent/important when it is `>= threshold`.
    /// The scale is caller-defined, so the threshold is too.
    pub fn from_scores(urgency: f64, importance: f64, threshold: f64) -> Self {
        match (urgency >= threshold, importance >= threshold) {
            (true, true) => Quadrant::UrgentImportant,
            (false, true) => Quadrant::NotUrgentImportant,
            (true, false) => Quadrant::UrgentNotImportant,
            (false, false) => Quadrant::NotUrgentNotImportant,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quadrant::UrgentImportant => "urgent-important",
            Quadrant::NotUrgentImportant => "not-urgent-important",
            Quadrant::UrgentNotImportant => "urgent-not-important",
            Quadrant::NotUrgentNotImportant => "not-urgent-not-important",
            Quadrant::Unassigned => "unassigned",
        }
    }
}

impl FromStr for Quadrant {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Quadrant::ALL
            .into_iter()
            .find(|quadrant| quadrant.as_str() == value)
            .ok_or_else(|| UnknownVariant::new("quadrant", value))
    }
}

impl Display for Quadrant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kanban column a task currently occupies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Board columns, left to right.
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownVariant::new("status", value))
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error for kebab-case enum names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl Display for UnknownVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} `{}`", self.kind, self.value)
    }
}

impl Error for UnknownVariant {}

/// Closed interval of recorded work on a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub id: TimeEntryId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Whole minutes between start and end, rounded down.
    pub duration: u32,
    pub note: Option<String>,
}

impl TimeEntry {
    /// Records a closed interval with a fresh ID and derived duration.
    ///
    /// An `end` earlier than `start` (clock stepped backwards) is clamped to
    /// `start`, producing a zero-minute entry.
    pub fn record(start: DateTime<Utc>, end: DateTime<Utc>, note: Option<String>) -> Self {
        let end = end.max(start);
        Self {
            id: Uuid::new_v4(),
            start_time: start,
            end_time: end,
            duration: whole_minutes(start, end),
            note,
        }
    }
}

/// `floor((end - start) / 60s)`, saturating at `u32::MAX`.
pub fn whole_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> u32 {
    let seconds = (end - start).num_seconds().max(0);
    u32::try_from(seconds / 60).unwrap_or(u32::MAX)
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    /// Caller-defined scale.
    pub priority: Option<f64>,
    pub importance: Option<f64>,
    pub urgency: Option<f64>,
    pub completed: bool,
    pub quadrant: Quadrant,
    pub status: TaskStatus,
    /// Target duration in minutes; fractional values are allowed.
    pub goal_time: Option<f64>,
    /// Chronological, oldest first.
    pub time_entries: Vec<TimeEntry>,
    /// Start of the open tracking session, if any.
    pub tracking_since: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a task with a fresh ID and default classification.
    pub fn new(title: impl Into<String>) -> Self {
        TaskDraft::new(title).build()
    }

    /// Minutes recorded across all time entries.
    pub fn time_spent(&self) -> u64 {
        self.time_entries
            .iter()
            .map(|entry| u64::from(entry.duration))
            .sum()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking_since.is_some()
    }

    /// Minutes left until `goal_time`, never negative; `None` without a goal.
    pub fn remaining_goal_minutes(&self) -> Option<f64> {
        self.goal_time
            .map(|goal| (goal - self.time_spent() as f64).max(0.0))
    }
}

/// Caller-supplied overrides for a new task.
///
/// Every field left untouched keeps the factory default; `build` assigns the
/// identifier, so two drafts never share one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Option<f64>,
    pub importance: Option<f64>,
    pub urgency: Option<f64>,
    pub completed: bool,
    pub quadrant: Quadrant,
    pub status: TaskStatus,
    pub goal_time: Option<f64>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn quadrant(mut self, quadrant: Quadrant) -> Self {
        self.quadrant = quadrant;
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn goal_time(mut self, minutes: f64) -> Self {
        self.goal_time = Some(minutes);
        self
    }

    /// Sets urgency and importance scores together.
    pub fn scores(mut self, urgency: f64, importance: f64) -> Self {
        self.urgency = Some(urgency);
        self.importance = Some(importance);
        self
    }

    pub fn build(self) -> Task {
        Task {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            importance: self.importance,
            urgency: self.urgency,
            completed: self.completed,
            quadrant: self.quadrant,
            status: self.status,
            goal_time: self.goal_time,
            time_entries: Vec::new(),
            tracking_since: None,
        }
    }
}
