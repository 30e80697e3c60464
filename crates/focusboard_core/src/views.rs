//! Read-only projections of a task snapshot for the matrix, board,
//! calendar and time-tracking screens.

use crate::model::task::{Quadrant, Task, TaskId, TaskStatus};
use chrono::NaiveDate;

/// Tasks filed under `quadrant`, in collection order.
pub fn by_quadrant(tasks: &[Task], quadrant: Quadrant) -> Vec<&Task> {
    tasks.iter().filter(|task| task.quadrant == quadrant).collect()
}

/// Tasks in kanban column `status`, in collection order.
pub fn by_status(tasks: &[Task], status: TaskStatus) -> Vec<&Task> {
    tasks.iter().filter(|task| task.status == status).collect()
}

/// Tasks due on `day` (UTC calendar day).
pub fn due_on(tasks: &[Task], day: NaiveDate) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| task.due_date.is_some_and(|due| due.date_naive() == day))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeReportRow {
    pub task_id: TaskId,
    pub title: String,
    pub spent_minutes: u64,
    pub goal_minutes: Option<f64>,
    pub is_tracking: bool,
}

impl TimeReportRow {
    /// Whole-percent progress towards a positive goal, uncapped.
    pub fn goal_percent(&self) -> Option<u64> {
        self.goal_minutes
            .filter(|goal| *goal > 0.0)
            .map(|goal| (self.spent_minutes as f64 * 100.0 / goal).floor() as u64)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeReport {
    pub rows: Vec<TimeReportRow>,
    pub total_minutes: u64,
}

/// Spent-versus-goal summary over every task.
pub fn time_report(tasks: &[Task]) -> TimeReport {
    let rows: Vec<TimeReportRow> = tasks
        .iter()
        .map(|task| TimeReportRow {
            task_id: task.id,
            title: task.title.clone(),
            spent_minutes: task.time_spent(),
            goal_minutes: task.goal_time,
            is_tracking: task.is_tracking(),
        })
        .collect();
    let total_minutes = rows.iter().map(|row| row.spent_minutes).sum();
    TimeReport {
        rows,
        total_minutes,
    }
}
