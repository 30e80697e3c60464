//! Task collection store with time tracking.
//!
//! # Responsibility
//! - Own the task collection and expose every allowed mutation.
//! - Mirror each effective mutation to the `eisenhower-tasks` storage key.
//! - Drive the per-task tracking session: start, stop, delete entry.
//!
//! # Invariants
//! - Unknown task or entry IDs are no-ops reported as `Ok(false)`.
//! - `stop_tracking` on an idle task is a no-op.
//! - `start_tracking` on a tracking task restarts the session at `now`.
//! - Subscribers only ever see snapshots that were persisted (or that had no
//!   storage to go to).

use crate::clock::{Clock, SystemClock};
use crate::codec;
use crate::model::task::{Task, TaskId, TimeEntry, TimeEntryId};
use crate::storage::{KeyValueStorage, TASKS_STORAGE_KEY};
use crate::store::subscribers::{Subscribers, SubscriptionId};
use crate::store::StoreResult;
use log::{debug, error, info};
use std::rc::Rc;

/// Owner of the task collection.
pub struct TaskStore {
    tasks: Rc<[Task]>,
    storage: Option<Rc<dyn KeyValueStorage>>,
    clock: Box<dyn Clock>,
    subscribers: Subscribers<[Task]>,
}

impl TaskStore {
    /// Loads the collection from `storage`.
    ///
    /// An absent or unreadable stored document yields an empty store.
    ///
    /// # Errors
    /// - Returns `StoreError::Storage` when the backend cannot be read.
    pub fn open(storage: Rc<dyn KeyValueStorage>) -> StoreResult<Self> {
        let stored = storage.get_item(TASKS_STORAGE_KEY)?;
        let tasks = codec::deserialize(stored.as_deref());
        info!(
            "event=tasks_load module=store status=ok count={}",
            tasks.len()
        );
        Ok(Self::from_parts(tasks, Some(storage)))
    }

    /// Creates an empty store with no storage attached.
    pub fn detached() -> Self {
        Self::from_parts(Vec::new(), None)
    }

    /// Replaces the time source, e.g. with a `ManualClock` in tests.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    fn from_parts(tasks: Vec<Task>, storage: Option<Rc<dyn KeyValueStorage>>) -> Self {
        Self {
            tasks: Rc::from(tasks),
            storage,
            clock: Box::new(SystemClock),
            subscribers: Subscribers::new(),
        }
    }

    /// Current immutable snapshot.
    pub fn tasks(&self) -> Rc<[Task]> {
        Rc::clone(&self.tasks)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn has_storage(&self) -> bool {
        self.storage.is_some()
    }

    /// Registers `callback`; it runs immediately with the current snapshot
    /// and again after every effective mutation.
    pub fn subscribe(&mut self, callback: impl FnMut(&[Task]) + 'static) -> SubscriptionId {
        self.subscribers.add(&self.tasks, Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Appends `task`. IDs are not checked; build tasks with the factory.
    pub fn add_task(&mut self, task: Task) -> StoreResult<bool> {
        let task_id = task.id;
        let mut next = self.tasks.to_vec();
        next.push(task);
        self.commit("task_add", next)?;
        info!("event=task_add module=store status=ok task_id={task_id}");
        Ok(true)
    }

    pub fn remove_task(&mut self, id: TaskId) -> StoreResult<bool> {
        let next: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| task.id != id)
            .cloned()
            .collect();
        if next.len() == self.tasks.len() {
            debug!("event=task_remove module=store status=noop reason=not_found task_id={id}");
            return Ok(false);
        }
        self.commit("task_remove", next)?;
        info!("event=task_remove module=store status=ok task_id={id}");
        Ok(true)
    }

    /// Replaces the stored task that has `updated.id`.
    pub fn update_task(&mut self, updated: Task) -> StoreResult<bool> {
        let id = updated.id;
        self.modify("task_update", id, |_| Some(updated.clone()))
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> StoreResult<bool> {
        self.modify("task_toggle_complete", id, |task| {
            Some(Task {
                completed: !task.completed,
                ..task.clone()
            })
        })
    }

    pub fn update_goal_time(&mut self, id: TaskId, minutes: f64) -> StoreResult<bool> {
        self.modify("task_goal_time", id, |task| {
            Some(Task {
                goal_time: Some(minutes),
                ..task.clone()
            })
        })
    }

    /// Opens a tracking session at `now`, restarting any open one.
    pub fn start_tracking(&mut self, id: TaskId) -> StoreResult<bool> {
        let now = self.clock.now();
        self.modify("tracking_start", id, |task| {
            Some(Task {
                tracking_since: Some(now),
                ..task.clone()
            })
        })
    }

    /// Closes the open session into a new time entry.
    ///
    /// Idle or unknown tasks are left unchanged.
    pub fn stop_tracking(&mut self, id: TaskId, note: Option<String>) -> StoreResult<bool> {
        let now = self.clock.now();
        self.modify("tracking_stop", id, |task| {
            let start = task.tracking_since?;
            let mut next = task.clone();
            next.time_entries
                .push(TimeEntry::record(start, now, note.clone()));
            next.tracking_since = None;
            Some(next)
        })
    }

    pub fn delete_time_entry(&mut self, task_id: TaskId, entry_id: TimeEntryId) -> StoreResult<bool> {
        self.modify("time_entry_delete", task_id, |task| {
            let index = task
                .time_entries
                .iter()
                .position(|entry| entry.id == entry_id)?;
            let mut next = task.clone();
            next.time_entries.remove(index);
            Some(next)
        })
    }

    /// Empties the collection; storage is rewritten even if already empty.
    pub fn clear(&mut self) -> StoreResult<bool> {
        let had_tasks = !self.tasks.is_empty();
        self.commit("tasks_clear", Vec::new())?;
        info!("event=tasks_clear module=store status=ok had_tasks={had_tasks}");
        Ok(had_tasks)
    }

    /// Rebuilds the collection, passing every task with `id` through `change`.
    ///
    /// `change` returns `None` to leave a task as it is. Nothing is committed
    /// unless at least one task changed.
    fn modify<F>(&mut self, event: &str, id: TaskId, mut change: F) -> StoreResult<bool>
    where
        F: FnMut(&Task) -> Option<Task>,
    {
        let mut changed = false;
        let next: Vec<Task> = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == id {
                    if let Some(replacement) = change(task) {
                        changed = true;
                        return replacement;
                    }
                }
                task.clone()
            })
            .collect();

        if !changed {
            debug!("event={event} module=store status=noop task_id={id}");
            return Ok(false);
        }
        self.commit(event, next)?;
        info!("event={event} module=store status=ok task_id={id}");
        Ok(true)
    }

    fn commit(&mut self, event: &str, next: Vec<Task>) -> StoreResult<()> {
        if let Err(err) = self.persist(&next) {
            error!("event={event} module=store status=error error={err}");
            return Err(err);
        }
        self.tasks = Rc::from(next);
        self.subscribers.notify(&self.tasks);
        Ok(())
    }

    fn persist(&self, tasks: &[Task]) -> StoreResult<()> {
        let Some(storage) = self.storage.as_ref() else {
            debug!("event=tasks_persist module=store status=skipped reason=no_storage");
            return Ok(());
        };
        let text = codec::serialize(tasks)?;
        storage.set_item(TASKS_STORAGE_KEY, &text)?;
        Ok(())
    }
}
