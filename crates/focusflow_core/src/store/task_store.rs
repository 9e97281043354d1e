//! Task store: the single owner and writer of core state.
//!
//! # Responsibility
//! - Own the task collection and the user profile.
//! - Provide the create/complete/delete and bulk remediation operations.
//!
//! # Invariants
//! - All mutations go through `&mut self`; classifier and intervention
//!   logic only borrow snapshots.
//! - Insertion order of tasks is preserved.
//! - Unknown-id complete/delete is a silent no-op: the id may have raced
//!   with a delete from another surface, which is recoverable.
//! - Remediation and dismissal record the acknowledgment instant used by
//!   the intervention cooldown.

use crate::classify::{self, UserMode};
use crate::model::profile::UserProfile;
use crate::model::task::{Priority, Task, TaskId, TaskValidationError, Timestamp};
use crate::store::snapshot::Snapshot;
use log::{debug, info};

/// Input for [`TaskStore::add_task`]. Optional fields fall back to the
/// model defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    pub title: String,
    pub due_at: Option<Timestamp>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
}

impl AddTaskRequest {
    /// Request with only a title; everything else defaulted.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            due_at: None,
            category: None,
            priority: None,
        }
    }
}

/// Partial profile overwrite for debug/fixture loading.
///
/// `last_intervention_at` is doubly optional: the outer `Option` selects
/// whether to touch the field, the inner one is the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub total_completed_tasks: Option<u32>,
    pub has_seen_onboarding: Option<bool>,
    pub last_intervention_at: Option<Option<Timestamp>>,
}

/// Wholesale debug overwrite of tasks and/or profile fields.
#[derive(Debug, Clone, Default)]
pub struct DebugStatePatch {
    pub tasks: Option<Vec<Task>>,
    pub profile: ProfilePatch,
}

/// In-memory state owner. One instance per installation; hosts running
/// under real parallelism must serialize access externally.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    profile: UserProfile,
}

impl TaskStore {
    /// Creates an empty store with default profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a store from a persisted snapshot.
    ///
    /// `None` (absent or failed load) starts empty; persistence problems
    /// are never fatal to the core.
    pub fn from_snapshot(snapshot: Option<Snapshot>) -> Self {
        match snapshot {
            Some(snapshot) => Self {
                tasks: snapshot.tasks,
                profile: snapshot.profile,
            },
            None => Self::new(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Owned copy of the full state for the persistence collaborator.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.clone(),
            profile: self.profile.clone(),
        }
    }

    /// Number of tasks currently matching the recently-overdue window.
    pub fn overdue_count(&self, now: Timestamp) -> usize {
        classify::overdue_count(&self.tasks, now)
    }

    /// Derives the adaptive mode from current contents. Recomputed on
    /// every call; the result is wall-clock-relative and must not be
    /// cached across time.
    pub fn mode(&self, now: Timestamp) -> UserMode {
        classify::classify(&self.tasks, &self.profile, now)
    }

    /// Appends a new task and returns its fresh id.
    ///
    /// # Errors
    /// - `EmptyTitle` when the trimmed title is empty; the store is left
    ///   unchanged.
    pub fn add_task(&mut self, request: AddTaskRequest) -> Result<TaskId, TaskValidationError> {
        let task = Task::new(
            request.title,
            request.due_at,
            request.category,
            request.priority,
        )?;
        let id = task.id;
        self.tasks.push(task);
        info!(
            "event=task_add module=store status=ok id={id} task_count={}",
            self.tasks.len()
        );
        Ok(id)
    }

    /// Toggles completion state for `id` at instant `now`.
    ///
    /// Completing sets `completed_at = now` and increments the lifetime
    /// counter; un-completing clears the timestamp and decrements the
    /// counter, floored at zero. Unknown id is a no-op.
    pub fn complete_task(&mut self, id: TaskId, now: Timestamp) {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event=task_complete module=store status=ok outcome=not_found id={id}");
            return;
        };

        if task.is_open() {
            task.completed_at = Some(now);
            self.profile.record_completion();
            info!(
                "event=task_complete module=store status=ok outcome=completed id={id} total_completed={}",
                self.profile.total_completed_tasks
            );
        } else {
            task.completed_at = None;
            self.profile.undo_completion();
            info!(
                "event=task_complete module=store status=ok outcome=reopened id={id} total_completed={}",
                self.profile.total_completed_tasks
            );
        }
    }

    /// Removes the task with `id`. Unknown id is a no-op.
    pub fn delete_task(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() < before {
            info!(
                "event=task_delete module=store status=ok id={id} task_count={}",
                self.tasks.len()
            );
        } else {
            debug!("event=task_delete module=store status=ok outcome=not_found id={id}");
        }
    }

    /// Marks introductory guidance as acknowledged. One-way.
    pub fn set_onboarding_seen(&mut self) {
        self.profile.has_seen_onboarding = true;
    }

    /// Moves every recently-overdue task's deadline to `now` and records
    /// the acknowledgment instant. Returns how many tasks moved.
    ///
    /// Completed tasks, tasks without a deadline, and tasks overdue for
    /// longer than the window are untouched.
    pub fn reschedule_overdue(&mut self, now: Timestamp) -> usize {
        let mut moved = 0;
        for task in &mut self.tasks {
            if classify::is_recently_overdue(task, now) {
                task.due_at = Some(now);
                moved += 1;
            }
        }
        self.profile.last_intervention_at = Some(now);
        info!("event=overdue_reschedule module=store status=ok moved={moved}");
        moved
    }

    /// Removes every recently-overdue task and records the acknowledgment
    /// instant. Returns how many tasks were removed.
    pub fn clear_overdue(&mut self, now: Timestamp) -> usize {
        let before = self.tasks.len();
        self.tasks
            .retain(|task| !classify::is_recently_overdue(task, now));
        let removed = before - self.tasks.len();
        self.profile.last_intervention_at = Some(now);
        info!("event=overdue_clear module=store status=ok removed={removed}");
        removed
    }

    /// Records the acknowledgment instant without touching tasks.
    pub fn dismiss(&mut self, now: Timestamp) {
        self.profile.last_intervention_at = Some(now);
        info!("event=intervention_dismiss module=store status=ok");
    }

    /// Debug-only wholesale overwrite. Bypasses validation; intended for
    /// test fixtures and the debug panel.
    pub fn load_debug_state(&mut self, patch: DebugStatePatch) {
        if let Some(tasks) = patch.tasks {
            self.tasks = tasks;
        }
        if let Some(count) = patch.profile.total_completed_tasks {
            self.profile.total_completed_tasks = count;
        }
        if let Some(seen) = patch.profile.has_seen_onboarding {
            self.profile.has_seen_onboarding = seen;
        }
        if let Some(at) = patch.profile.last_intervention_at {
            self.profile.last_intervention_at = at;
        }
        debug!(
            "event=debug_state_load module=store status=ok task_count={}",
            self.tasks.len()
        );
    }

    /// Debug-only reset to empty defaults. The only re-initialization
    /// path besides constructing a new store.
    pub fn reset(&mut self) {
        self.tasks.clear();
        self.profile = UserProfile::default();
        info!("event=store_reset module=store status=ok");
    }
}
