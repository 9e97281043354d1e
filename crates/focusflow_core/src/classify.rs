//! Behavior-based mode classifier.
//!
//! # Responsibility
//! - Derive the adaptive UI mode from task history and the profile.
//! - Define the shared recently-overdue window predicate.
//!
//! # Invariants
//! - `classify` is a pure function of `(tasks, profile, now)`; no ambient
//!   clock access, no caching across calls.
//! - The NeedsHelp guard is evaluated before the Experienced guard. The
//!   ordering is deliberate: a struggling signal always overrides a
//!   proficiency signal, so the two thresholds must never be combined
//!   into a commutative score.

use crate::model::profile::UserProfile;
use crate::model::task::{Task, Timestamp};
use serde::{Deserialize, Serialize};

/// Tasks due within this trailing window count as recently overdue.
pub const OVERDUE_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Recently-overdue count at or above this classifies NeedsHelp.
pub const NEEDS_HELP_OVERDUE_THRESHOLD: usize = 3;

/// Lifetime completions at or above this classifies Experienced.
pub const EXPERIENCED_COMPLETIONS_THRESHOLD: u32 = 5;

/// Adaptive UI mode derived from observed behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserMode {
    /// Little history yet; the host shows guided surfaces.
    Beginner,
    /// Established completion habit; the host shows dense surfaces.
    Experienced,
    /// Recent deadline lapses; the host offers remediation.
    NeedsHelp,
}

/// Returns whether `task` became overdue within the trailing window.
///
/// True when the task is open, has a due date, and that due date lies in
/// `[now - 7d, now)`. The window is anchored on the due date itself, not
/// on when the lapse was first observed, so intermittent polling cannot
/// shift a task in or out of the window. The lower bound is inclusive:
/// a task due exactly seven days ago still counts; anything older is a
/// stale lapse and is excluded so one forgotten task cannot pin the user
/// in NeedsHelp forever.
pub fn is_recently_overdue(task: &Task, now: Timestamp) -> bool {
    if task.completed_at.is_some() {
        return false;
    }
    match task.due_at {
        Some(due) => due < now && due >= now - OVERDUE_WINDOW_MS,
        None => false,
    }
}

/// Counts tasks matching [`is_recently_overdue`] at `now`.
pub fn overdue_count(tasks: &[Task], now: Timestamp) -> usize {
    tasks
        .iter()
        .filter(|task| is_recently_overdue(task, now))
        .count()
}

/// Classifies the user from current store contents.
///
/// Ordered guards, first match wins:
/// 1. three or more recently-overdue tasks -> NeedsHelp, regardless of
///    how many tasks were ever completed;
/// 2. five or more lifetime completions -> Experienced;
/// 3. otherwise Beginner.
///
/// Total over its domain: an empty task list and zeroed profile classify
/// as Beginner.
pub fn classify(tasks: &[Task], profile: &UserProfile, now: Timestamp) -> UserMode {
    if overdue_count(tasks, now) >= NEEDS_HELP_OVERDUE_THRESHOLD {
        return UserMode::NeedsHelp;
    }

    if profile.total_completed_tasks >= EXPERIENCED_COMPLETIONS_THRESHOLD {
        return UserMode::Experienced;
    }

    UserMode::Beginner
}
