//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record mutated by the store.
//! - Provide creation helpers and title validation.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `completed_at` set means the task is done and never counts as overdue.
//! - `title` is non-empty after trimming.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Unix epoch milliseconds. All core time arithmetic uses this unit.
pub type Timestamp = i64;

/// Category assigned when the caller does not provide one.
pub const DEFAULT_CATEGORY: &str = "general";

/// Task urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Validation failures for task creation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only after trimming.
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// Timestamps stay optional so one shape covers deadline-free tasks and
/// not-yet-completed tasks without sentinel values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for completion toggles and deletion.
    pub id: TaskId,
    /// Non-empty display title.
    pub title: String,
    /// Deadline in epoch milliseconds. `None` means no deadline.
    pub due_at: Option<Timestamp>,
    /// Completion instant in epoch milliseconds. `None` means open.
    pub completed_at: Option<Timestamp>,
    /// Free-form grouping label.
    pub category: String,
    pub priority: Priority,
}

impl Task {
    /// Creates a task with a generated stable ID.
    ///
    /// # Errors
    /// - `EmptyTitle` when the trimmed title is empty. No task is produced.
    pub fn new(
        title: impl Into<String>,
        due_at: Option<Timestamp>,
        category: Option<String>,
        priority: Option<Priority>,
    ) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), title, due_at, category, priority)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by snapshot restore and test fixtures where identity already
    /// exists externally.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        due_at: Option<Timestamp>,
        category: Option<String>,
        priority: Option<Priority>,
    ) -> Result<Self, TaskValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }

        Ok(Self {
            id,
            title,
            due_at,
            completed_at: None,
            category: category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            priority: priority.unwrap_or_default(),
        })
    }

    /// Returns whether this task is open (not completed).
    pub fn is_open(&self) -> bool {
        self.completed_at.is_none()
    }
}
