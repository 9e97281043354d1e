//! Core domain logic for FocusFlow.
//! This crate is the single source of truth for the adaptive
//! classification and intervention rules.

pub mod classify;
pub mod intervention;
pub mod logging;
pub mod model;
pub mod store;

pub use classify::{
    classify, is_recently_overdue, overdue_count, UserMode, EXPERIENCED_COMPLETIONS_THRESHOLD,
    NEEDS_HELP_OVERDUE_THRESHOLD, OVERDUE_WINDOW_MS,
};
pub use intervention::{
    should_show_intervention, InterventionController, SurfaceState, INTERVENTION_COOLDOWN_MS,
};
pub use logging::{default_log_level, init_logging};
pub use model::profile::UserProfile;
pub use model::task::{
    Priority, Task, TaskId, TaskValidationError, Timestamp, DEFAULT_CATEGORY,
};
pub use store::snapshot::{
    JsonSnapshotStore, Snapshot, SnapshotError, SnapshotResult, SnapshotStore,
};
pub use store::task_store::{AddTaskRequest, DebugStatePatch, ProfilePatch, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
