//! Intervention decision logic and surface state machine.
//!
//! # Responsibility
//! - Decide whether a remediation prompt should currently be visible.
//! - Expose the remediation entry points and dismissal with cooldown.
//!
//! # Invariants
//! - The decision is recomputed from `(mode, last acknowledgment, now)` on
//!   every evaluation; it is wall-clock-relative and must not be cached.
//! - Any acknowledgment (dismiss or remediation) resets the cooldown clock
//!   and hides the surface.
//! - The Hidden/Shown cycle has no terminal state.

use crate::classify::UserMode;
use crate::model::task::Timestamp;
use crate::store::task_store::TaskStore;
use log::info;

/// Re-prompt suppression period after an acknowledgment.
pub const INTERVENTION_COOLDOWN_MS: i64 = 60 * 60 * 1000;

/// Visibility state of the intervention surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceState {
    #[default]
    Hidden,
    Shown,
}

/// Returns whether a remediation prompt should be visible right now.
///
/// False unless the mode is NeedsHelp. A user who never acknowledged a
/// prompt is always eligible; afterwards the prompt re-arms only once a
/// full cooldown has elapsed (inclusive at exactly one hour), and only
/// while the underlying overdue condition still holds.
pub fn should_show_intervention(
    mode: UserMode,
    last_intervention_at: Option<Timestamp>,
    now: Timestamp,
) -> bool {
    if mode != UserMode::NeedsHelp {
        return false;
    }
    match last_intervention_at {
        None => true,
        Some(acknowledged_at) => now - acknowledged_at >= INTERVENTION_COOLDOWN_MS,
    }
}

/// Drives the visible intervention surface.
///
/// Holds only the Hidden/Shown state; every decision input is read fresh
/// from the store and the supplied instant. Hosts call [`refresh`] on
/// every task-set or clock change and the remediation methods from the
/// prompt's actions.
///
/// [`refresh`]: InterventionController::refresh
#[derive(Debug, Default)]
pub struct InterventionController {
    state: SurfaceState,
}

impl InterventionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// Re-evaluates visibility against current store contents.
    ///
    /// Transitions Hidden -> Shown when the decision flips true, and
    /// Shown -> Hidden when it re-evaluates false, e.g. when the overdue
    /// count drops because the window advanced past a stale deadline.
    pub fn refresh(&mut self, store: &TaskStore, now: Timestamp) -> SurfaceState {
        let mode = store.mode(now);
        let visible =
            should_show_intervention(mode, store.profile().last_intervention_at, now);

        let next = if visible {
            SurfaceState::Shown
        } else {
            SurfaceState::Hidden
        };
        if next != self.state {
            info!(
                "event=intervention_surface module=intervention status=ok transition={:?}->{:?}",
                self.state, next
            );
            self.state = next;
        }
        next
    }

    /// Reschedules all recently-overdue tasks to `now` and hides the
    /// surface. Returns the number of tasks moved.
    pub fn reschedule_overdue(&mut self, store: &mut TaskStore, now: Timestamp) -> usize {
        let moved = store.reschedule_overdue(now);
        self.state = SurfaceState::Hidden;
        moved
    }

    /// Removes all recently-overdue tasks and hides the surface. Returns
    /// the number of tasks removed.
    pub fn clear_overdue(&mut self, store: &mut TaskStore, now: Timestamp) -> usize {
        let removed = store.clear_overdue(now);
        self.state = SurfaceState::Hidden;
        removed
    }

    /// Acknowledges the prompt without altering tasks and hides the
    /// surface. Quiets re-prompting for the same cooldown as a completed
    /// remediation.
    pub fn dismiss(&mut self, store: &mut TaskStore, now: Timestamp) {
        store.dismiss(now);
        self.state = SurfaceState::Hidden;
    }
}
