//! User behavior profile.
//!
//! # Responsibility
//! - Track the cumulative completion counter driving mode classification.
//! - Hold onboarding and intervention-acknowledgment state.
//!
//! # Invariants
//! - `total_completed_tasks` never goes below zero.
//! - `has_seen_onboarding` only transitions false -> true.

use crate::model::task::Timestamp;
use serde::{Deserialize, Serialize};

/// Singleton per-installation behavior profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Lifetime count of completion events. Decremented when a completion
    /// is undone, floored at zero.
    pub total_completed_tasks: u32,
    /// Whether introductory guidance has been acknowledged. Write-once.
    pub has_seen_onboarding: bool,
    /// Last instant an intervention prompt was acknowledged (dismissed or
    /// remediated). Drives the re-prompt cooldown.
    pub last_intervention_at: Option<Timestamp>,
}

impl UserProfile {
    pub fn record_completion(&mut self) {
        self.total_completed_tasks += 1;
    }

    /// Reverses one completion event. Saturates at zero so repeated undo
    /// signals from racing surfaces cannot corrupt the counter.
    pub fn undo_completion(&mut self) {
        self.total_completed_tasks = self.total_completed_tasks.saturating_sub(1);
    }
}
