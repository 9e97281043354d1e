//! Domain model for adaptive task tracking.
//!
//! # Responsibility
//! - Define the canonical task record and user behavior profile.
//! - Keep model types free of clock access; callers pass timestamps in.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`, never reused.
//! - A task with a completion timestamp is never considered overdue.

pub mod profile;
pub mod task;
