//! State ownership and persistence collaborator contracts.
//!
//! # Responsibility
//! - Own the single mutable task/profile state (`TaskStore`).
//! - Define the abstract snapshot save/load contract and its JSON file
//!   implementation.
//!
//! # Invariants
//! - `TaskStore` is the only writer of task and profile state.
//! - Snapshot absence or load failure is recoverable; the store starts
//!   empty instead of failing.

pub mod snapshot;
pub mod task_store;
