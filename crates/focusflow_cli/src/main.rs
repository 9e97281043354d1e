//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `focusflow_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use focusflow_core::TaskStore;

fn main() {
    // Why: a fixed instant keeps the probe output stable between runs.
    let now = 0;
    let store = TaskStore::new();
    println!("focusflow_core version={}", focusflow_core::core_version());
    println!("focusflow_core empty_store_mode={:?}", store.mode(now));
}
