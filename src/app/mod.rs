//! Rickdex application module: runtime, persistence, and history upkeep.

/// History list maintenance for submitted search terms.
pub mod history;
/// Persistence layer for the history list and theme preference.
pub mod persist;
/// Runtime event loop and worker wiring.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;
/// Background fetch worker.
pub mod worker;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::run;
