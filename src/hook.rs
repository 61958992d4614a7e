//! Process termination hook for fatal-severity records.
//!
//! Termination is an injected capability rather than a hard-coded exit
//! call, so the fatal path stays unit-testable. The default handler
//! exits the process with a failure status; tests install a recording
//! closure and restore the default afterward.

use std::sync::{Arc, PoisonError, RwLock};

type ExitHandler = Arc<dyn Fn() + Send + Sync>;

// None means the default behavior: terminate the process.
static EXIT_HANDLER: RwLock<Option<ExitHandler>> = RwLock::new(None);

/// Replaces the termination handler invoked after a fatal record has
/// been written to all sinks. Call [`reset_exit_handler`] when done to
/// avoid leaking the override into unrelated code.
pub fn set_exit_handler<F>(handler: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let mut slot = EXIT_HANDLER
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *slot = Some(Arc::new(handler));
}

/// Restores the default terminate-the-process behavior.
pub fn reset_exit_handler() {
    let mut slot = EXIT_HANDLER
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *slot = None;
}

/// Runs the current handler. The handler is cloned out and the slot's
/// lock released before the call, so a handler may itself install or
/// reset the handler (or emit another fatal record) without deadlocking.
pub(crate) fn invoke() {
    let handler = EXIT_HANDLER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();

    match handler {
        Some(handler) => handler(),
        None => std::process::exit(1),
    }
}
