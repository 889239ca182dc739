use std::cell::Cell;
use std::panic::{self, UnwindSafe};

use tracing::{debug, error};

thread_local! {
    static IN_PARSER: Cell<bool> = const { Cell::new(false) };
}

/// Runs a third-party parser, catching any panic it raises.
pub(crate) fn catch_parser_panic<T, F>(f: F) -> std::thread::Result<T>
where
    F: FnOnce() -> T + UnwindSafe,
{
    IN_PARSER.set(true);
    let outcome = panic::catch_unwind(f);
    IN_PARSER.set(false);
    outcome
}

/// Whether the current thread is inside [`catch_parser_panic`].
pub(crate) fn parser_running() -> bool {
    IN_PARSER.get()
}

/// Replaces the default panic hook with one that logs through `tracing`.
///
/// Parser panics are caught and reported per document, but the default hook
/// still prints each one to stderr. With this hook they are logged at debug
/// level; any other panic is logged as an error. Call once at startup.
pub fn install_panic_logger() {
    panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));

        if parser_running() {
            debug!(location = location.as_deref(), panic = %info, "Document parser panicked");
        } else {
            error!(location = location.as_deref(), panic = %info, "Panic");
        }
    }));
}
