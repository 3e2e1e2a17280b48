//! Process-wide panic hook.
//!
//! Contract violations (unwrapping the wrong facade state) are unrecoverable
//! at this layer. They funnel into a single process-wide handler that a host
//! application can redirect, e.g. to logging plus controlled shutdown,
//! without touching the facades:
//!
//! ```
//! use sumcell::panic::{set_panic_handler, PanicHandler};
//!
//! fn quiet(message: core::fmt::Arguments<'_>) -> ! {
//!     // log, flush, shut down...
//!     core::panic!("{message}");
//! }
//!
//! let previous: PanicHandler = set_panic_handler(quiet);
//! set_panic_handler(previous);
//! ```
//!
//! Messages are passed as `fmt::Arguments`, so dispatch allocates nothing
//! and works under `no_std`.

use core::fmt;
use core::mem;
use core::ptr;
use core::sync::atomic::{AtomicPtr, Ordering};

/// Handler for fatal contract violations. Must not return.
pub type PanicHandler = fn(message: fmt::Arguments<'_>) -> !;

// Null means "default handler"; a fn pointer cannot be cast to a raw
// pointer in a const initializer.
static HOOK: AtomicPtr<()> = AtomicPtr::new(ptr::null_mut());

fn default_handler(message: fmt::Arguments<'_>) -> ! {
    #[cfg(feature = "std")]
    {
        eprintln!("{message}");
        std::process::abort();
    }

    #[cfg(not(feature = "std"))]
    core::panic!("{}", message);
}

fn decode(raw: *mut ()) -> PanicHandler {
    if raw.is_null() {
        default_handler
    } else {
        // HOOK only ever stores pointers produced by `set_panic_handler`,
        // which are valid `PanicHandler` values.
        unsafe { mem::transmute::<*mut (), PanicHandler>(raw) }
    }
}

/// Returns the currently installed handler.
pub fn panic_handler() -> PanicHandler {
    decode(HOOK.load(Ordering::Acquire))
}

/// Installs a new handler and returns the previous one.
pub fn set_panic_handler(handler: PanicHandler) -> PanicHandler {
    decode(HOOK.swap(handler as *mut (), Ordering::AcqRel))
}

/// Reports a fatal error through the installed handler.
pub fn panic_with(message: fmt::Arguments<'_>) -> ! {
    panic_handler()(message)
}

/// Fixed-format message for a failed `expect` family call.
pub(crate) fn failed_expect(type_name: &str, expected: &str, message: &str) -> ! {
    panic_with(format_args!(
        "`{type_name}` failed expect `{expected}` with message '{message}'!"
    ))
}

/// Fixed-format message for a failed unconditional unwrap.
pub(crate) fn failed_unwrap(type_name: &str, contained: &str) -> ! {
    panic_with(format_args!(
        "Unwrap `{type_name}` failed, it contains `{contained}`!"
    ))
}
