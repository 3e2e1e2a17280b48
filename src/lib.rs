#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, default panic handler prints to stderr and aborts

//! # sumcell
//!
//! Tagged-value cells with `Optional` and `Fallible` facades.
//!
//! **Value-level sum types with an explicit storage layer.**
//!
//! ## Architecture
//!
//! A caller builds a [`Payload`] box, hands it to a facade, and the facade
//! records it in a two-slot [`TaggedStorage`] cell. Combinators consume and
//! produce new facades by moving the active payload out of storage;
//! [`Ref`]/[`RefMut`] projections borrow it in place without copying.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Payload (value box), Unit (absence marker)                     |
//! |  - Ref / RefMut (non-owning projections)                          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Storage                                                 |
//! |  - Tag (discriminant), TaggedStorage (two-slot cell)              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Facades                                                 |
//! |  - Optional<T> ("value or absence")                               |
//! |  - Fallible<T, E> ("success or error")                            |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Failure model
//!
//! - Recoverable absence/failure is **data**: `None` / `Err(e)`, propagated
//!   through combinators and consumed via fallback-accepting unwraps.
//! - Contract violations (unwrapping the wrong state) funnel into the
//!   process-wide [`panic`] hook, fatal by default and overridable by the
//!   host via [`set_panic_handler`].
//!
//! ## Quick Start
//!
//! ```
//! use sumcell::prelude::*;
//!
//! let doubled = Optional::some(5)
//!     .filter(|x| *x > 3)
//!     .map(|x| x * 2)
//!     .unwrap_or(0);
//! assert_eq!(doubled, 10);
//!
//! let failure: Fallible<i32, &str> = Fallible::from_err("bad");
//! assert_eq!(failure.unwrap_or(7), 7);
//! ```

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod payload;
pub mod reference;

// =============================================================================
// Layer 1: Storage
// =============================================================================
pub mod storage;

// =============================================================================
// Layer 2: Facades
// =============================================================================
pub mod fallible;
pub mod optional;

// Panic hook (host-overridable fatal error sink)
pub mod panic;

// Short numeric aliases
pub mod types;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use fallible::Fallible;
pub use optional::Optional;
pub use panic::{PanicHandler, panic_handler, panic_with, set_panic_handler};
pub use payload::{Payload, Unit};
pub use reference::{Ref, RefMut};
pub use storage::{Tag, TaggedStorage};

/// Common items for working with tagged values.
pub mod prelude {
    pub use crate::fallible::Fallible;
    pub use crate::optional::Optional;
    pub use crate::panic::{panic_handler, set_panic_handler};
    pub use crate::reference::{Ref, RefMut};
}
