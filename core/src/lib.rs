//! Contracts shared by every DataEngine container.
//!
//! A DataEngine is a capacity-tracked container. This crate does not store
//! anything by itself: it defines what a list-like or deque-like engine must
//! promise, and implements everything that can be expressed on top of a
//! handful of storage hooks:
//!
//! - [`CapabilityDescriptor`]: the validated (kind, nature, behavior, ordering)
//!   tuple each engine type declares as a `const`.
//! - [`DataEngine`]: the base contract. Capacity bookkeeping, the
//!   grow/shrink policy, cloning and moving, and the cross-type bridge
//!   operations (`equals`, `equivalence`, `merge`).
//! - [`ListContract`] and [`DequeContract`]: index-addressed and
//!   double-ended extensions.
//! - [`bridge`]: checked recovery of a concrete engine from a
//!   `dyn DataEngine<E>`.
//!
//! Concrete engines live in `dataengine-collections`.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports the allocation types both under std and no_std.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, vec, vec::Vec};
}

#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod bridge;
pub mod deque;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod list;
mod macros;
pub mod options;
pub mod policy;
pub mod range;
#[cfg(feature = "std")]
pub mod shared;
pub mod sortable;

#[cfg(test)]
mod testing;

pub use deque::{DEQUE_ABSTRACTION, DequeContract};
pub use descriptor::{
    Behavior, CapabilityDescriptor, CapabilityFlags, Implementation, Nature, Ordering,
};
pub use engine::{DataEngine, Element, Internal};
pub use error::{DescriptorError, EngineError};
pub use list::{LIST_ABSTRACTION, ListContract};
pub use options::{
    DEFAULT_CAPACITY, EngineOptions, EngineOptionsOverride, GOLDEN_RATIO, GROWTH_LOAD_FACTOR,
    SHRINK_LOAD_FACTOR,
};
pub use policy::{Capacity, CapacityPolicy};
pub use range::Range;
#[cfg(feature = "std")]
pub use shared::SharedEngine;
pub use sortable::Sortable;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_grow_policy() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
