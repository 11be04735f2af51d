//! DataEngine - capacity-tracked containers behind common contracts
//!
//! # Overview
//!
//! Every container in this crate is a *DataEngine*: it declares a
//! [`CapabilityDescriptor`] (mutable or not, fixed-length or dynamic, sorted
//! or not), tracks its active size against a max capacity, and grows or
//! shrinks by a shared policy. On top of that, engines implement either the
//! [`ListContract`] (index-addressed) or the [`DequeContract`]
//! (double-ended).
//!
//! Operations that take another engine accept *any* engine with the same
//! element type, so an `ArrayList` can be compared with, merged with or
//! filled from a `LinkedList` without converting either side.
//!
//! # Quick Start
//!
//! ```
//! use dataengine::{ArrayList, DataEngine, LinkedList, ListContract};
//!
//! let mut list = ArrayList::new();
//! for value in 0..13 {
//!     list.add(value).unwrap();
//! }
//! // The 13th element pushed the load above 0.75: capacity grew by the
//! // golden ratio before `add` returned.
//! assert_eq!(list.max_capacity(), 26);
//!
//! let tail = LinkedList::try_from(vec![10, 11, 12]).unwrap();
//! assert!(list.contains_all(&tail));
//! assert!(list.sub_list(10).unwrap().equals(&tail));
//! ```
//!
//! # Error Handling
//!
//! Expected misuse never panics. Predicates answer `false`, lookups answer
//! `None`, and mutators and producers return an [`EngineError`] that leaves
//! the engine untouched:
//!
//! ```
//! use dataengine::{EngineError, ListContract, RingDeque, DequeContract, SortedList};
//!
//! let mut sorted = SortedList::try_from(vec![1, 5]).unwrap();
//! assert_eq!(sorted.add_at(9, 1), Err(EngineError::OrderViolation));
//! assert_eq!(sorted.get(7), None);
//!
//! let mut deque = RingDeque::<i32>::new();
//! assert_eq!(deque.remove_first(), Err(EngineError::Empty));
//! ```
//!
//! Only allocation failures are faults ([`EngineError::is_fault`]).
//!
//! # Configuration
//!
//! Growth is tuned per engine with [`EngineOptions`]:
//!
//! ```
//! use dataengine::{ArrayList, DataEngine, EngineOptions, ListContract};
//!
//! let options = EngineOptions::default()
//!     .with_initial_capacity(4)
//!     .with_growth_ratio(2.0);
//! options.validate().unwrap();
//!
//! let mut list = ArrayList::with_options(options);
//! list.add_slice(&[1, 2, 3, 4]).unwrap();
//! assert_eq!(list.max_capacity(), 8);
//! ```

// Re-export the contracts from dataengine_core
pub use dataengine_core::{
    Behavior, CapabilityDescriptor, CapabilityFlags, DEFAULT_CAPACITY, DEQUE_ABSTRACTION,
    DataEngine, DequeContract, Element, EngineOptions, EngineOptionsOverride, GOLDEN_RATIO,
    GROWTH_LOAD_FACTOR, Implementation, Internal, LIST_ABSTRACTION, ListContract, Nature, Ordering,
    SHRINK_LOAD_FACTOR, Sortable, bridge, descriptor,
};
pub use dataengine_core::{Capacity, CapacityPolicy, Range};

// Re-export errors
pub use dataengine_core::{DescriptorError, EngineError};

#[cfg(feature = "std")]
pub use dataengine_core::SharedEngine;

// Re-export the engines
pub use dataengine_collections::{
    ArrayList, BoundedDeque, FrozenList, LinkedDeque, LinkedList, RingDeque, SortedList,
};
