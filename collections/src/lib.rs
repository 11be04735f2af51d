//! Reference engines for the DataEngine contracts.
//!
//! | Engine | Contract | Storage |
//! |--------|----------|---------|
//! | [`ArrayList`] | list | contiguous `Vec` |
//! | [`SortedList`] | list, always sorted | contiguous `Vec` |
//! | [`FrozenList`] | list, immutable | contiguous, sized at assembly |
//! | [`LinkedList`] | list | node arena |
//! | [`RingDeque`] | deque | ring buffer |
//! | [`BoundedDeque`] | deque, fixed length | ring buffer |
//! | [`LinkedDeque`] | deque | node arena |
//!
//! Every engine accepts any other engine with the same element type wherever
//! a contract takes a `&dyn` parameter:
//!
//! ```
//! use dataengine_collections::{ArrayList, LinkedList};
//! use dataengine_core::{DataEngine, ListContract};
//!
//! let array = ArrayList::try_from(vec![1, 2, 3]).unwrap();
//! let mut linked = LinkedList::new();
//! linked.add_all(&array).unwrap();
//!
//! assert!(linked.equals(&array));
//! assert!(array.contains_all(&linked));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

mod storage;

pub mod array_list;
pub mod bounded_deque;
pub mod frozen_list;
pub mod linked_deque;
pub mod linked_list;
pub mod ring_deque;
pub mod sorted_list;

pub use array_list::ArrayList;
pub use bounded_deque::BoundedDeque;
pub use frozen_list::FrozenList;
pub use linked_deque::LinkedDeque;
pub use linked_list::LinkedList;
pub use ring_deque::RingDeque;
pub use sorted_list::SortedList;

static_assertions::assert_impl_all!(ArrayList<u64>: Send, Sync, Clone);
static_assertions::assert_impl_all!(SortedList<u64>: Send, Sync, Clone);
static_assertions::assert_impl_all!(FrozenList<u64>: Send, Sync, Clone);
static_assertions::assert_impl_all!(LinkedList<u64>: Send, Sync, Clone);
static_assertions::assert_impl_all!(RingDeque<u64>: Send, Sync, Clone);
static_assertions::assert_impl_all!(BoundedDeque<u64>: Send, Sync, Clone);
static_assertions::assert_impl_all!(LinkedDeque<u64>: Send, Sync, Clone);
