//! Sorting as an optional capability.
//!
//! Engines opt in by implementing [`Sortable`] where `E: Ord`. Engines that
//! keep a sorted ordering at all times declare it in their descriptor
//! instead; generic code asks [`CapabilityFlags::is_sorted`](crate::CapabilityFlags::is_sorted).

use crate::engine::{DataEngine, Element, Internal};
use crate::error::EngineError;

pub trait Sortable<E: Element + Ord>: DataEngine<E> {
    /// Sorts the elements ascending, in place. Stable.
    ///
    /// The provided version round-trips through a snapshot. Engines with
    /// contiguous storage override it.
    fn sort(&mut self) -> Result<(), EngineError> {
        self.ensure_mutable()?;
        let mut items = self.to_array();
        items.sort();
        self.clear_slots(Internal(()));
        for (index, item) in items.into_iter().enumerate() {
            self.insert_slot(Internal(()), index, item);
        }
        Ok(())
    }

    /// True if every element is `<=` its successor.
    fn is_ordered(&self) -> bool {
        let mut items = self.iter();
        let Some(mut previous) = items.next() else {
            return true;
        };
        for item in items {
            if previous > item {
                return false;
            }
            previous = item;
        }
        true
    }
}
