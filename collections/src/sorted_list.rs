//! A list that keeps its elements in ascending order.

use alloc::boxed::Box;
use alloc::vec::Vec;

use dataengine_core::{
    Capacity, CapabilityDescriptor, DataEngine, Element, EngineError, EngineOptions, Internal,
    ListContract, Range, descriptor,
};

use crate::ArrayList;

/// An [`ArrayList`] whose insertions are placed by binary search.
///
/// Positional insertions that would break the order fail with
/// [`EngineError::OrderViolation`]; bulk writes (`add_all`, `replace_all`,
/// assembly from unsorted input) re-sort before returning. Equal elements
/// keep their insertion order.
#[derive(Debug, Clone)]
pub struct SortedList<E> {
    inner: ArrayList<E>,
}

impl<E> SortedList<E> {
    pub const DESCRIPTOR: CapabilityDescriptor = descriptor!(Concrete: Mutable, Dynamic, Sorted);

    pub fn as_slice(&self) -> &[E] {
        self.inner.as_slice()
    }
}

impl<E: Element + Ord> SortedList<E> {
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    /// Smallest element.
    pub fn min(&self) -> Option<&E> {
        self.as_slice().first()
    }

    /// Largest element.
    pub fn max(&self) -> Option<&E> {
        self.as_slice().last()
    }

    /// Index of some element equal to `item`, by binary search.
    pub fn search(&self, item: &E) -> Option<usize> {
        self.as_slice().binary_search(item).ok()
    }
}

impl<E: Element + Ord> Default for SortedList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> PartialEq for SortedList<E> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<E: Element + Ord> TryFrom<Vec<E>> for SortedList<E> {
    type Error = EngineError;

    fn try_from(items: Vec<E>) -> Result<Self, Self::Error> {
        Self::assemble(EngineOptions::default(), items)
    }
}

impl<E: Element + Ord> DataEngine<E> for SortedList<E> {
    fn descriptor(&self) -> CapabilityDescriptor {
        Self::DESCRIPTOR
    }

    fn options(&self) -> &EngineOptions {
        self.inner.options()
    }

    fn capacity(&self) -> Capacity {
        self.inner.capacity()
    }

    fn slot(&self, index: usize) -> Option<&E> {
        self.inner.slot(index)
    }

    fn slot_mut(&mut self, token: Internal, index: usize) -> Option<&mut E> {
        self.inner.slot_mut(token, index)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        self.inner.iter()
    }

    fn insert_slot(&mut self, token: Internal, index: usize, item: E) {
        self.inner.insert_slot(token, index, item);
    }

    fn remove_slot(&mut self, token: Internal, index: usize) -> Option<E> {
        self.inner.remove_slot(token, index)
    }

    fn clear_slots(&mut self, token: Internal) {
        self.inner.clear_slots(token);
    }

    fn swap_slots(&mut self, token: Internal, a: usize, b: usize) {
        self.inner.swap_slots(token, a, b);
    }

    fn grow_storage(&mut self, token: Internal, new_max: usize) -> Result<(), EngineError> {
        self.inner.grow_storage(token, new_max)
    }

    fn shrink_storage(&mut self, token: Internal, new_max: usize) {
        self.inner.shrink_storage(token, new_max);
    }

    fn compress(&mut self) {
        self.inner.compress();
    }

    fn clone_boxed(&self) -> Box<dyn DataEngine<E>> {
        Box::new(self.clone())
    }

    fn move_boxed(&mut self) -> Box<dyn DataEngine<E>> {
        Box::new(self.take())
    }

    fn with_options(options: EngineOptions) -> Self {
        Self {
            inner: ArrayList::with_options(options),
        }
    }

    fn visit_range_mut(&mut self, token: Internal, range: Range, visit: &mut dyn FnMut(&mut E)) {
        self.inner.visit_range_mut(token, range, visit);
    }

    fn retain_slots(&mut self, token: Internal, keep: &mut dyn FnMut(&E) -> bool) -> usize {
        self.inner.retain_slots(token, keep)
    }

    /// After the last element equal to `item`.
    fn insertion_point(&self, item: &E) -> usize {
        self.as_slice().partition_point(|existing| existing <= item)
    }

    fn admits_at(&self, index: usize, item: &E) -> bool {
        let items = self.as_slice();
        let after_previous = index == 0 || items[index - 1] <= *item;
        let before_next = items.get(index).is_none_or(|next| item <= next);
        after_previous && before_next
    }

    fn admits_replacement(&self, index: usize, item: &E) -> bool {
        let items = self.as_slice();
        let after_previous = index == 0 || items[index - 1] <= *item;
        let before_next = items.get(index + 1).is_none_or(|next| item <= next);
        after_previous && before_next
    }

    fn restore_order(&mut self, _: Internal) {
        self.inner.items_mut().sort();
    }
}

impl<E: Element + Ord> ListContract<E> for SortedList<E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_places_by_order() {
        let mut list = SortedList::new();
        for value in [5, 1, 4, 1, 3] {
            list.add(value).unwrap();
        }
        assert_eq!(list.as_slice(), &[1, 1, 3, 4, 5]);
        assert_eq!(list.min(), Some(&1));
        assert_eq!(list.max(), Some(&5));
        assert_eq!(list.search(&4), Some(3));
        assert_eq!(list.search(&2), None);
    }

    #[test]
    fn positional_insert_must_keep_order() {
        let mut list = SortedList::try_from(vec![1, 3, 5]).unwrap();
        assert_eq!(list.add_at(2, 1), Ok(()));
        assert_eq!(list.add_at(9, 0), Err(EngineError::OrderViolation));
        assert_eq!(list.add_at(4, 3), Ok(()));
        assert_eq!(list.add_at(0, 5), Err(EngineError::OrderViolation));
        assert_eq!(list.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn set_must_keep_order() {
        let mut list = SortedList::try_from(vec![10, 20, 30]).unwrap();
        assert_eq!(list.set(1, 25), Ok(20));
        assert_eq!(list.set(1, 35), Err(EngineError::OrderViolation));
        assert_eq!(list.set(2, 99), Ok(30));
        assert_eq!(list.as_slice(), &[10, 25, 99]);
    }

    #[test]
    fn bulk_writes_restore_order() {
        let mut list = SortedList::try_from(vec![4, 2, 9]).unwrap();
        assert_eq!(list.as_slice(), &[2, 4, 9]);

        let unsorted = ArrayList::try_from(vec![7, 0]).unwrap();
        list.add_all(&unsorted).unwrap();
        assert_eq!(list.as_slice(), &[0, 2, 4, 7, 9]);

        list.replace_all(|x| 10 - x).unwrap();
        assert_eq!(list.as_slice(), &[1, 3, 6, 8, 10]);
    }

    #[test]
    fn reverse_is_refused() {
        let mut list = SortedList::try_from(vec![1, 2]).unwrap();
        assert_eq!(list.reverse(), Err(EngineError::OrderViolation));
        assert!(list.flags().is_sorted());
    }
}
