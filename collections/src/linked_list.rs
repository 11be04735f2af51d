//! Doubly linked list over a node arena.

use alloc::boxed::Box;
use alloc::vec::Vec;

use dataengine_core::{
    CapabilityDescriptor, DataEngine, Element, EngineError, EngineOptions, ListContract, Sortable,
    descriptor,
};

use crate::storage::{NodeArena, arena_hooks};

/// A list whose elements live in linked nodes.
///
/// Nodes are stored in an arena and addressed by index, so removals leave
/// holes that are reused by later insertions and reclaimed by `compress`.
/// Positional access walks from whichever end is nearer.
#[derive(Debug, Clone)]
pub struct LinkedList<E> {
    arena: NodeArena<E>,
    options: EngineOptions,
}

impl<E> LinkedList<E> {
    pub const DESCRIPTOR: CapabilityDescriptor = descriptor!(Concrete: Mutable, Dynamic, Unsorted);
}

impl<E: Element> LinkedList<E> {
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    pub fn front(&self) -> Option<&E> {
        self.arena.front()
    }

    pub fn back(&self) -> Option<&E> {
        self.arena.back()
    }
}

impl<E: Element> Default for LinkedList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> PartialEq for LinkedList<E> {
    fn eq(&self, other: &Self) -> bool {
        self.arena.len() == other.arena.len() && self.arena.iter().eq(other.arena.iter())
    }
}

impl<E: Element> TryFrom<Vec<E>> for LinkedList<E> {
    type Error = EngineError;

    fn try_from(items: Vec<E>) -> Result<Self, Self::Error> {
        Self::assemble(EngineOptions::default(), items)
    }
}

impl<E: Element> DataEngine<E> for LinkedList<E> {
    arena_hooks!();

    fn descriptor(&self) -> CapabilityDescriptor {
        Self::DESCRIPTOR
    }

    fn options(&self) -> &EngineOptions {
        &self.options
    }

    fn clone_boxed(&self) -> Box<dyn DataEngine<E>> {
        Box::new(self.clone())
    }

    fn move_boxed(&mut self) -> Box<dyn DataEngine<E>> {
        Box::new(self.take())
    }

    fn with_options(options: EngineOptions) -> Self {
        let options = options.validated_or_default();
        Self {
            arena: NodeArena::with_reserved(options.initial_capacity),
            options,
        }
    }
}

impl<E: Element> ListContract<E> for LinkedList<E> {}

impl<E: Element + Ord> Sortable<E> for LinkedList<E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArrayList;
    use alloc::vec;
    use dataengine_core::Capacity;
    use pretty_assertions::assert_eq;

    fn numbers(values: &[i32]) -> LinkedList<i32> {
        LinkedList::try_from(values.to_vec()).unwrap()
    }

    #[test]
    fn positional_operations() {
        let mut list = numbers(&[1, 2, 4]);
        list.add_at(3, 2).unwrap();
        list.add_at(0, 0).unwrap();
        assert_eq!(list.to_array(), vec![0, 1, 2, 3, 4]);
        assert_eq!(list.remove_at(2), Ok(2));
        assert_eq!(list.get(2), Some(&3));
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.back(), Some(&4));
    }

    #[test]
    fn grows_like_contiguous_storage() {
        let mut list = LinkedList::new();
        for value in 0..13 {
            list.add(value).unwrap();
        }
        assert_eq!(list.capacity(), Capacity::new(26, 13));
    }

    #[test]
    fn reverse_relinks_nodes() {
        let mut list = numbers(&[1, 2, 3, 4]);
        list.reverse().unwrap();
        assert_eq!(list.to_array(), vec![4, 3, 2, 1]);
        list.add(0).unwrap();
        assert_eq!(list.last_index(&0), Some(4));
    }

    #[test]
    fn compress_keeps_content_after_removals() {
        let mut list = numbers(&[1, 2, 3, 4, 5, 6]);
        assert!(list.remove(&2));
        assert!(list.remove(&5));
        list.compress();
        assert_eq!(list.to_array(), vec![1, 3, 4, 6]);
        list.add_at(2, 1).unwrap();
        assert_eq!(list.to_array(), vec![1, 2, 3, 4, 6]);
    }

    #[test]
    fn sort_uses_the_default_rebuild() {
        let mut list = numbers(&[3, 1, 2]);
        list.sort().unwrap();
        assert_eq!(list.to_array(), vec![1, 2, 3]);
        assert!(list.is_ordered());
    }

    #[test]
    fn equal_to_an_array_list_with_the_same_content() {
        let list = numbers(&[5, 6]);
        let array = ArrayList::try_from(vec![5, 6]).unwrap();
        assert!(list.equals(&array));
        assert!(array.equals(&list));
        assert_eq!(list, list.clone());
    }
}
