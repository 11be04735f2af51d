//! An immutable list, sized exactly to its content.

use alloc::boxed::Box;
use alloc::vec::Vec;

use dataengine_core::{
    Capacity, CapabilityDescriptor, DataEngine, Element, EngineError, EngineOptions, Internal,
    ListContract, descriptor,
};

/// A list that cannot change after assembly.
///
/// Every mutating operation fails with [`EngineError::Immutable`] (or
/// returns false), while the read-only and producing operations work as for
/// any list. Producers called on a `FrozenList` return new frozen lists.
///
/// ```
/// use dataengine_collections::{ArrayList, FrozenList};
/// use dataengine_core::{DataEngine, EngineError, ListContract};
///
/// let source = ArrayList::try_from(vec![3, 1, 2]).unwrap();
/// let mut frozen = FrozenList::snapshot(&source);
///
/// assert_eq!(frozen.add(4), Err(EngineError::Immutable));
/// assert_eq!(frozen.sub_list(1).unwrap().to_array(), vec![1, 2]);
/// ```
///
/// The storage hooks cannot be reached from outside either:
///
/// ```compile_fail
/// use dataengine_collections::FrozenList;
/// use dataengine_core::{DataEngine, Internal};
///
/// let mut frozen = FrozenList::from(vec![1, 2, 3]);
/// frozen.clear_slots(Internal(()));
/// ```
#[derive(Debug, Clone)]
pub struct FrozenList<E> {
    items: Vec<E>,
    max: usize,
    options: EngineOptions,
}

impl<E> FrozenList<E> {
    pub const DESCRIPTOR: CapabilityDescriptor =
        descriptor!(Concrete: Immutable, FixedLength, Unsorted);

    pub fn as_slice(&self) -> &[E] {
        &self.items
    }
}

impl<E: Element> FrozenList<E> {
    /// Copies the current content of any engine.
    pub fn snapshot(engine: &dyn DataEngine<E>) -> Self {
        Self::from(engine.to_array())
    }
}

impl<E: Element> From<Vec<E>> for FrozenList<E> {
    fn from(items: Vec<E>) -> Self {
        Self {
            max: items.len(),
            items,
            options: EngineOptions::default(),
        }
    }
}

impl<E: Element> PartialEq for FrozenList<E> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<E: Element> DataEngine<E> for FrozenList<E> {
    fn descriptor(&self) -> CapabilityDescriptor {
        Self::DESCRIPTOR
    }

    fn options(&self) -> &EngineOptions {
        &self.options
    }

    fn capacity(&self) -> Capacity {
        Capacity::new(self.max, self.items.len())
    }

    fn slot(&self, index: usize) -> Option<&E> {
        self.items.get(index)
    }

    fn slot_mut(&mut self, _: Internal, index: usize) -> Option<&mut E> {
        self.items.get_mut(index)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.items.iter())
    }

    fn insert_slot(&mut self, _: Internal, index: usize, item: E) {
        debug_assert!(
            self.items.len() < self.max,
            "Contract violation: insert into a full FrozenList"
        );
        self.items.insert(index, item);
    }

    fn remove_slot(&mut self, _: Internal, index: usize) -> Option<E> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    fn clear_slots(&mut self, _: Internal) {
        self.items.clear();
    }

    fn swap_slots(&mut self, _: Internal, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    fn grow_storage(&mut self, _: Internal, _new_max: usize) -> Result<(), EngineError> {
        Err(EngineError::CapacityExhausted { max: self.max })
    }

    fn shrink_storage(&mut self, _: Internal, _new_max: usize) {}

    fn compress(&mut self) {
        self.items.shrink_to_fit();
    }

    fn clone_boxed(&self) -> Box<dyn DataEngine<E>> {
        Box::new(self.clone())
    }

    fn move_boxed(&mut self) -> Box<dyn DataEngine<E>> {
        Box::new(self.take())
    }

    fn with_options(options: EngineOptions) -> Self {
        Self {
            items: Vec::new(),
            max: 0,
            options: options.validated_or_default(),
        }
    }

    /// Sizes the list to `items` and never grows afterwards.
    fn assemble(options: EngineOptions, items: Vec<E>) -> Result<Self, EngineError> {
        Ok(Self {
            max: items.len(),
            items,
            options: options.validated_or_default(),
        })
    }
}

impl<E: Element> ListContract<E> for FrozenList<E> {}
