//! Contiguous growable list.

use alloc::boxed::Box;
use alloc::vec::Vec;

use dataengine_core::{
    Capacity, CapabilityDescriptor, DataEngine, Element, EngineError, EngineOptions, Internal,
    ListContract, Range, Sortable, descriptor,
};

/// A list over a `Vec`.
///
/// The reported max capacity is tracked separately from the `Vec`'s own
/// capacity, so growth follows the engine options exactly. Callers resize it
/// through [`reserve`](DataEngine::reserve) and
/// [`shrink`](DataEngine::shrink) only:
///
/// ```compile_fail
/// use dataengine_collections::ArrayList;
/// use dataengine_core::{DataEngine, Internal};
///
/// let mut list = ArrayList::try_from(vec![1, 2, 3, 4, 5]).unwrap();
/// list.shrink_storage(Internal(()), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ArrayList<E> {
    items: Vec<E>,
    max: usize,
    options: EngineOptions,
}

impl<E> ArrayList<E> {
    pub const DESCRIPTOR: CapabilityDescriptor = descriptor!(Concrete: Mutable, Dynamic, Unsorted);

    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    /// Internal: the backing vector, for wrappers that maintain an ordering.
    pub(crate) fn items_mut(&mut self) -> &mut Vec<E> {
        &mut self.items
    }
}

impl<E: Element> ArrayList<E> {
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }
}

impl<E: Element> Default for ArrayList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> PartialEq for ArrayList<E> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<E: Element> TryFrom<Vec<E>> for ArrayList<E> {
    type Error = EngineError;

    fn try_from(items: Vec<E>) -> Result<Self, Self::Error> {
        Self::assemble(EngineOptions::default(), items)
    }
}

impl<E: Element> DataEngine<E> for ArrayList<E> {
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
            "Contract violation: insert into a full ArrayList"
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

    fn grow_storage(&mut self, _: Internal, new_max: usize) -> Result<(), EngineError> {
        self.items
            .try_reserve_exact(new_max.saturating_sub(self.items.len()))?;
        self.max = new_max;
        Ok(())
    }

    fn shrink_storage(&mut self, _: Internal, new_max: usize) {
        self.items.shrink_to(new_max);
        self.max = new_max;
    }

    /// Contiguous storage has no holes; this only returns allocator slack
    /// beyond the max capacity.
    fn compress(&mut self) {
        self.items.shrink_to(self.max);
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
            items: Vec::with_capacity(options.initial_capacity),
            max: options.initial_capacity,
            options,
        }
    }

    fn visit_range_mut(&mut self, _: Internal, range: Range, visit: &mut dyn FnMut(&mut E)) {
        self.items[range.indices()].iter_mut().for_each(visit);
    }

    fn retain_slots(&mut self, _: Internal, keep: &mut dyn FnMut(&E) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(|item| keep(item));
        before - self.items.len()
    }
}

impl<E: Element> ListContract<E> for ArrayList<E> {}

impl<E: Element + Ord> Sortable<E> for ArrayList<E> {
    fn sort(&mut self) -> Result<(), EngineError> {
        self.ensure_mutable()?;
        self.items.sort();
        Ok(())
    }
}
