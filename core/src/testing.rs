//! A minimal `Vec`-backed engine for exercising the provided operations.
//!
//! Unlike real engines, the descriptor is chosen per instance so the same
//! type can stand in for mutable, frozen, fixed-length and sorted engines.

use crate::deque::DequeContract;
use crate::descriptor::{Behavior, CapabilityDescriptor, Nature, Ordering};
use crate::engine::{DataEngine, Element, Internal};
use crate::error::EngineError;
use crate::list::ListContract;
use crate::options::EngineOptions;
use crate::policy::Capacity;
use crate::sortable::Sortable;
use crate::{Box, Vec};

const PLAIN: CapabilityDescriptor =
    CapabilityDescriptor::concrete(Nature::Mutable, Behavior::Dynamic, Ordering::Unsorted);

#[derive(Debug, Clone)]
pub(crate) struct Fixture<E> {
    items: Vec<E>,
    max: usize,
    options: EngineOptions,
    descriptor: CapabilityDescriptor,
    grow_calls: usize,
}

impl<E: Element> Fixture<E> {
    pub(crate) fn fixed(max: usize) -> Self {
        Self {
            items: Vec::new(),
            max,
            options: EngineOptions::default().with_initial_capacity(max),
            descriptor: CapabilityDescriptor::concrete(
                Nature::Mutable,
                Behavior::FixedLength,
                Ordering::Unsorted,
            ),
            grow_calls: 0,
        }
    }

    pub(crate) fn frozen(items: Vec<E>) -> Self {
        Self {
            max: items.len(),
            items,
            options: EngineOptions::default(),
            descriptor: CapabilityDescriptor::concrete(
                Nature::Immutable,
                Behavior::FixedLength,
                Ordering::Unsorted,
            ),
            grow_calls: 0,
        }
    }

    /// Marked sorted; `items` must already be in order.
    pub(crate) fn sorted(items: Vec<E>) -> Self {
        let mut fixture = Self::with_options(EngineOptions::default());
        fixture.max = fixture.max.max(items.len());
        fixture.items = items;
        fixture.descriptor =
            CapabilityDescriptor::concrete(Nature::Mutable, Behavior::Dynamic, Ordering::Sorted);
        fixture
    }

    /// Keeps `options` even when they do not validate.
    pub(crate) fn unchecked(options: EngineOptions) -> Self {
        Self {
            options,
            ..Self::with_options(EngineOptions::default())
        }
    }

    pub(crate) fn grow_calls(&self) -> usize {
        self.grow_calls
    }
}

impl<E: Element> DataEngine<E> for Fixture<E> {
    fn descriptor(&self) -> CapabilityDescriptor {
        self.descriptor
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
        assert!(self.items.len() < self.max, "fixture overfilled");
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
        self.grow_calls += 1;
        self.max = new_max;
        Ok(())
    }

    fn shrink_storage(&mut self, _: Internal, new_max: usize) {
        self.max = new_max;
    }

    fn compress(&mut self) {}

    fn clone_boxed(&self) -> Box<dyn DataEngine<E>> {
        Box::new(self.clone())
    }

    fn move_boxed(&mut self) -> Box<dyn DataEngine<E>> {
        Box::new(self.take())
    }

    fn with_options(options: EngineOptions) -> Self {
        let options = options.validated_or_default();
        Self {
            items: Vec::new(),
            max: options.initial_capacity,
            options,
            descriptor: PLAIN,
            grow_calls: 0,
        }
    }

    fn admits_at(&self, index: usize, _item: &E) -> bool {
        // Sorted fixtures only accept appends.
        !self.descriptor.flags().is_sorted() || index == self.items.len()
    }
}

impl<E: Element> ListContract<E> for Fixture<E> {}

/// Same storage, seen through the deque contract.
#[derive(Debug, Clone)]
pub(crate) struct DequeFixture<E>(pub(crate) Fixture<E>);

impl<E: Element> DataEngine<E> for DequeFixture<E> {
    fn descriptor(&self) -> CapabilityDescriptor {
        self.0.descriptor()
    }

    fn options(&self) -> &EngineOptions {
        self.0.options()
    }

    fn capacity(&self) -> Capacity {
        self.0.capacity()
    }

    fn slot(&self, index: usize) -> Option<&E> {
        self.0.slot(index)
    }

    fn slot_mut(&mut self, token: Internal, index: usize) -> Option<&mut E> {
        self.0.slot_mut(token, index)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        self.0.iter()
    }

    fn insert_slot(&mut self, token: Internal, index: usize, item: E) {
        self.0.insert_slot(token, index, item);
    }

    fn remove_slot(&mut self, token: Internal, index: usize) -> Option<E> {
        self.0.remove_slot(token, index)
    }

    fn clear_slots(&mut self, token: Internal) {
        self.0.clear_slots(token);
    }

    fn swap_slots(&mut self, token: Internal, a: usize, b: usize) {
        self.0.swap_slots(token, a, b);
    }

    fn grow_storage(&mut self, token: Internal, new_max: usize) -> Result<(), EngineError> {
        self.0.grow_storage(token, new_max)
    }

    fn shrink_storage(&mut self, token: Internal, new_max: usize) {
        self.0.shrink_storage(token, new_max);
    }

    fn compress(&mut self) {}

    fn clone_boxed(&self) -> Box<dyn DataEngine<E>> {
        Box::new(self.clone())
    }

    fn move_boxed(&mut self) -> Box<dyn DataEngine<E>> {
        Box::new(self.take())
    }

    fn with_options(options: EngineOptions) -> Self {
        Self(Fixture::with_options(options))
    }
}

impl<E: Element> DequeContract<E> for DequeFixture<E> {}

impl<E: Element + Ord> Sortable<E> for Fixture<E> {}
