//! Fixed-capacity double-ended queue.

use alloc::boxed::Box;
use alloc::vec::Vec;

use dataengine_core::{
    CapabilityDescriptor, DataEngine, DequeContract, Element, EngineError, EngineOptions,
    Internal, descriptor,
};

use crate::storage::{RingBuffer, ring_slot_hooks};

/// A deque whose capacity is fixed when it is created.
///
/// Inserting into a full deque fails with [`EngineError::CapacityExhausted`]
/// and leaves the content unchanged. The bound is the engine's
/// `initial_capacity`; deques assembled from more elements than that are
/// bounded by their content instead.
#[derive(Debug, Clone)]
pub struct BoundedDeque<E> {
    ring: RingBuffer<E>,
    options: EngineOptions,
}

impl<E> BoundedDeque<E> {
    pub const DESCRIPTOR: CapabilityDescriptor =
        descriptor!(Concrete: Mutable, FixedLength, Unsorted);
}

impl<E: Element> BoundedDeque<E> {
    /// A deque holding at most `bound` elements, and at least one.
    pub fn with_bound(bound: usize) -> Self {
        Self::with_options(EngineOptions::default().with_initial_capacity(bound.max(1)))
    }

    pub fn bound(&self) -> usize {
        self.ring.capacity()
    }

    pub fn is_full(&self) -> bool {
        self.ring.len() == self.ring.capacity()
    }
}

impl<E: Element> PartialEq for BoundedDeque<E> {
    fn eq(&self, other: &Self) -> bool {
        self.ring.len() == other.ring.len() && self.ring.iter().eq(other.ring.iter())
    }
}

impl<E: Element> TryFrom<Vec<E>> for BoundedDeque<E> {
    type Error = EngineError;

    fn try_from(items: Vec<E>) -> Result<Self, Self::Error> {
        Self::assemble(EngineOptions::default(), items)
    }
}

impl<E: Element> DataEngine<E> for BoundedDeque<E> {
    ring_slot_hooks!();

    fn descriptor(&self) -> CapabilityDescriptor {
        Self::DESCRIPTOR
    }

    fn options(&self) -> &EngineOptions {
        &self.options
    }

    fn grow_storage(&mut self, _: Internal, _new_max: usize) -> Result<(), EngineError> {
        Err(EngineError::CapacityExhausted {
            max: self.ring.capacity(),
        })
    }

    fn shrink_storage(&mut self, _: Internal, _new_max: usize) {}

    fn clone_boxed(&self) -> Box<dyn DataEngine<E>> {
        Box::new(self.clone())
    }

    fn move_boxed(&mut self) -> Box<dyn DataEngine<E>> {
        Box::new(self.take())
    }

    fn with_options(options: EngineOptions) -> Self {
        let options = options.validated_or_default();
        Self {
            ring: RingBuffer::with_capacity(options.initial_capacity),
            options,
        }
    }

    fn assemble(options: EngineOptions, items: Vec<E>) -> Result<Self, EngineError> {
        let options = options.validated_or_default();
        let mut ring = RingBuffer::with_capacity(options.initial_capacity.max(items.len()));
        for item in items {
            ring.push_back(item);
        }
        Ok(Self { ring, options })
    }
}

impl<E: Element> DequeContract<E> for BoundedDeque<E> {}
