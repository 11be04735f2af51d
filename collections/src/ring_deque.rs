//! Growable double-ended queue over a ring buffer.

use alloc::boxed::Box;
use alloc::vec::Vec;

use dataengine_core::{
    CapabilityDescriptor, DataEngine, DequeContract, Element, EngineError, EngineOptions,
    Internal, Sortable, descriptor,
};

use crate::storage::{RingBuffer, ring_slot_hooks};

/// A deque with O(1) pushes and pops at both ends.
///
/// Growing or shrinking rotates the live window back to the start of the
/// buffer, so a freshly resized deque is always contiguous.
#[derive(Debug, Clone)]
pub struct RingDeque<E> {
    ring: RingBuffer<E>,
    options: EngineOptions,
}

impl<E> RingDeque<E> {
    pub const DESCRIPTOR: CapabilityDescriptor = descriptor!(Concrete: Mutable, Dynamic, Unsorted);
}

impl<E: Element> RingDeque<E> {
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }
}

impl<E: Element> Default for RingDeque<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> PartialEq for RingDeque<E> {
    fn eq(&self, other: &Self) -> bool {
        self.ring.len() == other.ring.len() && self.ring.iter().eq(other.ring.iter())
    }
}

impl<E: Element> TryFrom<Vec<E>> for RingDeque<E> {
    type Error = EngineError;

    fn try_from(items: Vec<E>) -> Result<Self, Self::Error> {
        Self::assemble(EngineOptions::default(), items)
    }
}

impl<E: Element> DataEngine<E> for RingDeque<E> {
    ring_slot_hooks!();

    fn descriptor(&self) -> CapabilityDescriptor {
        Self::DESCRIPTOR
    }

    fn options(&self) -> &EngineOptions {
        &self.options
    }

    fn grow_storage(&mut self, _: Internal, new_max: usize) -> Result<(), EngineError> {
        Ok(self.ring.grow_to(new_max)?)
    }

    fn shrink_storage(&mut self, _: Internal, new_max: usize) {
        self.ring.shrink_to(new_max);
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
            ring: RingBuffer::with_capacity(options.initial_capacity),
            options,
        }
    }
}

impl<E: Element> DequeContract<E> for RingDeque<E> {}

impl<E: Element + Ord> Sortable<E> for RingDeque<E> {
    fn sort(&mut self) -> Result<(), EngineError> {
        self.ensure_mutable()?;
        // Live slots are all `Some`, so `Option`'s ordering matches `E`'s.
        self.ring.make_contiguous().sort();
        Ok(())
    }
}
