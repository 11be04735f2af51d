//! Double-ended queue over a node arena.

use alloc::boxed::Box;
use alloc::vec::Vec;

use dataengine_core::{
    CapabilityDescriptor, DataEngine, DequeContract, Element, EngineError, EngineOptions,
    descriptor,
};

use crate::storage::{NodeArena, arena_hooks};

/// A deque over linked nodes. Both ends are reached without walking.
#[derive(Debug, Clone)]
pub struct LinkedDeque<E> {
    arena: NodeArena<E>,
    options: EngineOptions,
}

impl<E> LinkedDeque<E> {
    pub const DESCRIPTOR: CapabilityDescriptor = descriptor!(Concrete: Mutable, Dynamic, Unsorted);
}

impl<E: Element> LinkedDeque<E> {
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }
}

impl<E: Element> Default for LinkedDeque<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> PartialEq for LinkedDeque<E> {
    fn eq(&self, other: &Self) -> bool {
        self.arena.len() == other.arena.len() && self.arena.iter().eq(other.arena.iter())
    }
}

impl<E: Element> TryFrom<Vec<E>> for LinkedDeque<E> {
    type Error = EngineError;

    fn try_from(items: Vec<E>) -> Result<Self, Self::Error> {
        Self::assemble(EngineOptions::default(), items)
    }
}

impl<E: Element> DataEngine<E> for LinkedDeque<E> {
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

impl<E: Element> DequeContract<E> for LinkedDeque<E> {
    fn peek_first(&self) -> Result<&E, EngineError> {
        self.arena.front().ok_or(EngineError::Empty)
    }

    fn peek_last(&self) -> Result<&E, EngineError> {
        self.arena.back().ok_or(EngineError::Empty)
    }
}
