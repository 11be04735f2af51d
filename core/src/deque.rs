//! The deque contract: engines worked from both ends.

use crate::bridge;
use crate::descriptor::CapabilityDescriptor;
use crate::engine::{DataEngine, Element};
use crate::error::EngineError;

/// Descriptor of the deque contract itself.
pub const DEQUE_ABSTRACTION: CapabilityDescriptor = CapabilityDescriptor::abstraction();

/// A double-ended engine.
///
/// Range arguments follow the same rules as the list contract: they describe
/// the source read and are rejected unless `start < len`, `end <= len` and
/// `start < end`.
pub trait DequeContract<E: Element>: DataEngine<E> {
    fn add_first(&mut self, item: E) -> Result<(), EngineError> {
        self.place(0, item)
    }

    fn add_last(&mut self, item: E) -> Result<(), EngineError> {
        let end = self.active_size();
        self.place(end, item)
    }

    fn remove_first(&mut self) -> Result<E, EngineError> {
        self.ensure_mutable()?;
        if self.is_empty() {
            return Err(EngineError::Empty);
        }
        self.take_at(0)
    }

    fn remove_last(&mut self) -> Result<E, EngineError> {
        self.ensure_mutable()?;
        let Some(last) = self.active_size().checked_sub(1) else {
            return Err(EngineError::Empty);
        };
        self.take_at(last)
    }

    fn peek_first(&self) -> Result<&E, EngineError> {
        self.slot(0).ok_or(EngineError::Empty)
    }

    fn peek_last(&self) -> Result<&E, EngineError> {
        let last = self.active_size().checked_sub(1).ok_or(EngineError::Empty)?;
        self.slot(last).ok_or(EngineError::Empty)
    }

    fn contains(&self, item: &E) -> bool {
        bridge::contains(self, item)
    }

    fn contains_all(&self, other: &dyn DequeContract<E>) -> bool {
        self.contains_all_range(other, 0, other.active_size())
    }

    fn contains_all_from(&self, other: &dyn DequeContract<E>, start: usize) -> bool {
        self.contains_all_range(other, start, other.active_size())
    }

    fn contains_all_range(&self, other: &dyn DequeContract<E>, start: usize, end: usize) -> bool {
        bridge::contains_all_range(self, other, start, end)
    }

    /// A new deque of `self`'s elements that occur in `other`.
    fn retain_all(&self, other: &dyn DequeContract<E>) -> Result<Self, EngineError>
    where
        Self: Sized,
    {
        self.retain_all_range(other, 0, other.active_size())
    }

    fn retain_all_from(
        &self,
        other: &dyn DequeContract<E>,
        start: usize,
    ) -> Result<Self, EngineError>
    where
        Self: Sized,
    {
        self.retain_all_range(other, start, other.active_size())
    }

    fn retain_all_range(
        &self,
        other: &dyn DequeContract<E>,
        start: usize,
        end: usize,
    ) -> Result<Self, EngineError>
    where
        Self: Sized,
    {
        let items = bridge::retained(self, other, start, end)?;
        Self::assemble(*self.options(), items)
    }

    /// A new deque holding `other` followed by a copy of `self`.
    fn merge_first(&self, other: &dyn DequeContract<E>) -> Result<Self, EngineError>
    where
        Self: Sized,
    {
        let mut items = other.to_array();
        items.extend(self.iter().cloned());
        Self::assemble(*self.options(), items)
    }

    /// A new deque holding a copy of `self` followed by `other`.
    fn merge_last(&self, other: &dyn DequeContract<E>) -> Result<Self, EngineError>
    where
        Self: Sized,
    {
        let mut items = self.to_array();
        items.extend(other.iter().cloned());
        Self::assemble(*self.options(), items)
    }

    /// Substitutes every element with `f(element)`. A no-op when empty.
    fn replace_all<F>(&mut self, mut f: F) -> Result<(), EngineError>
    where
        Self: Sized,
        F: FnMut(&E) -> E,
    {
        self.ensure_mutable()?;
        let len = self.active_size();
        if len == 0 {
            return Ok(());
        }
        bridge::substitute(self, 0, len, &mut f)
    }

    fn replace_all_range<F>(&mut self, mut f: F, start: usize, end: usize) -> Result<(), EngineError>
    where
        Self: Sized,
        F: FnMut(&E) -> E,
    {
        bridge::substitute(self, start, end, &mut f)
    }
}
