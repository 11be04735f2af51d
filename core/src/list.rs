//! The list contract: index-addressed engines.
//!
//! Every cross-type parameter is a `&dyn ListContract<E>`, so a list of one
//! engine type can be filled from, compared with, or filtered by a list of
//! any other engine type holding the same elements.
//!
//! # Range arguments
//!
//! The `_from` and `_range` variants take bounds that describe the *source*
//! read (`other[start..end]`). The shorter forms fill in `start = 0` and
//! `end = other.active_size()`. A range is accepted iff
//! `start < len`, `end <= len` and `start < end`; a rejected range returns
//! the operation's sentinel and mutates nothing.

use core::mem;

use crate::bridge;
use crate::descriptor::CapabilityDescriptor;
use crate::engine::{DataEngine, Element, Internal};
use crate::error::EngineError;
use crate::range::Range;
use crate::Vec;

/// Descriptor of the list contract itself.
pub const LIST_ABSTRACTION: CapabilityDescriptor = CapabilityDescriptor::abstraction();

/// An engine addressed by position.
pub trait ListContract<E: Element>: DataEngine<E> {
    // ========================================================================
    // Insertion
    // ========================================================================

    /// Appends `item`. Sorted engines insert it at its ordered position.
    fn add(&mut self, item: E) -> Result<(), EngineError> {
        let index = self.insertion_point(&item);
        self.place(index, item)
    }

    /// Inserts `item` at `index`, shifting later elements.
    ///
    /// # Errors
    ///
    /// - [`EngineError::IndexOutOfBounds`] when `index > active_size()`.
    /// - [`EngineError::OrderViolation`] when a sorted engine would lose its
    ///   ordering.
    fn add_at(&mut self, item: E, index: usize) -> Result<(), EngineError> {
        self.ensure_mutable()?;
        let len = self.active_size();
        if index > len {
            return Err(EngineError::IndexOutOfBounds { index, len });
        }
        if !self.admits_at(index, &item) {
            return Err(EngineError::OrderViolation);
        }
        self.place(index, item)
    }

    fn add_all(&mut self, other: &dyn ListContract<E>) -> Result<(), EngineError> {
        self.add_all_range(other, 0, other.active_size())
    }

    fn add_all_from(&mut self, other: &dyn ListContract<E>, start: usize) -> Result<(), EngineError> {
        self.add_all_range(other, start, other.active_size())
    }

    /// Appends copies of `other[start..end]`.
    ///
    /// Capacity for the whole range is reserved before the first element is
    /// written, so a failure leaves `self` untouched.
    fn add_all_range(
        &mut self,
        other: &dyn ListContract<E>,
        start: usize,
        end: usize,
    ) -> Result<(), EngineError> {
        self.ensure_mutable()?;
        let range = Range::checked(start, end, other.active_size())?;
        let items: Vec<E> = bridge::window(other, range).cloned().collect();
        self.append_slots(Internal(()), items)
    }

    fn add_slice(&mut self, items: &[E]) -> Result<(), EngineError> {
        self.add_slice_range(items, 0, items.len())
    }

    fn add_slice_from(&mut self, items: &[E], start: usize) -> Result<(), EngineError> {
        self.add_slice_range(items, start, items.len())
    }

    /// Appends copies of `items[start..end]`, same rules as
    /// [`add_all_range`](Self::add_all_range).
    fn add_slice_range(&mut self, items: &[E], start: usize, end: usize) -> Result<(), EngineError> {
        self.ensure_mutable()?;
        let range = Range::checked(start, end, items.len())?;
        self.append_slots(Internal(()), items[range.indices()].to_vec())
    }

    // ========================================================================
    // Access
    // ========================================================================

    fn get(&self, index: usize) -> Option<&E> {
        self.slot(index)
    }

    fn first_index(&self, item: &E) -> Option<usize> {
        self.iter().position(|candidate| candidate == item)
    }

    fn last_index(&self, item: &E) -> Option<usize> {
        self.iter()
            .enumerate()
            .filter(|(_, candidate)| *candidate == item)
            .map(|(index, _)| index)
            .last()
    }

    fn contains(&self, item: &E) -> bool {
        bridge::contains(self, item)
    }

    fn contains_all(&self, other: &dyn ListContract<E>) -> bool {
        self.contains_all_range(other, 0, other.active_size())
    }

    fn contains_all_from(&self, other: &dyn ListContract<E>, start: usize) -> bool {
        self.contains_all_range(other, start, other.active_size())
    }

    /// Every element of `other[start..end]` occurs in `self`. False for an
    /// invalid range, including any range over an empty `other`.
    fn contains_all_range(&self, other: &dyn ListContract<E>, start: usize, end: usize) -> bool {
        bridge::contains_all_range(self, other, start, end)
    }

    // ========================================================================
    // Removal and replacement
    // ========================================================================

    /// Removes every occurrence of `item`. False if none was found or the
    /// engine is immutable.
    fn remove(&mut self, item: &E) -> bool {
        if !self.is_mutable() {
            return false;
        }
        let removed = self.retain_slots(Internal(()), &mut |candidate| candidate != item);
        if removed > 0 {
            self.settle();
        }
        removed > 0
    }

    /// Removes exactly the element at `index`.
    fn remove_at(&mut self, index: usize) -> Result<E, EngineError> {
        self.take_at(index)
    }

    /// Replaces the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, item: E) -> Result<E, EngineError> {
        self.ensure_mutable()?;
        let len = self.active_size();
        if index >= len {
            return Err(EngineError::IndexOutOfBounds { index, len });
        }
        if !self.admits_replacement(index, &item) {
            return Err(EngineError::OrderViolation);
        }
        let slot = self
            .slot_mut(Internal(()), index)
            .ok_or(EngineError::IndexOutOfBounds { index, len })?;
        Ok(mem::replace(slot, item))
    }

    /// Substitutes every element with `f(element)`.
    ///
    /// A no-op on an empty list.
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

    // ========================================================================
    // Producers
    // ========================================================================

    /// A new list of `self`'s elements that occur in `other`, in `self`'s
    /// order.
    fn retain_all(&self, other: &dyn ListContract<E>) -> Result<Self, EngineError>
    where
        Self: Sized,
    {
        self.retain_all_range(other, 0, other.active_size())
    }

    fn retain_all_from(&self, other: &dyn ListContract<E>, start: usize) -> Result<Self, EngineError>
    where
        Self: Sized,
    {
        self.retain_all_range(other, start, other.active_size())
    }

    fn retain_all_range(
        &self,
        other: &dyn ListContract<E>,
        start: usize,
        end: usize,
    ) -> Result<Self, EngineError>
    where
        Self: Sized,
    {
        let items = bridge::retained(self, other, start, end)?;
        Self::assemble(*self.options(), items)
    }

    /// A copy of `self[start..]`.
    fn sub_list(&self, start: usize) -> Result<Self, EngineError>
    where
        Self: Sized,
    {
        self.sub_list_range(start, self.active_size())
    }

    /// A copy of `self[start..end]` of the same engine type.
    fn sub_list_range(&self, start: usize, end: usize) -> Result<Self, EngineError>
    where
        Self: Sized,
    {
        self.sub_list_as(start, end)
    }

    /// A copy of `self[start..end]` as any list type `T`.
    fn sub_list_as<T>(&self, start: usize, end: usize) -> Result<T, EngineError>
    where
        Self: Sized,
        T: ListContract<E>,
    {
        let items = self.to_array_range(start, end)?;
        T::assemble(*self.options(), items)
    }
}
