//! The base engine contract.
//!
//! [`DataEngine`] splits into two halves:
//!
//! - **Storage hooks**: a small set of required methods that read and edit a
//!   concrete engine's slots. They are documented as "Internal:" because they
//!   skip every check. The ones that write take an [`Internal`] token, which
//!   only this crate can create, so callers go through the provided
//!   operations instead.
//! - **Provided operations**: capacity bookkeeping, the grow/shrink policy,
//!   copying and moving, and the bridge operations that compare or combine
//!   two engines of possibly different concrete types.
//!
//! The trait is object safe, so `&dyn DataEngine<E>` is the currency of every
//! cross-type operation. Methods that produce a new engine of the invoker's
//! type are `where Self: Sized` and therefore only callable on concrete types.

use core::any::Any;
use core::mem;

use crate::bridge;
use crate::descriptor::{CapabilityDescriptor, CapabilityFlags};
use crate::error::EngineError;
use crate::options::EngineOptions;
use crate::policy::{Capacity, CapacityPolicy};
use crate::range::Range;
use crate::{Box, Vec};

/// Access token for the storage hooks that write.
///
/// Engines name it in their hook signatures and may forward it to an inner
/// engine, but only the provided operations of this crate can create one.
///
/// ```compile_fail
/// use dataengine_core::Internal;
///
/// let token = Internal(());
/// ```
#[derive(Debug)]
pub struct Internal(pub(crate) ());

/// Element types an engine can hold.

///
/// `PartialEq` backs `contains`, `equals` and `equivalence`; `Clone` backs
/// snapshots and copies.
pub trait Element: Clone + PartialEq + 'static {}

impl<T: Clone + PartialEq + 'static> Element for T {}

/// A capacity-tracked container of `E`.
pub trait DataEngine<E: Element>: Any {
    // ========================================================================
    // Storage hooks
    // ========================================================================

    /// The descriptor of the engine type.
    fn descriptor(&self) -> CapabilityDescriptor;

    fn options(&self) -> &EngineOptions;

    /// Internal: allocated slots and live elements.
    fn capacity(&self) -> Capacity;

    /// Internal: element at logical position `index`.
    fn slot(&self, index: usize) -> Option<&E>;

    /// Internal: mutable element at logical position `index`.
    fn slot_mut(&mut self, _: Internal, index: usize) -> Option<&mut E>;

    /// Elements in logical order.
    fn iter(&self) -> Box<dyn Iterator<Item = &E> + '_>;

    /// Internal: inserts `item` at `index`, shifting later elements.
    ///
    /// Callers guarantee `index <= active < max`.
    fn insert_slot(&mut self, _: Internal, index: usize, item: E);

    /// Internal: removes the element at `index`, shifting later elements.
    fn remove_slot(&mut self, _: Internal, index: usize) -> Option<E>;

    /// Internal: drops every element. Capacity is unchanged.
    fn clear_slots(&mut self, _: Internal);

    /// Internal: exchanges two in-bounds positions.
    fn swap_slots(&mut self, _: Internal, a: usize, b: usize);

    /// Internal: raises the capacity to `new_max`, which is above the
    /// current one.
    fn grow_storage(&mut self, _: Internal, new_max: usize) -> Result<(), EngineError>;

    /// Internal: lowers the capacity to `new_max`, which is at least the
    /// current active size.
    fn shrink_storage(&mut self, _: Internal, new_max: usize);

    /// Reclaims internal fragmentation. Content and order are unchanged.
    fn compress(&mut self);

    /// Deep copy behind a trait object.
    fn clone_boxed(&self) -> Box<dyn DataEngine<E>>;

    /// Moves the storage into a new boxed engine, leaving `self` empty.
    fn move_boxed(&mut self) -> Box<dyn DataEngine<E>>;

    /// An empty engine configured with `options`.
    fn with_options(options: EngineOptions) -> Self
    where
        Self: Sized;

    // ========================================================================
    // Optional hooks
    // ========================================================================

    /// Internal: applies `visit` to every element of `range`, in order.
    fn visit_range_mut(&mut self, _: Internal, range: Range, visit: &mut dyn FnMut(&mut E)) {
        for index in range.indices() {
            if let Some(slot) = self.slot_mut(Internal(()), index) {
                visit(slot);
            }
        }
    }

    /// Internal: removes every element `keep` rejects and returns how many
    /// were removed. Capacity is unchanged.
    fn retain_slots(&mut self, _: Internal, keep: &mut dyn FnMut(&E) -> bool) -> usize {
        let mut removed = 0;
        let mut index = 0;
        while let Some(item) = self.slot(index) {
            if keep(item) {
                index += 1;
            } else {
                self.remove_slot(Internal(()), index);
                removed += 1;
            }
        }
        removed
    }

    /// Internal: where `add` places `item`. The end, unless the engine keeps
    /// an ordering.
    fn insertion_point(&self, _item: &E) -> usize {
        self.active_size()
    }

    /// Internal: whether inserting `item` at `index` keeps the engine's
    /// ordering.
    fn admits_at(&self, _index: usize, _item: &E) -> bool {
        true
    }

    /// Internal: whether `item` may replace the element at `index`.
    fn admits_replacement(&self, _index: usize, _item: &E) -> bool {
        true
    }

    /// Internal: re-establishes the engine's ordering after a bulk write.
    fn restore_order(&mut self, _: Internal) {}

    /// Reverses the elements in place.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Immutable`] on immutable engines.
    /// - [`EngineError::OrderViolation`] on sorted engines holding more than
    ///   one element.
    fn reverse(&mut self) -> Result<(), EngineError> {
        self.ensure_mutable()?;
        let len = self.active_size();
        if len > 1 && self.flags().is_sorted() {
            return Err(EngineError::OrderViolation);
        }
        for index in 0..len / 2 {
            self.swap_slots(Internal(()), index, len - 1 - index);
        }
        Ok(())
    }

    /// A new engine configured with `options` and holding `items`.
    ///
    /// Every producer (`merge`, `sub_list`, `retain_all`, ...) builds its
    /// result through here, so immutable engine types can still be produced.
    fn assemble(options: EngineOptions, items: Vec<E>) -> Result<Self, EngineError>
    where
        Self: Sized,
    {
        let mut engine = Self::with_options(options);
        engine.append_slots(Internal(()), items)?;
        Ok(engine)
    }

    // ========================================================================
    // Capacity
    // ========================================================================

    fn active_size(&self) -> usize {
        self.capacity().active
    }

    fn max_capacity(&self) -> usize {
        self.capacity().max
    }

    fn is_empty(&self) -> bool {
        self.active_size() == 0
    }

    /// `active / max`, or 0 when no slot is allocated.
    fn load(&self) -> f64 {
        self.capacity().load()
    }

    fn flags(&self) -> CapabilityFlags {
        self.descriptor().flags()
    }

    fn is_mutable(&self) -> bool {
        self.descriptor().nature().is_mutable()
    }

    fn is_thread_safe(&self) -> bool {
        self.descriptor().nature().is_thread_safe()
    }

    /// Name of the concrete engine type.
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    fn capacity_policy(&self) -> CapacityPolicy {
        CapacityPolicy::new(*self.options())
    }

    /// One growth step: `max ← max(ceil(max · ratio), max + 1)`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::CapacityExhausted`] on fixed-length engines.
    /// - [`EngineError::Allocation`] when the storage cannot be enlarged.
    fn grow(&mut self) -> Result<(), EngineError> {
        let capacity = self.capacity();
        if self.flags().is_fixed_length() {
            return Err(EngineError::CapacityExhausted { max: capacity.max });
        }
        let target = self.capacity_policy().grow_target(capacity.max);
        tracing::trace!(
            engine = self.type_name(),
            from = capacity.max,
            to = target,
            "Growing engine"
        );
        self.grow_storage(Internal(()), target)
    }

    /// One shrink step, never below the active size or the initial capacity.
    /// No-op on fixed-length engines.
    fn shrink(&mut self) {
        if self.flags().is_fixed_length() {
            return;
        }
        let capacity = self.capacity();
        let target = self.capacity_policy().shrink_target(capacity);
        if target < capacity.max {
            tracing::trace!(
                engine = self.type_name(),
                from = capacity.max,
                to = target,
                "Shrinking engine"
            );
            self.shrink_storage(Internal(()), target);
        }
    }

    /// Makes room for `additional` more elements in a single storage change.
    ///
    /// Dynamic engines grow far enough that the load after the insertion
    /// stays within the growth load factor, so a failed allocation happens
    /// before any element is written.
    fn reserve(&mut self, additional: usize) -> Result<(), EngineError> {
        let capacity = self.capacity();
        let Some(required) = capacity.active.checked_add(additional) else {
            return Err(EngineError::CapacityExhausted { max: capacity.max });
        };
        if self.flags().is_fixed_length() {
            return if required <= capacity.max {
                Ok(())
            } else {
                Err(EngineError::CapacityExhausted { max: capacity.max })
            };
        }
        let target = self.capacity_policy().reserve_target(capacity.max, required);
        if target == capacity.max {
            return Ok(());
        }
        tracing::trace!(
            engine = self.type_name(),
            from = capacity.max,
            to = target,
            "Reserving capacity"
        );
        self.grow_storage(Internal(()), target)
    }

    /// Fires the capacity policy after a size change.
    ///
    /// Grows while the load is above the growth factor, otherwise shrinks
    /// once if the load is below the shrink factor.
    fn rebalance(&mut self) -> Result<(), EngineError> {
        if self.flags().is_fixed_length() {
            return Ok(());
        }
        let policy = self.capacity_policy();
        if policy.needs_growth(self.capacity()) {
            while policy.needs_growth(self.capacity()) {
                let max = self.max_capacity();
                if policy.grow_target(max) == max {
                    break;
                }
                self.grow()?;
            }
        } else {
            self.settle();
        }
        debug_assert!(
            self.capacity().is_consistent(),
            "Contract violation: active size exceeds max capacity after rebalance"
        );
        Ok(())
    }

    /// The shrink half of [`rebalance`](Self::rebalance). Used after
    /// removals, which never need growth.
    fn settle(&mut self) {
        if !self.flags().is_fixed_length() && self.capacity_policy().needs_shrink(self.capacity()) {
            self.shrink();
        }
    }

    fn ensure_mutable(&self) -> Result<(), EngineError> {
        if self.is_mutable() {
            Ok(())
        } else {
            Err(EngineError::Immutable)
        }
    }

    // ========================================================================
    // Positional core
    // ========================================================================

    /// Inserts `item` at `index` and fires the capacity policy.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Immutable`] on immutable engines.
    /// - [`EngineError::IndexOutOfBounds`] when `index > active_size()`.
    /// - [`EngineError::CapacityExhausted`] when a fixed-length engine is full.
    fn place(&mut self, index: usize, item: E) -> Result<(), EngineError> {
        self.ensure_mutable()?;
        let len = self.active_size();
        if index > len {
            return Err(EngineError::IndexOutOfBounds { index, len });
        }
        self.reserve(1)?;
        self.insert_slot(Internal(()), index, item);
        self.rebalance()
    }

    /// Removes and returns the element at `index`.
    fn take_at(&mut self, index: usize) -> Result<E, EngineError> {
        self.ensure_mutable()?;
        let len = self.active_size();
        let item = self
            .remove_slot(Internal(()), index)
            .ok_or(EngineError::IndexOutOfBounds { index, len })?;
        self.settle();
        Ok(item)
    }

    /// Internal: appends `items`, reserving room for all of them first, then
    /// restores the engine's ordering.
    ///
    /// Does not check mutability: constructors use it to fill engines that
    /// are immutable once built.
    fn append_slots(&mut self, _: Internal, items: Vec<E>) -> Result<(), EngineError> {
        if items.is_empty() {
            return Ok(());
        }
        self.reserve(items.len())?;
        for item in items {
            let end = self.active_size();
            self.insert_slot(Internal(()), end, item);
        }
        self.restore_order(Internal(()));
        self.rebalance()
    }

    /// Drops every element. Returns false if there was nothing to remove or
    /// the engine is immutable.
    fn remove_all(&mut self) -> bool {
        if self.is_empty() || !self.is_mutable() {
            return false;
        }
        self.clear_slots(Internal(()));
        self.settle();
        true
    }

    /// Moves the content into a new engine, leaving `self` empty with the
    /// same options.
    fn take(&mut self) -> Self
    where
        Self: Sized,
    {
        let options = *self.options();
        mem::replace(self, Self::with_options(options))
    }

    /// Moves the engine behind a lock that can be shared across threads.
    #[cfg(feature = "std")]
    fn thread_safe_image(self) -> crate::shared::SharedEngine<Self>
    where
        Self: Sized + Send,
    {
        crate::shared::SharedEngine::new(self)
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    fn to_array(&self) -> Vec<E> {
        self.iter().cloned().collect()
    }

    fn to_array_range(&self, start: usize, end: usize) -> Result<Vec<E>, EngineError> {
        let range = Range::checked(start, end, self.active_size())?;
        Ok(bridge::window(self, range).cloned().collect())
    }

    // ========================================================================
    // Bridge
    // ========================================================================

    /// Same length and the same elements in the same order.
    fn equals(&self, other: &dyn DataEngine<E>) -> bool {
        self.active_size() == other.active_size() && self.iter().eq(other.iter())
    }

    /// `[start, end)` is valid on both engines and holds the same elements.
    fn equals_range(&self, other: &dyn DataEngine<E>, start: usize, end: usize) -> bool {
        bridge::equals_range(self, other, start, end)
    }

    /// Same elements with the same multiplicities, in any order.
    fn equivalence(&self, other: &dyn DataEngine<E>) -> bool {
        bridge::equivalent(self, other)
    }

    /// A new engine holding `self` followed by all of `other`.
    ///
    /// Merging an empty engine yields a copy of `self`.
    fn merge(&self, other: &dyn DataEngine<E>) -> Result<Self, EngineError>
    where
        Self: Sized,
    {
        if other.is_empty() {
            return Self::assemble(*self.options(), self.to_array());
        }
        self.merge_range(other, 0, other.active_size())
    }

    /// A new engine holding `self` followed by `other[start..]`.
    fn merge_from(&self, other: &dyn DataEngine<E>, start: usize) -> Result<Self, EngineError>
    where
        Self: Sized,
    {
        self.merge_range(other, start, other.active_size())
    }

    /// A new engine holding `self` followed by `other[start..end]`.
    fn merge_range(
        &self,
        other: &dyn DataEngine<E>,
        start: usize,
        end: usize,
    ) -> Result<Self, EngineError>
    where
        Self: Sized,
    {
        let items = bridge::merged(self, other, start, end)?;
        Self::assemble(*self.options(), items)
    }
}
