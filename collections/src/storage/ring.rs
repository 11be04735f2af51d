//! A ring buffer over `Vec<Option<E>>`.
//!
//! The vector's length is the capacity. Live elements occupy `len`
//! consecutive slots starting at `head`, wrapping at the end. Pushes and pops
//! at either end are O(1); insertions in the middle shift the shorter side.

use alloc::collections::TryReserveError;
use alloc::vec::Vec;

#[derive(Debug, Clone)]
pub(crate) struct RingBuffer<E> {
    slots: Vec<Option<E>>,
    head: usize,
    len: usize,
}

impl<E> RingBuffer<E> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            head: 0,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn head(&self) -> usize {
        self.head
    }

    fn physical(&self, position: usize) -> usize {
        (self.head + position) % self.slots.len()
    }

    pub(crate) fn get(&self, position: usize) -> Option<&E> {
        if position >= self.len {
            return None;
        }
        self.slots[self.physical(position)].as_ref()
    }

    pub(crate) fn get_mut(&mut self, position: usize) -> Option<&mut E> {
        if position >= self.len {
            return None;
        }
        let slot = self.physical(position);
        self.slots[slot].as_mut()
    }

    /// Moves the element at logical `from` to logical `to`.
    fn shift(&mut self, from: usize, to: usize) {
        let from = self.physical(from);
        let to = self.physical(to);
        self.slots[to] = self.slots[from].take();
    }

    /// Callers guarantee `len < capacity`.
    pub(crate) fn push_front(&mut self, value: E) {
        debug_assert!(self.len < self.capacity(), "ring buffer is full");
        let capacity = self.capacity();
        self.head = (self.head + capacity - 1) % capacity;
        self.slots[self.head] = Some(value);
        self.len += 1;
    }

    /// Callers guarantee `len < capacity`.
    pub(crate) fn push_back(&mut self, value: E) {
        debug_assert!(self.len < self.capacity(), "ring buffer is full");
        let slot = self.physical(self.len);
        self.slots[slot] = Some(value);
        self.len += 1;
    }

    /// Inserts at logical `position <= len`. Callers guarantee
    /// `len < capacity`.
    pub(crate) fn insert(&mut self, position: usize, value: E) {
        debug_assert!(self.len < self.capacity(), "ring buffer is full");
        if position < self.len / 2 {
            // Open the gap by moving the front part one slot towards the head.
            let capacity = self.capacity();
            self.head = (self.head + capacity - 1) % capacity;
            for logical in 0..position {
                self.shift(logical + 1, logical);
            }
        } else {
            for logical in (position..self.len).rev() {
                self.shift(logical, logical + 1);
            }
        }
        let slot = self.physical(position);
        self.slots[slot] = Some(value);
        self.len += 1;
    }

    pub(crate) fn remove(&mut self, position: usize) -> Option<E> {
        if position >= self.len {
            return None;
        }
        let slot = self.physical(position);
        let value = self.slots[slot].take();
        if position < self.len / 2 {
            for logical in (0..position).rev() {
                self.shift(logical, logical + 1);
            }
            self.head = (self.head + 1) % self.capacity();
        } else {
            for logical in position..self.len - 1 {
                self.shift(logical + 1, logical);
            }
        }
        self.len -= 1;
        value
    }

    pub(crate) fn pop_front(&mut self) -> Option<E> {
        self.remove(0)
    }

    pub(crate) fn pop_back(&mut self) -> Option<E> {
        let last = self.len.checked_sub(1)?;
        self.remove(last)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.len = 0;
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        if a < self.len && b < self.len {
            let (a, b) = (self.physical(a), self.physical(b));
            self.slots.swap(a, b);
        }
    }

    /// Rotates the live window to start at slot 0.
    pub(crate) fn compress(&mut self) {
        if self.head != 0 {
            self.slots.rotate_left(self.head);
            self.head = 0;
        }
    }

    /// The live slots as one contiguous slice, in logical order.
    pub(crate) fn make_contiguous(&mut self) -> &mut [Option<E>] {
        self.compress();
        &mut self.slots[..self.len]
    }

    pub(crate) fn grow_to(&mut self, capacity: usize) -> Result<(), TryReserveError> {
        self.compress();
        self.slots
            .try_reserve_exact(capacity.saturating_sub(self.slots.len()))?;
        self.slots.resize_with(capacity, || None);
        Ok(())
    }

    /// Callers guarantee `capacity >= len`.
    pub(crate) fn shrink_to(&mut self, capacity: usize) {
        self.compress();
        self.slots.truncate(capacity.max(self.len));
        self.slots.shrink_to_fit();
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        (0..self.len).filter_map(move |position| self.slots[self.physical(position)].as_ref())
    }

    pub(crate) fn retain(&mut self, keep: &mut dyn FnMut(&E) -> bool) -> usize {
        self.compress();
        let mut kept = 0;
        for read in 0..self.len {
            match self.slots[read].take() {
                Some(value) if keep(&value) => {
                    self.slots[kept] = Some(value);
                    kept += 1;
                }
                _ => {}
            }
        }
        let removed = self.len - kept;
        self.len = kept;
        removed
    }
}
