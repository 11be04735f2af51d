//! Storage kernels shared by the engines.
//!
//! Engines over the same kernel differ only in their descriptor and in how
//! they grow, so the slot-level hooks are generated by the macros below.

mod arena;
mod ring;

pub(crate) use arena::NodeArena;
pub(crate) use ring::RingBuffer;

/// Slot hooks of `DataEngine` for an engine storing a `RingBuffer` in
/// `self.ring`.
macro_rules! ring_slot_hooks {
    () => {
        fn capacity(&self) -> ::dataengine_core::Capacity {
            ::dataengine_core::Capacity::new(self.ring.capacity(), self.ring.len())
        }

        fn slot(&self, index: usize) -> Option<&E> {
            self.ring.get(index)
        }

        fn slot_mut(&mut self, _: ::dataengine_core::Internal, index: usize) -> Option<&mut E> {
            self.ring.get_mut(index)
        }

        fn iter(&self) -> ::alloc::boxed::Box<dyn Iterator<Item = &E> + '_> {
            ::alloc::boxed::Box::new(self.ring.iter())
        }

        fn insert_slot(&mut self, _: ::dataengine_core::Internal, index: usize, item: E) {
            match index {
                0 => self.ring.push_front(item),
                end if end == self.ring.len() => self.ring.push_back(item),
                _ => self.ring.insert(index, item),
            }
        }

        fn remove_slot(&mut self, _: ::dataengine_core::Internal, index: usize) -> Option<E> {
            self.ring.remove(index)
        }

        fn clear_slots(&mut self, _: ::dataengine_core::Internal) {
            self.ring.clear();
        }

        fn swap_slots(&mut self, _: ::dataengine_core::Internal, a: usize, b: usize) {
            self.ring.swap(a, b);
        }

        fn compress(&mut self) {
            tracing::trace!(
                engine = ::dataengine_core::DataEngine::<E>::type_name(self),
                head = self.ring.head(),
                "Compressing ring"
            );
            self.ring.compress();
        }

        fn retain_slots(
            &mut self,
            _: ::dataengine_core::Internal,
            keep: &mut dyn FnMut(&E) -> bool,
        ) -> usize {
            self.ring.retain(keep)
        }
    };
}

/// Slot and capacity hooks of `DataEngine` for an engine storing a
/// `NodeArena` in `self.arena`. Reversal relinks nodes instead of swapping
/// values.
macro_rules! arena_hooks {
    () => {
        fn capacity(&self) -> ::dataengine_core::Capacity {
            ::dataengine_core::Capacity::new(self.arena.reserved(), self.arena.len())
        }

        fn slot(&self, index: usize) -> Option<&E> {
            self.arena.get(index)
        }

        fn slot_mut(&mut self, _: ::dataengine_core::Internal, index: usize) -> Option<&mut E> {
            self.arena.get_mut(index)
        }

        fn iter(&self) -> ::alloc::boxed::Box<dyn Iterator<Item = &E> + '_> {
            ::alloc::boxed::Box::new(self.arena.iter())
        }

        fn insert_slot(&mut self, _: ::dataengine_core::Internal, index: usize, item: E) {
            self.arena.insert(index, item);
        }

        fn remove_slot(&mut self, _: ::dataengine_core::Internal, index: usize) -> Option<E> {
            self.arena.remove(index)
        }

        fn clear_slots(&mut self, _: ::dataengine_core::Internal) {
            self.arena.clear();
        }

        fn swap_slots(&mut self, _: ::dataengine_core::Internal, a: usize, b: usize) {
            self.arena.swap(a, b);
        }

        fn grow_storage(
            &mut self,
            _: ::dataengine_core::Internal,
            new_max: usize,
        ) -> Result<(), ::dataengine_core::EngineError> {
            Ok(self.arena.reserve_to(new_max)?)
        }

        fn shrink_storage(&mut self, _: ::dataengine_core::Internal, new_max: usize) {
            self.arena.shrink_to(new_max);
        }

        fn compress(&mut self) {
            tracing::trace!(
                engine = ::dataengine_core::DataEngine::<E>::type_name(self),
                holes = self.arena.holes(),
                "Compacting arena"
            );
            self.arena.compact();
        }

        fn visit_range_mut(
            &mut self,
            _: ::dataengine_core::Internal,
            range: ::dataengine_core::Range,
            visit: &mut dyn FnMut(&mut E),
        ) {
            self.arena.visit_mut(range.start(), range.len(), visit);
        }

        fn retain_slots(
            &mut self,
            _: ::dataengine_core::Internal,
            keep: &mut dyn FnMut(&E) -> bool,
        ) -> usize {
            self.arena.retain(keep)
        }

        fn reverse(&mut self) -> Result<(), ::dataengine_core::EngineError> {
            ::dataengine_core::DataEngine::<E>::ensure_mutable(self)?;
            self.arena.reverse();
            Ok(())
        }
    };
}

pub(crate) use arena_hooks;
pub(crate) use ring_slot_hooks;
