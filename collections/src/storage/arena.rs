//! Doubly linked nodes in a `Vec`, addressed by index.
//!
//! Removed nodes go on a free list and are reused by later insertions, so
//! the node vector only grows when every slot is live. [`NodeArena::compact`]
//! rewrites the live nodes into a contiguous prefix in logical order.

use alloc::collections::TryReserveError;
use alloc::vec::Vec;

#[derive(Debug, Clone)]
struct Node<E> {
    value: Option<E>,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
pub(crate) struct NodeArena<E> {
    nodes: Vec<Node<E>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    /// Logical capacity, reported as the engine's max capacity.
    reserved: usize,
}

impl<E> NodeArena<E> {
    pub(crate) fn with_reserved(reserved: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(reserved),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            reserved,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn reserved(&self) -> usize {
        self.reserved
    }

    /// Nodes that hold no value and wait on the free list.
    pub(crate) fn holes(&self) -> usize {
        self.free.len()
    }

    pub(crate) fn reserve_to(&mut self, reserved: usize) -> Result<(), TryReserveError> {
        self.nodes
            .try_reserve_exact(reserved.saturating_sub(self.nodes.len()))?;
        self.reserved = reserved;
        Ok(())
    }

    pub(crate) fn shrink_to(&mut self, reserved: usize) {
        self.compact();
        self.nodes.shrink_to(reserved);
        self.reserved = reserved;
    }

    /// Index of the node at logical `position`, walking from the nearer end.
    fn locate(&self, position: usize) -> Option<usize> {
        if position >= self.len {
            return None;
        }
        if position <= self.len / 2 {
            let mut cursor = self.head;
            for _ in 0..position {
                cursor = cursor.and_then(|node| self.nodes[node].next);
            }
            cursor
        } else {
            let mut cursor = self.tail;
            for _ in 0..(self.len - 1 - position) {
                cursor = cursor.and_then(|node| self.nodes[node].prev);
            }
            cursor
        }
    }

    fn allocate(&mut self, value: E, prev: Option<usize>, next: Option<usize>) -> usize {
        let node = Node {
            value: Some(value),
            prev,
            next,
        };
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = node;
                index
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    pub(crate) fn get(&self, position: usize) -> Option<&E> {
        self.locate(position)
            .and_then(|node| self.nodes[node].value.as_ref())
    }

    pub(crate) fn get_mut(&mut self, position: usize) -> Option<&mut E> {
        self.locate(position)
            .and_then(|node| self.nodes[node].value.as_mut())
    }

    pub(crate) fn push_front(&mut self, value: E) {
        let node = self.allocate(value, None, self.head);
        match self.head {
            Some(head) => self.nodes[head].prev = Some(node),
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    pub(crate) fn push_back(&mut self, value: E) {
        let node = self.allocate(value, self.tail, None);
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Inserts before the element at `position`, or appends when
    /// `position == len`.
    pub(crate) fn insert(&mut self, position: usize, value: E) {
        if position == 0 {
            self.push_front(value);
            return;
        }
        let Some(successor) = self.locate(position) else {
            self.push_back(value);
            return;
        };
        let predecessor = self.nodes[successor].prev;
        let node = self.allocate(value, predecessor, Some(successor));
        self.nodes[successor].prev = Some(node);
        if let Some(predecessor) = predecessor {
            self.nodes[predecessor].next = Some(node);
        }
        self.len += 1;
    }

    fn unlink(&mut self, node: usize) -> Option<E> {
        let prev = self.nodes[node].prev.take();
        let next = self.nodes[node].next.take();
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        self.free.push(node);
        self.nodes[node].value.take()
    }

    pub(crate) fn remove(&mut self, position: usize) -> Option<E> {
        let node = self.locate(position)?;
        self.unlink(node)
    }

    pub(crate) fn pop_front(&mut self) -> Option<E> {
        let head = self.head?;
        self.unlink(head)
    }

    pub(crate) fn pop_back(&mut self) -> Option<E> {
        let tail = self.tail?;
        self.unlink(tail)
    }

    pub(crate) fn front(&self) -> Option<&E> {
        self.head.and_then(|node| self.nodes[node].value.as_ref())
    }

    pub(crate) fn back(&self) -> Option<&E> {
        self.tail.and_then(|node| self.nodes[node].value.as_ref())
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        let (Some(a), Some(b)) = (self.locate(a), self.locate(b)) else {
            return;
        };
        if a != b {
            let first = self.nodes[a].value.take();
            let second = core::mem::replace(&mut self.nodes[b].value, first);
            self.nodes[a].value = second;
        }
    }

    /// Reverses by relinking; no value moves.
    pub(crate) fn reverse(&mut self) {
        let mut cursor = self.head;
        while let Some(node) = cursor {
            let links = &mut self.nodes[node];
            core::mem::swap(&mut links.prev, &mut links.next);
            cursor = links.prev;
        }
        core::mem::swap(&mut self.head, &mut self.tail);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        let mut cursor = self.head;
        core::iter::from_fn(move || {
            let node = &self.nodes[cursor?];
            cursor = node.next;
            node.value.as_ref()
        })
    }

    /// Applies `visit` to `count` elements starting at `position`.
    pub(crate) fn visit_mut(&mut self, position: usize, count: usize, visit: &mut dyn FnMut(&mut E)) {
        let mut cursor = self.locate(position);
        for _ in 0..count {
            let Some(node) = cursor else { break };
            if let Some(value) = self.nodes[node].value.as_mut() {
                visit(value);
            }
            cursor = self.nodes[node].next;
        }
    }

    pub(crate) fn retain(&mut self, keep: &mut dyn FnMut(&E) -> bool) -> usize {
        let mut removed = 0;
        let mut cursor = self.head;
        while let Some(node) = cursor {
            cursor = self.nodes[node].next;
            let kept = self.nodes[node].value.as_ref().is_some_and(|value| keep(value));
            if !kept {
                self.unlink(node);
                removed += 1;
            }
        }
        removed
    }

    /// Moves the live nodes into `nodes[..len]` in logical order and empties
    /// the free list.
    pub(crate) fn compact(&mut self) {
        if self.free.is_empty() && self.is_linear() {
            return;
        }
        let mut nodes = Vec::with_capacity(self.nodes.capacity());
        let mut cursor = self.head;
        while let Some(node) = cursor {
            cursor = self.nodes[node].next;
            let position = nodes.len();
            nodes.push(Node {
                value: self.nodes[node].value.take(),
                prev: position.checked_sub(1),
                next: (position + 1 < self.len).then_some(position + 1),
            });
        }
        self.nodes = nodes;
        self.free.clear();
        self.head = (self.len > 0).then_some(0);
        self.tail = self.len.checked_sub(1);
    }

    /// True when node `i` holds logical element `i` for every live node.
    fn is_linear(&self) -> bool {
        let mut cursor = self.head;
        let mut expected = 0;
        while let Some(node) = cursor {
            if node != expected {
                return false;
            }
            expected += 1;
            cursor = self.nodes[node].next;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn arena(values: &[i32]) -> NodeArena<i32> {
        let mut arena = NodeArena::with_reserved(8);
        for &value in values {
            arena.push_back(value);
        }
        arena
    }

    fn contents(arena: &NodeArena<i32>) -> Vec<i32> {
        arena.iter().copied().collect()
    }

    #[test]
    fn inserts_and_removes_anywhere() {
        let mut arena = arena(&[1, 3]);
        arena.insert(1, 2);
        arena.insert(0, 0);
        arena.insert(4, 4);
        assert_eq!(contents(&arena), vec![0, 1, 2, 3, 4]);
        assert_eq!(arena.remove(2), Some(2));
        assert_eq!(arena.remove(9), None);
        assert_eq!(contents(&arena), vec![0, 1, 3, 4]);
        assert_eq!(arena.get(3), Some(&4));
        assert_eq!(arena.get(1), Some(&1));
    }

    #[test]
    fn free_slots_are_reused() {
        let mut arena = arena(&[1, 2, 3]);
        arena.remove(1);
        assert_eq!(arena.holes(), 1);
        arena.push_front(0);
        assert_eq!(arena.holes(), 0);
        assert_eq!(contents(&arena), vec![0, 1, 3]);
    }

    #[test]
    fn both_ends() {
        let mut arena = arena(&[]);
        arena.push_front(2);
        arena.push_back(3);
        arena.push_front(1);
        assert_eq!(arena.front(), Some(&1));
        assert_eq!(arena.back(), Some(&3));
        assert_eq!(arena.pop_back(), Some(3));
        assert_eq!(arena.pop_front(), Some(1));
        assert_eq!(arena.pop_front(), Some(2));
        assert_eq!(arena.pop_front(), None);
        assert_eq!(arena.front(), None);
    }

    #[test]
    fn reverse_relinks() {
        let mut arena = arena(&[1, 2, 3, 4]);
        arena.reverse();
        assert_eq!(contents(&arena), vec![4, 3, 2, 1]);
        assert_eq!(arena.get(0), Some(&4));
        assert_eq!(arena.get(3), Some(&1));
        arena.push_back(0);
        assert_eq!(contents(&arena), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn compact_restores_logical_layout() {
        let mut arena = arena(&[1, 2, 3, 4, 5]);
        arena.remove(0);
        arena.remove(2);
        arena.push_front(9);
        arena.reverse();
        arena.compact();
        assert_eq!(arena.holes(), 0);
        assert!(arena.is_linear());
        assert_eq!(contents(&arena), vec![5, 3, 2, 9]);
        assert_eq!(arena.back(), Some(&9));
    }

    #[test]
    fn retain_and_visit() {
        let mut arena = arena(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(arena.retain(&mut |value| value % 2 == 0), 3);
        assert_eq!(contents(&arena), vec![2, 4, 6]);
        arena.visit_mut(1, 2, &mut |value| *value *= 10);
        assert_eq!(contents(&arena), vec![2, 40, 60]);
        arena.swap(0, 2);
        assert_eq!(contents(&arena), vec![60, 40, 2]);
    }
}
