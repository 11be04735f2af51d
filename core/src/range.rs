//! Half-open `[start, end)` ranges over an engine's elements.

use crate::error::EngineError;

/// A range already validated against some source length.
///
/// Only [`Range::checked`] and [`Range::full`] construct one, so a `Range` in
/// hand is always non-empty and in bounds for the source it was checked
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    start: usize,
    end: usize,
}

impl Range {
    /// Accepts `[start, end)` iff `start < len`, `end <= len` and `start < end`.
    ///
    /// # Edge Cases
    ///
    /// - Any range over an empty source is rejected.
    /// - `start == end` is rejected even when in bounds.
    pub fn checked(start: usize, end: usize, len: usize) -> Result<Self, EngineError> {
        if start < len && end <= len && start < end {
            Ok(Self { start, end })
        } else {
            tracing::debug!(start, end, len, "Rejected range");
            Err(EngineError::InvalidRange { start, end, len })
        }
    }

    /// `[0, len)`; rejected when `len == 0`.
    pub fn full(len: usize) -> Result<Self, EngineError> {
        Self::checked(0, len, len)
    }

    /// `[start, len)`.
    pub fn starting_at(start: usize, len: usize) -> Result<Self, EngineError> {
        Self::checked(start, len, len)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false: [`checked`](Self::checked) rejects `start >= end`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    pub fn indices(&self) -> core::ops::Range<usize> {
        self.start..self.end
    }
}
