//! Error types for engine operations.
//!
//! Expected misuse (a bad index, a malformed range, a failed downcast, a
//! mutation of an immutable engine) is reported as a typed [`EngineError`]
//! and never leaves an engine partially modified. The only fault is
//! [`EngineError::Allocation`], raised when storage cannot grow.

use alloc::collections::TryReserveError;

use thiserror::Error;

/// Failure of an engine operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// `[start, end)` is not a non-empty range inside a source of `len` elements.
    #[error("invalid range [{start}, {end}) over {len} element(s)")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("index {index} out of bounds for {len} element(s)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("engine is empty")]
    Empty,

    #[error("engine is immutable")]
    Immutable,

    /// A fixed-length engine has no free slot left.
    #[error("fixed capacity of {max} slot(s) exhausted")]
    CapacityExhausted { max: usize },

    /// The operation would break the ordering a sorted engine maintains.
    #[error("operation would violate the engine ordering")]
    OrderViolation,

    /// A type-erased engine is not of the requested concrete type.
    #[error("expected engine of type `{expected}`, found `{found}`")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid engine options: {0}")]
    InvalidOptions(&'static str),

    #[error("allocation failed while growing storage")]
    Allocation(#[from] TryReserveError),
}

impl EngineError {
    /// True for unrecoverable conditions, false for caller misuse.
    pub fn is_fault(&self) -> bool {
        matches!(self, EngineError::Allocation(_))
    }
}

/// Rejection of an invalid [`CapabilityDescriptor`](crate::CapabilityDescriptor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DescriptorError {
    #[error("abstraction descriptors must leave nature, behavior and ordering undefined")]
    AbstractionNotBare,

    #[error("concrete descriptors must declare a nature and a behavior")]
    ConcreteIncomplete,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offending_values() {
        let err = EngineError::InvalidRange {
            start: 3,
            end: 2,
            len: 5,
        };
        assert_eq!(err.to_string(), "invalid range [3, 2) over 5 element(s)");

        let err = EngineError::TypeMismatch {
            expected: "ArrayList<i32>",
            found: "RingDeque<i32>",
        };
        assert_eq!(
            err.to_string(),
            "expected engine of type `ArrayList<i32>`, found `RingDeque<i32>`"
        );
    }

    #[test]
    fn only_allocation_is_a_fault() {
        assert!(!EngineError::Empty.is_fault());
        assert!(!EngineError::Immutable.is_fault());
        assert!(!EngineError::OrderViolation.is_fault());
        assert!(!EngineError::CapacityExhausted { max: 4 }.is_fault());

        let mut huge = alloc::vec::Vec::<u64>::new();
        let Err(reserve) = huge.try_reserve(usize::MAX) else {
            panic!("reserving usize::MAX elements must fail");
        };
        assert!(EngineError::from(reserve).is_fault());
    }
}
