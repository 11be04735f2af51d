//! Capability descriptors.
//!
//! Every engine type declares what kind of container it promises to be. The
//! declaration is a `const` [`CapabilityDescriptor`], validated during const
//! evaluation: a type with an invalid declaration does not compile, so it can
//! never be instantiated.
//!
//! There are two shapes of descriptor:
//!
//! - **Abstraction**: a contract with no intrinsic storage promise. Nature,
//!   behavior and ordering must all be left undefined.
//! - **Concrete**: a storage-backed engine. It must declare a nature and a
//!   behavior; the ordering may be `Unsupported`.
//!
//! # Example
//!
//! ```
//! use dataengine_core::{Behavior, CapabilityDescriptor, Nature, Ordering};
//!
//! const RING: CapabilityDescriptor =
//!     CapabilityDescriptor::concrete(Nature::Mutable, Behavior::Dynamic, Ordering::Unsorted);
//!
//! assert!(RING.is_concrete());
//! assert!(RING.flags().is_mutable());
//! ```

use bitflags::bitflags;

use crate::error::DescriptorError;

/// Implementation style of an engine type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Implementation {
    /// A contract-only type: says what concrete engines must do.
    Abstraction,
    /// A storage-backed engine.
    Concrete,
}

/// Intrinsic nature of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nature {
    Mutable,
    Immutable,
    /// Mutable, and responsible for synchronizing its own mutating entry points.
    ThreadMutable,
    Undefined,
}

impl Nature {
    pub const fn is_mutable(self) -> bool {
        matches!(self, Nature::Mutable | Nature::ThreadMutable)
    }

    pub const fn is_thread_safe(self) -> bool {
        matches!(self, Nature::ThreadMutable)
    }
}

/// Intrinsic length behavior of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Behavior {
    /// The allocated capacity never changes after construction.
    FixedLength,
    Dynamic,
    None,
}

/// Ordering guarantee of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ordering {
    /// Elements are kept in ascending order at all times.
    Sorted,
    /// Elements keep their insertion positions.
    Unsorted,
    Unsupported,
}

/// Checks a (kind, nature, behavior, ordering) tuple.
///
/// Abstractions require `nature=Undefined, behavior=None,
/// ordering=Unsupported`. Concrete engines require a defined nature and a
/// behavior other than `None`.
pub const fn validate(
    kind: Implementation,
    nature: Nature,
    behavior: Behavior,
    ordering: Ordering,
) -> bool {
    check(kind, nature, behavior, ordering).is_ok()
}

const fn check(
    kind: Implementation,
    nature: Nature,
    behavior: Behavior,
    ordering: Ordering,
) -> Result<(), DescriptorError> {
    match kind {
        Implementation::Abstraction => {
            if matches!(nature, Nature::Undefined)
                && matches!(behavior, Behavior::None)
                && matches!(ordering, Ordering::Unsupported)
            {
                Ok(())
            } else {
                Err(DescriptorError::AbstractionNotBare)
            }
        }
        Implementation::Concrete => {
            if !matches!(nature, Nature::Undefined) && !matches!(behavior, Behavior::None) {
                Ok(())
            } else {
                Err(DescriptorError::ConcreteIncomplete)
            }
        }
    }
}

/// A validated capability declaration.
///
/// Fields are private: the only ways to obtain a descriptor are the
/// validating constructors, so holding one proves it is well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CapabilityDescriptor {
    kind: Implementation,
    nature: Nature,
    behavior: Behavior,
    ordering: Ordering,
}

impl CapabilityDescriptor {
    /// Validates the tuple and builds a descriptor.
    pub const fn try_new(
        kind: Implementation,
        nature: Nature,
        behavior: Behavior,
        ordering: Ordering,
    ) -> Result<Self, DescriptorError> {
        match check(kind, nature, behavior, ordering) {
            Ok(()) => Ok(Self {
                kind,
                nature,
                behavior,
                ordering,
            }),
            Err(err) => Err(err),
        }
    }

    /// The descriptor shared by every abstract contract.
    pub const fn abstraction() -> Self {
        Self {
            kind: Implementation::Abstraction,
            nature: Nature::Undefined,
            behavior: Behavior::None,
            ordering: Ordering::Unsupported,
        }
    }

    /// Descriptor of a concrete engine.
    ///
    /// Meant to initialize a `const`. An invalid combination panics during
    /// const evaluation, which rejects the engine type at compile time:
    ///
    /// ```compile_fail
    /// use dataengine_core::{Behavior, CapabilityDescriptor, Nature, Ordering};
    ///
    /// const BROKEN: CapabilityDescriptor =
    ///     CapabilityDescriptor::concrete(Nature::Undefined, Behavior::Dynamic, Ordering::Unsorted);
    /// ```
    pub const fn concrete(nature: Nature, behavior: Behavior, ordering: Ordering) -> Self {
        match Self::try_new(Implementation::Concrete, nature, behavior, ordering) {
            Ok(descriptor) => descriptor,
            Err(_) => panic!("concrete engines must declare a nature and a behavior"),
        }
    }

    pub const fn kind(&self) -> Implementation {
        self.kind
    }

    pub const fn nature(&self) -> Nature {
        self.nature
    }

    pub const fn behavior(&self) -> Behavior {
        self.behavior
    }

    pub const fn ordering(&self) -> Ordering {
        self.ordering
    }

    pub const fn is_abstraction(&self) -> bool {
        matches!(self.kind, Implementation::Abstraction)
    }

    pub const fn is_concrete(&self) -> bool {
        matches!(self.kind, Implementation::Concrete)
    }

    /// Capability query for generic code.
    pub fn flags(&self) -> CapabilityFlags {
        CapabilityFlags::compute(self)
    }
}

bitflags! {
    /// Capabilities derived from a [`CapabilityDescriptor`].
    ///
    /// Computed from the descriptor so generic algorithms can ask, for
    /// example, whether an engine keeps its elements sorted without knowing
    /// the engine's type.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct CapabilityFlags: u8 {
        const CONCRETE = 1;
        const MUTABLE = 1 << 1;
        const THREAD_SAFE = 1 << 2;
        const FIXED_LENGTH = 1 << 3;
        const SORTED = 1 << 4;
    }
}

impl CapabilityFlags {
    pub fn compute(descriptor: &CapabilityDescriptor) -> Self {
        let mut flags = CapabilityFlags::empty();
        flags.set(CapabilityFlags::CONCRETE, descriptor.is_concrete());
        flags.set(CapabilityFlags::MUTABLE, descriptor.nature().is_mutable());
        flags.set(
            CapabilityFlags::THREAD_SAFE,
            descriptor.nature().is_thread_safe(),
        );
        flags.set(
            CapabilityFlags::FIXED_LENGTH,
            descriptor.behavior() == Behavior::FixedLength,
        );
        flags.set(
            CapabilityFlags::SORTED,
            descriptor.ordering() == Ordering::Sorted,
        );
        flags
    }

    pub fn is_mutable(self) -> bool {
        self.contains(CapabilityFlags::MUTABLE)
    }

    pub fn is_thread_safe(self) -> bool {
        self.contains(CapabilityFlags::THREAD_SAFE)
    }

    pub fn is_fixed_length(self) -> bool {
        self.contains(CapabilityFlags::FIXED_LENGTH)
    }

    pub fn is_sorted(self) -> bool {
        self.contains(CapabilityFlags::SORTED)
    }
}

static_assertions::const_assert!(CapabilityDescriptor::abstraction().is_abstraction());
static_assertions::const_assert!(validate(
    Implementation::Abstraction,
    Nature::Undefined,
    Behavior::None,
    Ordering::Unsupported,
));

#[cfg(test)]
mod tests {
    use super::*;

    const NATURES: [Nature; 4] = [
        Nature::Mutable,
        Nature::Immutable,
        Nature::ThreadMutable,
        Nature::Undefined,
    ];
    const BEHAVIORS: [Behavior; 3] = [Behavior::FixedLength, Behavior::Dynamic, Behavior::None];
    const ORDERINGS: [Ordering; 3] = [Ordering::Sorted, Ordering::Unsorted, Ordering::Unsupported];

    #[test]
    fn abstraction_accepts_only_the_bare_tuple() {
        let mut accepted = 0;
        for nature in NATURES {
            for behavior in BEHAVIORS {
                for ordering in ORDERINGS {
                    if validate(Implementation::Abstraction, nature, behavior, ordering) {
                        accepted += 1;
                        assert_eq!(nature, Nature::Undefined);
                        assert_eq!(behavior, Behavior::None);
                        assert_eq!(ordering, Ordering::Unsupported);
                    }
                }
            }
        }
        assert_eq!(accepted, 1);
    }

    #[test]
    fn concrete_requires_nature_and_behavior() {
        for nature in NATURES {
            for behavior in BEHAVIORS {
                for ordering in ORDERINGS {
                    let expected = nature != Nature::Undefined && behavior != Behavior::None;
                    assert_eq!(
                        validate(Implementation::Concrete, nature, behavior, ordering),
                        expected,
                        "{nature:?} {behavior:?} {ordering:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn try_new_reports_the_broken_rule() {
        assert_eq!(
            CapabilityDescriptor::try_new(
                Implementation::Abstraction,
                Nature::Mutable,
                Behavior::None,
                Ordering::Unsupported,
            ),
            Err(DescriptorError::AbstractionNotBare)
        );
        assert_eq!(
            CapabilityDescriptor::try_new(
                Implementation::Concrete,
                Nature::Mutable,
                Behavior::None,
                Ordering::Unsorted,
            ),
            Err(DescriptorError::ConcreteIncomplete)
        );
        assert_eq!(
            CapabilityDescriptor::try_new(
                Implementation::Abstraction,
                Nature::Undefined,
                Behavior::None,
                Ordering::Unsupported,
            ),
            Ok(CapabilityDescriptor::abstraction())
        );
    }

    #[test]
    fn flags_follow_the_descriptor() {
        let abstraction = CapabilityDescriptor::abstraction().flags();
        assert_eq!(abstraction, CapabilityFlags::empty());

        let shared = CapabilityDescriptor::concrete(
            Nature::ThreadMutable,
            Behavior::FixedLength,
            Ordering::Sorted,
        )
        .flags();
        assert!(shared.contains(CapabilityFlags::CONCRETE));
        assert!(shared.is_mutable());
        assert!(shared.is_thread_safe());
        assert!(shared.is_fixed_length());
        assert!(shared.is_sorted());

        let frozen =
            CapabilityDescriptor::concrete(Nature::Immutable, Behavior::Dynamic, Ordering::Unsorted)
                .flags();
        assert!(!frozen.is_mutable());
        assert!(!frozen.is_thread_safe());
        assert!(!frozen.is_sorted());
    }
}
