//! Descriptor declaration macro.
//!
//! # Example
//!
//! ```
//! use dataengine_core::{descriptor, CapabilityDescriptor, Ordering};
//!
//! const CONTRACT: CapabilityDescriptor = descriptor!(Abstraction);
//! const SORTED: CapabilityDescriptor = descriptor!(Concrete: Mutable, Dynamic, Sorted);
//!
//! assert!(CONTRACT.is_abstraction());
//! assert_eq!(SORTED.ordering(), Ordering::Sorted);
//! ```

/// Declares a [`CapabilityDescriptor`](crate::CapabilityDescriptor).
///
/// Always expands to a const block, so an invalid concrete tuple is a
/// compile error even when the macro is used outside a `const` item.
///
/// # Syntax
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `Abstraction` | The bare contract descriptor |
/// | `Concrete: Nature, Behavior, Ordering` | A storage-backed engine |
#[macro_export]
macro_rules! descriptor {
    (Abstraction) => {
        const { $crate::CapabilityDescriptor::abstraction() }
    };

    (Concrete: $nature:ident, $behavior:ident, $ordering:ident $(,)?) => {
        const {
            $crate::CapabilityDescriptor::concrete(
                $crate::Nature::$nature,
                $crate::Behavior::$behavior,
                $crate::Ordering::$ordering,
            )
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{Behavior, CapabilityDescriptor, Implementation, Nature, Ordering};

    #[test]
    fn expands_to_validated_descriptors() {
        let bounded = descriptor!(Concrete: Mutable, FixedLength, Unsorted);
        assert_eq!(bounded.kind(), Implementation::Concrete);
        assert_eq!(bounded.nature(), Nature::Mutable);
        assert_eq!(bounded.behavior(), Behavior::FixedLength);
        assert_eq!(bounded.ordering(), Ordering::Unsorted);

        assert_eq!(
            descriptor!(Abstraction),
            CapabilityDescriptor::abstraction()
        );
    }

    #[test]
    fn ordering_may_be_unsupported_on_concrete_engines() {
        let plain = descriptor!(Concrete: Immutable, Dynamic, Unsupported,);
        assert!(plain.is_concrete());
        assert!(!plain.flags().is_sorted());
    }
}
