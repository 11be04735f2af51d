//! Cross-type operations.
//!
//! Everything here works on two engines that share nothing but their element
//! type. The range algorithms are generic over `?Sized` engines so the list
//! and deque contracts can hand in `self` and any `dyn` view of the other
//! operand without coercion.
//!
//! The second half of the module recovers a concrete engine from a
//! `dyn DataEngine<E>` with a checked downcast.

use core::any::Any;

use smallvec::SmallVec;

use crate::engine::{DataEngine, Element, Internal};
use crate::error::EngineError;
use crate::range::Range;
use crate::{Box, Vec};

/// Elements of `engine` inside `range`, in order.
pub fn window<'a, E, A>(engine: &'a A, range: Range) -> impl Iterator<Item = &'a E> + 'a
where
    E: Element,
    A: DataEngine<E> + ?Sized,
{
    engine.iter().skip(range.start()).take(range.len())
}

pub fn contains<E, A>(engine: &A, item: &E) -> bool
where
    E: Element,
    A: DataEngine<E> + ?Sized,
{
    engine.iter().any(|candidate| candidate == item)
}

/// Every element of `source[start..end]` occurs in `engine`.
///
/// False when the range is invalid for `source`, which includes an empty
/// source.
pub fn contains_all_range<E, A, B>(engine: &A, source: &B, start: usize, end: usize) -> bool
where
    E: Element,
    A: DataEngine<E> + ?Sized,
    B: DataEngine<E> + ?Sized,
{
    let Ok(range) = Range::checked(start, end, source.active_size()) else {
        return false;
    };
    window(source, range).all(|item| contains(engine, item))
}

/// Elements of `engine` that occur in `source[start..end]`, order preserved.
pub fn retained<E, A, B>(
    engine: &A,
    source: &B,
    start: usize,
    end: usize,
) -> Result<Vec<E>, EngineError>
where
    E: Element,
    A: DataEngine<E> + ?Sized,
    B: DataEngine<E> + ?Sized,
{
    let range = Range::checked(start, end, source.active_size())?;
    let keep: Vec<&E> = window(source, range).collect();
    Ok(engine
        .iter()
        .filter(|item| keep.contains(item))
        .cloned()
        .collect())
}

/// `engine`'s content followed by `other[start..end]`.
pub fn merged<E, A, B>(engine: &A, other: &B, start: usize, end: usize) -> Result<Vec<E>, EngineError>
where
    E: Element,
    A: DataEngine<E> + ?Sized,
    B: DataEngine<E> + ?Sized,
{
    let range = Range::checked(start, end, other.active_size())?;
    let mut items = Vec::new();
    items.try_reserve_exact(engine.active_size() + range.len())?;
    items.extend(engine.iter().cloned());
    items.extend(window(other, range).cloned());
    Ok(items)
}

pub fn equals_range<E, A, B>(engine: &A, other: &B, start: usize, end: usize) -> bool
where
    E: Element,
    A: DataEngine<E> + ?Sized,
    B: DataEngine<E> + ?Sized,
{
    let (Ok(mine), Ok(theirs)) = (
        Range::checked(start, end, engine.active_size()),
        Range::checked(start, end, other.active_size()),
    ) else {
        return false;
    };
    window(engine, mine).eq(window(other, theirs))
}

/// Same multiset of elements. Quadratic: `E` is only `PartialEq`.
pub fn equivalent<E, A, B>(engine: &A, other: &B) -> bool
where
    E: Element,
    A: DataEngine<E> + ?Sized,
    B: DataEngine<E> + ?Sized,
{
    let len = engine.active_size();
    if len != other.active_size() {
        return false;
    }
    let mut matched: SmallVec<[bool; 64]> = SmallVec::from_elem(false, len);
    engine.iter().all(|item| {
        let hit = other
            .iter()
            .enumerate()
            .position(|(index, candidate)| !matched[index] && candidate == item);
        match hit {
            Some(index) => {
                matched[index] = true;
                true
            }
            None => false,
        }
    })
}

/// Replaces every element of `engine[start..end]` with `f(element)`.
///
/// Sorted engines re-establish their ordering afterwards.
pub fn substitute<E, A>(
    engine: &mut A,
    start: usize,
    end: usize,
    f: &mut dyn FnMut(&E) -> E,
) -> Result<(), EngineError>
where
    E: Element,
    A: DataEngine<E> + ?Sized,
{
    engine.ensure_mutable()?;
    let range = Range::checked(start, end, engine.active_size())?;
    engine.visit_range_mut(Internal(()), range, &mut |slot: &mut E| {
        let next = f(slot);
        *slot = next;
    });
    if engine.flags().is_sorted() {
        engine.restore_order(Internal(()));
    }
    Ok(())
}

// ============================================================================
// Recovery
// ============================================================================

fn mismatch<T: Any>(found: &'static str) -> EngineError {
    let expected = core::any::type_name::<T>();
    tracing::debug!(expected, found, "Engine downcast failed");
    EngineError::TypeMismatch { expected, found }
}

/// Borrows `engine` as its concrete type `T`.
pub fn recover_ref<E, T>(engine: &dyn DataEngine<E>) -> Result<&T, EngineError>
where
    E: Element,
    T: DataEngine<E>,
{
    let found = engine.type_name();
    let any: &dyn Any = engine;
    any.downcast_ref::<T>().ok_or_else(|| mismatch::<T>(found))
}

/// Mutably borrows `engine` as its concrete type `T`.
pub fn recover_mut<E, T>(engine: &mut dyn DataEngine<E>) -> Result<&mut T, EngineError>
where
    E: Element,
    T: DataEngine<E>,
{
    let found = engine.type_name();
    let any: &mut dyn Any = engine;
    any.downcast_mut::<T>().ok_or_else(|| mismatch::<T>(found))
}

/// Unboxes `engine` as its concrete type `T`. The engine is dropped on
/// mismatch.
pub fn recover<E, T>(engine: Box<dyn DataEngine<E>>) -> Result<Box<T>, EngineError>
where
    E: Element,
    T: DataEngine<E>,
{
    let found = engine.type_name();
    let any: Box<dyn Any> = engine;
    any.downcast::<T>().map_err(|_| mismatch::<T>(found))
}

impl<E: Element> dyn DataEngine<E> {
    /// True if the engine behind this trait object is a `T`.
    pub fn is<T: DataEngine<E>>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }
}
