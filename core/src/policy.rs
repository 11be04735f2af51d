//! Capacity bookkeeping and the grow/shrink decision logic.
//!
//! The policy is pure arithmetic over a [`Capacity`] and some
//! [`EngineOptions`]. Engines apply its decisions through their storage
//! hooks (see [`DataEngine::rebalance`](crate::DataEngine::rebalance)).

use crate::options::EngineOptions;

/// Allocated slots and live elements of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capacity {
    pub max: usize,
    pub active: usize,
}

impl Capacity {
    pub const fn new(max: usize, active: usize) -> Self {
        Self { max, active }
    }

    /// `active / max`, or 0 for an engine without slots.
    pub fn load(&self) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            self.active as f64 / self.max as f64
        }
    }

    /// Slots that can be filled without growing.
    pub const fn free(&self) -> usize {
        self.max.saturating_sub(self.active)
    }

    pub const fn is_consistent(&self) -> bool {
        self.active <= self.max
    }
}

/// Grow/shrink decisions for one set of options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityPolicy {
    options: EngineOptions,
}

impl CapacityPolicy {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Capacity after one grow step. Always strictly larger than `max`.
    pub fn grow_target(&self, max: usize) -> usize {
        let scaled = ceil_to_usize(max as f64 * self.options.growth_ratio);
        scaled.max(max.saturating_add(1))
    }

    /// Capacity after one shrink step. Never below `active` or the initial
    /// capacity, and never above `max`.
    pub fn shrink_target(&self, capacity: Capacity) -> usize {
        let scaled = ceil_to_usize(capacity.max as f64 / self.options.growth_ratio);
        scaled
            .max(capacity.active)
            .max(self.options.initial_capacity)
            .min(capacity.max)
    }

    /// Smallest capacity reachable by whole grow steps that holds `required`
    /// elements without exceeding the growth load factor.
    ///
    /// Stops at `usize::MAX`, where a grow step no longer advances.
    pub fn reserve_target(&self, max: usize, required: usize) -> usize {
        let mut target = max;
        while target < required || self.needs_growth(Capacity::new(target, required)) {
            let next = self.grow_target(target);
            if next == target {
                break;
            }
            target = next;
        }
        target
    }

    pub fn needs_growth(&self, capacity: Capacity) -> bool {
        capacity.load() > self.options.growth_load_factor
    }

    pub fn needs_shrink(&self, capacity: Capacity) -> bool {
        capacity.load() < self.options.shrink_load_factor
            && capacity.max > self.options.initial_capacity
    }
}

/// `f64::ceil` is not available without `std`.
fn ceil_to_usize(value: f64) -> usize {
    if value <= 0.0 {
        return 0;
    }
    if value >= usize::MAX as f64 {
        return usize::MAX;
    }
    let truncated = value as usize;
    if (truncated as f64) < value {
        truncated + 1
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> CapacityPolicy {
        CapacityPolicy::new(EngineOptions::default())
    }

    #[test]
    fn load_of_empty_storage_is_zero() {
        assert_eq!(Capacity::new(0, 0).load(), 0.0);
        assert_eq!(Capacity::new(16, 4).load(), 0.25);
    }

    #[test]
    fn grow_follows_golden_ratio() {
        let policy = policy();
        assert_eq!(policy.grow_target(16), 26);
        assert_eq!(policy.grow_target(26), 43);
        assert_eq!(policy.grow_target(0), 1);
        assert_eq!(policy.grow_target(1), 2);
    }

    #[test]
    fn thirteen_of_sixteen_needs_growth() {
        let policy = policy();
        assert!(!policy.needs_growth(Capacity::new(16, 12)));
        assert!(policy.needs_growth(Capacity::new(16, 13)));
        assert!(!policy.needs_growth(Capacity::new(26, 13)));
    }

    #[test]
    fn shrink_never_drops_below_floor() {
        let policy = policy();
        assert_eq!(policy.shrink_target(Capacity::new(43, 2)), 27);
        assert_eq!(policy.shrink_target(Capacity::new(20, 2)), 16);
        assert_eq!(policy.shrink_target(Capacity::new(100, 90)), 90);
        assert!(!policy.needs_shrink(Capacity::new(16, 0)));
        assert!(policy.needs_shrink(Capacity::new(43, 2)));
    }

    #[test]
    fn reserve_target_takes_whole_steps() {
        let policy = policy();
        assert_eq!(policy.reserve_target(16, 10), 16);
        assert_eq!(policy.reserve_target(16, 17), 26);
        assert_eq!(policy.reserve_target(16, 30), 43);
        assert_eq!(policy.reserve_target(16, 13), 26);
        assert_eq!(policy.reserve_target(16, 12), 16);
    }

    #[test]
    fn reserve_target_stops_when_growth_cannot_advance() {
        let options = EngineOptions::default().with_growth_load_factor(0.0);
        let policy = CapacityPolicy::new(options);
        assert_eq!(policy.reserve_target(16, 1), usize::MAX);
        assert_eq!(policy.grow_target(usize::MAX), usize::MAX);
    }

    #[test]
    fn ceil_rounds_up_fractions_only() {
        assert_eq!(ceil_to_usize(2.0), 2);
        assert_eq!(ceil_to_usize(2.01), 3);
        assert_eq!(ceil_to_usize(-1.0), 0);
    }
}
