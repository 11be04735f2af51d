//! Engine configuration.
//!
//! [`EngineOptions`] tunes the capacity policy of one engine instance. The
//! defaults are the constants exported from this module; hosts that keep
//! their settings in a config file can layer an [`EngineOptionsOverride`]
//! on top of them (with the `serde` feature both types deserialize).

use crate::error::EngineError;

/// Growth and shrink steps scale the capacity by this factor.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Load above which the engine grows.
pub const GROWTH_LOAD_FACTOR: f64 = 0.75;

/// Load below which the engine shrinks, unless it is at its initial capacity.
pub const SHRINK_LOAD_FACTOR: f64 = 0.25;

/// Slots allocated by a new dynamic engine.
pub const DEFAULT_CAPACITY: usize = 16;

/// Options for a single engine instance.
///
/// Options are `Copy` and travel with the engine: clones, merges and
/// sub-lists inherit the options of the engine that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineOptions {
    /// Slots allocated at construction. The engine never shrinks below it.
    pub initial_capacity: usize,

    /// Grow while `active / max` is above this.
    pub growth_load_factor: f64,

    /// Shrink once when `active / max` is below this.
    pub shrink_load_factor: f64,

    /// Multiplier applied by each grow step (and divisor of each shrink step).
    pub growth_ratio: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            growth_load_factor: GROWTH_LOAD_FACTOR,
            shrink_load_factor: SHRINK_LOAD_FACTOR,
            growth_ratio: GOLDEN_RATIO,
        }
    }
}

impl EngineOptions {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_growth_load_factor(mut self, factor: f64) -> Self {
        self.growth_load_factor = factor;
        self
    }

    pub fn with_shrink_load_factor(mut self, factor: f64) -> Self {
        self.shrink_load_factor = factor;
        self
    }

    pub fn with_growth_ratio(mut self, ratio: f64) -> Self {
        self.growth_ratio = ratio;
        self
    }

    /// Checks that the options describe a policy that terminates.
    ///
    /// Load factors must lie in `(0, 1]` with the shrink factor strictly below
    /// the growth factor, and the growth ratio must be above 1.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.initial_capacity == 0 {
            return Err(EngineError::InvalidOptions(
                "initial capacity must be at least 1",
            ));
        }
        if !(self.growth_load_factor > 0.0 && self.growth_load_factor <= 1.0) {
            return Err(EngineError::InvalidOptions(
                "growth load factor must be in (0, 1]",
            ));
        }
        if !(self.shrink_load_factor > 0.0 && self.shrink_load_factor <= 1.0) {
            return Err(EngineError::InvalidOptions(
                "shrink load factor must be in (0, 1]",
            ));
        }
        if self.shrink_load_factor >= self.growth_load_factor {
            return Err(EngineError::InvalidOptions(
                "shrink load factor must be below the growth load factor",
            ));
        }
        // NaN fails this comparison too.
        if !(self.growth_ratio > 1.0) {
            return Err(EngineError::InvalidOptions(
                "growth ratio must be greater than 1",
            ));
        }
        Ok(())
    }

    /// These options if they [`validate`](Self::validate), the defaults
    /// otherwise.
    ///
    /// Engine constructors run their options through here, so a policy that
    /// could never settle is replaced before it reaches the growth loop.
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(err) => {
                tracing::warn!(%err, options = ?self, "Invalid engine options, using defaults");
                Self::default()
            }
        }
    }
}

/// Partial options, merged over a base with [`apply_to`](Self::apply_to).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineOptionsOverride {
    pub initial_capacity: Option<usize>,
    pub growth_load_factor: Option<f64>,
    pub shrink_load_factor: Option<f64>,
    pub growth_ratio: Option<f64>,
}

impl EngineOptionsOverride {
    /// Layers the set fields over `base` and validates the result.
    pub fn apply_to(&self, base: EngineOptions) -> Result<EngineOptions, EngineError> {
        let options = EngineOptions {
            initial_capacity: self.initial_capacity.unwrap_or(base.initial_capacity),
            growth_load_factor: self.growth_load_factor.unwrap_or(base.growth_load_factor),
            shrink_load_factor: self.shrink_load_factor.unwrap_or(base.shrink_load_factor),
            growth_ratio: self.growth_ratio.unwrap_or(base.growth_ratio),
        };
        options.validate()?;
        Ok(options)
    }
}
