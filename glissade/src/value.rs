//! Slider value model and ownership.
//!
//! A slider carries either one value or an ordered low/high pair. The pair
//! invariant `low <= high` is re-established by [`SliderValue::constrained_to`]
//! after every mutation, together with clamping into the configured domain.

use crate::config::SliderConfig;

/// The current value of a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderValue {
    /// A single value for one-handle sliders.
    Single(f32),
    /// An ordered low/high pair for range sliders.
    Pair {
        /// The lower handle's value. Never above `high`.
        low: f32,
        /// The upper handle's value.
        high: f32,
    },
}

impl SliderValue {
    /// Convenience constructor for an ordered pair.
    ///
    /// The arguments are reordered if given backwards.
    pub fn pair(a: f32, b: f32) -> Self {
        Self::Pair {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// Clamps the value into the config's domain and restores pair ordering.
    ///
    /// Also coerces the value's shape to the config: a `Single` fed to a
    /// range config becomes a collapsed pair, and a `Pair` fed to a
    /// single-value config keeps its low end.
    pub fn constrained_to(self, config: &SliderConfig) -> Self {
        match (self, config.range) {
            (Self::Single(v), false) => Self::Single(config.clamp(v)),
            (Self::Single(v), true) => {
                let v = config.clamp(v);
                Self::Pair { low: v, high: v }
            }
            (Self::Pair { low, .. }, false) => Self::Single(config.clamp(low)),
            (Self::Pair { low, high }, true) => {
                let low = config.clamp(low);
                let high = config.clamp(high).max(low);
                Self::Pair { low, high }
            }
        }
    }

    /// Returns the pair's endpoints, collapsing a single value onto itself.
    pub fn endpoints(self) -> (f32, f32) {
        match self {
            Self::Single(v) => (v, v),
            Self::Pair { low, high } => (low, high),
        }
    }

    /// Approximate equality, used to suppress redundant change emissions.
    pub fn approx_eq(self, other: Self) -> bool {
        fn close(a: f32, b: f32) -> bool {
            (a - b).abs() <= f32::EPSILON
        }
        match (self, other) {
            (Self::Single(a), Self::Single(b)) => close(a, b),
            (
                Self::Pair { low: al, high: ah },
                Self::Pair { low: bl, high: bh },
            ) => close(al, bl) && close(ah, bh),
            _ => false,
        }
    }
}

/// Who owns the authoritative value.
///
/// Decided once when the engine is constructed; it never changes mid-life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOwnership {
    /// The consumer supplies the value every render; the engine only
    /// proposes candidates through its change callback.
    Controlled,
    /// The engine keeps the value itself, seeded once from an initial value.
    Uncontrolled,
}

/// Holds the engine's view of the current value.
#[derive(Debug, Clone)]
pub struct ValueStore {
    ownership: ValueOwnership,
    current: SliderValue,
}

impl ValueStore {
    /// Creates a store with the given ownership, seeded with `initial`.
    pub fn new(ownership: ValueOwnership, initial: SliderValue) -> Self {
        Self {
            ownership,
            current: initial,
        }
    }

    /// The ownership mode fixed at construction.
    pub fn ownership(&self) -> ValueOwnership {
        self.ownership
    }

    /// The value the engine currently renders from.
    pub fn get(&self) -> SliderValue {
        self.current
    }

    /// Applies a computed candidate.
    ///
    /// Only an uncontrolled store accepts it; a controlled store keeps its
    /// value until the owner feeds one back through [`ValueStore::sync`].
    pub fn commit(&mut self, value: SliderValue) {
        if self.ownership == ValueOwnership::Uncontrolled {
            self.current = value;
        }
    }

    /// Overwrites the value with whatever the owner supplied.
    pub fn sync(&mut self, value: SliderValue) {
        self.current = value;
    }
}
