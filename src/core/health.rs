//! Health pools with saturating heal semantics.
//!
//! A [`HealthPool`] tracks current and maximum health. Healing saturates
//! at the maximum; any excess is wasted. Observers (UI bars, logs) read
//! `percent()` - the pool itself never pushes updates.

use serde::{Deserialize, Serialize};

/// Current/maximum health pair with clamped mutation.
///
/// `current` never exceeds `max` and never drops below zero; both are
/// enforced at construction and on every mutation.
///
/// ## Example
///
/// ```
/// use party_kit::HealthPool;
///
/// let mut health = HealthPool::new(50.0, 100.0);
/// assert_eq!(health.missing(), 50.0);
///
/// health.apply(80.0);
/// assert_eq!(health.current(), 100.0); // overflow wasted
/// assert!(health.is_full());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthPool {
    current: f32,
    max: f32,
}

impl HealthPool {
    /// Create a pool with the given current and maximum health.
    ///
    /// `current` is clamped into `[0, max]`. Panics if `max` is not
    /// positive - a zero-health character is a programmer error here;
    /// data-driven construction validates first (see `CharacterSheet`).
    #[must_use]
    pub fn new(current: f32, max: f32) -> Self {
        assert!(max > 0.0, "max health must be positive");
        Self {
            current: current.clamp(0.0, max),
            max,
        }
    }

    /// Create a pool at full health.
    #[must_use]
    pub fn full(max: f32) -> Self {
        Self::new(max, max)
    }

    /// Current health.
    #[must_use]
    pub const fn current(&self) -> f32 {
        self.current
    }

    /// Maximum health.
    #[must_use]
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// Health still missing: `max - current`.
    #[must_use]
    pub fn missing(&self) -> f32 {
        self.max - self.current
    }

    /// Whether the pool is at maximum.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Current health as a fraction of maximum, in `[0, 1]`.
    #[must_use]
    pub fn percent(&self) -> f32 {
        self.current / self.max
    }

    /// Add health, saturating at the maximum.
    ///
    /// Returns the amount actually restored (0 when already full).
    pub fn apply(&mut self, amount: f32) -> f32 {
        let before = self.current;
        self.current = self.max.min(self.current + amount);
        self.current - before
    }
}
