//! Potion definitions.
//!
//! Potions are immutable once created and consumed exactly once when
//! allocated. Names identify them for display only and need not be
//! unique.

use serde::{Deserialize, Serialize};

/// Instant healing potion: restores a fixed amount on use.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Potion {
    pub name: String,
    pub healing_value: f32,
}

impl Potion {
    /// Create a named instant potion.
    pub fn new(name: impl Into<String>, healing_value: f32) -> Self {
        Self {
            name: name.into(),
            healing_value,
        }
    }
}

/// Regeneration potion: an instant component plus a fraction of max
/// health restored linearly over `duration` seconds.
///
/// ## Example
///
/// ```
/// use party_kit::RegenPotion;
///
/// let potion = RegenPotion::new("Troll Blood", 10.0, 0.5, 10.0);
/// // 10 instant + 50% of 100 max over time
/// assert_eq!(potion.total_healing_value(100.0), 60.0);
/// // one 1-second tick restores 5
/// assert_eq!(potion.healing_per_tick(100.0, 1.0), 5.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegenPotion {
    pub name: String,
    /// Health restored immediately on activation.
    pub instant_healing: f32,
    /// Fraction of max health restored over the full duration.
    pub percent_over_time: f32,
    /// Total length of the over-time effect in seconds.
    pub duration: f32,
}

impl RegenPotion {
    /// Create a named regen potion.
    pub fn new(
        name: impl Into<String>,
        instant_healing: f32,
        percent_over_time: f32,
        duration: f32,
    ) -> Self {
        Self {
            name: name.into(),
            instant_healing,
            percent_over_time,
            duration,
        }
    }

    /// Everything this potion restores on a recipient with the given
    /// max health: the instant component plus the full over-time share.
    #[must_use]
    pub fn total_healing_value(&self, max_health: f32) -> f32 {
        self.instant_healing + max_health * self.percent_over_time
    }

    /// Health restored by one tick of `delta` seconds.
    #[must_use]
    pub fn healing_per_tick(&self, max_health: f32, delta: f32) -> f32 {
        (max_health * self.percent_over_time / self.duration) * delta
    }
}
