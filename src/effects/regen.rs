//! In-flight regeneration state.
//!
//! The original per-tick shape here is cooperative: the host calls the
//! owner's `tick(delta)` once per frame, the owner applies one step and
//! drops the regen when it expires. Cancellation is dropping the value.

use serde::{Deserialize, Serialize};

use super::potion::RegenPotion;

/// A regen potion in progress on some recipient.
///
/// Tracks elapsed time against the potion's duration. The owner applies
/// [`RegenPotion::healing_per_tick`] each step and calls [`advance`]
/// with the same delta; once [`is_finished`] reports true the effect is
/// dropped.
///
/// [`advance`]: ActiveRegen::advance
/// [`is_finished`]: ActiveRegen::is_finished
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActiveRegen {
    potion: RegenPotion,
    elapsed: f32,
}

impl ActiveRegen {
    /// Start a regen with zero elapsed time.
    #[must_use]
    pub fn new(potion: RegenPotion) -> Self {
        Self {
            potion,
            elapsed: 0.0,
        }
    }

    /// The potion driving this regen.
    #[must_use]
    pub fn potion(&self) -> &RegenPotion {
        &self.potion
    }

    /// Time this regen has been active, in seconds.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Duration left before natural expiry, never negative.
    #[must_use]
    pub fn remaining(&self) -> f32 {
        (self.potion.duration - self.elapsed).max(0.0)
    }

    /// Health restored by a tick of `delta` seconds at `max_health`.
    #[must_use]
    pub fn healing_this_tick(&self, max_health: f32, delta: f32) -> f32 {
        self.potion.healing_per_tick(max_health, delta)
    }

    /// Advance elapsed time by `delta` seconds.
    pub fn advance(&mut self, delta: f32) {
        self.elapsed += delta;
    }

    /// Whether the regen has run its full duration.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.potion.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_until_finished() {
        let mut regen = ActiveRegen::new(RegenPotion::new("Salve", 0.0, 0.3, 3.0));
        assert!(!regen.is_finished());

        regen.advance(1.0);
        regen.advance(1.0);
        assert!(!regen.is_finished());
        assert_eq!(regen.remaining(), 1.0);

        regen.advance(1.0);
        assert!(regen.is_finished());
        assert_eq!(regen.remaining(), 0.0);
    }

    #[test]
    fn test_healing_this_tick_delegates_to_potion() {
        let regen = ActiveRegen::new(RegenPotion::new("Salve", 5.0, 0.5, 10.0));
        assert_eq!(regen.healing_this_tick(100.0, 1.0), 5.0);
    }
}
