//! Party characters.
//!
//! A [`Character`] owns its health pool, stat block, equipped gear, and
//! at most one in-flight regen. The host drives time by calling
//! [`Character::tick`] once per frame with that frame's delta; nothing
//! here schedules itself.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::effects::{ActiveRegen, Recipient, RegenPotion};

use super::class::CharacterClass;
use super::health::HealthPool;
use super::sheet::{RosterError, SheetProvider};
use super::stats::{CharacterStats, Loadout, StatModifier};

/// An owned party member.
///
/// ## Example
///
/// ```
/// use party_kit::{Character, CharacterClass, Recipient, RegenPotion};
///
/// let mut aria = Character::new("Aria", CharacterClass::Rogue, 40.0, 100.0);
/// aria.activate_regen(RegenPotion::new("Salve", 10.0, 0.5, 10.0));
/// assert_eq!(aria.current_health(), 50.0); // instant component
///
/// aria.tick(1.0); // +5 from the over-time share
/// assert_eq!(aria.current_health(), 55.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    name: String,
    class: CharacterClass,
    stats: CharacterStats,
    loadout: Loadout,
    health: HealthPool,
    active_regen: Option<ActiveRegen>,
}

impl Character {
    /// Create a character with the class's base stats.
    pub fn new(
        name: impl Into<String>,
        class: CharacterClass,
        current_health: f32,
        max_health: f32,
    ) -> Self {
        Self {
            name: name.into(),
            class,
            stats: class.base_stats(),
            loadout: Loadout::new(),
            health: HealthPool::new(current_health, max_health),
            active_regen: None,
        }
    }

    /// Build a character from a sheet resolved through `provider`.
    ///
    /// Fails with [`RosterError::MissingSheet`] when the key resolves
    /// to nothing and [`RosterError::InvalidSheet`] when the sheet's
    /// health values cannot form a valid pool.
    pub fn from_sheet<P: SheetProvider>(provider: &P, key: &str) -> Result<Self, RosterError> {
        let sheet = provider
            .sheet(key)
            .ok_or_else(|| RosterError::MissingSheet(key.to_string()))?;
        sheet.validate()?;
        Ok(Self::new(
            sheet.name.clone(),
            sheet.class,
            sheet.current_health,
            sheet.max_health,
        ))
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Character class.
    #[must_use]
    pub const fn class(&self) -> CharacterClass {
        self.class
    }

    /// Health pool (read-only; mutate through `Recipient` methods).
    #[must_use]
    pub const fn health(&self) -> &HealthPool {
        &self.health
    }

    /// Base stats, before loadout bonuses.
    #[must_use]
    pub const fn base_stats(&self) -> CharacterStats {
        self.stats
    }

    /// Base stats plus every equipped bonus.
    #[must_use]
    pub fn effective_stats(&self) -> CharacterStats {
        self.loadout.effective(self.stats)
    }

    /// Equipped modifiers.
    #[must_use]
    pub const fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    /// Equip a stat modifier.
    pub fn equip(&mut self, modifier: StatModifier) {
        self.loadout.equip(modifier);
    }

    /// The regen currently running, if any.
    #[must_use]
    pub fn active_regen(&self) -> Option<&ActiveRegen> {
        self.active_regen.as_ref()
    }

    /// Advance the active regen by `delta` seconds.
    ///
    /// Applies one tick of healing, then drops the regen once it has
    /// run its duration or the character is back at full health. Safe
    /// to call every frame whether or not a regen is active.
    pub fn tick(&mut self, delta: f32) {
        let Some(regen) = self.active_regen.as_mut() else {
            return;
        };

        let amount = regen.healing_this_tick(self.health.max(), delta);
        let restored = self.health.apply(amount);
        if restored > 0.0 {
            debug!("{} regenerated {} health", self.name, restored);
        }
        regen.advance(delta);

        if regen.is_finished() || self.health.is_full() {
            debug!("{}'s regen ended", self.name);
            self.active_regen = None;
        }
    }
}

impl Recipient for Character {
    fn current_health(&self) -> f32 {
        self.health.current()
    }

    fn max_health(&self) -> f32 {
        self.health.max()
    }

    fn apply_instant_heal(&mut self, amount: f32) {
        let restored = self.health.apply(amount);
        debug!(
            "adding {} health to {} ({} restored)",
            amount, self.name, restored
        );
    }

    fn activate_regen(&mut self, potion: RegenPotion) {
        // Replaces any running regen; its remaining progress is lost.
        self.apply_instant_heal(potion.instant_healing);
        self.active_regen = Some(ActiveRegen::new(potion));
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} the {} ({}/{})",
            self.name,
            self.class,
            self.health.current(),
            self.health.max()
        )
    }
}
