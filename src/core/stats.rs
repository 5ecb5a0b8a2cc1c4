//! Character stat blocks and equipment-style modifiers.
//!
//! The seven-attribute [`CharacterStats`] block adds componentwise. Gear
//! and enchantments are [`StatModifier`]s collected in a [`Loadout`];
//! effective stats are the base block plus every equipped bonus, applied
//! in equip order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Add;

/// Seven-attribute stat block.
///
/// All attributes default to 5, the unremarkable-adventurer baseline.
///
/// ## Example
///
/// ```
/// use party_kit::CharacterStats;
///
/// let base = CharacterStats::default();
/// let sword = CharacterStats::new(5, 0, 0, 0, 0, 0, 0);
/// assert_eq!((base + sword).strength, 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub strength: i32,
    pub agility: i32,
    pub endurance: i32,
    pub intelligence: i32,
    pub willpower: i32,
    pub speed: i32,
    pub luck: i32,
}

impl CharacterStats {
    /// Create a stat block from explicit attribute values.
    #[must_use]
    pub const fn new(
        strength: i32,
        agility: i32,
        endurance: i32,
        intelligence: i32,
        willpower: i32,
        speed: i32,
        luck: i32,
    ) -> Self {
        Self {
            strength,
            agility,
            endurance,
            intelligence,
            willpower,
            speed,
            luck,
        }
    }

    /// The all-zero block, identity for `+`.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0, 0, 0, 0)
    }
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self::new(5, 5, 5, 5, 5, 5, 5)
    }
}

impl Add for CharacterStats {
    type Output = CharacterStats;

    fn add(self, other: CharacterStats) -> CharacterStats {
        CharacterStats {
            strength: self.strength + other.strength,
            agility: self.agility + other.agility,
            endurance: self.endurance + other.endurance,
            intelligence: self.intelligence + other.intelligence,
            willpower: self.willpower + other.willpower,
            speed: self.speed + other.speed,
            luck: self.luck + other.luck,
        }
    }
}

/// A named stat bonus - an enchanted blade, a suit of armor, a blessing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatModifier {
    pub name: String,
    pub bonus: CharacterStats,
}

impl StatModifier {
    /// Create a named modifier.
    pub fn new(name: impl Into<String>, bonus: CharacterStats) -> Self {
        Self {
            name: name.into(),
            bonus,
        }
    }
}

/// Equipped stat modifiers, stacked in equip order.
///
/// Most characters carry a handful of modifiers, so storage is inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    modifiers: SmallVec<[StatModifier; 4]>,
}

impl Loadout {
    /// Create an empty loadout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Equip a modifier. Later equips stack on earlier ones.
    pub fn equip(&mut self, modifier: StatModifier) {
        self.modifiers.push(modifier);
    }

    /// Remove the most recently equipped modifier.
    pub fn unequip_last(&mut self) -> Option<StatModifier> {
        self.modifiers.pop()
    }

    /// Number of equipped modifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    /// Check if nothing is equipped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// Iterate over equipped modifiers in equip order.
    pub fn iter(&self) -> impl Iterator<Item = &StatModifier> {
        self.modifiers.iter()
    }

    /// Sum of all equipped bonuses.
    #[must_use]
    pub fn total_bonus(&self) -> CharacterStats {
        self.modifiers
            .iter()
            .fold(CharacterStats::zero(), |acc, m| acc + m.bonus)
    }

    /// Base stats plus every equipped bonus.
    #[must_use]
    pub fn effective(&self, base: CharacterStats) -> CharacterStats {
        base + self.total_bonus()
    }
}
