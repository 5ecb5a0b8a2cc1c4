//! Character classes and their starting stat blocks.

use serde::{Deserialize, Serialize};

use super::stats::CharacterStats;

/// Playable character class.
///
/// Classes carry no behavior of their own; they select a starting stat
/// block via [`CharacterClass::base_stats`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Warrior,
    Rogue,
    Mage,
    Wizard,
    Ranger,
    Monk,
    Bard,
    Paladin,
    Cleric,
}

impl CharacterClass {
    /// Starting stats for this class.
    ///
    /// str/agi/end/int/will/spd/lck.
    #[must_use]
    pub const fn base_stats(self) -> CharacterStats {
        match self {
            Self::Warrior => CharacterStats::new(10, 5, 8, 3, 5, 5, 3),
            Self::Rogue => CharacterStats::new(5, 10, 5, 3, 5, 8, 5),
            Self::Mage | Self::Wizard => CharacterStats::new(3, 5, 5, 10, 8, 5, 3),
            Self::Ranger | Self::Monk => CharacterStats::new(5, 8, 5, 5, 5, 8, 5),
            Self::Bard => CharacterStats::new(5, 5, 5, 5, 5, 5, 5),
            Self::Paladin => CharacterStats::new(8, 5, 8, 5, 5, 5, 5),
            Self::Cleric => CharacterStats::new(5, 5, 5, 8, 5, 5, 5),
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
