//! Spell definitions.

use serde::{Deserialize, Serialize};

/// What a spell can be aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    SingleTarget,
    Area,
    SelfCast,
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// What a spell does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpellKind {
    Damage,
    Heal,
    Buff,
    Debuff,
}

impl std::fmt::Display for SpellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A single spell entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    pub mana_cost: u32,
    pub power: u32,
    pub target: TargetKind,
    pub kind: SpellKind,
}

impl Spell {
    /// Create a spell from explicit values.
    pub fn new(
        name: impl Into<String>,
        mana_cost: u32,
        power: u32,
        target: TargetKind,
        kind: SpellKind,
    ) -> Self {
        Self {
            name: name.into(),
            mana_cost,
            power,
            target,
            kind,
        }
    }

    /// Fields a keyword search matches against: name, target, kind.
    #[must_use]
    pub fn searchable_fields(&self) -> [String; 3] {
        [
            self.name.clone(),
            self.target.to_string(),
            self.kind.to_string(),
        ]
    }
}

impl std::fmt::Display for Spell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (mana {}, power {}, {}, {})",
            self.name, self.mana_cost, self.power, self.target, self.kind
        )
    }
}
