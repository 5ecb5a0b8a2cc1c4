//! Core domain types: health, stats, classes, characters, sheet loading.
//!
//! This module contains the building blocks the rest of the crate
//! operates on. Hosts construct characters either directly or from
//! data-driven sheets via a [`SheetProvider`].

pub mod character;
pub mod class;
pub mod health;
pub mod sheet;
pub mod stats;

pub use character::Character;
pub use class::CharacterClass;
pub use health::HealthPool;
pub use sheet::{CharacterSheet, RosterError, SheetProvider, SheetRegistry};
pub use stats::{CharacterStats, Loadout, StatModifier};
