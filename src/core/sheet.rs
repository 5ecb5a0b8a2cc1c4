//! Data-driven character definitions.
//!
//! Hosts author character sheets as data (JSON in practice) and hand the
//! crate a [`SheetProvider`] to resolve them by key. A missing or
//! malformed sheet is a [`RosterError`] for the caller to handle, not a
//! fatal assert.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::class::CharacterClass;

/// Errors raised while building characters from sheet data.
#[derive(Debug, Error)]
pub enum RosterError {
    /// No sheet registered under the requested key.
    #[error("no character sheet registered for `{0}`")]
    MissingSheet(String),

    /// A sheet exists but its data cannot produce a valid character.
    #[error("invalid sheet `{name}`: {reason}")]
    InvalidSheet { name: String, reason: String },

    /// Sheet data failed to parse.
    #[error("malformed sheet data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Static character definition.
///
/// The unchanging data a character is built from: display name, class,
/// and starting health values. Runtime state (active regens, equipped
/// gear) lives on `Character`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub name: String,
    pub class: CharacterClass,
    pub current_health: f32,
    pub max_health: f32,
}

impl CharacterSheet {
    /// Create a sheet from explicit values.
    pub fn new(
        name: impl Into<String>,
        class: CharacterClass,
        current_health: f32,
        max_health: f32,
    ) -> Self {
        Self {
            name: name.into(),
            class,
            current_health,
            max_health,
        }
    }

    /// Check the sheet can produce a valid character.
    ///
    /// Max health must be positive and current health within `[0, max]`.
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.max_health <= 0.0 {
            return Err(RosterError::InvalidSheet {
                name: self.name.clone(),
                reason: format!("max health must be positive, got {}", self.max_health),
            });
        }
        if self.current_health < 0.0 || self.current_health > self.max_health {
            return Err(RosterError::InvalidSheet {
                name: self.name.clone(),
                reason: format!(
                    "current health {} outside [0, {}]",
                    self.current_health, self.max_health
                ),
            });
        }
        Ok(())
    }
}

/// Capability to resolve character sheets by key.
///
/// Hosts can back this with anything from a static table to an asset
/// database queried upfront. [`SheetRegistry`] is the in-memory
/// implementation.
pub trait SheetProvider {
    /// Look up a sheet by key. `None` if no such sheet exists.
    fn sheet(&self, key: &str) -> Option<&CharacterSheet>;
}

/// In-memory sheet store keyed by name.
///
/// ## Example
///
/// ```
/// use party_kit::{CharacterClass, CharacterSheet, SheetProvider, SheetRegistry};
///
/// let mut registry = SheetRegistry::new();
/// registry.register("aria", CharacterSheet::new("Aria", CharacterClass::Rogue, 40.0, 90.0));
///
/// assert!(registry.sheet("aria").is_some());
/// assert!(registry.sheet("borin").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SheetRegistry {
    sheets: FxHashMap<String, CharacterSheet>,
}

impl SheetRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a registry from a JSON map of key -> sheet.
    pub fn from_json(data: &str) -> Result<Self, RosterError> {
        let sheets: FxHashMap<String, CharacterSheet> = serde_json::from_str(data)?;
        Ok(Self { sheets })
    }

    /// Register a sheet under a key, replacing any previous entry.
    pub fn register(&mut self, key: impl Into<String>, sheet: CharacterSheet) {
        self.sheets.insert(key.into(), sheet);
    }

    /// Number of registered sheets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Iterate over registered keys and sheets.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CharacterSheet)> {
        self.sheets.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl SheetProvider for SheetRegistry {
    fn sheet(&self, key: &str) -> Option<&CharacterSheet> {
        self.sheets.get(key)
    }
}
