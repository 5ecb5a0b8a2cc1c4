//! Healing effects and their greedy allocation.
//!
//! Two consumable variants:
//! - [`Potion`]: a fixed amount of instant healing
//! - [`RegenPotion`]: an instant component plus a percentage of max
//!   health restored linearly over a duration
//!
//! [`PotionPool`] holds both and distributes them across a party via
//! the greedy fit-then-burn-the-last strategy. Anything implementing
//! [`Recipient`] can be healed; in-flight regens are [`ActiveRegen`]
//! timers owned by the recipient and advanced by the host's frame
//! clock.

mod allocator;
mod potion;
mod regen;

pub use allocator::{PotionPool, Recipient};
pub use potion::{Potion, RegenPotion};
pub use regen::ActiveRegen;
