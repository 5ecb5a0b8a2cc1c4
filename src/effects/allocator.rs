//! Greedy potion allocation across a party.
//!
//! The pool hands out potions recipient by recipient, in party order.
//! Largest potions are considered first and anything fitting inside the
//! recipient's missing health is consumed. A recipient still wounded
//! when the scan ends burns the last remaining potion even if it
//! overheals; that overflow is the strategy's accepted waste.

use log::debug;

use super::potion::{Potion, RegenPotion};

/// Capability to receive healing.
///
/// The allocator treats recipients as opaque: it reads health through
/// the getters and mutates only through [`apply_instant_heal`] and
/// [`activate_regen`]. `Character` implements this; hosts with their
/// own actor types implement it at the seam.
///
/// [`apply_instant_heal`]: Recipient::apply_instant_heal
/// [`activate_regen`]: Recipient::activate_regen
pub trait Recipient {
    /// Current health.
    fn current_health(&self) -> f32;

    /// Maximum health.
    fn max_health(&self) -> f32;

    /// Restore `amount` health immediately, clamped to maximum.
    fn apply_instant_heal(&mut self, amount: f32);

    /// Begin an over-time heal, replacing any active one. The potion's
    /// instant component applies immediately.
    fn activate_regen(&mut self, potion: RegenPotion);

    /// Health still missing: `max - current`.
    fn missing_health(&self) -> f32 {
        self.max_health() - self.current_health()
    }

    /// Whether the recipient needs no healing.
    fn is_full(&self) -> bool {
        self.current_health() >= self.max_health()
    }
}

/// Pool of consumable potions with greedy party-wide allocation.
///
/// ## Example
///
/// ```
/// use party_kit::{Character, CharacterClass, Potion, PotionPool, Recipient};
///
/// let mut pool = PotionPool::new();
/// pool.add_potion(Potion::new("Minor", 30.0));
/// pool.add_potion(Potion::new("Major", 80.0));
///
/// let mut party = vec![Character::new("Aria", CharacterClass::Rogue, 50.0, 100.0)];
/// pool.heal_party(&mut party);
///
/// // 30 fits the 50 missing; the leftover 80 is burned to top up.
/// assert!(party[0].is_full());
/// assert!(pool.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct PotionPool {
    potions: Vec<Potion>,
    regen_potions: Vec<RegenPotion>,
}

impl PotionPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instant potion to the pool.
    pub fn add_potion(&mut self, potion: Potion) {
        self.potions.push(potion);
    }

    /// Add a regen potion to the pool.
    pub fn add_regen_potion(&mut self, potion: RegenPotion) {
        self.regen_potions.push(potion);
    }

    /// Remaining instant potions, in current pool order.
    #[must_use]
    pub fn potions(&self) -> &[Potion] {
        &self.potions
    }

    /// Remaining regen potions, in current pool order.
    #[must_use]
    pub fn regen_potions(&self) -> &[RegenPotion] {
        &self.regen_potions
    }

    /// Check if both pools are exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.potions.is_empty() && self.regen_potions.is_empty()
    }

    /// Distribute instant potions across the party, minimizing waste.
    ///
    /// Potions are sorted descending by healing value (tie order
    /// unspecified), then for each party member in order:
    ///
    /// 1. Members at full health are skipped.
    /// 2. Every potion whose value fits the member's missing health is
    ///    applied and consumed; missing health is re-evaluated after
    ///    each application, and consumed potions are compacted out of
    ///    the pool after the scan so no entry is skipped mid-scan.
    /// 3. A member still wounded after the scan drinks the last
    ///    remaining potion whatever its size; the overflow is wasted.
    ///
    /// An exact fit (value == missing health) counts as a fit. Empty
    /// pool or empty party is a no-op.
    pub fn heal_party<R: Recipient>(&mut self, party: &mut [R]) {
        self.potions
            .sort_unstable_by(|a, b| b.healing_value.total_cmp(&a.healing_value));

        for member in party.iter_mut() {
            debug!(
                "recipient at {}/{} health",
                member.current_health(),
                member.max_health()
            );
            if member.is_full() {
                continue;
            }

            // Mark fits during the scan, compact once afterwards.
            let mut consumed = vec![false; self.potions.len()];
            for (index, potion) in self.potions.iter().enumerate() {
                if potion.healing_value <= member.missing_health() {
                    member.apply_instant_heal(potion.healing_value);
                    consumed[index] = true;
                }
            }
            let mut index = 0;
            self.potions.retain(|_| {
                let keep = !consumed[index];
                index += 1;
                keep
            });

            // Still wounded with potions left: burn the smallest
            // remaining one, accepting the overflow.
            if !member.is_full() {
                if let Some(potion) = self.potions.pop() {
                    debug!("burning `{}` on a partial heal", potion.name);
                    member.apply_instant_heal(potion.healing_value);
                }
            }
        }
    }

    /// Distribute regen potions across the party.
    ///
    /// Same shape as [`heal_party`], with two differences inherited
    /// from the effect being durational: the fit test uses
    /// [`RegenPotion::total_healing_value`] against the member's max
    /// health, and the first fitting potion ends the scan for that
    /// member - a recipient runs at most one regen, so stacking more
    /// fits onto them would discard progress.
    ///
    /// The pool is sorted descending by instant component.
    ///
    /// [`heal_party`]: PotionPool::heal_party
    pub fn heal_party_over_time<R: Recipient>(&mut self, party: &mut [R]) {
        self.regen_potions
            .sort_unstable_by(|a, b| b.instant_healing.total_cmp(&a.instant_healing));

        for member in party.iter_mut() {
            debug!(
                "recipient at {}/{} health",
                member.current_health(),
                member.max_health()
            );
            if member.is_full() {
                continue;
            }

            let missing = member.missing_health();
            let fit = self
                .regen_potions
                .iter()
                .position(|p| p.total_healing_value(member.max_health()) <= missing);

            if let Some(index) = fit {
                let potion = self.regen_potions.remove(index);
                member.activate_regen(potion);
                continue;
            }

            if let Some(potion) = self.regen_potions.pop() {
                debug!("burning `{}` on a partial heal", potion.name);
                member.activate_regen(potion);
            }
        }
    }
}
