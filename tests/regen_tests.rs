//! Over-time healing integration tests.
//!
//! Cover the regen allocator's fit rules and the tick-driven life of an
//! active regen: instant component up front, linear restoration per
//! tick, expiry on duration or full health, replacement discarding
//! progress.

use party_kit::{Character, CharacterClass, PotionPool, Recipient, RegenPotion};

fn wounded(name: &str, current: f32, max: f32) -> Character {
    Character::new(name, CharacterClass::Cleric, current, max)
}

// =============================================================================
// Allocation
// =============================================================================

/// The canonical scenario: instant 10 + 50% of max 100 over 10s totals
/// 60, which fits a recipient missing 80. The instant part lands on
/// activation; each 1-second tick restores 5 more.
#[test]
fn test_total_value_fit_and_tick_schedule() {
    let mut pool = PotionPool::new();
    pool.add_regen_potion(RegenPotion::new("Troll Blood", 10.0, 0.5, 10.0));

    let mut party = vec![wounded("Aria", 20.0, 100.0)];
    pool.heal_party_over_time(&mut party);

    assert!(pool.regen_potions().is_empty());
    assert_eq!(party[0].current_health(), 30.0);

    for _ in 0..10 {
        party[0].tick(1.0);
    }
    assert_eq!(party[0].current_health(), 80.0);
    // Duration spent: the regen is gone.
    assert!(party[0].active_regen().is_none());
}

/// Fractional ticks accumulate to the same total as whole ones.
#[test]
fn test_fractional_ticks_accumulate() {
    let mut aria = wounded("Aria", 20.0, 100.0);
    aria.activate_regen(RegenPotion::new("Salve", 0.0, 0.5, 10.0));

    for _ in 0..40 {
        aria.tick(0.25);
    }
    assert!((aria.current_health() - 70.0).abs() < 1e-3);
    assert!(aria.active_regen().is_none());
}

/// Fit testing uses the potion's total value, not just the instant
/// part: a potion whose total overshoots is passed over.
#[test]
fn test_overshooting_total_is_skipped() {
    let mut pool = PotionPool::new();
    // Total on max 100: 10 + 60 = 70 > 40 missing.
    pool.add_regen_potion(RegenPotion::new("Big", 10.0, 0.6, 10.0));
    // Total: 5 + 20 = 25 <= 40 missing.
    pool.add_regen_potion(RegenPotion::new("Small", 5.0, 0.2, 10.0));

    let mut party = vec![wounded("Aria", 60.0, 100.0)];
    pool.heal_party_over_time(&mut party);

    assert_eq!(party[0].active_regen().unwrap().potion().name, "Small");
    assert_eq!(pool.regen_potions().len(), 1);
    assert_eq!(pool.regen_potions()[0].name, "Big");
}

/// With no fit at all, the last remaining potion is applied anyway.
#[test]
fn test_burn_last_regen_when_nothing_fits() {
    let mut pool = PotionPool::new();
    pool.add_regen_potion(RegenPotion::new("Huge", 50.0, 0.9, 10.0));

    let mut party = vec![wounded("Aria", 90.0, 100.0)];
    pool.heal_party_over_time(&mut party);

    assert!(pool.regen_potions().is_empty());
    // Instant 50 clamps at max immediately.
    assert_eq!(party[0].current_health(), 100.0);
}

/// Full-health members receive no regen regardless of pool size.
#[test]
fn test_full_member_skipped() {
    let mut pool = PotionPool::new();
    pool.add_regen_potion(RegenPotion::new("Salve", 5.0, 0.1, 5.0));

    let mut party = vec![wounded("Aria", 100.0, 100.0)];
    pool.heal_party_over_time(&mut party);

    assert_eq!(pool.regen_potions().len(), 1);
    assert!(party[0].active_regen().is_none());
}

// =============================================================================
// Tick Lifecycle
// =============================================================================

/// A regen ends early once the character reaches full health, even
/// with duration left.
#[test]
fn test_regen_ends_at_full_health() {
    let mut aria = wounded("Aria", 95.0, 100.0);
    // 50 over 10s = 5/s against only 5 missing.
    aria.activate_regen(RegenPotion::new("Salve", 0.0, 0.5, 10.0));

    aria.tick(1.0);
    assert_eq!(aria.current_health(), 100.0);
    assert!(aria.active_regen().is_none());

    // Further ticks stay no-ops.
    aria.tick(1.0);
    assert_eq!(aria.current_health(), 100.0);
}

/// A regen expires exactly at its duration boundary.
#[test]
fn test_regen_expires_on_duration() {
    let mut aria = wounded("Aria", 10.0, 100.0);
    // 25 over 4s = 6.25/s.
    aria.activate_regen(RegenPotion::new("Salve", 0.0, 0.25, 4.0));

    aria.tick(2.0);
    assert!(aria.active_regen().is_some());
    aria.tick(2.0);
    assert!(aria.active_regen().is_none());
    assert_eq!(aria.current_health(), 35.0);
}

/// Activating a second regen replaces the first: elapsed progress is
/// discarded and only the second potion's schedule continues.
#[test]
fn test_replacement_discards_remaining_progress() {
    let mut aria = wounded("Aria", 10.0, 100.0);
    // 50 over 8s = 6.25/s.
    aria.activate_regen(RegenPotion::new("First", 0.0, 0.5, 8.0));
    aria.tick(2.0);
    assert_eq!(aria.current_health(), 22.5);
    assert_eq!(aria.active_regen().unwrap().elapsed(), 2.0);

    // 25 over 8s = 3.125/s, plus 4 instant.
    aria.activate_regen(RegenPotion::new("Second", 4.0, 0.25, 8.0));
    let regen = aria.active_regen().unwrap();
    assert_eq!(regen.potion().name, "Second");
    assert_eq!(regen.elapsed(), 0.0);
    assert_eq!(aria.current_health(), 26.5);

    // Remaining ticks run only the second schedule: 8s at 3.125/s.
    for _ in 0..8 {
        aria.tick(1.0);
    }
    assert_eq!(aria.current_health(), 51.5);
    assert!(aria.active_regen().is_none());
}
