//! Surprise scenarios

use osric_combat::combat::{check_group_surprise, check_surprise, CombatRules, Race};

use crate::harness::{d6, fighter, goblin, orc, rolls, thief};

/// Test: elves are surprised only on a 1
#[test]
fn test_elf_keen_senses() {
    let thief = thief();

    let mut rng = rolls(&[d6(2)]);
    assert!(!check_surprise(&mut rng, &thief, 0));

    let mut rng = rolls(&[d6(1)]);
    assert!(check_surprise(&mut rng, &thief, 0));
}

/// Test: humans and monsters are surprised on a 1 or 2
#[test]
fn test_ordinary_threshold() {
    let mut rng = rolls(&[d6(2), d6(2), d6(3)]);
    assert!(check_surprise(&mut rng, &fighter(), 0));
    assert!(check_surprise(&mut rng, &goblin(), 0));
    assert!(!check_surprise(&mut rng, &goblin(), 0));
}

/// Test: an elven monster is as keen as an elven character
#[test]
fn test_keen_monster() {
    let scout = goblin().with_race(Race::HalfElf);
    let mut rng = rolls(&[d6(2)]);
    assert!(!check_surprise(&mut rng, &scout, 0));
}

/// Test: circumstances widen or narrow the surprised range
#[test]
fn test_circumstance_modifier() {
    let thief = thief();

    // Ambush: elf surprised on 1-2
    let mut rng = rolls(&[d6(2)]);
    assert!(check_surprise(&mut rng, &thief, 1));

    // Alert: human surprised on 1 only
    let mut rng = rolls(&[d6(2)]);
    assert!(!check_surprise(&mut rng, &fighter(), -1));
}

/// Test: thresholds clamp to the faces of the die
#[test]
fn test_threshold_clamps() {
    let rules = CombatRules::OSRIC;
    assert_eq!(rules.surprise_threshold_for(&fighter(), 10), 6);
    assert_eq!(rules.surprise_threshold_for(&thief(), -10), 0);

    let mut rng = rolls(&[d6(6)]);
    assert!(check_surprise(&mut rng, &fighter(), 10));
    let mut rng = rolls(&[d6(1)]);
    assert!(!check_surprise(&mut rng, &thief(), -10));
}

/// Test: one die per combatant, in input order
#[test]
fn test_group_in_order() {
    let group = vec![fighter(), thief(), goblin(), orc()];
    let mut rng = rolls(&[d6(2), d6(2), d6(1), d6(5)]);

    assert_eq!(
        check_group_surprise(&mut rng, &group, 0),
        vec![true, false, true, false]
    );
    assert_eq!(rng.consumed(), 4);
}

/// Test: a wider surprise die changes the odds
#[test]
fn test_custom_surprise_die() {
    let rules = CombatRules {
        surprise_die: 10,
        surprise_threshold: 3,
        ..CombatRules::OSRIC
    };
    let mut rng = rolls(&[(3, 10), (3, 10)]);
    assert!(rules.check_surprise(&mut rng, &fighter(), 0));
    assert!(!rules.check_surprise(&mut rng, &thief(), 0));
}
