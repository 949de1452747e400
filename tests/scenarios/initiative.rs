//! Initiative scenarios

use osric_combat::combat::{
    combat_initiative_roll, roll_group_initiative, roll_single_group_initiative,
};

use crate::harness::{armed, d10, dagger, fighter, goblin, longsword, rolls, thief, wizard};

/// Test: fighter with a longsword and thief with a dagger
#[test]
fn test_individual_rolls() {
    let fighter = fighter();
    let thief = thief();

    let mut rng = rolls(&[d10(5), d10(6)]);
    let fighter_roll = combat_initiative_roll(&mut rng, &fighter, Some(&longsword()));
    let thief_roll = combat_initiative_roll(&mut rng, &thief, Some(&dagger()));

    // 5 - 1 + 5 and 6 - 2 + 2
    assert_eq!(fighter_roll.initiative, 9);
    assert_eq!(thief_roll.initiative, 6);
    assert_eq!(thief_roll.segment_order, thief_roll.initiative);
}

/// Test: monsters have no dexterity adjustment
#[test]
fn test_monster_roll() {
    let goblin = goblin();
    let mut rng = rolls(&[d10(8)]);
    assert_eq!(combat_initiative_roll(&mut rng, &goblin, None).initiative, 8);
}

/// Test: individual initiative ranks the whole party
#[test]
fn test_party_ranking() {
    let party = vec![fighter(), thief(), wizard()];
    let weapons = armed(&[
        (&party[0], longsword()),
        (&party[1], dagger()),
        (&party[2], dagger()),
    ]);
    let mut rng = rolls(&[d10(8), d10(5), d10(9)]);

    let ranking = roll_group_initiative(&mut rng, &party, Some(&weapons));
    let order: Vec<(&str, i32)> = ranking
        .iter()
        .map(|r| (r.roller.id.as_str(), r.initiative))
        .collect();

    assert_eq!(
        order,
        vec![("thief-1", 5), ("wizard-1", 11), ("fighter-1", 12)]
    );
}

/// Test: unarmed members don't count toward the best weapon
#[test]
fn test_group_best_weapon_among_armed() {
    let party = vec![fighter(), wizard()];
    let weapons = armed(&[(&party[0], longsword())]);
    let mut rng = rolls(&[d10(7)]);

    // 7 - 1 (fighter's reaction) + 5 (only weapon in the group)
    assert_eq!(
        roll_single_group_initiative(&mut rng, &party, Some(&weapons)),
        11
    );
}

/// Test: best reaction and best weapon can come from different members
#[test]
fn test_group_mixes_best_modifiers() {
    let party = vec![fighter(), thief()];
    let weapons = armed(&[(&party[0], dagger()), (&party[1], longsword())]);
    let mut rng = rolls(&[d10(4)]);

    // 4 - 2 (thief) + 2 (fighter's dagger)
    assert_eq!(
        roll_single_group_initiative(&mut rng, &party, Some(&weapons)),
        4
    );
    assert_eq!(rng.consumed(), 1);
}

/// Test: an empty side still rolls its die
#[test]
fn test_empty_group() {
    let mut rng = rolls(&[d10(3)]);
    assert_eq!(roll_single_group_initiative(&mut rng, &[], None), 3);
    assert!(roll_group_initiative(&mut rng, &[], None).is_empty());
}
