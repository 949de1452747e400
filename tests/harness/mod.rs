//! Test harness - fixtures and scripted dice for round scenarios

#![allow(dead_code)]


use osric_combat::combat::{Combatant, Race, Weapon, WeaponMap};
use osric_combat::rng::ScriptedRandom;

/// Uniform draw that lands on `face` of a die with `sides` faces
pub fn face(face: i32, sides: u32) -> f64 {
    (f64::from(face) - 0.5) / f64::from(sides)
}

/// Scripted source producing the given (face, sides) rolls in order
pub fn rolls(faces: &[(i32, u32)]) -> ScriptedRandom {
    ScriptedRandom::new(
        faces
            .iter()
            .map(|&(f, sides)| face(f, sides))
            .collect::<Vec<_>>(),
    )
}

/// Initiative die roll
pub fn d10(f: i32) -> (i32, u32) {
    (f, 10)
}

/// Surprise die roll
pub fn d6(f: i32) -> (i32, u32) {
    (f, 6)
}

pub fn fighter() -> Combatant {
    Combatant::player("fighter-1", "Fighter", Race::Human, Some(-1))
}

/// Elven thief, the quickest of the party
pub fn thief() -> Combatant {
    Combatant::player("thief-1", "Thief", Race::Elf, Some(-2))
}

pub fn wizard() -> Combatant {
    Combatant::player("wizard-1", "Wizard", Race::Human, None)
}

pub fn goblin() -> Combatant {
    Combatant::monster("goblin-1", "Goblin")
}

pub fn orc() -> Combatant {
    Combatant::monster("orc-1", "Orc")
}

pub fn longsword() -> Weapon {
    Weapon::new("Longsword", 5)
}

pub fn dagger() -> Weapon {
    Weapon::new("Dagger", 2)
}

/// Weapons keyed by combatant id
pub fn armed(pairs: &[(&Combatant, Weapon)]) -> WeaponMap {
    pairs
        .iter()
        .map(|(c, w)| (c.id.clone(), w.clone()))
        .collect()
}

/// Ids of combatants in order
pub fn ids<'a>(order: &[&'a Combatant]) -> Vec<&'a str> {
    order.iter().map(|c| c.id.as_str()).collect()
}
