//! Turn order for a combat round
//!
//! Resolves a round between two opposing sides in five steps:
//! 1. One shared initiative die per side (A first, then B)
//! 2. A surprise check for every combatant (side A in order, then side B)
//! 3. The side with the lower initiative acts first; on a tie the sides
//!    alternate one combatant at a time, starting with side A
//! 4. Surprised combatants are dropped from the action order
//! 5. Everything is reported, surprised combatants included

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::combatant::{Combatant, WeaponMap};
use super::rules::CombatRules;
use crate::rng::RandomSource;

/// Result of resolving one combat round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnOrderOutcome<'a> {
    /// Combatants that act this round, in order
    pub order: Vec<&'a Combatant>,
    pub side_a_initiative: i32,
    pub side_b_initiative: i32,
    /// Surprise outcome for every combatant on both sides, by id
    pub surprised: HashMap<String, bool>,
}

impl TurnOrderOutcome<'_> {
    /// Whether the combatant with `id` lost this round to surprise
    pub fn is_surprised(&self, id: &str) -> bool {
        self.surprised.get(id).copied().unwrap_or(false)
    }
}

/// Interleave two sides by index: `a[0], b[0], a[1], b[1], ...`
fn alternate<'a>(side_a: &'a [Combatant], side_b: &'a [Combatant]) -> Vec<&'a Combatant> {
    let mut order = Vec::with_capacity(side_a.len() + side_b.len());
    for i in 0..side_a.len().max(side_b.len()) {
        if let Some(a) = side_a.get(i) {
            order.push(a);
        }
        if let Some(b) = side_b.get(i) {
            order.push(b);
        }
    }
    order
}

impl CombatRules {
    /// Resolve initiative, surprise and action order for one round.
    ///
    /// Ids must be unique across both sides; a side B combatant sharing an id
    /// with a side A combatant overwrites its surprise entry.
    pub fn manage_combat_order<'a, R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        side_a: &'a [Combatant],
        side_b: &'a [Combatant],
        weapons_a: Option<&WeaponMap>,
        weapons_b: Option<&WeaponMap>,
    ) -> TurnOrderOutcome<'a> {
        let side_a_initiative = self.roll_single_group_initiative(rng, side_a, weapons_a);
        let side_b_initiative = self.roll_single_group_initiative(rng, side_b, weapons_b);

        let surprised_a = self.check_group_surprise(rng, side_a, 0);
        let surprised_b = self.check_group_surprise(rng, side_b, 0);

        let mut surprised = HashMap::with_capacity(side_a.len() + side_b.len());
        for (entity, &flag) in side_a.iter().zip(&surprised_a) {
            surprised.insert(entity.id.clone(), flag);
        }
        for (entity, &flag) in side_b.iter().zip(&surprised_b) {
            surprised.insert(entity.id.clone(), flag);
        }

        let base_order: Vec<&Combatant> = if side_a_initiative < side_b_initiative {
            side_a.iter().chain(side_b).collect()
        } else if side_b_initiative < side_a_initiative {
            side_b.iter().chain(side_a).collect()
        } else {
            alternate(side_a, side_b)
        };

        let order: Vec<&Combatant> = base_order
            .into_iter()
            .filter(|entity| !surprised.get(&entity.id).copied().unwrap_or(false))
            .collect();

        debug!(
            "round resolved: side A {} vs side B {}, {} of {} act",
            side_a_initiative,
            side_b_initiative,
            order.len(),
            side_a.len() + side_b.len()
        );

        TurnOrderOutcome {
            order,
            side_a_initiative,
            side_b_initiative,
            surprised,
        }
    }
}

/// Resolve one round under OSRIC rules
pub fn manage_combat_order<'a, R: RandomSource + ?Sized>(
    rng: &mut R,
    side_a: &'a [Combatant],
    side_b: &'a [Combatant],
    weapons_a: Option<&WeaponMap>,
    weapons_b: Option<&WeaponMap>,
) -> TurnOrderOutcome<'a> {
    CombatRules::OSRIC.manage_combat_order(rng, side_a, side_b, weapons_a, weapons_b)
}
