//! Initiative
//!
//! Lower scores act first. A score is one initiative die plus the roller's
//! dexterity reaction adjustment (player characters only) plus the speed
//! factor of the weapon in hand.
//!
//! Two resolution modes coexist:
//! - Individual: every combatant rolls its own die ([`roll_group_initiative`])
//! - Group: one die for the whole side, adjusted by the best modifiers found
//!   in the group ([`roll_single_group_initiative`])

use serde::Serialize;
use tracing::debug;

use super::combatant::{Combatant, Weapon, WeaponMap};
use super::rules::CombatRules;
use crate::dice::roll;
use crate::rng::RandomSource;

/// One combatant's initiative for the round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitiativeResult<'a> {
    /// Who rolled
    pub roller: &'a Combatant,
    /// Die plus adjustments
    pub initiative: i32,
    /// Filled in by the surprise check, never by the initiative roll
    pub surprise: bool,
    /// Mirrors `initiative` for sequencing within the round
    pub segment_order: i32,
}

impl CombatRules {
    /// Roll initiative for a single combatant
    pub fn combat_initiative_roll<'a, R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        entity: &'a Combatant,
        weapon: Option<&Weapon>,
    ) -> InitiativeResult<'a> {
        let base_roll = roll(rng, self.initiative_die, 0);
        let dexterity = entity.dexterity_reaction().unwrap_or(0);
        let speed = weapon.map_or(0, Weapon::speed_factor);

        let initiative = base_roll.saturating_add(dexterity).saturating_add(speed);

        InitiativeResult {
            roller: entity,
            initiative,
            surprise: false,
            segment_order: initiative,
        }
    }

    /// Roll individual initiative for every combatant, one die each, and
    /// return the results lowest first. Ties keep input order.
    pub fn roll_group_initiative<'a, R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        entities: &'a [Combatant],
        weapons: Option<&WeaponMap>,
    ) -> Vec<InitiativeResult<'a>> {
        let mut results = Vec::with_capacity(entities.len());
        for entity in entities {
            let weapon = weapons.and_then(|w| w.get(&entity.id));
            results.push(self.combat_initiative_roll(rng, entity, weapon));
        }

        results.sort_by_key(|r| r.initiative);
        results
    }

    /// Roll one initiative die for a whole side.
    ///
    /// The side uses the lowest dexterity reaction adjustment among its
    /// members (0 if none is lower) and the lowest speed factor among the
    /// weapons assigned to its members (0 if none are assigned).
    pub fn roll_single_group_initiative<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        entities: &[Combatant],
        weapons: Option<&WeaponMap>,
    ) -> i32 {
        let base_roll = roll(rng, self.initiative_die, 0);

        let best_reaction = entities
            .iter()
            .filter_map(Combatant::dexterity_reaction)
            .fold(0, i32::min);

        let best_speed = weapons
            .map(|w| {
                entities
                    .iter()
                    .filter_map(|e| w.get(&e.id))
                    .map(Weapon::speed_factor)
                    .min()
                    .unwrap_or(0)
            })
            .unwrap_or(0);

        let initiative = base_roll
            .saturating_add(best_reaction)
            .saturating_add(best_speed);

        debug!(
            "group of {} rolled {} (reaction {}, speed {}) for initiative {}",
            entities.len(),
            base_roll,
            best_reaction,
            best_speed,
            initiative
        );

        initiative
    }
}

/// Roll initiative for a single combatant under OSRIC rules
pub fn combat_initiative_roll<'a, R: RandomSource + ?Sized>(
    rng: &mut R,
    entity: &'a Combatant,
    weapon: Option<&Weapon>,
) -> InitiativeResult<'a> {
    CombatRules::OSRIC.combat_initiative_roll(rng, entity, weapon)
}

/// Roll individual initiative for a group under OSRIC rules
pub fn roll_group_initiative<'a, R: RandomSource + ?Sized>(
    rng: &mut R,
    entities: &'a [Combatant],
    weapons: Option<&WeaponMap>,
) -> Vec<InitiativeResult<'a>> {
    CombatRules::OSRIC.roll_group_initiative(rng, entities, weapons)
}

/// Roll a single shared initiative for a side under OSRIC rules
pub fn roll_single_group_initiative<R: RandomSource + ?Sized>(
    rng: &mut R,
    entities: &[Combatant],
    weapons: Option<&WeaponMap>,
) -> i32 {
    CombatRules::OSRIC.roll_single_group_initiative(rng, entities, weapons)
}
