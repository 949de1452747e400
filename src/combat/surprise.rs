//! Surprise checks
//!
//! Each combatant rolls the surprise die and is surprised on a roll at or
//! below its threshold. Keen races lower the threshold by one; circumstance
//! modifiers widen (positive) or narrow (negative) the surprised range.

use tracing::trace;

use super::combatant::Combatant;
use super::rules::CombatRules;
use crate::dice::{effective_sides, roll};
use crate::rng::RandomSource;

impl CombatRules {
    /// Highest roll at which `entity` counts as surprised, clamped to the
    /// faces of the surprise die
    pub fn surprise_threshold_for(&self, entity: &Combatant, circumstance_modifier: i32) -> i32 {
        let mut threshold = self.surprise_threshold;
        if entity.race().is_some_and(|race| race.is_keen()) {
            threshold = threshold.saturating_sub(1);
        }
        threshold = threshold.saturating_add(circumstance_modifier);

        let faces = i32::try_from(effective_sides(self.surprise_die)).unwrap_or(i32::MAX);
        threshold.clamp(0, faces)
    }

    /// Roll the surprise die for one combatant
    pub fn check_surprise<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        entity: &Combatant,
        circumstance_modifier: i32,
    ) -> bool {
        let surprise_roll = roll(rng, self.surprise_die, 0);
        let threshold = self.surprise_threshold_for(entity, circumstance_modifier);
        let surprised = surprise_roll <= threshold;

        trace!(
            "{} rolled {} against {} for surprise: {}",
            entity.id,
            surprise_roll,
            threshold,
            surprised
        );

        surprised
    }

    /// Check surprise for every combatant, one die each, in input order
    pub fn check_group_surprise<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        entities: &[Combatant],
        circumstance_modifier: i32,
    ) -> Vec<bool> {
        let mut results = Vec::with_capacity(entities.len());
        for entity in entities {
            results.push(self.check_surprise(rng, entity, circumstance_modifier));
        }
        results
    }
}

/// Check surprise for one combatant under OSRIC rules
pub fn check_surprise<R: RandomSource + ?Sized>(
    rng: &mut R,
    entity: &Combatant,
    circumstance_modifier: i32,
) -> bool {
    CombatRules::OSRIC.check_surprise(rng, entity, circumstance_modifier)
}

/// Check surprise for a group under OSRIC rules
pub fn check_group_surprise<R: RandomSource + ?Sized>(
    rng: &mut R,
    entities: &[Combatant],
    circumstance_modifier: i32,
) -> Vec<bool> {
    CombatRules::OSRIC.check_group_surprise(rng, entities, circumstance_modifier)
}
