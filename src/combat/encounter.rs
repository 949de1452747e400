//! Encounter files
//!
//! An encounter lists the party, the monsters and the weapons each side has
//! in hand, e.g.
//!
//! ```toml
//! [[party]]
//! id = "thief"
//! name = "Thief"
//! type = "player_character"
//! race = "elf"
//! dexterity_reaction = -2
//!
//! [[monsters]]
//! id = "goblin"
//! name = "Goblin"
//! type = "monster"
//!
//! [party_weapons.thief]
//! name = "Dagger"
//! speed = 2
//! ```

use std::path::Path;

use figment::providers::{Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use super::combatant::{Combatant, WeaponMap};
use super::initiative::InitiativeResult;
use super::order::TurnOrderOutcome;
use super::rules::CombatRules;
use crate::rng::RandomSource;

/// Two opposing sides ready for a round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Encounter {
    pub party: Vec<Combatant>,
    pub monsters: Vec<Combatant>,
    pub party_weapons: WeaponMap,
    pub monster_weapons: WeaponMap,
}

impl Encounter {
    /// Load an encounter from a TOML file
    pub fn load(path: &Path) -> Result<Self, figment::Error> {
        if !path.is_file() {
            return Err(format!("encounter file not found: {}", path.display()).into());
        }
        Figment::from(Toml::file(path)).extract()
    }

    /// Parse an encounter from a TOML string
    pub fn from_toml(source: &str) -> Result<Self, figment::Error> {
        Figment::from(Toml::string(source)).extract()
    }

    /// Resolve one round with the party as side A
    pub fn resolve<R: RandomSource + ?Sized>(
        &self,
        rules: &CombatRules,
        rng: &mut R,
    ) -> TurnOrderOutcome<'_> {
        rules.manage_combat_order(
            rng,
            &self.party,
            &self.monsters,
            Some(&self.party_weapons),
            Some(&self.monster_weapons),
        )
    }

    /// Resolve one round and build a JSON report of it.
    ///
    /// With `individual`, each side's individual initiative ranking is rolled
    /// after the round (party first) and added as `party_initiative` and
    /// `monster_initiative`.
    pub fn report<R: RandomSource + ?Sized>(
        &self,
        rules: &CombatRules,
        rng: &mut R,
        individual: bool,
    ) -> serde_json::Result<Value> {
        let outcome = self.resolve(rules, rng);
        info!(
            "Party {} vs monsters {}, {} combatants act",
            outcome.side_a_initiative,
            outcome.side_b_initiative,
            outcome.order.len()
        );

        let mut report = json!({ "round": serde_json::to_value(&outcome)? });
        if individual {
            report["party_initiative"] = serde_json::to_value(self.party_initiative(rules, rng))?;
            report["monster_initiative"] =
                serde_json::to_value(self.monster_initiative(rules, rng))?;
        }
        Ok(report)
    }

    /// Individual initiative for the party, lowest first
    pub fn party_initiative<R: RandomSource + ?Sized>(
        &self,
        rules: &CombatRules,
        rng: &mut R,
    ) -> Vec<InitiativeResult<'_>> {
        rules.roll_group_initiative(rng, &self.party, Some(&self.party_weapons))
    }

    /// Individual initiative for the monsters, lowest first
    pub fn monster_initiative<R: RandomSource + ?Sized>(
        &self,
        rules: &CombatRules,
        rng: &mut R,
    ) -> Vec<InitiativeResult<'_>> {
        rules.roll_group_initiative(rng, &self.monsters, Some(&self.monster_weapons))
    }
}
