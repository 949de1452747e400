//! Combat round resolution
//!
//! Implements OSRIC-style round setup:
//! - Individual and group initiative (d10, lower acts first)
//! - Surprise checks (d6, keen races harder to surprise)
//! - Turn order between two opposing sides
//! - Encounter files for resolving rounds outside of code

mod combatant;
mod encounter;
mod initiative;
mod order;
mod rules;
mod surprise;

pub use combatant::{Combatant, CombatantKind, Race, Weapon, WeaponMap};
pub use encounter::Encounter;
pub use initiative::{
    combat_initiative_roll, roll_group_initiative, roll_single_group_initiative, InitiativeResult,
};
pub use order::{manage_combat_order, TurnOrderOutcome};
pub use rules::CombatRules;
pub use surprise::{check_group_surprise, check_surprise};
