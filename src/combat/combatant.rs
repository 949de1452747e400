//! Combatants and weapons as seen by the initiative and surprise rules
//!
//! Only the fields the round resolver reads are modeled here: a stable id,
//! a display name, the dexterity reaction adjustment of player characters,
//! an optional race, and weapon speed factors.

use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Weapons keyed by the id of the combatant wielding them
pub type WeaponMap = HashMap<String, Weapon>;

/// Character and monster races
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Race {
    #[default]
    Human,
    Dwarf,
    Elf,
    Gnome,
    HalfElf,
    Halfling,
    HalfOrc,
    /// Anything the rules don't model
    Unknown,
}

impl Race {
    /// Parse a race name, falling back to [`Race::Unknown`]
    pub fn parse(s: &str) -> Race {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();

        match normalized.as_str() {
            "human" => Race::Human,
            "dwarf" => Race::Dwarf,
            "elf" => Race::Elf,
            "gnome" => Race::Gnome,
            "halfelf" => Race::HalfElf,
            "halfling" => Race::Halfling,
            "halforc" => Race::HalfOrc,
            _ => Race::Unknown,
        }
    }

    /// Elves and half-elves are harder to surprise
    pub fn is_keen(self) -> bool {
        matches!(self, Race::Elf | Race::HalfElf)
    }
}

impl FromStr for Race {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Race::parse(s))
    }
}

impl From<String> for Race {
    fn from(s: String) -> Self {
        Race::parse(&s)
    }
}

impl From<Race> for String {
    fn from(race: Race) -> Self {
        race.to_string()
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Race::Human => "Human",
            Race::Dwarf => "Dwarf",
            Race::Elf => "Elf",
            Race::Gnome => "Gnome",
            Race::HalfElf => "Half-Elf",
            Race::Halfling => "Halfling",
            Race::HalfOrc => "Half-Orc",
            Race::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

/// What kind of entity a combatant is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CombatantKind {
    PlayerCharacter {
        #[serde(default)]
        race: Race,
        /// Dexterity reaction adjustment (lower is better)
        #[serde(default)]
        dexterity_reaction: Option<i32>,
    },
    Monster {
        #[serde(default)]
        race: Option<Race>,
    },
}

/// A participant in a combat round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    /// Stable id, unique across both sides of a round
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: CombatantKind,
}

impl Combatant {
    /// Create a player character
    pub fn player(
        id: impl Into<String>,
        name: impl Into<String>,
        race: Race,
        dexterity_reaction: Option<i32>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: CombatantKind::PlayerCharacter {
                race,
                dexterity_reaction,
            },
        }
    }

    /// Create a monster with no race
    pub fn monster(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: CombatantKind::Monster { race: None },
        }
    }

    /// Set the race
    pub fn with_race(mut self, new_race: Race) -> Self {
        match &mut self.kind {
            CombatantKind::PlayerCharacter { race, .. } => *race = new_race,
            CombatantKind::Monster { race } => *race = Some(new_race),
        }
        self
    }

    /// Dexterity reaction adjustment, if this kind of combatant has one
    pub fn dexterity_reaction(&self) -> Option<i32> {
        match self.kind {
            CombatantKind::PlayerCharacter {
                dexterity_reaction, ..
            } => dexterity_reaction,
            CombatantKind::Monster { .. } => None,
        }
    }

    /// Race, if known
    pub fn race(&self) -> Option<Race> {
        match self.kind {
            CombatantKind::PlayerCharacter { race, .. } => Some(race),
            CombatantKind::Monster { race } => race,
        }
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// A weapon's contribution to initiative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    /// Speed factor (lower acts sooner)
    pub speed: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, speed: u32) -> Self {
        Self {
            name: name.into(),
            speed,
        }
    }

    /// Speed factor as an initiative adjustment
    pub fn speed_factor(&self) -> i32 {
        i32::try_from(self.speed).unwrap_or(i32::MAX)
    }
}
