//! Tunable combat rules

use serde::{Deserialize, Serialize};

/// Dice and thresholds used by initiative and surprise.
///
/// The defaults are the OSRIC values: d10 initiative, d6 surprise, surprised
/// on a 1-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatRules {
    /// Sides on the initiative die
    pub initiative_die: u32,
    /// Sides on the surprise die
    pub surprise_die: u32,
    /// Highest surprise roll that still counts as surprised
    pub surprise_threshold: i32,
}

impl CombatRules {
    pub const OSRIC: CombatRules = CombatRules {
        initiative_die: 10,
        surprise_die: 6,
        surprise_threshold: 2,
    };
}

impl Default for CombatRules {
    fn default() -> Self {
        Self::OSRIC
    }
}
