//! osric-combat - dice and turn-order kernel for OSRIC-style combat
//!
//! Deterministic dice primitives and the initiative, surprise and turn-order
//! rules built on them. Every roll draws from a caller-supplied
//! [`rng::RandomSource`], so a round replays exactly given the same draws.

pub mod combat;
pub mod dice;
pub mod rng;

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use combat::CombatRules;
use rng::{RandomSource, SeededRandom, ThreadRandom};

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "OSRIC_";

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dice and thresholds for initiative and surprise
    pub rules: CombatRules,
    /// Seed for reproducible rounds (None = system randomness)
    pub seed: Option<u64>,
}

impl Config {
    /// Layered configuration: defaults, then the TOML file if given, then
    /// `OSRIC_*` environment variables (`__` separates nested keys)
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load configuration
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        Self::figment(path).extract()
    }

    /// Replace the configured seed when `seed` is given
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// The random source this configuration asks for
    pub fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(SeededRandom::from_seed(seed)),
            None => Box::new(ThreadRandom),
        }
    }
}
