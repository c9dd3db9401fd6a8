//! Options shared by every engine.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UranaiError;
use crate::seed::{DEFAULT_SEED_MODULUS, SeedPolicy};

/// How much text a reading carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Detail {
    /// Omits time-of-day lines.
    Brief,
    /// The default.
    #[default]
    Standard,
    /// Adds per-position lines to the summary.
    Detailed,
}

impl FromStr for Detail {
    type Err = UranaiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "brief" | "terse" => Ok(Self::Brief),
            "standard" | "normal" => Ok(Self::Standard),
            "detailed" | "verbose" => Ok(Self::Detailed),
            _ => Err(UranaiError::InvalidOption(format!("unknown detail level: {s}"))),
        }
    }
}

/// Engine-independent options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EngineOptions {
    /// Whether the wall clock feeds the seed.
    pub seed_policy: SeedPolicy,
    /// Use this seed instead of deriving one.
    pub seed_override: Option<u64>,
    /// Seed modulus.
    pub seed_modulus: u64,
    /// Text detail level.
    pub detail: Detail,
    /// Offset from UTC, in hours, used to decide the time of day.
    pub utc_offset_hours: i32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            seed_policy: SeedPolicy::Deterministic,
            seed_override: None,
            seed_modulus: DEFAULT_SEED_MODULUS,
            detail: Detail::Standard,
            utc_offset_hours: 9,
        }
    }
}

impl EngineOptions {
    /// Set the seed policy.
    pub fn with_seed_policy(mut self, policy: SeedPolicy) -> Self {
        self.seed_policy = policy;
        self
    }

    /// Fix the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed_override = Some(seed);
        self
    }

    /// Set the seed modulus (0 means the default).
    pub fn with_seed_modulus(mut self, modulus: u64) -> Self {
        self.seed_modulus = if modulus == 0 {
            DEFAULT_SEED_MODULUS
        } else {
            modulus
        };
        self
    }

    /// Set the detail level.
    pub fn with_detail(mut self, detail: Detail) -> Self {
        self.detail = detail;
        self
    }

    /// Set the UTC offset in hours (clamped to -12..=14).
    pub fn with_utc_offset_hours(mut self, hours: i32) -> Self {
        self.utc_offset_hours = hours.clamp(-12, 14);
        self
    }
}
