//! Seed derivation from personal and environmental data.
//!
//! A seed is the Euclidean remainder of
//! `birth_ms + name_sum + question_sum + clock_ms + environment` by the
//! modulus (1 000 000 unless configured). Character sums use UTF-16 code
//! units so Japanese names sum the same way a browser would.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::environment::EnvironmentData;
use crate::error::UranaiError;
use crate::input::DivinationInput;

/// Default seed modulus.
pub const DEFAULT_SEED_MODULUS: u64 = 1_000_000;

/// Whether the wall clock feeds the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedPolicy {
    /// Same input and environment always give the same seed.
    #[default]
    Deterministic,
    /// The current epoch milliseconds are added, so every call differs.
    Session,
}

impl FromStr for SeedPolicy {
    type Err = UranaiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deterministic" | "fixed" => Ok(Self::Deterministic),
            "session" | "clock" | "now" => Ok(Self::Session),
            _ => Err(UranaiError::UnknownSeedPolicy(s.to_string())),
        }
    }
}

/// The individual terms that were summed into a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedComponents {
    /// Birth moment in epoch milliseconds (0 when unknown).
    pub birth_ms: i64,
    /// UTF-16 code unit sum of the full name.
    pub name_sum: u64,
    /// UTF-16 code unit sum of the question.
    pub question_sum: u64,
    /// Wall-clock epoch milliseconds (0 under [`SeedPolicy::Deterministic`]).
    pub clock_ms: i64,
    /// Environment factor, `floor(lunar phase × 1000)`.
    pub environment: u64,
}

impl SeedComponents {
    /// Collect the seed terms for an input.
    pub fn collect(
        input: &DivinationInput,
        environment: Option<&EnvironmentData>,
        now: DateTime<Utc>,
        policy: SeedPolicy,
    ) -> Self {
        Self {
            birth_ms: input.birth_timestamp_ms(),
            name_sum: char_code_sum(&input.full_name),
            question_sum: char_code_sum(input.question_text()),
            clock_ms: match policy {
                SeedPolicy::Deterministic => 0,
                SeedPolicy::Session => now.timestamp_millis(),
            },
            environment: environment.map_or(0, EnvironmentData::lunar_factor),
        }
    }

    /// Fold the terms into a seed in `0..modulus`. A zero modulus means the default.
    pub fn fold(&self, modulus: u64) -> u64 {
        let modulus = if modulus == 0 {
            DEFAULT_SEED_MODULUS
        } else {
            modulus
        };
        let total = i128::from(self.birth_ms)
            + i128::from(self.name_sum)
            + i128::from(self.question_sum)
            + i128::from(self.clock_ms)
            + i128::from(self.environment);
        total.rem_euclid(i128::from(modulus)) as u64
    }
}

/// Sum of UTF-16 code units; empty strings sum to 0.
pub fn char_code_sum(s: &str) -> u64 {
    s.encode_utf16().map(u64::from).sum()
}

/// Derive the seed for a reading.
pub fn generate_seed(
    input: &DivinationInput,
    environment: Option<&EnvironmentData>,
    now: DateTime<Utc>,
    policy: SeedPolicy,
    modulus: u64,
) -> u64 {
    let components = SeedComponents::collect(input, environment, now, policy);
    let seed = components.fold(modulus);
    tracing::debug!(?components, seed, "derived seed");
    seed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn epoch() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(0).unwrap()
    }

    #[test]
    fn char_code_sum_ascii_and_japanese() {
        assert_eq!(char_code_sum(""), 0);
        assert_eq!(char_code_sum("AB"), 65 + 66);
        // 山 U+5C71, 田 U+7530
        assert_eq!(char_code_sum("山田"), 0x5C71 + 0x7530);
        // Astral characters count as two surrogate units.
        assert_eq!(char_code_sum("𝄞"), 0xD834 + 0xDD1E);
    }

    #[test]
    fn seed_of_empty_input_is_zero() {
        let input = DivinationInput::default();
        let seed = generate_seed(
            &input,
            None,
            epoch(),
            SeedPolicy::Deterministic,
            DEFAULT_SEED_MODULUS,
        );
        assert_eq!(seed, 0);
    }

    #[test]
    fn seed_sums_all_terms() {
        let input = DivinationInput::new("AB")
            .with_birth_date(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap())
            .with_question("C");
        let mut env = EnvironmentData::default();
        env.lunar.phase = 0.5;
        let seed = generate_seed(
            &input,
            Some(&env),
            epoch(),
            SeedPolicy::Deterministic,
            DEFAULT_SEED_MODULUS,
        );
        assert_eq!(seed, 65 + 66 + 67 + 500);
    }

    #[test]
    fn deterministic_policy_ignores_clock() {
        let input = DivinationInput::new("山田太郎").with_birth_date_str("1990-05-15");
        let a = generate_seed(&input, None, epoch(), SeedPolicy::Deterministic, 0);
        let b = generate_seed(&input, None, Utc::now(), SeedPolicy::Deterministic, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn session_policy_uses_clock() {
        let input = DivinationInput::new("山田太郎");
        let t1 = DateTime::from_timestamp_millis(1_000).unwrap();
        let t2 = DateTime::from_timestamp_millis(2_000).unwrap();
        let a = generate_seed(&input, None, t1, SeedPolicy::Session, 0);
        let b = generate_seed(&input, None, t2, SeedPolicy::Session, 0);
        assert_eq!((b + DEFAULT_SEED_MODULUS - a) % DEFAULT_SEED_MODULUS, 1_000);
    }

    #[test]
    fn negative_totals_wrap_euclidean() {
        let components = SeedComponents {
            birth_ms: -1,
            ..SeedComponents::default()
        };
        assert_eq!(components.fold(1_000_000), 999_999);
    }

    #[test]
    fn seed_is_below_modulus() {
        let input = DivinationInput::new("x".repeat(5000)).with_birth_date_str("2099-12-31");
        let seed = generate_seed(&input, None, epoch(), SeedPolicy::Session, 97);
        assert!(seed < 97);
    }

    #[test]
    fn different_name_changes_seed() {
        let a = DivinationInput::new("山田太郎");
        let b = DivinationInput::new("山田花子");
        let sa = generate_seed(&a, None, epoch(), SeedPolicy::Deterministic, 0);
        let sb = generate_seed(&b, None, epoch(), SeedPolicy::Deterministic, 0);
        assert_ne!(sa, sb);
    }

    #[test]
    fn seed_policy_parse() {
        assert_eq!(
            "session".parse::<SeedPolicy>().unwrap(),
            SeedPolicy::Session
        );
        assert_eq!(
            "Deterministic".parse::<SeedPolicy>().unwrap(),
            SeedPolicy::Deterministic
        );
        assert!("random".parse::<SeedPolicy>().is_err());
    }
}
