//! The generic engine every divination system runs through.
//!
//! A system implements [`Divination`]: given a [`ReadingContext`] (seed,
//! generator, input, environment) it assembles a [`Reading`].
//! [`DivinationEngine`] owns the input and options, derives the seed and
//! calls it. `calculate()` is a single synchronous pass with no I/O and no
//! failure mode.

use std::sync::Arc;

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::Serialize;

use crate::clock::{Clock, SystemClock};
use crate::environment::{EnvironmentData, MoonPhase};
use crate::input::{DivinationInput, QuestionCategory};
use crate::kind::DivinationKind;
use crate::options::{Detail, EngineOptions};
use crate::rng::Lcg;
use crate::seed::generate_seed;
use crate::time_of_day::TimeOfDay;

/// A finished reading.
pub trait Reading: Serialize {
    /// One-paragraph summary of the whole reading.
    fn summary(&self) -> String;

    /// Names of the symbols the reading turned up, in position order.
    fn key_symbols(&self) -> Vec<String>;
}

/// A divination system: static tables plus an assembly function.
pub trait Divination {
    /// Which system this is.
    const KIND: DivinationKind;

    /// What a cast produces.
    type Reading: Reading;

    /// Assemble a reading.
    fn cast(&self, ctx: &mut ReadingContext<'_>) -> Self::Reading;

    /// Short description of the configuration, e.g. the spread name.
    fn configuration_label(&self) -> String {
        Self::KIND.label().to_string()
    }
}

/// Everything a [`Divination`] may read while casting.
pub struct ReadingContext<'a> {
    /// The person's data.
    pub input: &'a DivinationInput,
    /// Environment data (defaulted when none was supplied).
    pub environment: &'a EnvironmentData,
    /// Whether real environment data was supplied.
    pub has_environment: bool,
    /// Engine options.
    pub options: &'a EngineOptions,
    /// The derived seed.
    pub seed: u64,
    /// Generator seeded with [`ReadingContext::seed`].
    pub rng: Lcg,
    /// The instant of the reading.
    pub now: DateTime<Utc>,
    /// Time-of-day bucket of `now` in the configured offset.
    pub time_of_day: TimeOfDay,
    /// Moon phase bucket.
    pub moon_phase: MoonPhase,
}

impl ReadingContext<'_> {
    /// The question category.
    pub fn category(&self) -> QuestionCategory {
        self.input.question_category
    }

    /// Time of day for interpretation text, or `None` at brief detail.
    pub fn text_time(&self) -> Option<TimeOfDay> {
        match self.options.detail {
            Detail::Brief => None,
            Detail::Standard | Detail::Detailed => Some(self.time_of_day),
        }
    }

    /// Whether detailed text was requested.
    pub fn detailed(&self) -> bool {
        self.options.detail == Detail::Detailed
    }

    /// A sub-seed for text variety that does not disturb the generator.
    pub fn variant(&self, salt: u64) -> u64 {
        self.seed.wrapping_add(salt.wrapping_mul(7_919))
    }
}

/// Runs a [`Divination`] over one person's input.
pub struct DivinationEngine<D: Divination> {
    divination: D,
    input: DivinationInput,
    environment: Option<EnvironmentData>,
    options: EngineOptions,
    clock: Arc<dyn Clock>,
}

impl<D: Divination> DivinationEngine<D> {
    /// Create an engine with default options and the system clock.
    pub fn new(divination: D, input: DivinationInput) -> Self {
        Self {
            divination,
            input,
            environment: None,
            options: EngineOptions::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Supply environment data.
    pub fn with_environment(mut self, environment: EnvironmentData) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Supply optional environment data.
    pub fn with_environment_opt(mut self, environment: Option<EnvironmentData>) -> Self {
        self.environment = environment;
        self
    }

    /// Set the options.
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Use a specific clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Use a shared clock.
    pub fn with_shared_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The system configuration.
    pub fn divination(&self) -> &D {
        &self.divination
    }

    /// The input.
    pub fn input(&self) -> &DivinationInput {
        &self.input
    }

    /// The options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// The seed a reading at `now` would use.
    pub fn seed_at(&self, now: DateTime<Utc>) -> u64 {
        match self.options.seed_override {
            Some(seed) => seed,
            None => generate_seed(
                &self.input,
                self.environment.as_ref(),
                now,
                self.options.seed_policy,
                self.options.seed_modulus,
            ),
        }
    }

    /// The seed a reading right now would use.
    pub fn seed(&self) -> u64 {
        self.seed_at(self.clock.now())
    }

    /// Produce a reading.
    pub fn calculate(&self) -> D::Reading {
        let now = self.clock.now();
        let seed = self.seed_at(now);
        let default_env;
        let environment = match &self.environment {
            Some(env) => env,
            None => {
                default_env = EnvironmentData::default();
                &default_env
            }
        };
        let offset = i64::from(self.options.utc_offset_hours.clamp(-12, 14)) * 3600;
        let local_hour = (now + Duration::seconds(offset)).hour();

        let mut ctx = ReadingContext {
            input: &self.input,
            environment,
            has_environment: self.environment.is_some(),
            options: &self.options,
            seed,
            rng: Lcg::new(seed),
            now,
            time_of_day: TimeOfDay::from_hour(local_hour),
            moon_phase: environment.moon_phase(),
        };

        tracing::debug!(
            kind = %D::KIND,
            seed,
            time_of_day = ?ctx.time_of_day,
            "casting reading"
        );
        self.divination.cast(&mut ctx)
    }

    /// Produce a reading as JSON.
    pub fn calculate_json(&self) -> serde_json::Value {
        reading_json(&self.calculate())
    }
}

/// Serialize a reading, logging and yielding `null` if that fails.
pub fn reading_json(reading: &impl Serialize) -> serde_json::Value {
    serde_json::to_value(reading).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "reading did not serialize, emitting null");
        serde_json::Value::Null
    })
}
