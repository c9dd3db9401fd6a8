//! Run any engine by kind.
//!
//! Callers that only know a [`DivinationKind`] at runtime (the CLI, an HTTP
//! layer) go through here. Each engine runs with the configuration in
//! [`EngineConfig`], whose defaults match each engine's own.

use std::sync::Arc;

use serde::Serialize;
use ur_core::engine::{Divination, DivinationEngine, Reading, reading_json};
use ur_core::{Clock, DivinationInput, DivinationKind, EngineOptions, EnvironmentData};

use crate::akashic::Akashic;
use crate::astrology::Astrology;
use crate::aurasoma::AuraSoma;
use crate::celtic::Celtic;
use crate::chakra::ChakraReader;
use crate::fengshui::FengShui;
use crate::iching::{CastingMethod, IChing};
use crate::kabbalah::Kabbalah;
use crate::mayan::Mayan;
use crate::numerology::Numerology;
use crate::runes::{RuneCast, RuneSystem, Runes};
use crate::tarot::{SpreadType, Tarot};

/// Engine-specific settings for a registry cast. Settings for other kinds
/// are ignored.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Tarot spread.
    pub spread: SpreadType,
    /// Tarot cards to use instead of the shuffle's first cards.
    pub card_indices: Vec<usize>,
    /// I Ching casting method.
    pub method: CastingMethod,
    /// Rune row.
    pub rune_system: RuneSystem,
    /// Rune layout.
    pub rune_cast: RuneCast,
}

impl EngineConfig {
    /// Set the tarot spread.
    pub fn with_spread(mut self, spread: SpreadType) -> Self {
        self.spread = spread;
        self
    }

    /// Set explicit tarot card indices.
    pub fn with_card_indices(mut self, indices: Vec<usize>) -> Self {
        self.card_indices = indices;
        self
    }

    /// Set the I Ching casting method.
    pub fn with_method(mut self, method: CastingMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the rune row.
    pub fn with_rune_system(mut self, system: RuneSystem) -> Self {
        self.rune_system = system;
        self
    }

    /// Set the rune layout.
    pub fn with_rune_cast(mut self, cast: RuneCast) -> Self {
        self.rune_cast = cast;
        self
    }
}

/// A finished reading of any kind, already serialised.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastOutcome {
    /// Which system ran.
    pub kind: DivinationKind,
    /// Configuration label, e.g. the spread name.
    pub configuration_label: String,
    /// The reading's summary.
    pub summary: String,
    /// Symbols the reading turned up.
    pub key_symbols: Vec<String>,
    /// The full reading.
    pub reading: serde_json::Value,
}

impl Reading for CastOutcome {
    fn summary(&self) -> String {
        self.summary.clone()
    }

    fn key_symbols(&self) -> Vec<String> {
        self.key_symbols.clone()
    }
}

fn run<D: Divination>(
    divination: D,
    input: DivinationInput,
    environment: Option<EnvironmentData>,
    options: EngineOptions,
    clock: Arc<dyn Clock>,
) -> CastOutcome {
    let configuration_label = divination.configuration_label();
    let reading = DivinationEngine::new(divination, input)
        .with_environment_opt(environment)
        .with_options(options)
        .with_shared_clock(clock)
        .calculate();
    CastOutcome {
        kind: D::KIND,
        configuration_label,
        summary: reading.summary(),
        key_symbols: reading.key_symbols(),
        reading: reading_json(&reading),
    }
}

/// Run `kind` with the given configuration.
pub fn cast_with(
    kind: DivinationKind,
    config: &EngineConfig,
    input: DivinationInput,
    environment: Option<EnvironmentData>,
    options: EngineOptions,
    clock: Arc<dyn Clock>,
) -> CastOutcome {
    tracing::debug!(%kind, "registry cast");
    match kind {
        DivinationKind::Tarot => run(
            Tarot::new(config.spread).with_card_indices(config.card_indices.clone()),
            input,
            environment,
            options,
            clock,
        ),
        DivinationKind::IChing => run(IChing::new(config.method), input, environment, options, clock),
        DivinationKind::Runes => run(
            Runes::new(config.rune_system, config.rune_cast),
            input,
            environment,
            options,
            clock,
        ),
        DivinationKind::Kabbalah => run(Kabbalah, input, environment, options, clock),
        DivinationKind::Astrology => run(Astrology, input, environment, options, clock),
        DivinationKind::Chakra => run(ChakraReader, input, environment, options, clock),
        DivinationKind::FengShui => run(FengShui, input, environment, options, clock),
        DivinationKind::AuraSoma => run(AuraSoma, input, environment, options, clock),
        DivinationKind::Akashic => run(Akashic, input, environment, options, clock),
        DivinationKind::Mayan => run(Mayan, input, environment, options, clock),
        DivinationKind::Celtic => run(Celtic, input, environment, options, clock),
        DivinationKind::Numerology => run(Numerology, input, environment, options, clock),
    }
}

/// Run `kind` with its default configuration and return the reading as JSON.
pub fn cast(
    kind: DivinationKind,
    input: DivinationInput,
    environment: Option<EnvironmentData>,
    options: EngineOptions,
    clock: Arc<dyn Clock>,
) -> serde_json::Value {
    cast_with(kind, &EngineConfig::default(), input, environment, options, clock).reading
}
