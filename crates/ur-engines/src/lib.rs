//! The twelve Uranai divination engines.
//!
//! Each system implements [`ur_core::Divination`] over its own static tables
//! and has an `XxxEngine` alias for `DivinationEngine<Xxx>`. The [`registry`]
//! runs any of them by [`ur_core::DivinationKind`] and returns JSON.

pub mod akashic;
pub mod astrology;
pub mod aurasoma;
pub mod celtic;
pub mod chakra;
pub mod fengshui;
pub mod iching;
pub mod kabbalah;
pub mod mayan;
pub mod numerology;
pub mod registry;
pub mod runes;
pub mod tarot;

pub use akashic::{Akashic, AkashicEngine, AkashicReading};
pub use astrology::{Astrology, AstrologyEngine, AstrologyReading};
pub use aurasoma::{AuraSoma, AuraSomaEngine, AuraSomaReading};
pub use celtic::{Celtic, CelticEngine, CelticReading};
pub use chakra::{ChakraEngine, ChakraReader, ChakraReading};
pub use fengshui::{FengShui, FengShuiEngine, FengShuiReading};
pub use iching::{CastingMethod, IChing, IChingEngine, IChingReading};
pub use kabbalah::{Kabbalah, KabbalahEngine, KabbalahReading};
pub use mayan::{Mayan, MayanEngine, MayanReading};
pub use numerology::{Numerology, NumerologyEngine, NumerologyReading};
pub use registry::{CastOutcome, EngineConfig, cast, cast_with};
pub use runes::{RuneCast, RuneSystem, Runes, RunesEngine, RuneReading};
pub use tarot::{SpreadType, Tarot, TarotEngine, TarotReading, available_spreads, get_card_preview};
