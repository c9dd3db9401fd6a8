//! Three-layer interpretation text for Uranai readings.
//!
//! Any finished [`ur_core::Reading`] can be wrapped in a
//! [`ThreeLayerInterpretation`]: a classical layer citing the system's
//! tradition, a modern psychological layer coloured by the environment, and a
//! practical layer of concrete actions. All text comes from static per-kind
//! phrase tables; nothing here draws from the generator.

pub mod context;
pub mod interpretation;
pub mod narrator;

pub use context::{EnvironmentalContext, GeomagneticLevel};
pub use interpretation::{InterpretationMeta, ThreeLayerInterpretation, generate_three_layer_interpretation};
pub use narrator::{KindPhrases, Narrator, NarratorConfig, NarratorTone, Verbosity, phrases_for};
