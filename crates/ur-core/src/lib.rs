//! Core types for Uranai: personal input, environment data, seeding, and the
//! generic divination engine.
//!
//! Engines built on this crate are pure functions of their input: a seed is
//! derived from the person's data, an LCG seeded from it drives every draw,
//! and static tables supply the text.

/// Source of "now".
pub mod clock;
/// The generic engine and the traits systems implement.
pub mod engine;
/// Environment data (lunar, solar, weather, season).
pub mod environment;
/// Error types used at the parsing boundary.
pub mod error;
/// The person's input.
pub mod input;
/// Table-driven interpretation assembly.
pub mod interpret;
/// Divination system identifiers.
pub mod kind;
/// Six-line casting primitives.
pub mod lines;
/// Engine options.
pub mod options;
/// Linear-congruential generator, shuffle, and distinct draws.
pub mod rng;
/// Seed derivation.
pub mod seed;
/// Time-of-day buckets.
pub mod time_of_day;

/// Re-export clock types.
pub use clock::{Clock, FixedClock, SystemClock};
/// Re-export engine types.
pub use engine::{Divination, DivinationEngine, Reading, ReadingContext};
/// Re-export environment types.
pub use environment::{EnvironmentData, MoonPhase, STORM_KP, Season};
/// Re-export error types.
pub use error::{UranaiError, UranaiResult};
/// Re-export input types.
pub use input::{DivinationInput, Gender, QuestionCategory};
/// Re-export the divination kind.
pub use kind::DivinationKind;
/// Re-export options.
pub use options::{Detail, EngineOptions};
/// Re-export the generator and shuffle.
pub use rng::{Lcg, shuffle};
/// Re-export seed types.
pub use seed::{SeedPolicy, generate_seed};
/// Re-export the time-of-day bucket.
pub use time_of_day::TimeOfDay;
