//! The three-layer wrapper around a finished reading.

use chrono::{DateTime, Utc};
use serde::Serialize;
use ur_core::{Clock, DivinationKind, Reading};

use crate::context::EnvironmentalContext;
use crate::narrator::Narrator;

/// Bookkeeping about how an interpretation was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretationMeta {
    /// Which system produced the reading.
    pub divination_kind: DivinationKind,
    /// Configuration label, e.g. the spread name.
    pub configuration_label: String,
    /// 0.3 without environment data, up to 1.0 with every detail present.
    pub environmental_confidence: f64,
    /// 0.4, plus 0.3 each for a summary and for key symbols.
    pub interpretation_confidence: f64,
    /// When the text was generated.
    pub generated_at: DateTime<Utc>,
}

/// Classical, modern and practical text plus meta.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreeLayerInterpretation {
    /// The tradition's view.
    pub classical: String,
    /// The psychological view, coloured by the environment.
    pub modern: String,
    /// Actions and timing.
    pub practical: String,
    /// How the text was produced.
    pub meta: InterpretationMeta,
}

impl Narrator {
    /// Wrap `primary` in three layers of text.
    pub fn interpret(
        &self,
        kind: DivinationKind,
        primary: &impl Reading,
        context: &EnvironmentalContext,
        configuration_label: &str,
        clock: &dyn Clock,
    ) -> ThreeLayerInterpretation {
        let summary = primary.summary();
        let symbols = primary.key_symbols();

        let mut tenths = 4u8;
        if !summary.trim().is_empty() {
            tenths += 3;
        }
        if !symbols.is_empty() {
            tenths += 3;
        }
        let env_tenths = context.confidence_tenths();
        tracing::debug!(%kind, interpretation = tenths, environment = env_tenths, "three-layer confidence");

        ThreeLayerInterpretation {
            classical: self.classical(kind, &symbols, &summary),
            modern: self.modern(kind, context),
            practical: self.practical(kind, context),
            meta: InterpretationMeta {
                divination_kind: kind,
                configuration_label: configuration_label.to_string(),
                environmental_confidence: f64::from(env_tenths) / 10.0,
                interpretation_confidence: f64::from(tenths) / 10.0,
                generated_at: clock.now(),
            },
        }
    }
}

/// Wrap `primary` in three layers of text with the default narrator.
pub fn generate_three_layer_interpretation(
    kind: DivinationKind,
    primary: &impl Reading,
    context: &EnvironmentalContext,
    configuration_label: &str,
    clock: &dyn Clock,
) -> ThreeLayerInterpretation {
    Narrator::default().interpret(kind, primary, context, configuration_label, clock)
}
