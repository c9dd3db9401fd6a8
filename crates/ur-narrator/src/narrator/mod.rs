//! Narrator: turns a reading and its environment into three layers of text.

mod config;
mod templates;

pub use config::{NarratorConfig, NarratorTone, Verbosity};
pub use templates::{KindPhrases, phrases_for};

use ur_core::{DivinationKind, MoonPhase};

use crate::context::EnvironmentalContext;

/// Builds layer text from the phrase tables.
#[derive(Debug, Clone, Default)]
pub struct Narrator {
    config: NarratorConfig,
}

impl Narrator {
    /// Create a narrator with the given config.
    pub fn new(config: NarratorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &NarratorConfig {
        &self.config
    }

    /// The tradition's view of the drawn symbols.
    pub fn classical(&self, kind: DivinationKind, symbols: &[String], summary: &str) -> String {
        let phrases = phrases_for(kind);
        let subject = if symbols.is_empty() {
            "この配置".to_string()
        } else {
            symbols
                .iter()
                .map(|s| format!("「{s}」"))
                .collect::<Vec<_>>()
                .join("と")
        };
        let mut text = format!(
            "{}の伝統では、{subject}は{}。",
            kind.traditional_source(),
            phrases.classical_framing
        );
        if self.config.verbosity != Verbosity::Terse && !summary.is_empty() {
            text.push_str(summary);
        }
        text
    }

    /// The psychological reading, coloured by the environment.
    pub fn modern(&self, kind: DivinationKind, context: &EnvironmentalContext) -> String {
        let mut text = phrases_for(kind).psychological_framing.to_string();
        if !context.has_environment {
            text.push_str("環境の情報がないため、内なる感覚を手がかりにしてください。");
            return text;
        }
        text.push_str(&format!(
            "今は{}。{}",
            context.moon_phase.label(),
            context.moon_phase.influence()
        ));
        if let Some(sign) = &context.moon_sign {
            text.push_str(&format!("月は{sign}にあります。"));
        }
        if self.config.verbosity == Verbosity::Verbose {
            text.push_str(&format!(
                "{}の季節、天気は{}、地磁気は{}です。",
                context.season.label(),
                context.weather,
                context.geomagnetic.label()
            ));
            if let Some(term) = &context.solar_term {
                text.push_str(&format!("節気は{term}。"));
            }
        }
        text
    }

    /// Concrete actions and timing.
    pub fn practical(&self, kind: DivinationKind, context: &EnvironmentalContext) -> String {
        let mut lines = Vec::new();
        if let Some(name) = &self.config.addressee {
            lines.push(format!("{name}さんへ"));
        }
        let count = self.config.verbosity.action_count();
        for action in phrases_for(kind).actions.iter().take(count) {
            lines.push(self.phrase_action(action));
        }
        lines.push(timing(context));
        lines.join("\n")
    }

    fn phrase_action(&self, action: &str) -> String {
        match self.config.tone {
            NarratorTone::Gentle => format!("・{action}ことを試してみましょう。"),
            NarratorTone::Direct => format!("・{action}こと。"),
            NarratorTone::Poetic => format!("・{action}、その余韻に耳を澄ませて。"),
        }
    }
}

fn timing(context: &EnvironmentalContext) -> String {
    if !context.has_environment {
        return "時機は自分の感覚を信じて選びましょう。".to_string();
    }
    let phase = context.moon_phase;
    let text = match phase {
        MoonPhase::New => "新月の今は、意図を定めるのに向いています。",
        MoonPhase::Full => "満月の今は、成果を確かめるのに向いています。",
        _ if phase.is_waxing() => "月が満ちていく今は、始めることに向いています。",
        _ => "月が欠けていく今は、手放すことに向いています。",
    };
    text.to_string()
}
