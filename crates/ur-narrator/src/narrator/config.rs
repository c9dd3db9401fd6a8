//! Narrator configuration.

use serde::{Deserialize, Serialize};

/// Narrator tone - affects how practical advice is phrased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NarratorTone {
    /// Soft suggestions.
    #[default]
    Gentle,
    /// Plain instructions.
    Direct,
    /// Lyrical phrasing.
    Poetic,
}

impl NarratorTone {
    /// Parse a tone name; unknown names give `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "gentle" => Some(Self::Gentle),
            "direct" => Some(Self::Direct),
            "poetic" => Some(Self::Poetic),
            _ => None,
        }
    }
}

/// Verbosity level for the layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verbosity {
    /// Framing only, one action.
    Terse,
    /// Framing plus the reading's summary, two actions.
    #[default]
    Normal,
    /// Everything, including season, weather and geomagnetic notes.
    Verbose,
}

impl Verbosity {
    /// How many practical actions to list.
    pub fn action_count(self) -> usize {
        match self {
            Self::Terse => 1,
            Self::Normal => 2,
            Self::Verbose => 3,
        }
    }
}

/// Configuration for the narrator.
#[derive(Debug, Clone, Default)]
pub struct NarratorConfig {
    /// The tone of the practical layer.
    pub tone: NarratorTone,
    /// The verbosity level.
    pub verbosity: Verbosity,
    /// Name to address the practical layer to.
    pub addressee: Option<String>,
}

impl NarratorConfig {
    /// Create a new narrator config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tone.
    pub fn with_tone(mut self, tone: NarratorTone) -> Self {
        self.tone = tone;
        self
    }

    /// Set the verbosity.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Address the practical layer to `name`. Blank names are ignored.
    pub fn with_addressee(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.addressee = (!name.trim().is_empty()).then_some(name);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = NarratorConfig::new();
        assert_eq!(config.tone, NarratorTone::Gentle);
        assert_eq!(config.verbosity, Verbosity::Normal);
        assert!(config.addressee.is_none());
    }

    #[test]
    fn builder_chain() {
        let config = NarratorConfig::new()
            .with_tone(NarratorTone::Poetic)
            .with_verbosity(Verbosity::Verbose)
            .with_addressee("花子");
        assert_eq!(config.tone, NarratorTone::Poetic);
        assert_eq!(config.verbosity.action_count(), 3);
        assert_eq!(config.addressee.as_deref(), Some("花子"));
    }

    #[test]
    fn blank_addressee_ignored() {
        assert!(NarratorConfig::new().with_addressee("  ").addressee.is_none());
    }

    #[test]
    fn tone_parse() {
        assert_eq!(NarratorTone::parse("Direct"), Some(NarratorTone::Direct));
        assert_eq!(NarratorTone::parse("loud"), None);
    }
}
