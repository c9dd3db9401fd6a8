/// Alias for `Result<T, UranaiError>`.
pub type UranaiResult<T> = Result<T, UranaiError>;

/// Errors raised while turning user-facing strings and files into engine
/// configuration.
///
/// Engines themselves never fail: degraded input is absorbed into defaults
/// during `calculate()`. These errors only surface at the parsing boundary.
#[derive(Debug, thiserror::Error)]
pub enum UranaiError {
    /// The divination kind name is not recognised.
    #[error("unknown divination \"{name}\"{}", format_suggestions(.suggestions))]
    UnknownDivination {
        /// The name that failed to resolve.
        name: String,
        /// Close matches, best first.
        suggestions: Vec<String>,
    },

    /// The tarot spread name is not recognised.
    #[error("unknown spread: \"{0}\". Use: one-card, three-card, celtic-cross, relationship, decision")]
    UnknownSpread(String),

    /// The I Ching casting method name is not recognised.
    #[error("unknown casting method: \"{0}\". Use: yarrow, coins, plum-blossom, time")]
    UnknownCastingMethod(String),

    /// The rune system name is not recognised.
    #[error("unknown rune system: \"{0}\". Use: elder, younger, anglo-saxon")]
    UnknownRuneSystem(String),

    /// The seed policy name is not recognised.
    #[error("unknown seed policy: \"{0}\". Use: deterministic, session")]
    UnknownSeedPolicy(String),

    /// Environment data could not be decoded.
    #[error("invalid environment data: {0}")]
    InvalidEnvironment(#[from] serde_json::Error),

    /// A generic option error with a descriptive message.
    #[error("invalid option: {0}")]
    InvalidOption(String),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_divination_lists_suggestions() {
        let err = UranaiError::UnknownDivination {
            name: "tarto".to_string(),
            suggestions: vec!["tarot".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown divination \"tarto\" (did you mean: tarot?)"
        );
    }

    #[test]
    fn unknown_divination_without_suggestions() {
        let err = UranaiError::UnknownDivination {
            name: "xyz".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown divination \"xyz\"");
    }

    #[test]
    fn environment_error_wraps_serde() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = UranaiError::from(bad);
        assert!(err.to_string().starts_with("invalid environment data"));
    }
}
