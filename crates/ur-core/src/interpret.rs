//! Table-driven interpretation assembly.
//!
//! A symbol exposes its text tables through [`SymbolText`]; [`interpret`]
//! picks a general meaning by `seed mod len` and appends whichever position,
//! category and time-of-day lines exist. Missing tables degrade to a
//! templated default, never to an error.

use std::borrow::Cow;

use crate::input::QuestionCategory;
use crate::rng::pick_by_seed;
use crate::time_of_day::TimeOfDay;

/// Text tables attached to a card, rune, hexagram, or any other symbol.
pub trait SymbolText {
    /// Display name.
    fn name(&self) -> &str;

    /// General meanings; one is chosen per reading by seed.
    fn general_meanings(&self) -> Vec<&str>;

    /// Meaning for a position key (see [`PositionKeys`]).
    fn position_meaning(&self, _key: &str) -> Option<Cow<'_, str>> {
        None
    }

    /// Meaning specific to a question category. Implementations should return
    /// their general-category text when there is no specific entry.
    fn category_meaning(&self, _category: QuestionCategory) -> Option<Cow<'_, str>> {
        None
    }

    /// Meaning for a time of day.
    fn time_meaning(&self, _time: TimeOfDay) -> Option<Cow<'_, str>> {
        None
    }
}

/// Maps display position labels to the keys symbols index their text by.
#[derive(Debug, Clone, Copy)]
pub struct PositionKeys(pub &'static [(&'static str, &'static str)]);

impl PositionKeys {
    /// No position mapping.
    pub const EMPTY: Self = Self(&[]);

    /// Key for a position label.
    pub fn key_for(&self, label: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, key)| *key)
    }
}

/// The fallback used when a symbol has no general meaning.
pub fn default_meaning(position: &str, name: &str) -> String {
    format!("{position}における{name}の意味")
}

/// Assemble the interpretation of one symbol at one position.
pub fn interpret<S: SymbolText + ?Sized>(
    symbol: &S,
    position: &str,
    keys: &PositionKeys,
    category: QuestionCategory,
    time_of_day: Option<TimeOfDay>,
    seed: u64,
) -> String {
    let meanings = symbol.general_meanings();
    let mut out = match pick_by_seed(&meanings, seed) {
        Some(text) if !text.is_empty() => (*text).to_string(),
        _ => format!("{}。", default_meaning(position, symbol.name())),
    };

    if let Some(text) = keys
        .key_for(position)
        .and_then(|key| symbol.position_meaning(key))
    {
        out.push_str(&format!("{position}の位置では、{text}"));
    }

    if let Some(text) = symbol.category_meaning(category) {
        out.push_str(&format!("{}については、{text}", category.label()));
    }

    if let Some((time, text)) =
        time_of_day.and_then(|time| symbol.time_meaning(time).map(|text| (time, text)))
    {
        out.push_str(&format!("{}の時間帯には、{text}", time.label()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl SymbolText for Bare {
        fn name(&self) -> &str {
            "愚者"
        }
        fn general_meanings(&self) -> Vec<&str> {
            Vec::new()
        }
    }

    struct Rich;

    impl SymbolText for Rich {
        fn name(&self) -> &str {
            "太陽"
        }
        fn general_meanings(&self) -> Vec<&str> {
            vec!["成功の光。", "喜びの訪れ。"]
        }
        fn position_meaning(&self, key: &str) -> Option<Cow<'_, str>> {
            (key == "past").then_some(Cow::Borrowed("過去の成功が基盤です。"))
        }
        fn category_meaning(&self, category: QuestionCategory) -> Option<Cow<'_, str>> {
            match category {
                QuestionCategory::Love => Some("明るい恋が始まります。".into()),
                _ => Some("全体的に順調です。".into()),
            }
        }
        fn time_meaning(&self, time: TimeOfDay) -> Option<Cow<'_, str>> {
            (time == TimeOfDay::Morning).then_some(Cow::Borrowed("朝の行動が鍵です。"))
        }
    }

    const KEYS: PositionKeys = PositionKeys(&[("過去", "past"), ("現在", "present")]);

    #[test]
    fn missing_tables_fall_back_to_template() {
        let text = interpret(&Bare, "現在", &KEYS, QuestionCategory::General, None, 7);
        assert_eq!(text, "現在における愚者の意味。");
    }

    #[test]
    fn general_meaning_chosen_by_seed() {
        let a = interpret(&Rich, "未来", &KEYS, QuestionCategory::General, None, 0);
        let b = interpret(&Rich, "未来", &KEYS, QuestionCategory::General, None, 1);
        assert!(a.starts_with("成功の光。"));
        assert!(b.starts_with("喜びの訪れ。"));
    }

    #[test]
    fn all_parts_assembled_in_order() {
        let text = interpret(
            &Rich,
            "過去",
            &KEYS,
            QuestionCategory::Love,
            Some(TimeOfDay::Morning),
            0,
        );
        insta::assert_snapshot!(
            text,
            @"成功の光。過去の位置では、過去の成功が基盤です。恋愛については、明るい恋が始まります。朝の時間帯には、朝の行動が鍵です。"
        );
    }

    #[test]
    fn unmapped_position_skips_position_text() {
        let text = interpret(&Rich, "未知", &KEYS, QuestionCategory::General, None, 0);
        assert!(!text.contains("の位置では"));
        assert!(text.contains("総合については"));
    }

    #[test]
    fn key_lookup() {
        assert_eq!(KEYS.key_for("過去"), Some("past"));
        assert_eq!(KEYS.key_for("x"), None);
        assert_eq!(PositionKeys::EMPTY.key_for("過去"), None);
    }
}
