//! The divination systems this workspace knows about.

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{UranaiError, UranaiResult};

/// Minimum similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A divination system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DivinationKind {
    /// Tarot cards.
    Tarot,
    /// I Ching hexagrams.
    #[serde(rename = "iching")]
    IChing,
    /// Runes.
    Runes,
    /// Kabbalistic Tree of Life.
    Kabbalah,
    /// Western astrology.
    Astrology,
    /// Chakras.
    Chakra,
    /// Feng shui.
    #[serde(rename = "fengshui")]
    FengShui,
    /// Aura-Soma colour bottles.
    AuraSoma,
    /// Akashic records.
    Akashic,
    /// Mayan calendar.
    Mayan,
    /// Celtic ogham and tree calendar.
    Celtic,
    /// Numerology.
    Numerology,
}

impl DivinationKind {
    /// All kinds in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Tarot,
            Self::IChing,
            Self::Runes,
            Self::Kabbalah,
            Self::Astrology,
            Self::Chakra,
            Self::FengShui,
            Self::AuraSoma,
            Self::Akashic,
            Self::Mayan,
            Self::Celtic,
            Self::Numerology,
        ]
    }

    /// Stable machine name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tarot => "tarot",
            Self::IChing => "iching",
            Self::Runes => "runes",
            Self::Kabbalah => "kabbalah",
            Self::Astrology => "astrology",
            Self::Chakra => "chakra",
            Self::FengShui => "fengshui",
            Self::AuraSoma => "aura-soma",
            Self::Akashic => "akashic",
            Self::Mayan => "mayan",
            Self::Celtic => "celtic",
            Self::Numerology => "numerology",
        }
    }

    /// Japanese name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tarot => "タロット",
            Self::IChing => "易経",
            Self::Runes => "ルーン",
            Self::Kabbalah => "カバラ",
            Self::Astrology => "西洋占星術",
            Self::Chakra => "チャクラ",
            Self::FengShui => "風水",
            Self::AuraSoma => "オーラソーマ",
            Self::Akashic => "アカシックレコード",
            Self::Mayan => "マヤ暦",
            Self::Celtic => "ケルト・オガム",
            Self::Numerology => "数秘術",
        }
    }

    /// The tradition the classical layer of an interpretation cites.
    pub fn traditional_source(self) -> &'static str {
        match self {
            Self::Tarot => "ライダー・ウェイト・スミス版タロット（1909年）",
            Self::IChing => "『周易』と十翼",
            Self::Runes => "古エッダと古ノルド語ルーン詩",
            Self::Kabbalah => "『セフェル・イェツィラー』と『ゾーハル』",
            Self::Astrology => "プトレマイオス『テトラビブロス』",
            Self::Chakra => "ヴェーダ文献とタントラの伝承",
            Self::FengShui => "『葬書』と八宅派風水",
            Self::AuraSoma => "ヴィッキー・ウォールのカラーケア体系（1983年）",
            Self::Akashic => "神智学文献（ブラヴァツキー、シュタイナー）",
            Self::Mayan => "ドレスデン・コデックスとツォルキン暦",
            Self::Celtic => "『バリーモートの書』のオガム伝承",
            Self::Numerology => "ピタゴラス派の数の哲学",
        }
    }

    /// Parse a kind from a machine name, alias, or Japanese name.
    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase().replace(['_', ' '], "-");
        let kind = match key.as_str() {
            "tarot" | "タロット" => Self::Tarot,
            "iching" | "i-ching" | "yijing" | "易経" | "易" => Self::IChing,
            "runes" | "rune" | "ルーン" => Self::Runes,
            "kabbalah" | "kabala" | "qabalah" | "カバラ" => Self::Kabbalah,
            "astrology" | "horoscope" | "西洋占星術" | "占星術" => Self::Astrology,
            "chakra" | "chakras" | "チャクラ" => Self::Chakra,
            "fengshui" | "feng-shui" | "風水" => Self::FengShui,
            "aura-soma" | "aurasoma" | "オーラソーマ" => Self::AuraSoma,
            "akashic" | "akashic-records" | "アカシックレコード" => Self::Akashic,
            "mayan" | "maya" | "tzolkin" | "マヤ暦" => Self::Mayan,
            "celtic" | "ogham" | "ケルト" | "オガム" | "ケルト・オガム" => Self::Celtic,
            "numerology" | "数秘術" => Self::Numerology,
            _ => return None,
        };
        Some(kind)
    }

    /// Parse a kind, or fail with close-match suggestions.
    pub fn resolve(s: &str) -> UranaiResult<Self> {
        Self::parse(s).ok_or_else(|| UranaiError::UnknownDivination {
            name: s.to_string(),
            suggestions: Self::suggest(s, 3),
        })
    }

    /// Machine names similar to the input, best first.
    pub fn suggest(partial: &str, limit: usize) -> Vec<String> {
        let partial = partial.trim().to_lowercase();
        let mut scored: Vec<(&'static str, f64)> = Self::all()
            .iter()
            .map(|k| (k.as_str(), jaro_winkler(&partial, k.as_str())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

impl std::fmt::Display for DivinationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_kinds_round_trip_names() {
        assert_eq!(DivinationKind::all().len(), 12);
        for kind in DivinationKind::all() {
            assert_eq!(DivinationKind::parse(kind.as_str()), Some(*kind));
            assert_eq!(DivinationKind::parse(kind.label()), Some(*kind));
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!(DivinationKind::parse("I Ching"), Some(DivinationKind::IChing));
        assert_eq!(DivinationKind::parse("feng_shui"), Some(DivinationKind::FengShui));
        assert_eq!(DivinationKind::parse("ogham"), Some(DivinationKind::Celtic));
        assert_eq!(DivinationKind::parse("palmistry"), None);
    }

    #[test]
    fn resolve_suggests_close_names() {
        let err = DivinationKind::resolve("tarrot").unwrap_err();
        match err {
            UranaiError::UnknownDivination { suggestions, .. } => {
                assert_eq!(suggestions.first().map(String::as_str), Some("tarot"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn resolve_without_suggestions() {
        let err = DivinationKind::resolve("zzzzzz").unwrap_err();
        assert_eq!(err.to_string(), "unknown divination \"zzzzzz\"");
    }

    #[test]
    fn every_kind_has_a_source() {
        for kind in DivinationKind::all() {
            assert!(!kind.traditional_source().is_empty());
        }
    }
}
