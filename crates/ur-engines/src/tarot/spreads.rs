//! Tarot spreads and their position labels.

use serde::{Deserialize, Serialize};
use ur_core::interpret::PositionKeys;
use ur_core::{UranaiError, UranaiResult};

/// A spread layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpreadType {
    /// One card for the day.
    OneCard,
    /// Past, present, future.
    #[default]
    ThreeCard,
    /// The ten-card Celtic cross.
    CelticCross,
    /// Seven cards on a relationship.
    Relationship,
    /// Five cards weighing two options.
    Decision,
}

impl SpreadType {
    /// All spreads in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::OneCard,
            Self::ThreeCard,
            Self::CelticCross,
            Self::Relationship,
            Self::Decision,
        ]
    }

    /// Stable machine name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneCard => "one-card",
            Self::ThreeCard => "three-card",
            Self::CelticCross => "celtic-cross",
            Self::Relationship => "relationship",
            Self::Decision => "decision",
        }
    }

    /// Japanese name.
    pub fn label(self) -> &'static str {
        match self {
            Self::OneCard => "ワンオラクル",
            Self::ThreeCard => "スリーカード",
            Self::CelticCross => "ケルト十字",
            Self::Relationship => "相性スプレッド",
            Self::Decision => "二者択一",
        }
    }

    /// What the spread is for.
    pub fn description(self) -> &'static str {
        match self {
            Self::OneCard => "一枚のカードで今日のメッセージを受け取ります。",
            Self::ThreeCard => "過去・現在・未来の流れを読み解きます。",
            Self::CelticCross => "状況の全体像と行く末を十枚で詳しく読み解きます。",
            Self::Relationship => "二人の気持ちと関係の行方を読み解きます。",
            Self::Decision => "二つの選択肢それぞれの結果を比較します。",
        }
    }

    /// Position labels in draw order.
    pub fn positions(self) -> &'static [&'static str] {
        match self {
            Self::OneCard => &["今日のメッセージ"],
            Self::ThreeCard => &["過去", "現在", "未来"],
            Self::CelticCross => &[
                "現在の状況",
                "直面する課題",
                "遠い過去/根本原因",
                "近い過去",
                "可能な未来",
                "近い未来",
                "あなたの立場",
                "外部からの影響",
                "希望と恐れ",
                "最終結果",
            ],
            Self::Relationship => &[
                "あなたの気持ち",
                "相手の気持ち",
                "二人の過去",
                "二人の現在",
                "障害",
                "アドバイス",
                "未来",
            ],
            Self::Decision => &["現状", "選択肢A", "選択肢B", "判断の鍵", "最終結果"],
        }
    }

    /// Number of cards drawn.
    pub fn card_count(self) -> usize {
        self.positions().len()
    }
}

impl std::str::FromStr for SpreadType {
    type Err = UranaiError;

    fn from_str(s: &str) -> UranaiResult<Self> {
        let key = s.trim().to_lowercase().replace(['_', ' '], "-");
        match key.as_str() {
            "one-card" | "one" | "single" | "1" => Ok(Self::OneCard),
            "three-card" | "three" | "3" => Ok(Self::ThreeCard),
            "celtic-cross" | "celtic" | "10" => Ok(Self::CelticCross),
            "relationship" | "love" => Ok(Self::Relationship),
            "decision" | "choice" => Ok(Self::Decision),
            _ => Err(UranaiError::UnknownSpread(s.to_string())),
        }
    }
}

impl std::fmt::Display for SpreadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Position label → card text key, shared by every spread.
pub const POSITION_KEYS: PositionKeys = PositionKeys(&[
    ("今日のメッセージ", "message"),
    ("過去", "past"),
    ("現在", "present"),
    ("未来", "future"),
    ("現在の状況", "present"),
    ("直面する課題", "challenge"),
    ("遠い過去/根本原因", "root"),
    ("近い過去", "past"),
    ("可能な未来", "potential"),
    ("近い未来", "future"),
    ("あなたの立場", "self"),
    ("外部からの影響", "environment"),
    ("希望と恐れ", "hopes"),
    ("最終結果", "outcome"),
    ("あなたの気持ち", "self"),
    ("相手の気持ち", "partner"),
    ("二人の過去", "past"),
    ("二人の現在", "present"),
    ("障害", "challenge"),
    ("アドバイス", "advice"),
    ("現状", "present"),
    ("選択肢A", "option_a"),
    ("選択肢B", "option_b"),
    ("判断の鍵", "advice"),
]);

/// A spread as listed to callers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadInfo {
    /// Machine name.
    #[serde(rename = "type")]
    pub spread_type: SpreadType,
    /// Japanese name.
    pub name: &'static str,
    /// Description.
    pub description: &'static str,
    /// Number of cards.
    pub card_count: usize,
    /// Position labels.
    pub positions: &'static [&'static str],
}

/// Every spread the tarot engine supports.
pub fn available_spreads() -> Vec<SpreadInfo> {
    SpreadType::all()
        .iter()
        .map(|s| SpreadInfo {
            spread_type: *s,
            name: s.label(),
            description: s.description(),
            card_count: s.card_count(),
            positions: s.positions(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_spreads_with_matching_counts() {
        let spreads = available_spreads();
        let names: Vec<&str> = spreads.iter().map(|s| s.spread_type.as_str()).collect();
        assert_eq!(
            names,
            ["one-card", "three-card", "celtic-cross", "relationship", "decision"]
        );
        let counts: Vec<usize> = spreads.iter().map(|s| s.card_count).collect();
        assert_eq!(counts, [1, 3, 10, 7, 5]);
        for s in &spreads {
            assert_eq!(s.card_count, s.positions.len());
        }
    }

    #[test]
    fn every_position_has_a_key() {
        for spread in SpreadType::all() {
            for label in spread.positions() {
                assert!(POSITION_KEYS.key_for(label).is_some(), "{label}");
            }
        }
    }

    #[test]
    fn parse_spread_names() {
        assert_eq!("celtic-cross".parse::<SpreadType>().ok(), Some(SpreadType::CelticCross));
        assert_eq!("Celtic Cross".parse::<SpreadType>().ok(), Some(SpreadType::CelticCross));
        assert_eq!("one_card".parse::<SpreadType>().ok(), Some(SpreadType::OneCard));
        assert!("pentagram".parse::<SpreadType>().is_err());
    }

    #[test]
    fn spread_info_serialises_type_field() {
        let json = serde_json::to_value(&available_spreads()[2]).unwrap();
        assert_eq!(json["type"], "celtic-cross");
        assert_eq!(json["cardCount"], 10);
    }
}
