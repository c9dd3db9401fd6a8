//! Chakra balance readings.
//!
//! Each of the seven chakras gets a score in `0..=100` from the generator.
//! The chakra tied to the question category is lifted a little and strong
//! geomagnetic activity unsettles the root.

use std::borrow::Cow;

use serde::Serialize;
use ur_core::engine::{Divination, DivinationEngine, Reading, ReadingContext};
use ur_core::interpret::{PositionKeys, SymbolText, interpret};
use ur_core::{DivinationKind, QuestionCategory};

/// Scores at or above this are overactive.
pub const OVERACTIVE_FROM: u32 = 80;
/// Scores below this are underactive.
pub const UNDERACTIVE_BELOW: u32 = 40;

const CATEGORY_BOOST: u32 = 10;
const STORM_PENALTY: u32 = 10;

const CHAKRA_KEYS: PositionKeys =
    PositionKeys(&[("最も活発なチャクラ", "dominant"), ("最も弱いチャクラ", "weakest")]);

/// One chakra.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chakra {
    /// 1 (root) to 7 (crown).
    pub number: u8,
    /// Japanese name.
    pub name: &'static str,
    /// Sanskrit name.
    pub sanskrit: &'static str,
    /// Body location.
    pub location: &'static str,
    /// Colour.
    pub color: &'static str,
    /// Element.
    pub element: &'static str,
    /// What it governs.
    pub theme: &'static str,
    /// Text when it is strong.
    pub balanced: &'static str,
    /// Text when it is weak.
    pub blocked: &'static str,
    /// Practice that strengthens it.
    pub recommendation: &'static str,
    /// Affirmation.
    pub affirmation: &'static str,
}

/// The seven chakras, root first.
pub static CHAKRAS: [Chakra; 7] = [
    Chakra {
        number: 1,
        name: "ルートチャクラ",
        sanskrit: "ムーラダーラ",
        location: "尾骨",
        color: "赤",
        element: "地",
        theme: "安心感と生命の土台",
        balanced: "大地に根ざした安定感があり、現実をしっかり生きる力に満ちています。",
        blocked: "不安や焦りが生まれやすく、足元が揺らいでいます。",
        recommendation: "裸足で土に触れ、ゆっくり歩く時間をとりましょう。",
        affirmation: "私は守られ、安心してここに在ります。",
    },
    Chakra {
        number: 2,
        name: "セイクラルチャクラ",
        sanskrit: "スワディシュターナ",
        location: "下腹部",
        color: "橙",
        element: "水",
        theme: "感情と創造性",
        balanced: "感情が豊かに流れ、創造の喜びにあふれています。",
        blocked: "喜びを感じにくく、感情を抑え込んでいます。",
        recommendation: "水に親しみ、好きなことを自由に楽しむ時間を持ちましょう。",
        affirmation: "私は人生の喜びを受け取ります。",
    },
    Chakra {
        number: 3,
        name: "ソーラープレクサスチャクラ",
        sanskrit: "マニプーラ",
        location: "みぞおち",
        color: "黄",
        element: "火",
        theme: "意志と自信",
        balanced: "自分を信じ、決断して行動する力が満ちています。",
        blocked: "自信を失い、人の評価に振り回されがちです。",
        recommendation: "小さな目標を立てて達成し、自分を認めてあげましょう。",
        affirmation: "私は自分の力を信じます。",
    },
    Chakra {
        number: 4,
        name: "ハートチャクラ",
        sanskrit: "アナーハタ",
        location: "胸の中央",
        color: "緑",
        element: "風",
        theme: "愛と受容",
        balanced: "自分と他者を温かく受け入れる愛に満ちています。",
        blocked: "心を閉ざし、愛を受け取ることをためらっています。",
        recommendation: "感謝を言葉にし、自然の緑の中で深呼吸しましょう。",
        affirmation: "私は愛を与え、愛を受け取ります。",
    },
    Chakra {
        number: 5,
        name: "スロートチャクラ",
        sanskrit: "ヴィシュッダ",
        location: "喉",
        color: "青",
        element: "空",
        theme: "表現と真実",
        balanced: "本当の気持ちを素直に、的確に伝えられています。",
        blocked: "言いたいことを飲み込み、本音を隠しています。",
        recommendation: "歌う、書くなど、声と言葉で自分を表現しましょう。",
        affirmation: "私は真実を安心して語ります。",
    },
    Chakra {
        number: 6,
        name: "サードアイチャクラ",
        sanskrit: "アージュニャー",
        location: "眉間",
        color: "藍",
        element: "光",
        theme: "直感と洞察",
        balanced: "物事の本質を見抜く直感が冴えています。",
        blocked: "迷いが多く、自分の直感を信じられずにいます。",
        recommendation: "瞑想や夢日記で内なるビジョンに耳を傾けましょう。",
        affirmation: "私は内なる知恵を信頼します。",
    },
    Chakra {
        number: 7,
        name: "クラウンチャクラ",
        sanskrit: "サハスラーラ",
        location: "頭頂",
        color: "紫",
        element: "宇宙",
        theme: "霊性とつながり",
        balanced: "大いなるものとのつながりを感じ、深い平和の中にいます。",
        blocked: "孤立感があり、人生の意味を見失いがちです。",
        recommendation: "静かな祈りや瞑想で、自分を超えたものとつながりましょう。",
        affirmation: "私は宇宙とひとつです。",
    },
];

impl SymbolText for Chakra {
    fn name(&self) -> &str {
        self.name
    }

    fn general_meanings(&self) -> Vec<&str> {
        vec![self.balanced]
    }

    fn position_meaning(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "dominant" => Some(Cow::Owned(format!("「{}」のエネルギーがあなたを支えています。", self.theme))),
            "weakest" => Some(Cow::Owned(format!("{}{}", self.blocked, self.recommendation))),
            _ => None,
        }
    }
}

/// Activity band of one chakra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChakraState {
    /// Below [`UNDERACTIVE_BELOW`].
    Underactive,
    /// In between.
    Balanced,
    /// At or above [`OVERACTIVE_FROM`].
    Overactive,
}

impl ChakraState {
    /// Band for a score.
    pub fn of(score: u32) -> Self {
        if score >= OVERACTIVE_FROM {
            Self::Overactive
        } else if score < UNDERACTIVE_BELOW {
            Self::Underactive
        } else {
            Self::Balanced
        }
    }

    /// Japanese label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Underactive => "低下",
            Self::Balanced => "調和",
            Self::Overactive => "過剰",
        }
    }
}

/// Chakra tied to a question category, if any.
pub fn focus_chakra(category: QuestionCategory) -> Option<u8> {
    match category {
        QuestionCategory::General => None,
        QuestionCategory::Money => Some(1),
        QuestionCategory::Health => Some(2),
        QuestionCategory::Career => Some(3),
        QuestionCategory::Love => Some(4),
        QuestionCategory::Relationship => Some(5),
        QuestionCategory::Spiritual => Some(7),
    }
}

/// Overall balance of the seven scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceLabel {
    /// Scores lie within 30 points of each other.
    Harmonious,
    /// High on average.
    Energized,
    /// Low on average.
    Depleted,
    /// Widely spread.
    Unbalanced,
}

impl BalanceLabel {
    /// Classify a set of scores.
    pub fn of(scores: &[u32]) -> Self {
        let max = scores.iter().copied().max().unwrap_or(0);
        let min = scores.iter().copied().min().unwrap_or(0);
        let avg = if scores.is_empty() {
            0
        } else {
            scores.iter().sum::<u32>() / scores.len() as u32
        };
        if max - min <= 30 {
            Self::Harmonious
        } else if avg >= 60 {
            Self::Energized
        } else if avg < 40 {
            Self::Depleted
        } else {
            Self::Unbalanced
        }
    }

    /// Japanese message.
    pub fn message(self) -> &'static str {
        match self {
            Self::Harmonious => "七つのチャクラが調和し、エネルギーが滑らかに巡っています。",
            Self::Energized => "全体にエネルギーが高まっています。休息で熱を鎮めることも忘れずに。",
            Self::Depleted => "全体にエネルギーが低下しています。まずは心身を休めましょう。",
            Self::Unbalanced => "強いところと弱いところの差が大きく、バランスの調整が必要です。",
        }
    }
}

/// Chakra has no configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChakraReader;

/// Engine alias for chakra readings.
pub type ChakraEngine = DivinationEngine<ChakraReader>;

/// One scored chakra.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChakraScore {
    /// The chakra.
    pub chakra: Chakra,
    /// Score, 0-100.
    pub score: u32,
    /// Band.
    pub state: ChakraState,
}

/// A finished chakra reading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChakraReading {
    /// All seven, root first.
    pub chakras: Vec<ChakraScore>,
    /// Highest score (first on ties).
    pub dominant: Chakra,
    /// Lowest score (first on ties).
    pub weakest: Chakra,
    /// Dominant chakra text.
    pub dominant_interpretation: String,
    /// Weakest chakra text.
    pub weakest_interpretation: String,
    /// Overall balance.
    pub balance: BalanceLabel,
    /// Balance message.
    pub balance_message: &'static str,
    /// Practices for underactive chakras, weakest first.
    pub recommendations: Vec<String>,
    /// Affirmation of the weakest chakra.
    pub affirmation: &'static str,
    /// Seed used.
    pub seed: u64,
}

impl Reading for ChakraReading {
    fn summary(&self) -> String {
        format!(
            "{}最も活発なのは{}、最も弱いのは{}です。",
            self.balance_message, self.dominant.name, self.weakest.name
        )
    }

    fn key_symbols(&self) -> Vec<String> {
        vec![self.dominant.name.to_string(), self.weakest.name.to_string()]
    }
}

impl Divination for ChakraReader {
    const KIND: DivinationKind = DivinationKind::Chakra;
    type Reading = ChakraReading;

    fn cast(&self, ctx: &mut ReadingContext<'_>) -> ChakraReading {
        let focus = focus_chakra(ctx.category());
        let storm = ctx.environment.solar.is_geomagnetic_storm();

        let chakras: Vec<ChakraScore> = CHAKRAS
            .iter()
            .map(|c| {
                let mut score = ctx.rng.next_in_range(0, 100);
                if focus == Some(c.number) {
                    score = (score + CATEGORY_BOOST).min(100);
                }
                if storm && c.number == 1 {
                    score = score.saturating_sub(STORM_PENALTY);
                }
                tracing::trace!(chakra = c.number, score, "chakra scored");
                ChakraScore {
                    chakra: *c,
                    score,
                    state: ChakraState::of(score),
                }
            })
            .collect();

        let mut dominant = &chakras[0];
        let mut weakest = &chakras[0];
        for c in &chakras[1..] {
            if c.score > dominant.score {
                dominant = c;
            }
            if c.score < weakest.score {
                weakest = c;
            }
        }
        let (dominant, weakest) = (dominant.chakra, weakest.chakra);
        tracing::debug!(dominant = dominant.number, weakest = weakest.number, "chakra balance");

        let scores: Vec<u32> = chakras.iter().map(|c| c.score).collect();
        let balance = BalanceLabel::of(&scores);

        let mut under: Vec<&ChakraScore> = chakras
            .iter()
            .filter(|c| c.state == ChakraState::Underactive)
            .collect();
        under.sort_by_key(|c| c.score);
        let mut recommendations: Vec<String> = under
            .iter()
            .map(|c| format!("{}：{}", c.chakra.name, c.chakra.recommendation))
            .collect();
        if recommendations.is_empty() {
            recommendations.push(format!("{}：{}", weakest.name, weakest.recommendation));
        }

        let category = ctx.category();
        let time = ctx.text_time();
        ChakraReading {
            dominant_interpretation: interpret(
                &dominant,
                "最も活発なチャクラ",
                &CHAKRA_KEYS,
                category,
                time,
                ctx.variant(0),
            ),
            weakest_interpretation: interpret(
                &weakest,
                "最も弱いチャクラ",
                &CHAKRA_KEYS,
                category,
                None,
                ctx.variant(1),
            ),
            chakras,
            dominant,
            weakest,
            balance,
            balance_message: balance.message(),
            recommendations,
            affirmation: weakest.affirmation,
            seed: ctx.seed,
        }
    }
}
