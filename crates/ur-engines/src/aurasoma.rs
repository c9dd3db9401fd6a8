//! Aura-Soma colour bottle readings.
//!
//! Four bottles are chosen without replacement from the first twenty
//! equilibrium bottles: soul, challenge, present and future.

use std::borrow::Cow;

use serde::Serialize;
use ur_core::engine::{Divination, DivinationEngine, Reading, ReadingContext};
use ur_core::interpret::{PositionKeys, SymbolText, interpret};
use ur_core::rng::draw_distinct;
use ur_core::{DivinationKind, QuestionCategory};

/// A colour and what it speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    /// Red.
    Red,
    /// Pink.
    Pink,
    /// Deep magenta.
    DeepMagenta,
    /// Yellow.
    Yellow,
    /// Gold.
    Gold,
    /// Green.
    Green,
    /// Turquoise.
    Turquoise,
    /// Blue.
    Blue,
    /// Royal blue.
    RoyalBlue,
    /// Violet.
    Violet,
    /// Clear.
    Clear,
}

impl Color {
    /// Japanese name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Red => "レッド",
            Self::Pink => "ピンク",
            Self::DeepMagenta => "ディープマゼンタ",
            Self::Yellow => "イエロー",
            Self::Gold => "ゴールド",
            Self::Green => "グリーン",
            Self::Turquoise => "ターコイズ",
            Self::Blue => "ブルー",
            Self::RoyalBlue => "ロイヤルブルー",
            Self::Violet => "バイオレット",
            Self::Clear => "クリア",
        }
    }

    /// Meaning.
    pub fn meaning(self) -> &'static str {
        match self {
            Self::Red => "生命力と情熱、地に足をつける力",
            Self::Pink => "無条件の愛と思いやり",
            Self::DeepMagenta => "日常の小さなことに宿る愛",
            Self::Yellow => "知性と喜び、自分らしさの輝き",
            Self::Gold => "深い叡智と自己価値",
            Self::Green => "バランスと空間、心の選択",
            Self::Turquoise => "創造的なコミュニケーション",
            Self::Blue => "平和と信頼、穏やかな表現",
            Self::RoyalBlue => "直感と内なるビジョン",
            Self::Violet => "癒しと変容、霊的な奉仕",
            Self::Clear => "浄化と明晰さ、光の受容",
        }
    }
}

/// One equilibrium bottle. The upper fraction speaks to the conscious mind,
/// the lower to what lies beneath.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bottle {
    /// Bottle number.
    pub number: u8,
    /// Name.
    pub name: &'static str,
    /// Upper fraction.
    pub upper: Color,
    /// Lower fraction.
    pub lower: Color,
    /// Message.
    pub message: &'static str,
}

macro_rules! bottles {
    ($(($n:expr, $name:expr, $u:ident, $l:ident, $m:expr)),* $(,)?) => {
        [$(Bottle { number: $n, name: $name, upper: Color::$u, lower: Color::$l, message: $m }),*]
    };
}

/// Bottles 1 to 20.
pub static BOTTLES: [Bottle; 20] = bottles![
    (1, "フィジカルレスキュー", Blue, DeepMagenta, "心身の緊張を解き、守られている感覚を取り戻します。"),
    (2, "ピースボトル", Blue, Blue, "静けさの中で本当の声を聴くときです。"),
    (3, "ハートボトル", Blue, Green, "心の空間を広げ、真実を語る勇気を持ちましょう。"),
    (4, "サンボトル", Yellow, Gold, "内なる太陽が輝き、喜びと自信が戻ってきます。"),
    (5, "サンライズ／サンセット", Yellow, Red, "新しい始まりと終わりを受け入れる力があります。"),
    (6, "エナジーボトル", Red, Red, "眠っていた情熱とエネルギーが目覚めます。"),
    (7, "ゲッセマネの園", Yellow, Green, "迷いの中でこそ、心の答えが見つかります。"),
    (8, "アヌビス", Yellow, Blue, "見えない導きに身を委ねると道が開けます。"),
    (9, "ハート・イン・ハート", Turquoise, Green, "心と心が通い合い、創造的な交流が生まれます。"),
    (10, "ゴー・プラシッドリー", Green, Green, "自分のための空間を確保し、穏やかに進みましょう。"),
    (11, "花の鎖", Clear, Pink, "自分を愛することで周囲にも愛が広がります。"),
    (12, "新時代の平和", Clear, Blue, "涙を流すことで心が浄化され、平和が訪れます。"),
    (13, "新時代の変化", Clear, Green, "変化の波に乗り、新しい自分へ向かいましょう。"),
    (14, "ウィズダムボトル", Clear, Gold, "過去の経験が叡智となって輝きます。"),
    (15, "ヒーリングボトル", Violet, Clear, "癒しの光があなたを包み、変容を促します。"),
    (16, "バイオレットローブ", Violet, Violet, "奉仕と霊性の道を歩む準備ができています。"),
    (17, "トルバドール", Green, Violet, "心の探求の旅が新しい理解をもたらします。"),
    (18, "エジプシャンボトル", Yellow, Violet, "古い知恵を現代に生かすときです。"),
    (19, "リビング・イン・マター", Red, RoyalBlue, "霊的な気づきを現実の行動へ移しましょう。"),
    (20, "スターチャイルド", Blue, Pink, "内なる子どもの純粋さを思い出しましょう。"),
];

/// Position labels in draw order.
pub const POSITIONS: [&str; 4] = ["魂のボトル", "課題のボトル", "現在のボトル", "未来のボトル"];

const BOTTLE_KEYS: PositionKeys = PositionKeys(&[
    ("魂のボトル", "soul"),
    ("課題のボトル", "challenge"),
    ("現在のボトル", "present"),
    ("未来のボトル", "future"),
]);

impl SymbolText for Bottle {
    fn name(&self) -> &str {
        self.name
    }

    fn general_meanings(&self) -> Vec<&str> {
        vec![self.message]
    }

    fn position_meaning(&self, key: &str) -> Option<Cow<'_, str>> {
        let (upper, lower) = (self.upper.meaning(), self.lower.meaning());
        let text = match key {
            "soul" => format!("あなたの本質は{lower}に根ざし、{upper}として表れます。"),
            "challenge" => format!("{upper}を受け入れることが今の課題です。"),
            "present" => format!("いま{upper}が意識に上り、{lower}が支えています。"),
            "future" => format!("やがて{lower}が花開きます。"),
            _ => return None,
        };
        Some(Cow::Owned(text))
    }

    fn category_meaning(&self, category: QuestionCategory) -> Option<Cow<'_, str>> {
        let text = match category {
            QuestionCategory::Love | QuestionCategory::Relationship => {
                format!("{}の色が関係を優しく彩ります。", self.upper.label())
            }
            QuestionCategory::Health => {
                format!("{}の色を身につけ、心身を整えましょう。", self.lower.label())
            }
            _ => format!("{}と{}の調和を意識しましょう。", self.upper.label(), self.lower.label()),
        };
        Some(Cow::Owned(text))
    }
}

/// Aura-Soma has no configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuraSoma;

/// Engine alias for Aura-Soma.
pub type AuraSomaEngine = DivinationEngine<AuraSoma>;

/// A bottle in place.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BottlePosition {
    /// Position label.
    pub position: &'static str,
    /// The bottle.
    pub bottle: Bottle,
    /// Japanese colour pair, upper first.
    pub colors: String,
    /// Interpretation.
    pub interpretation: String,
}

/// A finished Aura-Soma reading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuraSomaReading {
    /// Soul, challenge, present and future.
    pub bottles: Vec<BottlePosition>,
    /// Colour of the soul bottle's lower fraction.
    pub soul_color: Color,
    /// Message.
    pub overall_message: String,
    /// Seed used.
    pub seed: u64,
}

impl Reading for AuraSomaReading {
    fn summary(&self) -> String {
        self.overall_message.clone()
    }

    fn key_symbols(&self) -> Vec<String> {
        self.bottles
            .iter()
            .map(|b| format!("{} {}", b.bottle.number, b.bottle.name))
            .collect()
    }
}

impl Divination for AuraSoma {
    const KIND: DivinationKind = DivinationKind::AuraSoma;
    type Reading = AuraSomaReading;

    fn cast(&self, ctx: &mut ReadingContext<'_>) -> AuraSomaReading {
        let picks = draw_distinct(BOTTLES.len(), POSITIONS.len(), &mut ctx.rng);
        tracing::debug!(?picks, "bottles chosen");

        let category = ctx.category();
        let time = ctx.text_time();
        let bottles: Vec<BottlePosition> = POSITIONS
            .iter()
            .zip(&picks)
            .enumerate()
            .map(|(i, (&position, &idx))| {
                let bottle = BOTTLES[idx];
                BottlePosition {
                    position,
                    colors: format!("{}／{}", bottle.upper.label(), bottle.lower.label()),
                    interpretation: interpret(
                        &bottle,
                        position,
                        &BOTTLE_KEYS,
                        category,
                        time,
                        ctx.variant(i as u64),
                    ),
                    bottle,
                }
            })
            .collect();

        let soul_color = bottles.first().map_or(Color::Clear, |b| b.bottle.lower);
        let overall_message = match (bottles.first(), bottles.last()) {
            (Some(soul), Some(future)) => format!(
                "魂のボトル「{}」が示すのは{}。未来のボトル「{}」へ向けて、{}",
                soul.bottle.name,
                soul_color.meaning(),
                future.bottle.name,
                future.bottle.message
            ),
            _ => String::new(),
        };

        AuraSomaReading {
            bottles,
            soul_color,
            overall_message,
            seed: ctx.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ur_core::{DivinationInput, EngineOptions, FixedClock};

    fn reading(seed: u64) -> AuraSomaReading {
        DivinationEngine::new(AuraSoma, DivinationInput::new("x"))
            .with_options(EngineOptions::default().with_seed(seed))
            .with_clock(FixedClock::from_millis(0))
            .calculate()
    }

    #[test]
    fn bottles_numbered_in_order() {
        for (i, b) in BOTTLES.iter().enumerate() {
            assert_eq!(usize::from(b.number), i + 1);
        }
    }

    #[test]
    fn four_distinct_bottles() {
        for seed in 0..50 {
            let r = reading(seed);
            let labels: Vec<_> = r.bottles.iter().map(|b| b.position).collect();
            assert_eq!(labels, POSITIONS);
            let mut numbers: Vec<u8> = r.bottles.iter().map(|b| b.bottle.number).collect();
            numbers.sort_unstable();
            numbers.dedup();
            assert_eq!(numbers.len(), 4);
        }
    }

    #[test]
    fn soul_colour_is_lower_fraction() {
        let r = reading(9);
        assert_eq!(r.soul_color, r.bottles[0].bottle.lower);
        assert!(r.overall_message.contains(r.bottles[0].bottle.name));
    }

    #[test]
    fn position_text_uses_colour_meanings() {
        let b = &BOTTLES[5];
        let text = b.position_meaning("challenge").unwrap_or_default();
        assert!(text.contains(Color::Red.meaning()));
        assert!(b.position_meaning("nowhere").is_none());
    }
}
