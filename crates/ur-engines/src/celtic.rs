//! Celtic ogham readings and the tree calendar.
//!
//! Three staves are drawn from a seeded shuffle of the twenty few. The
//! birth date places the person in one of the thirteen lunar tree months.

use std::borrow::Cow;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use ur_core::engine::{Divination, DivinationEngine, Reading, ReadingContext};
use ur_core::interpret::{PositionKeys, SymbolText, interpret};
use ur_core::rng::shuffle_with;
use ur_core::{DivinationKind, QuestionCategory};

/// Staves drawn per reading, labelled past, present and future.
pub const STAVE_POSITIONS: [&str; 3] = ["過去", "現在", "未来"];

const STAVE_KEYS: PositionKeys =
    PositionKeys(&[("過去", "past"), ("現在", "present"), ("未来", "future")]);

/// One ogham letter (fid).
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ogham {
    /// Irish name.
    pub name: &'static str,
    /// Glyph.
    pub character: &'static str,
    /// Tree.
    pub tree: &'static str,
    /// Group of five it belongs to, 1-4.
    pub aicme: u8,
    /// Keyword.
    pub keyword: &'static str,
    /// Meaning.
    pub meaning: &'static str,
}

macro_rules! ogham {
    ($(($name:expr, $ch:expr, $tree:expr, $a:expr, $k:expr, $m:expr)),* $(,)?) => {
        [$(Ogham { name: $name, character: $ch, tree: $tree, aicme: $a, keyword: $k, meaning: $m }),*]
    };
}

/// The twenty few in alphabet order.
pub static OGHAM: [Ogham; 20] = ogham![
    ("Beith", "ᚁ", "白樺", 1, "始まり", "新しい始まりと浄化。古いものを払い、一歩を踏み出すときです。"),
    ("Luis", "ᚂ", "ナナカマド", 1, "守護", "見えない害から身を守る力。直感が鋭く冴えています。"),
    ("Fearn", "ᚃ", "ハンノキ", 1, "支え", "橋をかける力。困難の中でも足場を築けます。"),
    ("Sail", "ᚄ", "柳", 1, "直感", "月と水の導き。感情の流れに身を任せましょう。"),
    ("Nion", "ᚅ", "トネリコ", 1, "つながり", "内と外の世界を結ぶ力。大きな流れの一部であることを知りましょう。"),
    ("Huath", "ᚆ", "サンザシ", 2, "試練", "足止めの時期。焦らず準備を整えることが実りにつながります。"),
    ("Duir", "ᚇ", "オーク", 2, "強さ", "揺るがぬ強さと扉。真の力で新しい領域へ進めます。"),
    ("Tinne", "ᚈ", "ヒイラギ", 2, "挑戦", "均衡を保つ戦士の力。正しいことのために立ち上がりましょう。"),
    ("Coll", "ᚉ", "ハシバミ", 2, "知恵", "知恵と霊感の泉。学びと創造が実を結びます。"),
    ("Quert", "ᚊ", "林檎", 2, "選択", "美と選択。心が本当に望むものを選びましょう。"),
    ("Muin", "ᚋ", "葡萄", 3, "収穫", "内省と収穫。真実を語ることで恵みが訪れます。"),
    ("Gort", "ᚌ", "蔦", 3, "成長", "粘り強い成長。迂回しながらも確実に目標へ向かいます。"),
    ("Ngetal", "ᚍ", "葦", 3, "調和", "まっすぐな意志。混乱の中に秩序をもたらします。"),
    ("Straif", "ᚎ", "リンボク", 3, "宿命", "避けられない変化。抵抗せず受け入れることで道が開けます。"),
    ("Ruis", "ᚏ", "ニワトコ", 3, "終わり", "終わりと再生。一つの章を閉じ、次へ進みましょう。"),
    ("Ailm", "ᚐ", "モミ", 4, "展望", "高みからの視点。全体を見渡せば答えが見えます。"),
    ("Onn", "ᚑ", "ハリエニシダ", 4, "希望", "集める力。希望を抱いて資源を蓄えましょう。"),
    ("Ur", "ᚒ", "ヒース", 4, "癒し", "情熱と癒し。大地とつながり心を温めましょう。"),
    ("Eadhadh", "ᚓ", "ポプラ", 4, "克服", "恐れを乗り越える力。揺れながらも折れない心です。"),
    ("Idad", "ᚔ", "イチイ", 4, "永遠", "死と再生、永遠の循環。深い変容が訪れます。"),
];

impl SymbolText for Ogham {
    fn name(&self) -> &str {
        self.name
    }

    fn general_meanings(&self) -> Vec<&str> {
        vec![self.meaning]
    }

    fn position_meaning(&self, key: &str) -> Option<Cow<'_, str>> {
        let text = match key {
            "past" => format!("{}の「{}」があなたの土台を築きました。", self.tree, self.keyword),
            "present" => format!("いま{}の「{}」の力が働いています。", self.tree, self.keyword),
            "future" => format!("やがて{}の「{}」が訪れます。", self.tree, self.keyword),
            _ => return None,
        };
        Some(Cow::Owned(text))
    }

    fn category_meaning(&self, category: QuestionCategory) -> Option<Cow<'_, str>> {
        let text = match category {
            QuestionCategory::Love | QuestionCategory::Relationship => {
                format!("{}の木のように、関係を根気よく育てましょう。", self.tree)
            }
            QuestionCategory::Career | QuestionCategory::Money => {
                format!("「{}」を仕事の指針にしましょう。", self.keyword)
            }
            _ => format!("{}の精霊があなたに寄り添っています。", self.tree),
        };
        Some(Cow::Owned(text))
    }
}

/// Japanese name of an aicme.
pub fn aicme_name(aicme: u8) -> &'static str {
    match aicme {
        1 => "ベイハ族",
        2 => "フーア族",
        3 => "ムィン族",
        _ => "アルム族",
    }
}

/// One month of the tree calendar.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeMonth {
    /// Ogham letter of the month.
    pub ogham: &'static str,
    /// Tree.
    pub tree: &'static str,
    /// First day as (month, day).
    pub start: (u32, u32),
    /// Personality of those born in it.
    pub personality: &'static str,
}

/// The thirteen lunar tree months, Birch first.
pub static TREE_MONTHS: [TreeMonth; 13] = [
    TreeMonth { ogham: "Beith", tree: "白樺", start: (12, 24), personality: "意欲的で野心があり、新しいことを始める力に満ちています。" },
    TreeMonth { ogham: "Luis", tree: "ナナカマド", start: (1, 21), personality: "独創的で理想が高く、人を守る優しさを持っています。" },
    TreeMonth { ogham: "Nion", tree: "トネリコ", start: (2, 18), personality: "想像力豊かで芸術的、自由を愛する人です。" },
    TreeMonth { ogham: "Fearn", tree: "ハンノキ", start: (3, 18), personality: "行動的で自信に満ち、人を導く力があります。" },
    TreeMonth { ogham: "Sail", tree: "柳", start: (4, 15), personality: "感受性が強く直感に優れ、月のリズムとともに生きます。" },
    TreeMonth { ogham: "Huath", tree: "サンザシ", start: (5, 13), personality: "一見穏やかでも内に強い情熱を秘めています。" },
    TreeMonth { ogham: "Duir", tree: "オーク", start: (6, 10), personality: "強く寛大で、周囲の支えとなる頼もしい存在です。" },
    TreeMonth { ogham: "Tinne", tree: "ヒイラギ", start: (7, 8), personality: "気高く誠実で、困難に立ち向かう戦士の心を持ちます。" },
    TreeMonth { ogham: "Coll", tree: "ハシバミ", start: (8, 5), personality: "知的で分析力に優れ、物事の本質を見抜きます。" },
    TreeMonth { ogham: "Muin", tree: "葡萄", start: (9, 2), personality: "繊細で美的感覚に優れ、調和を大切にします。" },
    TreeMonth { ogham: "Gort", tree: "蔦", start: (9, 30), personality: "忍耐強く思いやりがあり、困難をしなやかに越えます。" },
    TreeMonth { ogham: "Ngetal", tree: "葦", start: (10, 28), personality: "洞察が鋭く、隠された真実を探り当てます。" },
    TreeMonth { ogham: "Ruis", tree: "ニワトコ", start: (11, 25), personality: "自由な探求者で、変化を恐れず人生を楽しみます。" },
];

/// The day outside the thirteen months.
pub const NAMELESS_DAY: (u32, u32) = (12, 23);

/// Tree month of a date. The nameless day closes the Elder month.
pub fn tree_month(date: NaiveDate) -> &'static TreeMonth {
    let md = (date.month(), date.day());
    if md >= TREE_MONTHS[0].start {
        return &TREE_MONTHS[0];
    }
    // Before Rowan starts on 1/21 the date is still in Birch.
    TREE_MONTHS[1..]
        .iter()
        .filter(|m| m.start <= md)
        .max_by_key(|m| m.start)
        .unwrap_or(&TREE_MONTHS[0])
}

/// Celtic readings have no configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Celtic;

/// Engine alias for Celtic readings.
pub type CelticEngine = DivinationEngine<Celtic>;

/// A stave in place.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StavePosition {
    /// Position label.
    pub position: &'static str,
    /// The fid.
    pub ogham: Ogham,
    /// Japanese aicme name.
    pub aicme_name: &'static str,
    /// Interpretation.
    pub interpretation: String,
}

/// A finished Celtic reading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CelticReading {
    /// Past, present and future staves.
    pub staves: Vec<StavePosition>,
    /// Birth tree month, when the birth date is known.
    pub tree_month: Option<TreeMonth>,
    /// Born on the nameless day.
    pub nameless_day: bool,
    /// Message.
    pub overall_message: String,
    /// Seed used.
    pub seed: u64,
}

impl Reading for CelticReading {
    fn summary(&self) -> String {
        self.overall_message.clone()
    }

    fn key_symbols(&self) -> Vec<String> {
        self.staves.iter().map(|s| s.ogham.name.to_string()).collect()
    }
}

impl Divination for Celtic {
    const KIND: DivinationKind = DivinationKind::Celtic;
    type Reading = CelticReading;

    fn cast(&self, ctx: &mut ReadingContext<'_>) -> CelticReading {
        let ids: Vec<usize> = (0..OGHAM.len()).collect();
        let drawn = shuffle_with(&ids, &mut ctx.rng);
        tracing::debug!(picks = ?&drawn[..STAVE_POSITIONS.len()], "ogham staves drawn");

        let category = ctx.category();
        let time = ctx.text_time();
        let staves: Vec<StavePosition> = STAVE_POSITIONS
            .iter()
            .zip(&drawn)
            .enumerate()
            .map(|(i, (&position, &id))| {
                let ogham = OGHAM[id];
                StavePosition {
                    position,
                    aicme_name: aicme_name(ogham.aicme),
                    interpretation: interpret(
                        &ogham,
                        position,
                        &STAVE_KEYS,
                        category,
                        time,
                        ctx.variant(i as u64),
                    ),
                    ogham,
                }
            })
            .collect();

        let month = ctx.input.birth_date.map(tree_month).copied();
        let nameless_day = ctx
            .input
            .birth_date
            .is_some_and(|d| (d.month(), d.day()) == NAMELESS_DAY);

        let mut overall_message = String::new();
        if let Some(m) = &month {
            overall_message.push_str(&format!("あなたは{}の月の生まれ。{}", m.tree, m.personality));
        }
        if nameless_day {
            overall_message.push_str("一年の外にある名もなき日に生まれた、特別な魂です。");
        }
        if let Some(present) = staves.get(1) {
            overall_message.push_str(&format!(
                "いまは{}（{}）の「{}」が鍵となります。",
                present.ogham.name, present.ogham.tree, present.ogham.keyword
            ));
        }

        CelticReading {
            staves,
            tree_month: month,
            nameless_day,
            overall_message,
            seed: ctx.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ur_core::{DivinationInput, EngineOptions, FixedClock, shuffle};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2001, m, d).unwrap()
    }

    fn reading(input: DivinationInput, seed: u64) -> CelticReading {
        DivinationEngine::new(Celtic, input)
            .with_options(EngineOptions::default().with_seed(seed))
            .with_clock(FixedClock::from_millis(0))
            .calculate()
    }

    #[test]
    fn four_aicme_of_five() {
        for a in 1..=4 {
            assert_eq!(OGHAM.iter().filter(|o| o.aicme == a).count(), 5);
        }
    }

    #[test]
    fn tree_month_boundaries() {
        assert_eq!(tree_month(date(1, 1)).ogham, "Beith");
        assert_eq!(tree_month(date(1, 20)).ogham, "Beith");
        assert_eq!(tree_month(date(1, 21)).ogham, "Luis");
        assert_eq!(tree_month(date(6, 10)).ogham, "Duir");
        assert_eq!(tree_month(date(12, 22)).ogham, "Ruis");
        assert_eq!(tree_month(date(12, 23)).ogham, "Ruis");
        assert_eq!(tree_month(date(12, 24)).ogham, "Beith");
    }

    #[test]
    fn tree_months_name_real_few() {
        for m in &TREE_MONTHS {
            assert!(OGHAM.iter().any(|o| o.name == m.ogham && o.tree == m.tree), "{}", m.ogham);
        }
    }

    #[test]
    fn three_staves_from_the_shuffle() {
        let r = reading(DivinationInput::new("x"), 1);
        let labels: Vec<_> = r.staves.iter().map(|s| s.position).collect();
        assert_eq!(labels, STAVE_POSITIONS);
        let ids: Vec<usize> = (0..20).collect();
        let expected: Vec<&str> = shuffle(&ids, 1)[..3].iter().map(|&i| OGHAM[i].name).collect();
        let got: Vec<&str> = r.staves.iter().map(|s| s.ogham.name).collect();
        assert_eq!(got, expected);
        assert!(r.tree_month.is_none());
    }

    #[test]
    fn nameless_day_is_flagged() {
        let r = reading(DivinationInput::new("x").with_birth_date(date(12, 23)), 2);
        assert!(r.nameless_day);
        assert!(r.overall_message.contains("名もなき日"));
    }
}
