//! Kabbalistic readings on the Tree of Life.
//!
//! Three sephirot are placed: the soul sephira from the name, the birth
//! sephira from the birth date digits and the question sephira from the seed.

pub mod tree;

pub use tree::{PATHS, Pillar, SEPHIROT, Sephira, TreePath, get_sephira, path_between};

use std::borrow::Cow;

use serde::Serialize;
use ur_core::engine::{Divination, DivinationEngine, Reading, ReadingContext};
use ur_core::interpret::{PositionKeys, SymbolText, interpret};
use ur_core::seed::char_code_sum;
use ur_core::{DivinationKind, QuestionCategory};

use crate::numerology::{date_digit_sum, digit_sum};
use crate::tarot::get_tarot_card;

const SEPHIRA_KEYS: PositionKeys = PositionKeys(&[
    ("魂のセフィラ", "soul"),
    ("誕生のセフィラ", "birth"),
    ("問いのセフィラ", "question"),
]);

impl SymbolText for Sephira {
    fn name(&self) -> &str {
        self.title
    }

    fn general_meanings(&self) -> Vec<&str> {
        vec![self.meaning]
    }

    fn position_meaning(&self, key: &str) -> Option<Cow<'_, str>> {
        let text = match key {
            "soul" => format!("あなたの魂は{}（{}）の光を宿しています。", self.title, self.name),
            "birth" => format!("生まれ持った課題は「{}」", self.lesson),
            "question" => format!("この問いには{}の守護天使{}が応えます。", self.title, self.archangel),
            _ => return None,
        };
        Some(Cow::Owned(text))
    }

    fn category_meaning(&self, category: QuestionCategory) -> Option<Cow<'_, str>> {
        let text = match category {
            QuestionCategory::Love | QuestionCategory::Relationship => {
                format!("愛においては{}の力が絆を照らします。", self.title)
            }
            QuestionCategory::Career | QuestionCategory::Money => {
                format!("現実面では{}のエネルギーを形にしましょう。", self.title)
            }
            QuestionCategory::Health => {
                format!("{}を司る{}の流れを整えましょう。", self.pillar.label(), self.title)
            }
            QuestionCategory::Spiritual | QuestionCategory::General => {
                format!("{}に沿って内なる旅を進めましょう。", self.pillar.label())
            }
        };
        Some(Cow::Owned(text))
    }
}

/// Reduce a digit sum until it names a sephira (1-10).
pub fn reduce_to_tree(mut n: u64) -> u8 {
    while n > 10 {
        n = digit_sum(n);
    }
    n.max(1) as u8
}

/// Kabbalah has no configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kabbalah;

/// Engine alias for kabbalah.
pub type KabbalahEngine = DivinationEngine<Kabbalah>;

/// A sephira in place.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedSephira {
    /// Role label.
    pub role: &'static str,
    /// The sephira.
    pub sephira: Sephira,
    /// Interpretation.
    pub interpretation: String,
}

/// The path joining soul and birth sephirot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathReading {
    /// The path.
    pub path: TreePath,
    /// Major arcanum on the path.
    pub tarot: Option<String>,
    /// Text.
    pub text: String,
}

/// A finished kabbalah reading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KabbalahReading {
    /// Soul, birth and question sephirot.
    pub sephirot: Vec<PlacedSephira>,
    /// Path between soul and birth, when they are joined.
    pub path: Option<PathReading>,
    /// Pillar most represented, if any holds two or more.
    pub dominant_pillar: Option<Pillar>,
    /// Pillar message.
    pub pillar_message: String,
    /// Whether a birth date was given.
    pub birth_date_known: bool,
    /// Seed used.
    pub seed: u64,
}

impl Reading for KabbalahReading {
    fn summary(&self) -> String {
        let names: Vec<String> = self
            .sephirot
            .iter()
            .map(|p| format!("{}＝{}", p.role, p.sephira.title))
            .collect();
        let mut out = format!("{}。{}", names.join("、"), self.pillar_message);
        if let Some(p) = &self.path {
            out.push_str(&p.text);
        }
        out
    }

    fn key_symbols(&self) -> Vec<String> {
        self.sephirot.iter().map(|p| p.sephira.name.to_string()).collect()
    }
}

impl Divination for Kabbalah {
    const KIND: DivinationKind = DivinationKind::Kabbalah;
    type Reading = KabbalahReading;

    fn cast(&self, ctx: &mut ReadingContext<'_>) -> KabbalahReading {
        let known = ctx.input.birth_date.is_some();
        let birth_date = ctx.input.birth_date_or_epoch();

        let soul = (char_code_sum(&ctx.input.full_name) % 10 + 1) as u8;
        let birth = reduce_to_tree(date_digit_sum(birth_date));
        let question = (ctx.seed % 10 + 1) as u8;
        tracing::debug!(soul, birth, question, "sephirot placed");

        let category = ctx.category();
        let time = ctx.text_time();
        let roles = [
            ("魂のセフィラ", soul),
            ("誕生のセフィラ", birth),
            ("問いのセフィラ", question),
        ];
        let sephirot: Vec<PlacedSephira> = roles
            .into_iter()
            .enumerate()
            .filter_map(|(i, (role, n))| {
                get_sephira(n).map(|s| PlacedSephira {
                    role,
                    sephira: *s,
                    interpretation: interpret(
                        s,
                        role,
                        &SEPHIRA_KEYS,
                        category,
                        time,
                        ctx.variant(i as u64),
                    ),
                })
            })
            .collect();

        let path = path_between(soul, birth).map(|p| {
            let tarot = get_tarot_card(p.tarot_id()).map(|c| c.name.clone());
            let text = format!(
                "魂と誕生をつなぐ第{}の小径（{} {}）は「{}」を示します。",
                p.number, p.letter, p.letter_name, p.meaning
            );
            PathReading {
                path: *p,
                tarot,
                text,
            }
        });

        let count = |pillar: Pillar| {
            sephirot
                .iter()
                .filter(|s| s.sephira.pillar == pillar)
                .count()
        };
        let dominant_pillar = [Pillar::Mercy, Pillar::Severity, Pillar::Balance]
            .into_iter()
            .find(|p| count(*p) >= 2);
        let pillar_message = match dominant_pillar {
            Some(Pillar::Mercy) => "慈悲の柱が強く、拡大と寛容の時です。".to_string(),
            Some(Pillar::Severity) => "峻厳の柱が強く、規律と見極めの時です。".to_string(),
            Some(Pillar::Balance) => "均衡の柱が強く、中心を保つことで道が開けます。".to_string(),
            None => "三つの柱がそろい、生命の樹全体の調和が求められています。".to_string(),
        };

        KabbalahReading {
            sephirot,
            path,
            dominant_pillar,
            pillar_message,
            birth_date_known: known,
            seed: ctx.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ur_core::{DivinationInput, EngineOptions, FixedClock};

    fn reading(input: DivinationInput, seed: u64) -> KabbalahReading {
        DivinationEngine::new(Kabbalah, input)
            .with_options(EngineOptions::default().with_seed(seed))
            .with_clock(FixedClock::from_millis(0))
            .calculate()
    }

    #[test]
    fn reduce_to_tree_range() {
        assert_eq!(reduce_to_tree(10), 10);
        assert_eq!(reduce_to_tree(30), 3);
        assert_eq!(reduce_to_tree(19), 10);
        assert_eq!(reduce_to_tree(0), 1);
    }

    #[test]
    fn three_sephirot_placed() {
        let r = reading(DivinationInput::new("x"), 7);
        assert_eq!(r.sephirot.len(), 3);
        // 'x' = 120 -> 120 % 10 + 1 = 1
        assert_eq!(r.sephirot[0].sephira.number, 1);
        // 1970-01-01 -> 19 -> 10
        assert_eq!(r.sephirot[1].sephira.number, 10);
        assert_eq!(r.sephirot[2].sephira.number, 8);
        assert!(!r.birth_date_known);
    }

    #[test]
    fn path_when_joined() {
        // 'y' = 121 -> 2 (Chokhmah); 1990-05-15 -> 30 -> 3 (Binah); 2-3 is Daleth.
        let date = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
        let r = reading(DivinationInput::new("y").with_birth_date(date), 0);
        let path = r.path.expect("path between 2 and 3");
        assert_eq!(path.path.letter_name, "Daleth");
        assert_eq!(path.tarot.as_deref(), Some("女帝"));
    }

    #[test]
    fn no_path_when_not_joined() {
        // soul 1, birth 10
        let r = reading(DivinationInput::new("x"), 0);
        assert!(r.path.is_none());
    }
}
