//! Tarot readings.
//!
//! Cards are drawn from the front of a seeded shuffle of the 78-card deck,
//! or from caller-supplied indices topped up from that shuffle. Each card is
//! then turned reversed with probability 0.3, continuing the same generator.

pub mod cards;
pub mod spreads;

pub use cards::{Arcana, DECK_SIZE, DrawnCard, Suit, TarotCard, deck, get_tarot_card};
pub use spreads::{POSITION_KEYS, SpreadInfo, SpreadType, available_spreads};

use std::collections::HashSet;

use serde::Serialize;
use ur_core::engine::{Divination, DivinationEngine, Reading, ReadingContext};
use ur_core::interpret::interpret;
use ur_core::rng::{pick_by_seed, shuffle_with};
use ur_core::DivinationKind;

/// Probability that a drawn card comes up reversed.
pub const REVERSAL_PROBABILITY: f64 = 0.3;

/// Tarot configuration: which spread, and optionally which cards.
#[derive(Debug, Clone, Default)]
pub struct Tarot {
    spread: SpreadType,
    card_indices: Vec<usize>,
}

/// Engine alias for tarot.
pub type TarotEngine = DivinationEngine<Tarot>;

impl Tarot {
    /// Read with the given spread.
    pub fn new(spread: SpreadType) -> Self {
        Self {
            spread,
            card_indices: Vec::new(),
        }
    }

    /// Use these cards, in order, instead of the shuffle's first cards.
    ///
    /// Duplicates and ids outside the deck are dropped; missing positions are
    /// filled from the shuffle.
    pub fn with_card_indices(mut self, indices: Vec<usize>) -> Self {
        self.card_indices = indices;
        self
    }

    /// The spread.
    pub fn spread(&self) -> SpreadType {
        self.spread
    }

    fn select_ids(&self, shuffled: &[usize]) -> Vec<usize> {
        let count = self.spread.card_count();
        let mut seen = HashSet::new();
        let mut ids = Vec::with_capacity(count);

        for &id in &self.card_indices {
            if ids.len() == count {
                break;
            }
            if id >= DECK_SIZE {
                tracing::warn!(id, "ignoring card index outside the deck");
                continue;
            }
            if seen.insert(id) {
                ids.push(id);
            }
        }

        for &id in shuffled {
            if ids.len() == count {
                break;
            }
            if seen.insert(id) {
                ids.push(id);
            }
        }
        ids
    }
}

/// Lightweight view of a card for listings and readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPreview {
    /// Deck id.
    pub id: usize,
    /// Japanese name.
    pub name: String,
    /// English name.
    pub name_en: String,
    /// Major or minor.
    pub arcana: Arcana,
    /// Suit, for minor arcana.
    pub suit: Option<Suit>,
    /// Card number.
    pub number: u8,
    /// Element.
    pub element: &'static str,
    /// Keywords.
    pub keywords: Vec<&'static str>,
}

impl From<&TarotCard> for CardPreview {
    fn from(card: &TarotCard) -> Self {
        Self {
            id: card.id,
            name: card.name.clone(),
            name_en: card.name_en.clone(),
            arcana: card.arcana,
            suit: card.suit,
            number: card.number,
            element: card.element,
            keywords: card.keywords.clone(),
        }
    }
}

/// Preview of the card at `index`, or `None` outside `0..78` (negatives included).
pub fn get_card_preview(index: i64) -> Option<CardPreview> {
    usize::try_from(index)
        .ok()
        .and_then(get_tarot_card)
        .map(CardPreview::from)
}

/// One filled position.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TarotPosition {
    /// Position label.
    pub position: &'static str,
    /// The card.
    pub card: CardPreview,
    /// Whether it came up reversed.
    pub reversed: bool,
    /// Assembled interpretation.
    pub interpretation: String,
}

/// Direction of the first three card numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericTrend {
    /// Each number larger than the last.
    Increasing,
    /// Each number smaller than the last.
    Decreasing,
    /// Anything else.
    Mixed,
}

impl NumericTrend {
    /// Trend of the first three numbers, or `None` with fewer than three.
    pub fn of(numbers: &[u8]) -> Option<Self> {
        match numbers {
            [a, b, c, ..] if a < b && b < c => Some(Self::Increasing),
            [a, b, c, ..] if a > b && b > c => Some(Self::Decreasing),
            [_, _, _, ..] => Some(Self::Mixed),
            _ => None,
        }
    }

    fn message(self) -> &'static str {
        match self {
            Self::Increasing => "数の流れが上昇しており、物事は発展へ向かっています。",
            Self::Decreasing => "数の流れが下降しており、整理と完結の段階にあります。",
            Self::Mixed => "数の流れが入り組んでおり、状況は揺れ動いています。",
        }
    }
}

/// Counts derived from the draw, each with its canned sentence.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TarotModifiers {
    /// Fraction of major arcana.
    pub major_ratio: f64,
    /// Sentence for the major ratio.
    pub major_message: &'static str,
    /// Fraction of reversed cards.
    pub reversed_ratio: f64,
    /// Sentence for the reversed ratio.
    pub reversed_message: &'static str,
    /// Most frequent suit, when it appears at least twice without a tie.
    pub dominant_suit: Option<Suit>,
    /// Sentence for the dominant suit.
    pub suit_message: Option<String>,
    /// Trend of the first three numbers.
    pub numeric_trend: Option<NumericTrend>,
    /// Sentence for the trend.
    pub trend_message: Option<&'static str>,
}

impl TarotModifiers {
    fn from_draw(drawn: &[DrawnCard<'_>]) -> Self {
        let total = drawn.len().max(1) as f64;
        let majors = drawn.iter().filter(|d| d.card.is_major()).count();
        let reversed = drawn.iter().filter(|d| d.reversed).count();
        let major_ratio = majors as f64 / total;
        let reversed_ratio = reversed as f64 / total;

        let major_message = if major_ratio >= 0.5 {
            "大アルカナが多く出ており、人生の大きな転機を示しています。"
        } else if major_ratio >= 0.3 {
            "大アルカナと小アルカナが程よく混ざり、運命と日常が交差しています。"
        } else {
            "小アルカナが中心で、日常の具体的な事柄が焦点です。"
        };

        let reversed_message = if reversed_ratio >= 0.5 {
            "逆位置が多く、内面の見直しや停滞への注意が必要です。"
        } else if reversed_ratio > 0.0 {
            "一部に逆位置があり、慎重さが求められる場面があります。"
        } else {
            "すべて正位置で、流れは素直に開かれています。"
        };

        let dominant_suit = dominant_suit(drawn);
        let numbers: Vec<u8> = drawn.iter().map(|d| d.card.number).collect();
        let numeric_trend = NumericTrend::of(&numbers);

        Self {
            major_ratio,
            major_message,
            reversed_ratio,
            reversed_message,
            dominant_suit,
            suit_message: dominant_suit.map(|s| {
                format!(
                    "{}が優勢で、{}（{}）がテーマとなっています。",
                    s.label(),
                    s.theme(),
                    s.element()
                )
            }),
            numeric_trend,
            trend_message: numeric_trend.map(NumericTrend::message),
        }
    }
}

fn dominant_suit(drawn: &[DrawnCard<'_>]) -> Option<Suit> {
    let mut best: Option<(Suit, usize)> = None;
    let mut tied = false;
    for suit in Suit::all() {
        let n = drawn.iter().filter(|d| d.card.suit == Some(*suit)).count();
        match best {
            Some((_, top)) if n == top => tied = true,
            Some((_, top)) if n < top => {}
            _ => {
                best = Some((*suit, n));
                tied = false;
            }
        }
    }
    match best {
        Some((suit, n)) if n >= 2 && !tied => Some(suit),
        _ => None,
    }
}

/// Lucky items picked by seed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyItems {
    /// Element of the outcome card.
    pub element: &'static str,
    /// Colour.
    pub color: &'static str,
    /// Number 1-9.
    pub number: u8,
    /// Item.
    pub item: &'static str,
}

const LUCKY_COLORS: &[&str] = &["金色", "銀色", "深紅", "藍色", "若草色", "白", "紫", "橙色"];
const LUCKY_ITEMS: &[&str] = &["手帳", "天然石", "香り袋", "鏡", "鍵", "花", "紅茶", "ハンカチ"];

/// A finished tarot reading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TarotReading {
    /// Spread used.
    pub spread: SpreadType,
    /// Spread name.
    pub spread_name: &'static str,
    /// Positions in draw order.
    pub positions: Vec<TarotPosition>,
    /// Overall message.
    pub overall_message: String,
    /// Advice.
    pub advice: String,
    /// Moon phase label.
    pub moon_phase: &'static str,
    /// How the moon colours the reading.
    pub moon_influence: &'static str,
    /// Modifiers.
    pub modifiers: TarotModifiers,
    /// Lucky items.
    pub lucky: LuckyItems,
    /// Category lines per position, at detailed level.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub category_notes: Vec<String>,
    /// Seed used.
    pub seed: u64,
}

impl Reading for TarotReading {
    fn summary(&self) -> String {
        let cards: Vec<String> = self
            .positions
            .iter()
            .map(|p| {
                let mark = if p.reversed { "（逆位置）" } else { "" };
                format!("{}＝{}{}", p.position, p.card.name, mark)
            })
            .collect();
        let mut out = format!(
            "{}: {}。{}",
            self.spread_name,
            cards.join("、"),
            self.overall_message
        );
        for note in &self.category_notes {
            out.push_str(note);
        }
        out
    }

    fn key_symbols(&self) -> Vec<String> {
        self.positions.iter().map(|p| p.card.name.clone()).collect()
    }
}

impl Divination for Tarot {
    const KIND: DivinationKind = DivinationKind::Tarot;
    type Reading = TarotReading;

    fn configuration_label(&self) -> String {
        self.spread.label().to_string()
    }

    fn cast(&self, ctx: &mut ReadingContext<'_>) -> TarotReading {
        let ids: Vec<usize> = (0..DECK_SIZE).collect();
        let shuffled = shuffle_with(&ids, &mut ctx.rng);
        let chosen = self.select_ids(&shuffled);

        let drawn: Vec<DrawnCard<'static>> = chosen
            .iter()
            .filter_map(|&id| get_tarot_card(id))
            .map(|card| DrawnCard {
                card,
                reversed: ctx.rng.chance(REVERSAL_PROBABILITY),
            })
            .collect();
        tracing::debug!(spread = %self.spread, cards = ?chosen, "tarot draw");

        let category = ctx.category();
        let time = ctx.text_time();
        let positions: Vec<TarotPosition> = self
            .spread
            .positions()
            .iter()
            .zip(&drawn)
            .enumerate()
            .map(|(i, (&label, d))| TarotPosition {
                position: label,
                card: CardPreview::from(d.card),
                reversed: d.reversed,
                interpretation: interpret(
                    d,
                    label,
                    &POSITION_KEYS,
                    category,
                    time,
                    ctx.variant(i as u64),
                ),
            })
            .collect();

        let category_notes = if ctx.detailed() {
            positions
                .iter()
                .zip(&drawn)
                .map(|(p, d)| {
                    format!(
                        "{}の{}について：{}",
                        p.position,
                        category.label(),
                        d.card.category_text(category)
                    )
                })
                .collect()
        } else {
            Vec::new()
        };

        let modifiers = TarotModifiers::from_draw(&drawn);
        let outcome = drawn.last();
        let overall_message = match outcome {
            Some(d) => format!(
                "{}が示す鍵は「{}」です。{}{}",
                self.spread.label(),
                d.card.primary_keyword(),
                modifiers.major_message,
                modifiers.reversed_message
            ),
            None => modifiers.major_message.to_string(),
        };
        let advice = match outcome {
            Some(d) if d.reversed => format!("焦らず見直しを。{}", d.card.advice),
            Some(d) => d.card.advice.clone(),
            None => String::new(),
        };

        let seed = ctx.seed;
        let lucky = LuckyItems {
            element: outcome.map_or("風", |d| d.card.element),
            color: pick_by_seed(LUCKY_COLORS, seed).copied().unwrap_or("白"),
            number: (seed % 9 + 1) as u8,
            item: pick_by_seed(LUCKY_ITEMS, seed / 9).copied().unwrap_or("花"),
        };

        TarotReading {
            spread: self.spread,
            spread_name: self.spread.label(),
            positions,
            overall_message,
            advice,
            moon_phase: ctx.moon_phase.label(),
            moon_influence: ctx.moon_phase.influence(),
            modifiers,
            lucky,
            category_notes,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ur_core::{DivinationInput, EngineOptions, FixedClock};

    fn engine(tarot: Tarot, name: &str) -> TarotEngine {
        DivinationEngine::new(tarot, DivinationInput::new(name))
            .with_clock(FixedClock::from_millis(0))
    }

    #[test]
    fn spread_sizes() {
        for spread in SpreadType::all() {
            let r = engine(Tarot::new(*spread), "山田花子").calculate();
            assert_eq!(r.positions.len(), spread.card_count());
        }
    }

    #[test]
    fn celtic_cross_labels_in_order() {
        let r = engine(Tarot::new(SpreadType::CelticCross), "山田花子").calculate();
        let labels: Vec<&str> = r.positions.iter().map(|p| p.position).collect();
        assert_eq!(
            labels,
            [
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
            ]
        );
    }

    #[test]
    fn no_duplicate_cards() {
        for name in ["a", "b", "山田", "Jane Doe", ""] {
            let r = engine(Tarot::new(SpreadType::CelticCross), name).calculate();
            let ids: HashSet<usize> = r.positions.iter().map(|p| p.card.id).collect();
            assert_eq!(ids.len(), 10);
        }
    }

    #[test]
    fn draw_follows_shuffle_of_seed() {
        let opts = EngineOptions::default().with_seed(1);
        let r = engine(Tarot::new(SpreadType::ThreeCard), "x")
            .with_options(opts)
            .calculate();
        let ids: Vec<usize> = (0..DECK_SIZE).collect();
        let expected = ur_core::shuffle(&ids, 1);
        let got: Vec<usize> = r.positions.iter().map(|p| p.card.id).collect();
        assert_eq!(got, expected[..3]);
    }

    #[test]
    fn card_indices_override_with_top_up() {
        let tarot = Tarot::new(SpreadType::ThreeCard).with_card_indices(vec![5, 5, 999]);
        let r = engine(tarot, "x").calculate();
        assert_eq!(r.positions[0].card.id, 5);
        let ids: HashSet<usize> = r.positions.iter().map(|p| p.card.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(r.positions.iter().all(|p| p.card.id < DECK_SIZE));
    }

    #[test]
    fn card_preview_bounds() {
        assert!(get_card_preview(-1).is_none());
        assert!(get_card_preview(78).is_none());
        assert!(get_card_preview(999).is_none());
        assert_eq!(get_card_preview(0).map(|c| c.name), Some("愚者".to_string()));
        assert_eq!(get_card_preview(77).map(|c| c.id), Some(77));
    }

    #[test]
    fn numeric_trend_buckets() {
        assert_eq!(NumericTrend::of(&[1, 2, 3]), Some(NumericTrend::Increasing));
        assert_eq!(NumericTrend::of(&[9, 4, 1, 20]), Some(NumericTrend::Decreasing));
        assert_eq!(NumericTrend::of(&[1, 1, 3]), Some(NumericTrend::Mixed));
        assert_eq!(NumericTrend::of(&[1, 2]), None);
    }

    #[test]
    fn dominant_suit_needs_two_and_no_tie() {
        let deck = deck();
        let mk = |id: usize| DrawnCard {
            card: &deck[id],
            reversed: false,
        };
        // 22, 23 are wands; 36 is cups.
        assert_eq!(dominant_suit(&[mk(22), mk(23), mk(36)]), Some(Suit::Wands));
        assert_eq!(dominant_suit(&[mk(22), mk(36)]), None);
        assert_eq!(dominant_suit(&[mk(0), mk(1)]), None);
    }

    #[test]
    fn detailed_adds_category_notes() {
        let r = engine(Tarot::default(), "x")
            .with_options(EngineOptions::default().with_detail(ur_core::Detail::Detailed))
            .calculate();
        assert_eq!(r.category_notes.len(), 3);
        assert!(r.summary().contains("について："));
        let plain = engine(Tarot::default(), "x").calculate();
        assert!(plain.category_notes.is_empty());
    }

    #[test]
    fn json_shape() {
        let json = engine(Tarot::new(SpreadType::OneCard), "x").calculate_json();
        assert_eq!(json["spread"], "one-card");
        assert_eq!(json["positions"].as_array().map(Vec::len), Some(1));
        assert!(json["positions"][0]["interpretation"].is_string());
        assert!(json["modifiers"]["majorRatio"].is_number());
    }
}
