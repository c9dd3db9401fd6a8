//! Rune casting.
//!
//! Runes are taken without replacement from a seeded shuffle of the chosen
//! row. Only runes whose glyph changes when inverted can fall merkstave.

pub mod tables;

pub use tables::{AETTIR, ANGLO_SAXON_FUTHORC, ELDER_FUTHARK, Rune, YOUNGER_FUTHARK};

use std::borrow::Cow;

use serde::Serialize;
use ur_core::engine::{Divination, DivinationEngine, Reading, ReadingContext};
use ur_core::interpret::{PositionKeys, SymbolText, interpret};
use ur_core::rng::shuffle_with;
use ur_core::{DivinationKind, QuestionCategory, TimeOfDay, UranaiError, UranaiResult};

/// Probability that a reversible rune falls merkstave.
pub const MERKSTAVE_PROBABILITY: f64 = 0.3;

/// Which futhark to cast from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuneSystem {
    /// 24 runes.
    #[default]
    ElderFuthark,
    /// 16 runes.
    YoungerFuthark,
    /// 29 runes.
    AngloSaxon,
}

impl RuneSystem {
    /// All systems.
    pub fn all() -> &'static [Self] {
        &[Self::ElderFuthark, Self::YoungerFuthark, Self::AngloSaxon]
    }

    /// The rune row.
    pub fn runes(self) -> &'static [Rune] {
        match self {
            Self::ElderFuthark => &ELDER_FUTHARK,
            Self::YoungerFuthark => &YOUNGER_FUTHARK,
            Self::AngloSaxon => &ANGLO_SAXON_FUTHORC,
        }
    }

    /// Japanese name.
    pub fn label(self) -> &'static str {
        match self {
            Self::ElderFuthark => "エルダー・フサルク",
            Self::YoungerFuthark => "ヤンガー・フサルク",
            Self::AngloSaxon => "アングロサクソン・フソルク",
        }
    }

    /// Stable machine name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ElderFuthark => "elder-futhark",
            Self::YoungerFuthark => "younger-futhark",
            Self::AngloSaxon => "anglo-saxon",
        }
    }
}

impl std::str::FromStr for RuneSystem {
    type Err = UranaiError;

    fn from_str(s: &str) -> UranaiResult<Self> {
        let key = s.trim().to_lowercase().replace(['_', ' '], "-");
        match key.as_str() {
            "elder" | "elder-futhark" => Ok(Self::ElderFuthark),
            "younger" | "younger-futhark" => Ok(Self::YoungerFuthark),
            "anglo-saxon" | "futhorc" | "anglo-saxon-futhorc" => Ok(Self::AngloSaxon),
            _ => Err(UranaiError::UnknownRuneSystem(s.to_string())),
        }
    }
}

/// Layout of a cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuneCast {
    /// One rune.
    Single,
    /// Urðr, Verðandi, Skuld.
    #[default]
    ThreeNorns,
    /// Five runes in a cross.
    FiveRune,
}

impl RuneCast {
    /// Position labels.
    pub fn positions(self) -> &'static [&'static str] {
        match self {
            Self::Single => &["今日のルーン"],
            Self::ThreeNorns => &["過去", "現在", "未来"],
            Self::FiveRune => &["現在", "過去", "未来", "基盤", "結果"],
        }
    }

    /// Japanese name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Single => "ワンルーン",
            Self::ThreeNorns => "ノルンの三女神",
            Self::FiveRune => "ファイブルーン・クロス",
        }
    }
}

impl std::str::FromStr for RuneCast {
    type Err = UranaiError;

    fn from_str(s: &str) -> UranaiResult<Self> {
        let key = s.trim().to_lowercase().replace(['_', ' '], "-");
        match key.as_str() {
            "single" | "one" | "1" => Ok(Self::Single),
            "three-norns" | "norns" | "three" | "3" => Ok(Self::ThreeNorns),
            "five-rune" | "cross" | "five" | "5" => Ok(Self::FiveRune),
            _ => Err(UranaiError::InvalidOption(format!("unknown rune cast \"{s}\""))),
        }
    }
}

const RUNE_KEYS: PositionKeys = PositionKeys(&[
    ("今日のルーン", "today"),
    ("過去", "past"),
    ("現在", "present"),
    ("未来", "future"),
    ("基盤", "foundation"),
    ("結果", "outcome"),
]);

struct CastRune {
    rune: &'static Rune,
    merkstave: bool,
}

impl SymbolText for CastRune {
    fn name(&self) -> &str {
        self.rune.name
    }

    fn general_meanings(&self) -> Vec<&str> {
        vec![self.rune.meaning]
    }

    fn position_meaning(&self, key: &str) -> Option<Cow<'_, str>> {
        let kw = self.rune.keyword;
        let text = match (key, self.merkstave) {
            ("today", false) => format!("今日は「{kw}」を意識して過ごしましょう。"),
            ("today", true) => format!("今日は「{kw}」の滞りに注意しましょう。"),
            ("past", false) => format!("ウルズの泉には「{kw}」の記憶が沈んでいます。"),
            ("past", true) => format!("過去の「{kw}」がまだ癒えずに残っています。"),
            ("present", false) => format!("ヴェルザンディは「{kw}」を今の糸として紡いでいます。"),
            ("present", true) => format!("今、「{kw}」の糸がもつれています。"),
            ("future", false) => format!("スクルドは「{kw}」の訪れを告げています。"),
            ("future", true) => format!("このままでは「{kw}」が遠のくとスクルドは告げます。"),
            ("foundation", false) => format!("土台には「{kw}」があります。"),
            ("foundation", true) => format!("土台の「{kw}」が揺らいでいます。"),
            ("outcome", false) => format!("結果として「{kw}」へ導かれます。"),
            ("outcome", true) => format!("結果として「{kw}」の試練が残ります。"),
            _ => return None,
        };
        Some(Cow::Owned(text))
    }

    fn category_meaning(&self, category: QuestionCategory) -> Option<Cow<'_, str>> {
        let kw = self.rune.keyword;
        let text = match category {
            QuestionCategory::Love | QuestionCategory::Relationship => {
                format!("人との縁において「{kw}」が鍵となります。")
            }
            QuestionCategory::Career => format!("仕事では「{kw}」を活かしましょう。"),
            QuestionCategory::Money => format!("金運は「{kw}」の在り方に左右されます。"),
            QuestionCategory::Health => format!("心身には「{kw}」のリズムを取り入れましょう。"),
            QuestionCategory::Spiritual | QuestionCategory::General => {
                format!("魂は「{kw}」の教えを求めています。")
            }
        };
        Some(Cow::Owned(text))
    }

    fn time_meaning(&self, time: TimeOfDay) -> Option<Cow<'_, str>> {
        let text = match time {
            TimeOfDay::Morning => "朝の光の中でこのルーンの力は目覚めます。",
            TimeOfDay::Afternoon => "日中の行動にこのルーンの力を注ぎましょう。",
            TimeOfDay::Evening => "夜の静けさの中でこのルーンに語りかけてください。",
        };
        Some(Cow::Borrowed(text))
    }
}

/// Rune configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Runes {
    system: RuneSystem,
    cast: RuneCast,
}

/// Engine alias for runes.
pub type RunesEngine = DivinationEngine<Runes>;

impl Runes {
    /// Cast from a system with a layout.
    pub fn new(system: RuneSystem, cast: RuneCast) -> Self {
        Self { system, cast }
    }

    /// The rune row.
    pub fn system(&self) -> RuneSystem {
        self.system
    }

    /// The layout.
    pub fn cast_layout(&self) -> RuneCast {
        self.cast
    }
}

/// One rune in place.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunePosition {
    /// Position label.
    pub position: &'static str,
    /// The rune.
    pub rune: Rune,
    /// Aett name, Elder Futhark only.
    pub aett: Option<&'static str>,
    /// Whether it fell merkstave.
    pub merkstave: bool,
    /// Interpretation.
    pub interpretation: String,
}

/// A finished rune cast.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuneReading {
    /// The rune row.
    pub system: RuneSystem,
    /// The layout.
    pub cast: RuneCast,
    /// Runes in position order.
    pub runes: Vec<RunePosition>,
    /// Aett most represented, Elder Futhark only.
    pub dominant_aett: Option<&'static str>,
    /// Overall message.
    pub overall_message: String,
    /// Seed used.
    pub seed: u64,
}

impl Reading for RuneReading {
    fn summary(&self) -> String {
        let parts: Vec<String> = self
            .runes
            .iter()
            .map(|r| {
                let mark = if r.merkstave { "（逆）" } else { "" };
                format!("{}＝{}{}{}", r.position, r.rune.character, r.rune.name, mark)
            })
            .collect();
        format!("{}: {}。{}", self.cast.label(), parts.join("、"), self.overall_message)
    }

    fn key_symbols(&self) -> Vec<String> {
        self.runes.iter().map(|r| r.rune.name.to_string()).collect()
    }
}

impl Divination for Runes {
    const KIND: DivinationKind = DivinationKind::Runes;
    type Reading = RuneReading;

    fn configuration_label(&self) -> String {
        format!("{}・{}", self.system.label(), self.cast.label())
    }

    fn cast(&self, ctx: &mut ReadingContext<'_>) -> RuneReading {
        let row = self.system.runes();
        let order: Vec<usize> = (0..row.len()).collect();
        let shuffled = shuffle_with(&order, &mut ctx.rng);
        let labels = self.cast.positions();

        let drawn: Vec<(usize, CastRune)> = shuffled
            .iter()
            .take(labels.len())
            .map(|&i| {
                let rune = &row[i];
                let merkstave = rune.reversible && ctx.rng.chance(MERKSTAVE_PROBABILITY);
                (i, CastRune { rune, merkstave })
            })
            .collect();
        let picks: Vec<usize> = drawn.iter().map(|(i, _)| *i).collect();
        tracing::debug!(system = self.system.as_str(), ?picks, "rune cast");

        let category = ctx.category();
        let time = ctx.text_time();
        let elder = self.system == RuneSystem::ElderFuthark;
        let runes: Vec<RunePosition> = labels
            .iter()
            .zip(&drawn)
            .enumerate()
            .map(|(n, (&label, (i, cast)))| RunePosition {
                position: label,
                rune: *cast.rune,
                aett: elder.then(|| AETTIR[i / 8]),
                merkstave: cast.merkstave,
                interpretation: interpret(
                    cast,
                    label,
                    &RUNE_KEYS,
                    category,
                    time,
                    ctx.variant(n as u64),
                ),
            })
            .collect();

        let dominant_aett = if elder {
            let mut counts = [0usize; 3];
            for (i, _) in &drawn {
                counts[i / 8] += 1;
            }
            let max = counts.iter().copied().max().unwrap_or(0);
            let leaders: Vec<usize> = (0..3).filter(|&a| counts[a] == max).collect();
            match leaders.as_slice() {
                [only] if max >= 2 => Some(AETTIR[*only]),
                _ => None,
            }
        } else {
            None
        };

        let merkstave = runes.iter().filter(|r| r.merkstave).count();
        let tone = match merkstave {
            0 => "ルーンは障りなく開かれ、流れに乗る時を示しています。",
            n if n * 2 < runes.len() => "一部のルーンが逆位置にあり、立ち止まって見直す点があります。",
            _ => "多くのルーンが逆位置にあり、内省と休息が求められています。",
        };
        let overall_message = match runes.last() {
            Some(last) => format!("鍵となるのは「{}」です。{}", last.rune.keyword, tone),
            None => tone.to_string(),
        };

        RuneReading {
            system: self.system,
            cast: self.cast,
            runes,
            dominant_aett,
            overall_message,
            seed: ctx.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use ur_core::{DivinationInput, EngineOptions, FixedClock};

    fn reading(system: RuneSystem, cast: RuneCast, seed: u64) -> RuneReading {
        DivinationEngine::new(Runes::new(system, cast), DivinationInput::new("x"))
            .with_options(EngineOptions::default().with_seed(seed))
            .with_clock(FixedClock::from_millis(0))
            .calculate()
    }

    #[test]
    fn layouts_have_their_sizes() {
        for system in RuneSystem::all() {
            assert_eq!(reading(*system, RuneCast::Single, 3).runes.len(), 1);
            assert_eq!(reading(*system, RuneCast::ThreeNorns, 3).runes.len(), 3);
            assert_eq!(reading(*system, RuneCast::FiveRune, 3).runes.len(), 5);
        }
    }

    #[test]
    fn no_rune_repeats() {
        for seed in 0..40 {
            let r = reading(RuneSystem::YoungerFuthark, RuneCast::FiveRune, seed);
            let names: HashSet<&str> = r.runes.iter().map(|p| p.rune.name).collect();
            assert_eq!(names.len(), 5);
        }
    }

    #[test]
    fn symmetric_runes_never_merkstave() {
        for seed in 0..200 {
            let r = reading(RuneSystem::ElderFuthark, RuneCast::FiveRune, seed);
            for p in &r.runes {
                if !p.rune.reversible {
                    assert!(!p.merkstave, "{} fell merkstave", p.rune.name);
                }
            }
        }
    }

    #[test]
    fn aett_only_for_elder() {
        let elder = reading(RuneSystem::ElderFuthark, RuneCast::ThreeNorns, 9);
        assert!(elder.runes.iter().all(|p| p.aett.is_some()));
        let saxon = reading(RuneSystem::AngloSaxon, RuneCast::ThreeNorns, 9);
        assert!(saxon.runes.iter().all(|p| p.aett.is_none()));
        assert!(saxon.dominant_aett.is_none());
    }

    #[test]
    fn parse_names() {
        assert_eq!("elder".parse::<RuneSystem>().ok(), Some(RuneSystem::ElderFuthark));
        assert_eq!("Anglo Saxon".parse::<RuneSystem>().ok(), Some(RuneSystem::AngloSaxon));
        assert!("ogham".parse::<RuneSystem>().is_err());
        assert_eq!("norns".parse::<RuneCast>().ok(), Some(RuneCast::ThreeNorns));
        assert!("seven".parse::<RuneCast>().is_err());
    }
}
