//! I Ching readings.
//!
//! Six lines are cast bottom to top. Lines of 6 or 9 change and, when any do,
//! produce a resulting hexagram.

pub mod hexagrams;

pub use hexagrams::{HEXAGRAMS, Hexagram, KING_WEN, Trigram, get_hexagram};

use chrono::{Datelike, Duration, Timelike};
use serde::Serialize;
use ur_core::engine::{Divination, DivinationEngine, Reading, ReadingContext};
use ur_core::interpret::{PositionKeys, interpret};
use ur_core::lines::{LineValue, cast_line, cast_six, coin_line};
use ur_core::{DivinationKind, Lcg, UranaiError, UranaiResult};

/// How the six lines are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CastingMethod {
    /// Yarrow stalk probabilities (1/16, 5/16, 7/16, 3/16).
    #[default]
    Yarrow,
    /// Three coins per line.
    Coins,
    /// Plum blossom numerology on the date and hour of the reading.
    PlumBlossom,
    /// Yarrow probabilities from a generator mixed with the current time.
    Time,
}

impl CastingMethod {
    /// All methods.
    pub fn all() -> &'static [Self] {
        &[Self::Yarrow, Self::Coins, Self::PlumBlossom, Self::Time]
    }

    /// Stable machine name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yarrow => "yarrow",
            Self::Coins => "coins",
            Self::PlumBlossom => "plum-blossom",
            Self::Time => "time",
        }
    }

    /// Japanese name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Yarrow => "筮竹法",
            Self::Coins => "擲銭法",
            Self::PlumBlossom => "梅花心易",
            Self::Time => "時刻起卦",
        }
    }
}

impl std::str::FromStr for CastingMethod {
    type Err = UranaiError;

    fn from_str(s: &str) -> UranaiResult<Self> {
        let key = s.trim().to_lowercase().replace(['_', ' '], "-");
        match key.as_str() {
            "yarrow" | "yarrow-stalk" | "筮竹" => Ok(Self::Yarrow),
            "coins" | "coin" | "three-coins" | "擲銭" => Ok(Self::Coins),
            "plum-blossom" | "plum" | "梅花" => Ok(Self::PlumBlossom),
            "time" | "time-based" | "時刻" => Ok(Self::Time),
            _ => Err(UranaiError::UnknownCastingMethod(s.to_string())),
        }
    }
}

impl std::fmt::Display for CastingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const LINE_LABELS: [&str; 6] = ["初爻", "二爻", "三爻", "四爻", "五爻", "上爻"];

const LINE_THEMES: [&str; 6] = [
    "物事の始まりにあたり、軽率に動かず基礎を固めることが求められます。",
    "内にあって中庸を得ています。実力を認める人が現れます。",
    "内から外への境目です。慎重さを欠くと危うさが生じます。",
    "上に近づく立場です。周囲との調和を意識しましょう。",
    "最も尊い位置です。徳をもって人を導くことができます。",
    "極まりの位置です。行き過ぎを戒め、引き際を見極めましょう。",
];

const HEXAGRAM_KEYS: PositionKeys = PositionKeys(&[("本卦", "primary"), ("之卦", "resulting")]);

/// I Ching configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct IChing {
    method: CastingMethod,
}

/// Engine alias for the I Ching.
pub type IChingEngine = DivinationEngine<IChing>;

impl IChing {
    /// Cast with the given method.
    pub fn new(method: CastingMethod) -> Self {
        Self { method }
    }

    /// The casting method.
    pub fn method(&self) -> CastingMethod {
        self.method
    }

    fn cast_lines(&self, ctx: &mut ReadingContext<'_>) -> [LineValue; 6] {
        match self.method {
            CastingMethod::Yarrow => cast_six(&mut ctx.rng, cast_line),
            CastingMethod::Coins => cast_six(&mut ctx.rng, coin_line),
            CastingMethod::PlumBlossom => plum_blossom_lines(ctx),
            CastingMethod::Time => {
                let now = ctx.now;
                let mix = u64::from(now.timestamp_subsec_millis())
                    + u64::from(now.second()) * 1_000
                    + u64::from(now.minute()) * 60_000;
                let mut lcg = Lcg::new(ctx.seed.wrapping_add(mix));
                cast_six(&mut lcg, cast_line)
            }
        }
    }
}

/// Plum blossom: upper trigram from year+month+day, lower from that plus the
/// hour, moving line from the same total mod 6.
fn plum_blossom_lines(ctx: &ReadingContext<'_>) -> [LineValue; 6] {
    let offset = i64::from(ctx.options.utc_offset_hours) * 3600;
    let local = ctx.now + Duration::seconds(offset);
    let date_sum = u64::try_from(local.year()).unwrap_or(0)
        + u64::from(local.month())
        + u64::from(local.day());
    let full_sum = date_sum + u64::from(local.hour());

    let upper = Trigram::from_earlier_heaven(date_sum);
    let lower = Trigram::from_earlier_heaven(full_sum);
    let moving = match full_sum % 6 {
        0 => 5,
        n => (n - 1) as usize,
    };

    let yang: Vec<bool> = lower.lines().into_iter().chain(upper.lines()).collect();
    std::array::from_fn(|i| {
        let is_yang = yang.get(i).copied().unwrap_or(false);
        if i == moving {
            if is_yang {
                LineValue::OldYang
            } else {
                LineValue::OldYin
            }
        } else {
            LineValue::stable(is_yang)
        }
    })
}

/// Summary of a hexagram inside a reading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HexagramView {
    /// King Wen number.
    pub number: u8,
    /// Full name.
    pub name: &'static str,
    /// Short name.
    pub short_name: &'static str,
    /// Keyword.
    pub keyword: &'static str,
    /// Lower trigram.
    pub lower_trigram: &'static str,
    /// Upper trigram.
    pub upper_trigram: &'static str,
    /// Judgement.
    pub judgement: &'static str,
    /// Image.
    pub image: String,
}

impl From<&Hexagram> for HexagramView {
    fn from(hex: &Hexagram) -> Self {
        let (lower, upper) = hex.trigrams();
        Self {
            number: hex.number,
            name: hex.name,
            short_name: hex.short_name,
            keyword: hex.keyword,
            lower_trigram: lower.name(),
            upper_trigram: upper.name(),
            judgement: hex.judgement,
            image: hex.image(),
        }
    }
}

/// A changing line and its reading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangingLine {
    /// Line position, 1 (bottom) to 6.
    pub position: u8,
    /// Japanese label.
    pub label: &'static str,
    /// Line value, 6 or 9.
    pub value: LineValue,
    /// Text.
    pub text: String,
}

/// A finished I Ching reading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IChingReading {
    /// Casting method.
    pub method: CastingMethod,
    /// Line values bottom to top.
    pub lines: [LineValue; 6],
    /// Primary hexagram.
    pub primary: HexagramView,
    /// Changing lines.
    pub changing_lines: Vec<ChangingLine>,
    /// Resulting hexagram, only when a line changes.
    pub resulting: Option<HexagramView>,
    /// Interpretation of the primary hexagram.
    pub interpretation: String,
    /// Interpretation of the resulting hexagram.
    pub resulting_interpretation: Option<String>,
    /// Judgement.
    pub judgement: &'static str,
    /// Image.
    pub image: String,
    /// Advice for the question category.
    pub advice: String,
    /// Seed used.
    pub seed: u64,
}

impl Reading for IChingReading {
    fn summary(&self) -> String {
        let mut out = format!(
            "本卦は{}（第{}卦）。{}",
            self.primary.name, self.primary.number, self.judgement
        );
        if let Some(r) = &self.resulting {
            out.push_str(&format!(
                "変爻{}本により、之卦は{}（第{}卦）です。",
                self.changing_lines.len(),
                r.name,
                r.number
            ));
        }
        out
    }

    fn key_symbols(&self) -> Vec<String> {
        let mut out = vec![self.primary.name.to_string()];
        if let Some(r) = &self.resulting {
            out.push(r.name.to_string());
        }
        out
    }
}

impl Divination for IChing {
    const KIND: DivinationKind = DivinationKind::IChing;
    type Reading = IChingReading;

    fn configuration_label(&self) -> String {
        self.method.label().to_string()
    }

    fn cast(&self, ctx: &mut ReadingContext<'_>) -> IChingReading {
        let lines = self.cast_lines(ctx);
        let primary = Hexagram::from_lines(lines.map(LineValue::is_yang));
        let any_changing = lines.iter().any(|l| l.is_changing());
        let resulting = any_changing
            .then(|| Hexagram::from_lines(lines.map(|l| l.transformed().is_yang())));
        tracing::debug!(
            method = %self.method,
            lines = ?lines.map(LineValue::value),
            primary = primary.number,
            resulting = ?resulting.map(|h| h.number),
            "iching cast"
        );

        let changing_lines = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_changing())
            .map(|(i, l)| ChangingLine {
                position: (i + 1) as u8,
                label: LINE_LABELS[i],
                value: *l,
                text: format!(
                    "{}が動きます。{}「{}」の流れの中で、{}",
                    LINE_LABELS[i],
                    if l.is_yang() { "陽が極まって陰に転じ、" } else { "陰が極まって陽に転じ、" },
                    primary.keyword,
                    LINE_THEMES[i]
                ),
            })
            .collect();

        let category = ctx.category();
        let time = ctx.text_time();
        let interpretation = interpret(primary, "本卦", &HEXAGRAM_KEYS, category, time, ctx.seed);
        let resulting_interpretation = resulting
            .map(|hex| interpret(hex, "之卦", &HEXAGRAM_KEYS, category, None, ctx.variant(1)));

        IChingReading {
            method: self.method,
            lines,
            primary: HexagramView::from(primary),
            changing_lines,
            resulting: resulting.map(HexagramView::from),
            interpretation,
            resulting_interpretation,
            judgement: primary.judgement,
            image: primary.image(),
            advice: primary.advice(category),
            seed: ctx.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ur_core::{DivinationInput, EngineOptions, FixedClock};

    fn engine(method: CastingMethod) -> IChingEngine {
        DivinationEngine::new(IChing::new(method), DivinationInput::new("山田太郎"))
            .with_clock(FixedClock::from_millis(0))
    }

    #[test]
    fn resulting_only_when_lines_change() {
        for seed in 0..50 {
            let r = engine(CastingMethod::Yarrow)
                .with_options(EngineOptions::default().with_seed(seed))
                .calculate();
            let changing = r.lines.iter().filter(|l| l.is_changing()).count();
            assert_eq!(r.changing_lines.len(), changing);
            assert_eq!(r.resulting.is_some(), changing > 0);
            assert_eq!(r.resulting_interpretation.is_some(), changing > 0);
        }
    }

    #[test]
    fn yarrow_lines_follow_the_generator() {
        let r = engine(CastingMethod::Yarrow)
            .with_options(EngineOptions::default().with_seed(1))
            .calculate();
        let mut lcg = Lcg::new(1);
        let expected = cast_six(&mut lcg, cast_line);
        assert_eq!(r.lines, expected);
    }

    #[test]
    fn plum_blossom_has_one_moving_line() {
        // 2024-03-15 01:00 UTC = 10:00 JST; 2024+3+15 = 2042, +10 = 2052.
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 1, 0, 0).unwrap();
        let r = DivinationEngine::new(IChing::new(CastingMethod::PlumBlossom), DivinationInput::new("x"))
            .with_clock(FixedClock(at))
            .calculate();
        assert_eq!(r.changing_lines.len(), 1);
        // 2052 % 6 == 0 -> top line moves
        assert_eq!(r.changing_lines[0].position, 6);
        // upper 2042 % 8 = 2 (兌), lower 2052 % 8 = 4 (震)
        assert_eq!(r.primary.upper_trigram, "兌");
        assert_eq!(r.primary.lower_trigram, "震");
        assert_eq!(r.primary.number, 17);
    }

    #[test]
    fn time_method_depends_on_clock() {
        let opts = EngineOptions::default().with_seed(42);
        let a = engine(CastingMethod::Time)
            .with_options(opts.clone())
            .with_clock(FixedClock::from_millis(1_000))
            .calculate();
        let b = engine(CastingMethod::Time)
            .with_options(opts)
            .with_clock(FixedClock::from_millis(1_000))
            .calculate();
        assert_eq!(a.lines, b.lines);

        // 00:01:01 mixes 1 s + 1 min into the seed.
        let later = engine(CastingMethod::Time)
            .with_options(EngineOptions::default().with_seed(42))
            .with_clock(FixedClock::from_millis(61_000))
            .calculate();
        assert_eq!(later.lines, cast_six(&mut Lcg::new(42 + 61_000), cast_line));
        assert_eq!(a.lines, cast_six(&mut Lcg::new(42 + 1_000), cast_line));
    }

    #[test]
    fn time_method_differs_from_yarrow() {
        let opts = EngineOptions::default().with_seed(42);
        let yarrow = engine(CastingMethod::Yarrow)
            .with_options(opts.clone())
            .calculate();
        let diverged = (0..10).any(|minute| {
            let timed = engine(CastingMethod::Time)
                .with_options(opts.clone())
                .with_clock(FixedClock::from_millis(minute * 60_000 + 1_000))
                .calculate();
            timed.lines != yarrow.lines
        });
        assert!(diverged);
    }

    #[test]
    fn parse_methods() {
        for m in CastingMethod::all() {
            assert_eq!(m.as_str().parse::<CastingMethod>().ok(), Some(*m));
        }
        assert!("tortoise".parse::<CastingMethod>().is_err());
    }

    #[test]
    fn lines_serialise_as_numbers() {
        let json = engine(CastingMethod::Coins).calculate_json();
        let lines = json["lines"].as_array().unwrap();
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|v| matches!(v.as_u64(), Some(6..=9))));
    }
}
