//! Mayan calendar readings.
//!
//! The birth date fixes the Tzolkin kin, Haab date and Long Count, and the
//! kin's seal fixes its analog, antipode and occult partners. Today's kin
//! colours the message. A missing birth date reads as 1970-01-01.

pub mod calendar;

pub use calendar::{
    DAY_SIGNS, DaySign, GMT_CORRELATION, HAAB_MONTHS, Haab, LongCount, TONES, Tone, Tzolkin,
    analog, antipode, days_since_creation, julian_day_number, occult,
};

use std::borrow::Cow;

use chrono::Duration;
use serde::Serialize;
use ur_core::engine::{Divination, DivinationEngine, Reading, ReadingContext};
use ur_core::interpret::{PositionKeys, SymbolText, interpret};
use ur_core::{DivinationKind, QuestionCategory};

const SEAL_KEYS: PositionKeys = PositionKeys(&[("誕生の紋章", "birth"), ("今日の紋章", "today")]);

impl SymbolText for DaySign {
    fn name(&self) -> &str {
        self.seal
    }

    fn general_meanings(&self) -> Vec<&str> {
        vec![self.meaning]
    }

    fn position_meaning(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "birth" => Some(Cow::Owned(format!(
                "あなたは「{}」をテーマに生まれてきました。",
                self.keyword
            ))),
            "today" => Some(Cow::Owned(format!(
                "今日は「{}」のエネルギーが流れています。",
                self.keyword
            ))),
            _ => None,
        }
    }

    fn category_meaning(&self, category: QuestionCategory) -> Option<Cow<'_, str>> {
        let text = match category {
            QuestionCategory::Love | QuestionCategory::Relationship => {
                format!("{}の色を持つ人との縁が深まります。", self.color)
            }
            QuestionCategory::Career | QuestionCategory::Money => {
                format!("「{}」の力を仕事に生かしましょう。", self.keyword)
            }
            _ => format!("{}の紋章のリズムに合わせて過ごしましょう。", self.seal),
        };
        Some(Cow::Owned(text))
    }
}

/// Mayan readings have no configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mayan;

/// Engine alias for Mayan readings.
pub type MayanEngine = DivinationEngine<Mayan>;

/// A seal in a relationship to the birth seal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedSign {
    /// Relationship label.
    pub relation: &'static str,
    /// The seal.
    pub sign: DaySign,
    /// Text.
    pub text: String,
}

/// A finished Mayan reading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MayanReading {
    /// Birth Tzolkin.
    pub tzolkin: Tzolkin,
    /// Birth Tzolkin, e.g. `4 Ahau`.
    pub tzolkin_name: String,
    /// Birth Haab, e.g. `3 Kankin`.
    pub haab: String,
    /// Birth Long Count, e.g. `13.0.0.0.0`.
    pub long_count: String,
    /// Kin number, 1-260.
    pub kin: u16,
    /// Seal that opened the birth wavespell.
    pub wavespell: DaySign,
    /// Analog, antipode and occult seals.
    pub related: Vec<RelatedSign>,
    /// Birth seal interpretation.
    pub interpretation: String,
    /// Today's Tzolkin.
    pub today: Tzolkin,
    /// Today's text.
    pub today_message: String,
    /// Whether a birth date was given.
    pub birth_date_known: bool,
    /// Seed used.
    pub seed: u64,
}

impl Reading for MayanReading {
    fn summary(&self) -> String {
        format!(
            "あなたはKIN{}「{}の{}」。{}",
            self.kin, self.tzolkin.tone.name, self.tzolkin.sign.seal, self.today_message
        )
    }

    fn key_symbols(&self) -> Vec<String> {
        vec![
            self.tzolkin.sign.seal.to_string(),
            self.tzolkin.tone.name.to_string(),
        ]
    }
}

impl Divination for Mayan {
    const KIND: DivinationKind = DivinationKind::Mayan;
    type Reading = MayanReading;

    fn cast(&self, ctx: &mut ReadingContext<'_>) -> MayanReading {
        let known = ctx.input.birth_date.is_some();
        let birth = ctx.input.birth_date_or_epoch();
        let days = days_since_creation(birth);
        let tzolkin = Tzolkin::from_days(days);
        let haab = Haab::from_days(days);
        let long_count = LongCount::from_days(days);
        tracing::debug!(kin = tzolkin.kin, %haab, %long_count, "mayan birth date");

        let offset = Duration::hours(i64::from(ctx.options.utc_offset_hours.clamp(-12, 14)));
        let today = Tzolkin::from_days(days_since_creation((ctx.now + offset).date_naive()));

        let sign = tzolkin.sign;
        let related = vec![
            RelatedSign {
                relation: "類似",
                sign: analog(&sign),
                text: format!("{}はあなたを支える友です。", analog(&sign).seal),
            },
            RelatedSign {
                relation: "反対",
                sign: antipode(&sign),
                text: format!("{}は成長を促す挑戦です。", antipode(&sign).seal),
            },
            RelatedSign {
                relation: "神秘",
                sign: occult(&sign),
                text: format!("{}は隠れた力を引き出します。", occult(&sign).seal),
            },
        ];

        let category = ctx.category();
        let interpretation = interpret(
            &sign,
            "誕生の紋章",
            &SEAL_KEYS,
            category,
            ctx.text_time(),
            ctx.seed,
        );
        let mut today_message = format!(
            "今日はKIN{}（{}の{}）、「{}」の日です。",
            today.kin, today.tone.name, today.sign.seal, today.tone.keyword
        );
        if today.sign.number == sign.number {
            today_message.push_str("自分の紋章が巡る特別な日です。");
        } else if today.sign.number == analog(&sign).number {
            today_message.push_str("類似の紋章の日。周囲の助けが得られます。");
        }

        MayanReading {
            tzolkin_name: tzolkin.to_string(),
            haab: haab.to_string(),
            long_count: long_count.to_string(),
            kin: tzolkin.kin,
            wavespell: tzolkin.wavespell(),
            tzolkin,
            related,
            interpretation,
            today,
            today_message,
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

    fn reading(input: DivinationInput) -> MayanReading {
        DivinationEngine::new(Mayan, input)
            .with_options(EngineOptions::default().with_seed(1))
            .with_clock(FixedClock::from_millis(0))
            .calculate()
    }

    #[test]
    fn birth_on_the_baktun_ending() {
        let date = NaiveDate::from_ymd_opt(2012, 12, 21).unwrap();
        let r = reading(DivinationInput::new("x").with_birth_date(date));
        assert_eq!(r.long_count, "13.0.0.0.0");
        assert_eq!(r.tzolkin_name, "4 Ahau");
        assert_eq!(r.haab, "3 Kankin");
        assert_eq!(r.kin, 160);
        assert_eq!(r.related.len(), 3);
        assert_eq!(r.related[0].sign.seal, "青い嵐");
    }

    #[test]
    fn missing_birth_date_reads_as_epoch() {
        let r = reading(DivinationInput::new(""));
        assert!(!r.birth_date_known);
        assert_eq!(r.tzolkin_name, "13 Chicchan");
        assert_eq!(r.long_count, "12.17.16.7.5");
    }

    #[test]
    fn today_uses_local_date() {
        // 1970-01-01 00:00 UTC is 09:00 JST on the same day.
        let r = reading(DivinationInput::new(""));
        assert_eq!(r.today.kin, r.kin);
        assert!(r.today_message.contains("特別な日"));
    }
}
