//! Pythagorean numerology.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use ur_core::engine::{Divination, DivinationEngine, Reading, ReadingContext};
use ur_core::{DivinationKind, QuestionCategory};

/// Numbers kept whole when reducing.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce to a single digit, stopping at a master number when `keep_master`.
pub fn reduce(n: u64, keep_master: bool) -> u32 {
    let mut n = n;
    while n > 9 {
        if keep_master && MASTER_NUMBERS.contains(&(n as u32)) {
            break;
        }
        n = digit_sum(n);
    }
    n as u32
}

/// Sum of every digit of `YYYYMMDD`.
pub fn date_digit_sum(date: NaiveDate) -> u64 {
    let year = u64::from(date.year().unsigned_abs());
    digit_sum(year) + digit_sum(u64::from(date.month())) + digit_sum(u64::from(date.day()))
}

/// Life path number: all birth date digits reduced, masters kept.
pub fn life_path(date: NaiveDate) -> u32 {
    reduce(date_digit_sum(date), true)
}

/// Pythagorean value of one character. Latin letters cycle 1-9 (A=1, I=9,
/// J=1 …); other letters use their code point mod 9, with 0 read as 9.
/// Whitespace, digits and punctuation count as 0.
pub fn letter_value(c: char) -> u32 {
    if c.is_ascii_alphabetic() {
        let idx = u32::from(c.to_ascii_lowercase()) - u32::from('a');
        idx % 9 + 1
    } else if c.is_alphabetic() {
        match u32::from(c) % 9 {
            0 => 9,
            n => n,
        }
    } else {
        0
    }
}

fn is_latin_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Expression number: every letter of the name.
pub fn expression(name: &str) -> u32 {
    reduce(name.chars().map(|c| u64::from(letter_value(c))).sum(), true)
}

/// Soul urge number: the vowels. Names without Latin vowels count every letter.
pub fn soul_urge(name: &str) -> u32 {
    if !name.chars().any(is_latin_vowel) {
        return expression(name);
    }
    let sum = name
        .chars()
        .filter(|c| is_latin_vowel(*c))
        .map(|c| u64::from(letter_value(c)))
        .sum();
    reduce(sum, true)
}

/// Personality number: the consonants. Names without Latin letters count every letter.
pub fn personality(name: &str) -> u32 {
    if !name.chars().any(|c| c.is_ascii_alphabetic()) {
        return expression(name);
    }
    let sum = name
        .chars()
        .filter(|c| c.is_ascii_alphabetic() && !is_latin_vowel(*c))
        .map(|c| u64::from(letter_value(c)))
        .sum();
    reduce(sum, true)
}

/// Personal year: birth month and day with the current year, no masters.
pub fn personal_year(birth: NaiveDate, year: i32) -> u32 {
    let sum = digit_sum(u64::from(birth.month()))
        + digit_sum(u64::from(birth.day()))
        + digit_sum(u64::from(year.unsigned_abs()));
    reduce(sum, false)
}

/// Meaning of one number.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberMeaning {
    /// The number.
    pub number: u32,
    /// Title.
    pub title: &'static str,
    /// Keyword.
    pub keyword: &'static str,
    /// Description.
    pub description: &'static str,
    /// Love line.
    pub love: &'static str,
    /// Career line.
    pub career: &'static str,
}

const MEANINGS: [NumberMeaning; 12] = [
    NumberMeaning { number: 1, title: "開拓者", keyword: "独立", description: "自ら道を切り開くリーダーの数です。", love: "主導権を握りつつ相手の歩幅も意識しましょう。", career: "新規事業や独立に向いています。" },
    NumberMeaning { number: 2, title: "調停者", keyword: "協調", description: "人と人をつなぐ繊細な感受性の数です。", love: "寄り添う優しさが愛を育てます。", career: "補佐役や調整役で力を発揮します。" },
    NumberMeaning { number: 3, title: "表現者", keyword: "創造", description: "喜びと表現力にあふれた数です。", love: "楽しさを共有できる関係が長続きします。", career: "発信や創作の仕事が向いています。" },
    NumberMeaning { number: 4, title: "建設者", keyword: "安定", description: "堅実に土台を築く努力の数です。", love: "誠実さと信頼が絆の基盤です。", career: "組織運営や専門職で評価されます。" },
    NumberMeaning { number: 5, title: "冒険者", keyword: "自由", description: "変化と体験を求める自由の数です。", love: "束縛しすぎない関係が心地よいでしょう。", career: "移動や変化の多い仕事が合います。" },
    NumberMeaning { number: 6, title: "守護者", keyword: "愛情", description: "責任感と奉仕の心を持つ数です。", love: "家庭的な愛情で相手を包みます。", career: "教育や医療、福祉に縁があります。" },
    NumberMeaning { number: 7, title: "探求者", keyword: "真理", description: "内面を深く探る分析と直感の数です。", love: "心を許せる相手と静かな絆を結びます。", career: "研究や専門分野を極める道が向いています。" },
    NumberMeaning { number: 8, title: "実業家", keyword: "達成", description: "力と豊かさを現実にする数です。", love: "対等に高め合える関係を築けます。", career: "経営や金融で手腕を発揮します。" },
    NumberMeaning { number: 9, title: "博愛者", keyword: "完成", description: "広い視野と博愛精神を持つ数です。", love: "無償の愛を注げる関係に恵まれます。", career: "社会貢献や芸術の分野が向いています。" },
    NumberMeaning { number: 11, title: "啓示者", keyword: "直感", description: "鋭い直感で人を導くマスターナンバーです。", love: "魂で惹かれ合う出会いがあります。", career: "精神的な指導やカウンセリングに適性があります。" },
    NumberMeaning { number: 22, title: "建築家", keyword: "大いなる実現", description: "大きな夢を形にするマスターナンバーです。", love: "人生の目標を共有できる相手が鍵です。", career: "大規模な事業を動かす力があります。" },
    NumberMeaning { number: 33, title: "奉仕者", keyword: "無条件の愛", description: "慈愛で世界を癒すマスターナンバーです。", love: "深い慈しみで相手を支えます。", career: "人を癒し育てる仕事に天命があります。" },
];

/// Meaning for a number; anything outside the table reads as its reduction.
pub fn number_meaning(n: u32) -> &'static NumberMeaning {
    let key = if MEANINGS.iter().any(|m| m.number == n) {
        n
    } else {
        reduce(u64::from(n), false).max(1)
    };
    MEANINGS
        .iter()
        .find(|m| m.number == key)
        .unwrap_or(&MEANINGS[0])
}

/// Numerology has no configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Numerology;

/// Engine alias for numerology.
pub type NumerologyEngine = DivinationEngine<Numerology>;

/// One computed number with its meaning.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreNumber {
    /// The number.
    pub number: u32,
    /// Its meaning.
    pub meaning: NumberMeaning,
}

impl CoreNumber {
    fn of(number: u32) -> Self {
        Self {
            number,
            meaning: *number_meaning(number),
        }
    }
}

/// A finished numerology reading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyReading {
    /// Whether a birth date was given; otherwise 1970-01-01 is used.
    pub birth_date_known: bool,
    /// Life path.
    pub life_path: CoreNumber,
    /// Expression.
    pub expression: CoreNumber,
    /// Soul urge.
    pub soul_urge: CoreNumber,
    /// Personality.
    pub personality: CoreNumber,
    /// Birthday number (day of month reduced).
    pub birthday: CoreNumber,
    /// Personal year.
    pub personal_year: CoreNumber,
    /// Whether any core number is a master number.
    pub has_master_number: bool,
    /// Advice for the question category.
    pub advice: String,
    /// Seed used.
    pub seed: u64,
}

impl Reading for NumerologyReading {
    fn summary(&self) -> String {
        format!(
            "ライフパス{}（{}）、表現数{}、魂の数{}、個人年{}。{}",
            self.life_path.number,
            self.life_path.meaning.title,
            self.expression.number,
            self.soul_urge.number,
            self.personal_year.number,
            self.life_path.meaning.description
        )
    }

    fn key_symbols(&self) -> Vec<String> {
        vec![
            self.life_path.number.to_string(),
            self.expression.number.to_string(),
            self.soul_urge.number.to_string(),
        ]
    }
}

impl Divination for Numerology {
    const KIND: DivinationKind = DivinationKind::Numerology;
    type Reading = NumerologyReading;

    fn cast(&self, ctx: &mut ReadingContext<'_>) -> NumerologyReading {
        let known = ctx.input.birth_date.is_some();
        let birth = ctx.input.birth_date_or_epoch();
        let name = ctx.input.full_name.as_str();

        let life_path = CoreNumber::of(life_path(birth));
        let expression = CoreNumber::of(expression(name));
        let soul_urge = CoreNumber::of(soul_urge(name));
        let personality = CoreNumber::of(personality(name));
        let birthday = CoreNumber::of(reduce(u64::from(birth.day()), true));
        let personal_year = CoreNumber::of(personal_year(birth, ctx.now.year()));
        tracing::debug!(
            life_path = life_path.number,
            expression = expression.number,
            soul_urge = soul_urge.number,
            "numerology numbers"
        );

        let has_master_number = [&life_path, &expression, &soul_urge, &personality]
            .iter()
            .any(|n| MASTER_NUMBERS.contains(&n.number));

        let m = &life_path.meaning;
        let advice = match ctx.category() {
            QuestionCategory::Love | QuestionCategory::Relationship => m.love.to_string(),
            QuestionCategory::Career | QuestionCategory::Money => m.career.to_string(),
            _ => format!(
                "今年は個人年{}、「{}」の一年です。{}",
                personal_year.number, personal_year.meaning.keyword, m.description
            ),
        };

        NumerologyReading {
            birth_date_known: known,
            life_path,
            expression,
            soul_urge,
            personality,
            birthday,
            personal_year,
            has_master_number,
            advice,
            seed: ctx.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ur_core::{DivinationInput, FixedClock};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reduce_keeps_masters() {
        assert_eq!(reduce(29, true), 11);
        assert_eq!(reduce(29, false), 2);
        assert_eq!(reduce(22, true), 22);
        assert_eq!(reduce(38, true), 11);
        assert_eq!(reduce(0, true), 0);
    }

    #[test]
    fn life_path_examples() {
        // 1+9+9+0+0+5+1+5 = 30 -> 3
        assert_eq!(life_path(date(1990, 5, 15)), 3);
        // 1+9+8+0+1+1+2+9 = 31 -> 4
        assert_eq!(life_path(date(1980, 11, 29)), 4);
        // 1+9+7+8+0+2+1+1 = 29 -> 11
        assert_eq!(life_path(date(1978, 2, 11)), 11);
    }

    #[test]
    fn letter_values() {
        assert_eq!(letter_value('A'), 1);
        assert_eq!(letter_value('i'), 9);
        assert_eq!(letter_value('J'), 1);
        assert_eq!(letter_value('z'), 8);
        assert_eq!(letter_value(' '), 0);
        assert!((1..=9).contains(&letter_value('山')));
    }

    #[test]
    fn name_numbers() {
        // J1 O6 H8 N5 = 20 -> 2
        assert_eq!(expression("John"), 2);
        // O6 = 6
        assert_eq!(soul_urge("John"), 6);
        // J1 H8 N5 = 14 -> 5
        assert_eq!(personality("John"), 5);
        assert_eq!(expression(""), 0);
        assert_eq!(soul_urge("山田"), expression("山田"));
    }

    #[test]
    fn personal_year_example() {
        // 5 + 1+5 + 2+0+2+4 = 19 -> 1
        assert_eq!(personal_year(date(1990, 5, 15), 2024), 1);
    }

    #[test]
    fn meanings_cover_all_outcomes() {
        for n in (1..=9).chain([11, 22, 33]) {
            assert_eq!(number_meaning(n).number, n);
        }
        assert_eq!(number_meaning(0).number, 1);
        assert_eq!(number_meaning(44).number, 8);
    }

    #[test]
    fn missing_birth_date_uses_epoch() {
        let r = DivinationEngine::new(Numerology, DivinationInput::new(""))
            .with_clock(FixedClock::from_millis(0))
            .calculate();
        assert!(!r.birth_date_known);
        // 1+9+7+0+1+1 = 19 -> 1
        assert_eq!(r.life_path.number, 1);
    }
}
