//! Personal data supplied by the person asking for a reading.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize};

/// What the question is about. Selects the category-specific text variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum QuestionCategory {
    /// No particular focus.
    #[default]
    General,
    /// Romance and attraction.
    Love,
    /// Work and vocation.
    Career,
    /// Finances.
    Money,
    /// Body and wellbeing.
    Health,
    /// Inner growth.
    Spiritual,
    /// Family, friends, and partnerships.
    Relationship,
}

impl QuestionCategory {
    /// Parse a category leniently, accepting English and Japanese keywords.
    ///
    /// Anything unrecognised falls back to [`QuestionCategory::General`].
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "love" | "romance" | "恋愛" | "恋" => Self::Love,
            "career" | "work" | "job" | "仕事" | "キャリア" => Self::Career,
            "money" | "finance" | "wealth" | "金運" | "お金" => Self::Money,
            "health" | "健康" => Self::Health,
            "spiritual" | "spirit" | "精神" | "スピリチュアル" => Self::Spiritual,
            "relationship" | "relationships" | "人間関係" | "対人" => Self::Relationship,
            _ => Self::General,
        }
    }

    /// All categories in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::General,
            Self::Love,
            Self::Career,
            Self::Money,
            Self::Health,
            Self::Spiritual,
            Self::Relationship,
        ]
    }

    /// Stable machine name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Love => "love",
            Self::Career => "career",
            Self::Money => "money",
            Self::Health => "health",
            Self::Spiritual => "spiritual",
            Self::Relationship => "relationship",
        }
    }

    /// Japanese label.
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "総合",
            Self::Love => "恋愛",
            Self::Career => "仕事",
            Self::Money => "金運",
            Self::Health => "健康",
            Self::Spiritual => "精神性",
            Self::Relationship => "人間関係",
        }
    }
}

impl From<String> for QuestionCategory {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl std::fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gender as given by the user. Only feng shui's Kua formula reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Anything else, including unparseable input.
    Other,
}

impl Gender {
    /// Parse leniently; unknown strings become [`Gender::Other`].
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "man" | "男性" | "男" => Self::Male,
            "female" | "f" | "woman" | "女性" | "女" => Self::Female,
            _ => Self::Other,
        }
    }
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

/// Everything a reading is derived from. Immutable once handed to an engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DivinationInput {
    /// Full name; may be empty.
    pub full_name: String,
    /// Birth date, `None` when absent or unparseable.
    #[serde(deserialize_with = "lenient_date")]
    pub birth_date: Option<NaiveDate>,
    /// Birth time as typed, e.g. `"14:30"`.
    pub birth_time: Option<String>,
    /// Birth place as typed.
    pub birth_place: Option<String>,
    /// Gender, if given.
    pub gender: Option<Gender>,
    /// The question being asked.
    pub question: Option<String>,
    /// Question category.
    pub question_category: QuestionCategory,
}

impl DivinationInput {
    /// Create an input with only a name.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Self::default()
        }
    }

    /// Set the birth date.
    pub fn with_birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    /// The birth date, or 1970-01-01 for engines that need some date.
    pub fn birth_date_or_epoch(&self) -> NaiveDate {
        self.birth_date.unwrap_or_default()
    }

    /// Set the birth date from a string. Unparseable strings clear it.
    pub fn with_birth_date_str(mut self, s: &str) -> Self {
        self.birth_date = parse_birth_date(s);
        if self.birth_date.is_none() {
            tracing::warn!(input = s, "unparseable birth date, treating as absent");
        }
        self
    }

    /// Set the birth time (`HH:MM`).
    pub fn with_birth_time(mut self, time: impl Into<String>) -> Self {
        self.birth_time = Some(time.into());
        self
    }

    /// Set the birth place.
    pub fn with_birth_place(mut self, place: impl Into<String>) -> Self {
        self.birth_place = Some(place.into());
        self
    }

    /// Set the gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set the question.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Set the question category.
    pub fn with_category(mut self, category: QuestionCategory) -> Self {
        self.question_category = category;
        self
    }

    /// The question text, empty when none was asked.
    pub fn question_text(&self) -> &str {
        self.question.as_deref().unwrap_or("")
    }

    /// The birth time parsed as a clock time, if it parses.
    pub fn parsed_birth_time(&self) -> Option<NaiveTime> {
        let raw = self.birth_time.as_deref()?.trim();
        NaiveTime::parse_from_str(raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .ok()
    }

    /// Hour of birth (0-23), if the birth time parses.
    pub fn birth_hour(&self) -> Option<u32> {
        self.parsed_birth_time().map(|t| t.hour())
    }

    /// Birth year, if known.
    pub fn birth_year(&self) -> Option<i32> {
        self.birth_date.map(|d| d.year())
    }

    /// Epoch milliseconds of the birth moment (UTC), or 0 when unknown.
    pub fn birth_timestamp_ms(&self) -> i64 {
        match self.birth_date {
            Some(date) => {
                let time = self.parsed_birth_time().unwrap_or(NaiveTime::MIN);
                date.and_time(time).and_utc().timestamp_millis()
            }
            None => 0,
        }
    }
}

/// Parse a birth date in any of the common formats users type.
pub fn parse_birth_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y年%m月%d日"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_birth_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_lenient() {
        assert_eq!(QuestionCategory::parse("love"), QuestionCategory::Love);
        assert_eq!(QuestionCategory::parse(" CAREER "), QuestionCategory::Career);
        assert_eq!(QuestionCategory::parse("恋愛"), QuestionCategory::Love);
        assert_eq!(QuestionCategory::parse("金運"), QuestionCategory::Money);
        assert_eq!(QuestionCategory::parse("unknown"), QuestionCategory::General);
        assert_eq!(QuestionCategory::parse(""), QuestionCategory::General);
    }

    #[test]
    fn category_labels() {
        assert_eq!(QuestionCategory::Love.label(), "恋愛");
        assert_eq!(QuestionCategory::General.to_string(), "general");
        assert_eq!(QuestionCategory::all().len(), 7);
    }

    #[test]
    fn gender_parse() {
        assert_eq!(Gender::parse("Female"), Gender::Female);
        assert_eq!(Gender::parse("男性"), Gender::Male);
        assert_eq!(Gender::parse(""), Gender::Other);
    }

    #[test]
    fn parse_birth_date_formats() {
        let expected = NaiveDate::from_ymd_opt(1990, 5, 15);
        assert_eq!(parse_birth_date("1990-05-15"), expected);
        assert_eq!(parse_birth_date("1990/05/15"), expected);
        assert_eq!(parse_birth_date("1990年05月15日"), expected);
        assert_eq!(parse_birth_date("1990-05-15T10:00:00Z"), expected);
        assert_eq!(parse_birth_date("invalid"), None);
        assert_eq!(parse_birth_date(""), None);
    }

    #[test]
    fn invalid_birth_date_clamps_to_zero() {
        let input = DivinationInput::new("山田太郎").with_birth_date_str("invalid");
        assert!(input.birth_date.is_none());
        assert_eq!(input.birth_timestamp_ms(), 0);
    }

    #[test]
    fn birth_timestamp_includes_time() {
        let date = NaiveDate::from_ymd_opt(1970, 1, 2).unwrap();
        let input = DivinationInput::new("A").with_birth_date(date);
        assert_eq!(input.birth_timestamp_ms(), 86_400_000);
        let input = input.with_birth_time("01:00");
        assert_eq!(input.birth_timestamp_ms(), 86_400_000 + 3_600_000);
    }

    #[test]
    fn missing_birth_date_falls_back_to_epoch() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(DivinationInput::new("A").birth_date_or_epoch(), epoch);
        let input = DivinationInput::new("A").with_birth_date_str("someday");
        assert_eq!(input.birth_date_or_epoch(), epoch);
        let date = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
        let input = DivinationInput::new("A").with_birth_date(date);
        assert_eq!(input.birth_date_or_epoch(), date);
    }

    #[test]
    fn pre_epoch_birth_is_negative() {
        let date = NaiveDate::from_ymd_opt(1969, 12, 31).unwrap();
        let input = DivinationInput::new("A").with_birth_date(date);
        assert_eq!(input.birth_timestamp_ms(), -86_400_000);
    }

    #[test]
    fn birth_hour_lenient() {
        let input = DivinationInput::new("A").with_birth_time("14:30");
        assert_eq!(input.birth_hour(), Some(14));
        let input = DivinationInput::new("A").with_birth_time("");
        assert_eq!(input.birth_hour(), None);
        let input = DivinationInput::new("A").with_birth_time("afternoon");
        assert_eq!(input.birth_hour(), None);
    }

    #[test]
    fn deserialize_tolerates_garbage() {
        let json = r#"{
            "fullName": "",
            "birthDate": "not a date",
            "questionCategory": "whatever",
            "gender": "?"
        }"#;
        let input: DivinationInput = serde_json::from_str(json).unwrap();
        assert!(input.birth_date.is_none());
        assert_eq!(input.question_category, QuestionCategory::General);
        assert_eq!(input.gender, Some(Gender::Other));
    }

    #[test]
    fn deserialize_full_input() {
        let json = r#"{
            "fullName": "山田花子",
            "birthDate": "1985-03-21",
            "birthTime": "06:45",
            "birthPlace": "東京",
            "question": "転職すべき?",
            "questionCategory": "career"
        }"#;
        let input: DivinationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.birth_date, NaiveDate::from_ymd_opt(1985, 3, 21));
        assert_eq!(input.birth_hour(), Some(6));
        assert_eq!(input.question_category, QuestionCategory::Career);
        assert_eq!(input.question_text(), "転職すべき?");
    }
}
