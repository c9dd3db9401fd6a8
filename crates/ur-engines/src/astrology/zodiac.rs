//! The twelve signs of the tropical zodiac.

use std::borrow::Cow;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use ur_core::interpret::SymbolText;
use ur_core::{QuestionCategory, TimeOfDay};

/// Classical element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// 火.
    Fire,
    /// 地.
    Earth,
    /// 風.
    Air,
    /// 水.
    Water,
}

impl Element {
    /// All elements.
    pub fn all() -> &'static [Self] {
        &[Self::Fire, Self::Earth, Self::Air, Self::Water]
    }

    /// Japanese name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fire => "火",
            Self::Earth => "地",
            Self::Air => "風",
            Self::Water => "水",
        }
    }

    /// What an excess of the element brings.
    pub fn emphasis(self) -> &'static str {
        match self {
            Self::Fire => "情熱と行動力が高まっています。勢いに任せすぎないよう注意しましょう。",
            Self::Earth => "現実的な判断力が冴えています。着実な一歩が成果を生みます。",
            Self::Air => "知性と交流の力が強まっています。情報と人脈を活かしましょう。",
            Self::Water => "感受性と共感力が高まっています。心の声を大切にしましょう。",
        }
    }
}

/// Cardinal, fixed or mutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    /// 活動宮.
    Cardinal,
    /// 不動宮.
    Fixed,
    /// 柔軟宮.
    Mutable,
}

impl Modality {
    /// Japanese name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cardinal => "活動宮",
            Self::Fixed => "不動宮",
            Self::Mutable => "柔軟宮",
        }
    }
}

/// One sign.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacSign {
    /// Position from Aries, 1-12.
    pub number: u8,
    /// Japanese name.
    pub name: &'static str,
    /// English name.
    pub name_en: &'static str,
    /// Glyph.
    pub symbol: &'static str,
    /// First day (month, day).
    pub start: (u32, u32),
    /// Element.
    pub element: Element,
    /// Modality.
    pub modality: Modality,
    /// Ruling planet (Japanese).
    pub ruler: &'static str,
    /// Keywords.
    pub keywords: [&'static str; 3],
    /// Character.
    pub traits: &'static str,
    /// Love line.
    pub love: &'static str,
    /// Career line.
    pub career: &'static str,
    /// Health line.
    pub health: &'static str,
}

impl SymbolText for ZodiacSign {
    fn name(&self) -> &str {
        self.name
    }

    fn general_meanings(&self) -> Vec<&str> {
        vec![self.traits]
    }

    fn position_meaning(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "sun" => Some(Cow::Owned(format!(
                "太陽が{}にあるあなたは、{}の性質を本質としています。",
                self.name,
                self.keywords.join("・")
            ))),
            "moon" => Some(Cow::Owned(format!(
                "月が{}を運行中で、感情は{}の色を帯びています。",
                self.name,
                self.element.label()
            ))),
            _ => None,
        }
    }

    fn category_meaning(&self, category: QuestionCategory) -> Option<Cow<'_, str>> {
        let text = match category {
            QuestionCategory::Love | QuestionCategory::Relationship => self.love,
            QuestionCategory::Career | QuestionCategory::Money => self.career,
            QuestionCategory::Health => self.health,
            QuestionCategory::Spiritual | QuestionCategory::General => {
                return Some(Cow::Owned(format!(
                    "守護星の{}があなたの歩みを見守っています。",
                    self.ruler
                )));
            }
        };
        Some(Cow::Borrowed(text))
    }

    fn time_meaning(&self, time: TimeOfDay) -> Option<Cow<'_, str>> {
        let text = match (self.element, time) {
            (Element::Fire | Element::Air, TimeOfDay::Morning) => "朝のうちに動き出すと流れに乗れます。",
            (Element::Earth | Element::Water, TimeOfDay::Morning) => "朝はゆっくり整えてから始めましょう。",
            (_, TimeOfDay::Afternoon) => "日中は人との関わりの中にヒントがあります。",
            (_, TimeOfDay::Evening) => "夜は一日の振り返りが明日の力になります。",
        };
        Some(Cow::Borrowed(text))
    }
}

/// The twelve signs from Aries.
pub static SIGNS: [ZodiacSign; 12] = [
    ZodiacSign {
        number: 1,
        name: "牡羊座",
        name_en: "Aries",
        symbol: "♈",
        start: (3, 21),
        element: Element::Fire,
        modality: Modality::Cardinal,
        ruler: "火星",
        keywords: ["開拓", "勇気", "行動"],
        traits: "恐れを知らない開拓者。思い立ったらすぐ動ける行動力が魅力です。",
        love: "ストレートな愛情表現が相手の心を動かします。",
        career: "新しいプロジェクトの立ち上げで力を発揮します。",
        health: "頭部と発熱に注意し、適度な運動で熱を発散しましょう。",
    },
    ZodiacSign {
        number: 2,
        name: "牡牛座",
        name_en: "Taurus",
        symbol: "♉",
        start: (4, 20),
        element: Element::Earth,
        modality: Modality::Fixed,
        ruler: "金星",
        keywords: ["安定", "感覚", "忍耐"],
        traits: "五感に優れた堅実家。じっくりと確かなものを築き上げます。",
        love: "時間をかけて育む、穏やかで誠実な愛が実ります。",
        career: "粘り強さと審美眼が評価されます。",
        health: "喉と首をいたわり、食べ過ぎに注意しましょう。",
    },
    ZodiacSign {
        number: 3,
        name: "双子座",
        name_en: "Gemini",
        symbol: "♊",
        start: (5, 21),
        element: Element::Air,
        modality: Modality::Mutable,
        ruler: "水星",
        keywords: ["知性", "好奇心", "交流"],
        traits: "軽やかな知性の持ち主。情報と人をつなぐ天性のコミュニケーターです。",
        love: "会話の楽しさが恋を育てます。",
        career: "情報発信や営業、多方面の仕事で活躍します。",
        health: "呼吸器と神経の疲れに気を配りましょう。",
    },
    ZodiacSign {
        number: 4,
        name: "蟹座",
        name_en: "Cancer",
        symbol: "♋",
        start: (6, 22),
        element: Element::Water,
        modality: Modality::Cardinal,
        ruler: "月",
        keywords: ["保護", "共感", "家庭"],
        traits: "深い愛情で身近な人を守る、情の厚い人です。",
        love: "安心できる居場所を一緒に作れる相手と結ばれます。",
        career: "チームを家族のようにまとめる力があります。",
        health: "胃腸をいたわり、心の安定を優先しましょう。",
    },
    ZodiacSign {
        number: 5,
        name: "獅子座",
        name_en: "Leo",
        symbol: "♌",
        start: (7, 23),
        element: Element::Fire,
        modality: Modality::Fixed,
        ruler: "太陽",
        keywords: ["自己表現", "誇り", "創造"],
        traits: "生まれながらの主役。明るさと寛大さで周囲を照らします。",
        love: "ドラマチックな恋に縁があります。誇りを大切に。",
        career: "リーダーや表舞台に立つ仕事で輝きます。",
        health: "心臓と背中をいたわりましょう。",
    },
    ZodiacSign {
        number: 6,
        name: "乙女座",
        name_en: "Virgo",
        symbol: "♍",
        start: (8, 23),
        element: Element::Earth,
        modality: Modality::Mutable,
        ruler: "水星",
        keywords: ["分析", "奉仕", "完璧"],
        traits: "細やかな観察眼を持つ実務家。誰かの役に立つことに喜びを感じます。",
        love: "さりげない気遣いが相手の心に届きます。",
        career: "緻密さが求められる仕事で信頼を得ます。",
        health: "腸の調子と生活習慣を整えましょう。",
    },
    ZodiacSign {
        number: 7,
        name: "天秤座",
        name_en: "Libra",
        symbol: "♎",
        start: (9, 23),
        element: Element::Air,
        modality: Modality::Cardinal,
        ruler: "金星",
        keywords: ["調和", "美", "公平"],
        traits: "バランス感覚に優れた調停者。美しいものと人との調和を愛します。",
        love: "対等で洗練された関係に幸せを感じます。",
        career: "交渉や調整、美に関わる仕事が向いています。",
        health: "腰と腎臓をいたわり、水分補給を心がけましょう。",
    },
    ZodiacSign {
        number: 8,
        name: "蠍座",
        name_en: "Scorpio",
        symbol: "♏",
        start: (10, 24),
        element: Element::Water,
        modality: Modality::Fixed,
        ruler: "冥王星",
        keywords: ["洞察", "情熱", "変容"],
        traits: "物事の本質を見抜く洞察家。一度決めたら貫く強さがあります。",
        love: "深く濃い絆を求めます。信頼が何より大切です。",
        career: "研究や専門職で粘り強さが成果を生みます。",
        health: "生殖器と排泄の働きを整えましょう。",
    },
    ZodiacSign {
        number: 9,
        name: "射手座",
        name_en: "Sagittarius",
        symbol: "♐",
        start: (11, 23),
        element: Element::Fire,
        modality: Modality::Mutable,
        ruler: "木星",
        keywords: ["自由", "探求", "楽観"],
        traits: "遠くを目指す自由な探求者。楽観性が幸運を呼び込みます。",
        love: "一緒に冒険できる相手に惹かれます。",
        career: "海外や教育、出版に縁があります。",
        health: "太ももと肝臓をいたわりましょう。",
    },
    ZodiacSign {
        number: 10,
        name: "山羊座",
        name_en: "Capricorn",
        symbol: "♑",
        start: (12, 22),
        element: Element::Earth,
        modality: Modality::Cardinal,
        ruler: "土星",
        keywords: ["責任", "野心", "忍耐"],
        traits: "高い山を一歩ずつ登る努力家。責任感の強さが信頼を集めます。",
        love: "将来を見据えた真剣な関係を築きます。",
        career: "組織の中で着実に地位を築きます。",
        health: "骨と関節、歯のケアを大切に。",
    },
    ZodiacSign {
        number: 11,
        name: "水瓶座",
        name_en: "Aquarius",
        symbol: "♒",
        start: (1, 20),
        element: Element::Air,
        modality: Modality::Fixed,
        ruler: "天王星",
        keywords: ["独創", "友愛", "革新"],
        traits: "常識にとらわれない革新者。仲間と未来を描く力があります。",
        love: "友情から始まる自由な関係が心地よいでしょう。",
        career: "IT や社会活動など新しい分野で活躍します。",
        health: "血行とすねをいたわりましょう。",
    },
    ZodiacSign {
        number: 12,
        name: "魚座",
        name_en: "Pisces",
        symbol: "♓",
        start: (2, 19),
        element: Element::Water,
        modality: Modality::Mutable,
        ruler: "海王星",
        keywords: ["共感", "直感", "夢"],
        traits: "境界を溶かす共感の人。豊かな想像力と優しさを持っています。",
        love: "献身的な愛で相手を包みます。",
        career: "芸術や癒しの仕事に適性があります。",
        health: "足元を冷やさず、十分な睡眠をとりましょう。",
    },
];

/// Sun sign for a date.
pub fn sun_sign(date: NaiveDate) -> &'static ZodiacSign {
    let md = (date.month(), date.day());
    // Before Aquarius starts on 1/20 the date is still in Capricorn.
    SIGNS
        .iter()
        .filter(|s| s.start <= md)
        .max_by_key(|s| s.start)
        .unwrap_or(&SIGNS[9])
}

/// Sign by Japanese or English name.
pub fn parse_sign(name: &str) -> Option<&'static ZodiacSign> {
    let name = name.trim();
    SIGNS.iter().find(|s| {
        s.name == name
            || s.name_en.eq_ignore_ascii_case(name)
            || s.name.trim_end_matches('座') == name
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, m, d).unwrap()
    }

    #[test]
    fn boundaries() {
        assert_eq!(sun_sign(date(3, 21)).name_en, "Aries");
        assert_eq!(sun_sign(date(3, 20)).name_en, "Pisces");
        assert_eq!(sun_sign(date(1, 1)).name_en, "Capricorn");
        assert_eq!(sun_sign(date(1, 19)).name_en, "Capricorn");
        assert_eq!(sun_sign(date(1, 20)).name_en, "Aquarius");
        assert_eq!(sun_sign(date(12, 21)).name_en, "Sagittarius");
        assert_eq!(sun_sign(date(12, 31)).name_en, "Capricorn");
        assert_eq!(sun_sign(date(8, 23)).name_en, "Virgo");
    }

    #[test]
    fn every_sign_starts_on_its_date() {
        for sign in SIGNS.iter() {
            let (m, d) = sign.start;
            let first = date(m, d);
            assert_eq!(sun_sign(first).number, sign.number, "{}", sign.name_en);
            let previous = if sign.number == 1 { 12 } else { sign.number - 1 };
            let eve = first.pred_opt().unwrap();
            assert_eq!(sun_sign(eve).number, previous, "eve of {}", sign.name_en);
        }
    }

    #[test]
    fn signs_change_only_at_boundaries() {
        let mut d = date(1, 1);
        let mut changes = 0;
        while d.year() == 2000 {
            let next = d.succ_opt().unwrap();
            if next.year() == 2000 && sun_sign(next).number != sun_sign(d).number {
                changes += 1;
                assert_eq!(sun_sign(next).start, (next.month(), next.day()));
            }
            d = next;
        }
        assert_eq!(changes, 12);
    }

    #[test]
    fn parse_names() {
        assert_eq!(parse_sign("蠍座").map(|s| s.number), Some(8));
        assert_eq!(parse_sign("scorpio").map(|s| s.number), Some(8));
        assert_eq!(parse_sign("蠍").map(|s| s.number), Some(8));
        assert!(parse_sign("").is_none());
        assert!(parse_sign("Ophiuchus").is_none());
    }

    #[test]
    fn three_signs_per_element() {
        for e in Element::all() {
            assert_eq!(SIGNS.iter().filter(|s| s.element == *e).count(), 3);
        }
    }
}
