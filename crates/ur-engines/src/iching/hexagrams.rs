//! Trigrams and the 64 hexagrams in King Wen order.

use std::borrow::Cow;

use serde::Serialize;
use ur_core::interpret::SymbolText;
use ur_core::QuestionCategory;

/// One of the eight trigrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigram {
    /// ☰ heaven.
    Qian,
    /// ☳ thunder.
    Zhen,
    /// ☵ water.
    Kan,
    /// ☶ mountain.
    Gen,
    /// ☷ earth.
    Kun,
    /// ☴ wind.
    Xun,
    /// ☲ fire.
    Li,
    /// ☱ lake.
    Dui,
}

impl Trigram {
    /// All trigrams, in the order of [`KING_WEN`]'s rows and columns.
    pub fn all() -> &'static [Self] {
        &[
            Self::Qian,
            Self::Zhen,
            Self::Kan,
            Self::Gen,
            Self::Kun,
            Self::Xun,
            Self::Li,
            Self::Dui,
        ]
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Lines bottom to top, `true` for yang.
    pub fn lines(self) -> [bool; 3] {
        match self {
            Self::Qian => [true, true, true],
            Self::Zhen => [true, false, false],
            Self::Kan => [false, true, false],
            Self::Gen => [false, false, true],
            Self::Kun => [false, false, false],
            Self::Xun => [false, true, true],
            Self::Li => [true, false, true],
            Self::Dui => [true, true, false],
        }
    }

    /// Trigram with these lines.
    pub fn from_lines(lines: [bool; 3]) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.lines() == lines)
            .unwrap_or(Self::Kun)
    }

    /// Trigram by its Earlier Heaven number (1 乾 … 8 坤), taken mod 8 with 0 as 8.
    pub fn from_earlier_heaven(n: u64) -> Self {
        match n % 8 {
            1 => Self::Qian,
            2 => Self::Dui,
            3 => Self::Li,
            4 => Self::Zhen,
            5 => Self::Xun,
            6 => Self::Kan,
            7 => Self::Gen,
            _ => Self::Kun,
        }
    }

    /// Character name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Qian => "乾",
            Self::Zhen => "震",
            Self::Kan => "坎",
            Self::Gen => "艮",
            Self::Kun => "坤",
            Self::Xun => "巽",
            Self::Li => "離",
            Self::Dui => "兌",
        }
    }

    /// The natural image.
    pub fn nature(self) -> &'static str {
        match self {
            Self::Qian => "天",
            Self::Zhen => "雷",
            Self::Kan => "水",
            Self::Gen => "山",
            Self::Kun => "地",
            Self::Xun => "風",
            Self::Li => "火",
            Self::Dui => "沢",
        }
    }

    /// The quality.
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Qian => "剛健",
            Self::Zhen => "奮起",
            Self::Kan => "険難",
            Self::Gen => "静止",
            Self::Kun => "柔順",
            Self::Xun => "浸透",
            Self::Li => "明晰",
            Self::Dui => "喜悦",
        }
    }
}

/// Hexagram number by `[lower][upper]` trigram.
pub const KING_WEN: [[u8; 8]; 8] = [
    [1, 34, 5, 26, 11, 9, 14, 43],
    [25, 51, 3, 27, 24, 42, 21, 17],
    [6, 40, 29, 4, 7, 59, 64, 47],
    [33, 62, 39, 52, 15, 53, 56, 31],
    [12, 16, 8, 23, 2, 20, 35, 45],
    [44, 32, 48, 18, 46, 57, 50, 28],
    [13, 55, 63, 22, 36, 37, 30, 49],
    [10, 54, 60, 41, 19, 61, 38, 58],
];

/// One hexagram.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hexagram {
    /// King Wen number, 1-64.
    pub number: u8,
    /// Full name, e.g. 乾為天.
    pub name: &'static str,
    /// Short name, e.g. 乾.
    pub short_name: &'static str,
    /// Theme keyword.
    pub keyword: &'static str,
    /// The judgement.
    pub judgement: &'static str,
}

impl Hexagram {
    /// Hexagram with these six lines (bottom to top, `true` for yang).
    pub fn from_lines(lines: [bool; 6]) -> &'static Hexagram {
        let lower = Trigram::from_lines([lines[0], lines[1], lines[2]]);
        let upper = Trigram::from_lines([lines[3], lines[4], lines[5]]);
        let number = KING_WEN[lower.index()][upper.index()];
        &HEXAGRAMS[usize::from(number) - 1]
    }

    /// Lower and upper trigrams.
    pub fn trigrams(&self) -> (Trigram, Trigram) {
        for lower in Trigram::all() {
            for upper in Trigram::all() {
                if KING_WEN[lower.index()][upper.index()] == self.number {
                    return (*lower, *upper);
                }
            }
        }
        (Trigram::Kun, Trigram::Kun)
    }

    /// The image, built from the two trigrams.
    pub fn image(&self) -> String {
        let (lower, upper) = self.trigrams();
        if lower == upper {
            format!(
                "{}が重なる象。{}の性質がいっそう強まります。",
                lower.nature(),
                lower.attribute()
            )
        } else {
            format!(
                "{}の下に{}がある象。外は{}、内は{}です。",
                upper.nature(),
                lower.nature(),
                upper.attribute(),
                lower.attribute()
            )
        }
    }

    /// Advice for a question category.
    pub fn advice(&self, category: QuestionCategory) -> String {
        let area = match category {
            QuestionCategory::General => "全体の運勢",
            QuestionCategory::Love => "恋愛",
            QuestionCategory::Career => "仕事",
            QuestionCategory::Money => "金銭",
            QuestionCategory::Health => "健康",
            QuestionCategory::Spiritual => "心の成長",
            QuestionCategory::Relationship => "人間関係",
        };
        format!(
            "{}においては「{}」の時です。{}",
            area, self.keyword, self.judgement
        )
    }
}

impl SymbolText for Hexagram {
    fn name(&self) -> &str {
        self.name
    }

    fn general_meanings(&self) -> Vec<&str> {
        vec![self.judgement]
    }

    fn position_meaning(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "primary" => Some(Cow::Owned(self.image())),
            "resulting" => Some(Cow::Owned(format!(
                "変化の先には「{}」の局面が待っています。",
                self.keyword
            ))),
            _ => None,
        }
    }

    fn category_meaning(&self, category: QuestionCategory) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.advice(category)))
    }
}

macro_rules! hexagrams {
    ($(($n:expr, $name:expr, $short:expr, $kw:expr, $j:expr)),* $(,)?) => {
        [$(Hexagram { number: $n, name: $name, short_name: $short, keyword: $kw, judgement: $j }),*]
    };
}

/// The 64 hexagrams, index = number − 1.
pub static HEXAGRAMS: [Hexagram; 64] = hexagrams![
    (1, "乾為天", "乾", "創造", "天の力が満ち、志を貫けば大いに通じます。"),
    (2, "坤為地", "坤", "受容", "大地のように受け入れ、従うことで道が開けます。"),
    (3, "水雷屯", "屯", "産みの苦しみ", "始まりの困難です。焦らず足場を固めれば後に通じます。"),
    (4, "山水蒙", "蒙", "未熟", "まだ道が見えていません。良き師に学ぶことが吉です。"),
    (5, "水天需", "需", "待機", "時を待つ卦です。誠実に備えれば機は必ず訪れます。"),
    (6, "天水訟", "訟", "争い", "争いは途中で収めるのが吉です。最後まで争えば凶となります。"),
    (7, "地水師", "師", "統率", "正しい目的と優れた指導者のもとで人を動かせば吉です。"),
    (8, "水地比", "比", "親和", "人と親しみ助け合うことで幸運が集まります。"),
    (9, "風天小畜", "小畜", "小さな蓄え", "力はまだ小さく、今は蓄える時です。"),
    (10, "天沢履", "履", "礼節", "虎の尾を踏むような場面でも、礼を守れば害はありません。"),
    (11, "地天泰", "泰", "安泰", "天地が交わり、万事が通じる平和な時です。"),
    (12, "天地否", "否", "閉塞", "天地が交わらず、物事が通じにくい時です。節を守りましょう。"),
    (13, "天火同人", "同人", "協調", "志を同じくする人と広く手を結べば大事を成せます。"),
    (14, "火天大有", "大有", "豊かさ", "大いなる所有の時です。徳をもって豊かさを分かち合いましょう。"),
    (15, "地山謙", "謙", "謙虚", "謙虚さが最後まで物事を成し遂げさせます。"),
    (16, "雷地予", "予", "喜び", "喜びと備えの時です。準備が整えば人を動かせます。"),
    (17, "沢雷随", "随", "追随", "時の流れに従い、良きものに随えば吉です。"),
    (18, "山風蠱", "蠱", "刷新", "腐敗したものを立て直す時です。始める前後をよく考えましょう。"),
    (19, "地沢臨", "臨", "接近", "勢いが近づき、物事が伸びていく時です。"),
    (20, "風地観", "観", "観察", "よく観て、よく観られることを意識しましょう。"),
    (21, "火雷噬嗑", "噬嗑", "決断", "障害を噛み砕く卦です。明快な判断で妨げを取り除きましょう。"),
    (22, "山火賁", "賁", "装飾", "飾りは小事には良いですが、本質を見失わないことです。"),
    (23, "山地剥", "剥", "剥落", "崩れていく時です。動かずに身を守るのが賢明です。"),
    (24, "地雷復", "復", "回復", "一陽来復。良い流れが戻り始めています。"),
    (25, "天雷无妄", "无妄", "無作為", "作為を捨て、誠のままに動けば通じます。"),
    (26, "山天大畜", "大畜", "大きな蓄え", "力を大いに蓄える時です。学びと修養が実を結びます。"),
    (27, "山雷頤", "頤", "養い", "何を養い、何を口にするかを正しく選びましょう。"),
    (28, "沢風大過", "大過", "過重", "荷が重すぎる状態です。思い切った対処が必要です。"),
    (29, "坎為水", "坎", "険難", "困難が重なりますが、誠を失わなければ通り抜けられます。"),
    (30, "離為火", "離", "明知", "明るさに付き従う時です。正しいものに寄り添いましょう。"),
    (31, "沢山咸", "咸", "感応", "心が感じ合う時です。素直な交流が吉を呼びます。"),
    (32, "雷風恒", "恒", "恒常", "変わらぬ道を続けることで成就します。"),
    (33, "天山遯", "遯", "退避", "退くべき時です。潔く身を引くことが後の吉となります。"),
    (34, "雷天大壮", "大壮", "盛大", "勢いが盛んな時です。正しさを保てば大いに進めます。"),
    (35, "火地晋", "晋", "進展", "日が昇るように進む時です。認められ、引き立てられます。"),
    (36, "地火明夷", "明夷", "忍耐", "明るさが傷つく時です。才を内に秘めて耐えましょう。"),
    (37, "風火家人", "家人", "家庭", "家の内を正すことが外の秩序につながります。"),
    (38, "火沢睽", "睽", "対立", "意見が背き合う時です。小さな事なら吉です。"),
    (39, "水山蹇", "蹇", "困難", "行く手が険しい時です。無理をせず助けを求めましょう。"),
    (40, "雷水解", "解", "解放", "緊張が解ける時です。速やかに片をつけましょう。"),
    (41, "山沢損", "損", "減損", "減らすことで得る時です。誠意があれば吉です。"),
    (42, "風雷益", "益", "増益", "増える時です。積極的に動けば利があります。"),
    (43, "沢天夬", "夬", "決断", "決然と悪を断つ時です。ただし力任せは禁物です。"),
    (44, "天風姤", "姤", "出会い", "思いがけない出会いの時です。深入りには注意しましょう。"),
    (45, "沢地萃", "萃", "集合", "人や物が集まる時です。中心となる誠を持ちましょう。"),
    (46, "地風升", "升", "上昇", "少しずつ昇っていく時です。積み重ねが吉です。"),
    (47, "沢水困", "困", "困窮", "行き詰まりの時です。言葉より行いで信を示しましょう。"),
    (48, "水風井", "井", "源泉", "井戸のように変わらぬ恵みを保ちましょう。"),
    (49, "沢火革", "革", "変革", "改める時です。機が熟してから行えば信頼を得ます。"),
    (50, "火風鼎", "鼎", "安定", "新しい秩序が定まる時です。大いに吉です。"),
    (51, "震為雷", "震", "衝撃", "雷に驚いても、落ち着きを保てば後に笑えます。"),
    (52, "艮為山", "艮", "静止", "止まるべき時に止まることが大切です。"),
    (53, "風山漸", "漸", "漸進", "一歩ずつ進むことで確かな成果を得ます。"),
    (54, "雷沢帰妹", "帰妹", "従属", "立場をわきまえない進み方は凶です。"),
    (55, "雷火豊", "豊", "豊盛", "盛りの時です。満ちれば欠けることを心得ましょう。"),
    (56, "火山旅", "旅", "旅", "旅の身です。慎み深くあれば小さく通じます。"),
    (57, "巽為風", "巽", "浸透", "風のように柔らかく浸透する時です。"),
    (58, "兌為沢", "兌", "喜悦", "喜びを分かち合う時です。言葉に誠を込めましょう。"),
    (59, "風水渙", "渙", "離散", "散らばるものを再び集める時です。"),
    (60, "水沢節", "節", "節度", "節度を守ることが大切です。ただし厳しすぎは続きません。"),
    (61, "風沢中孚", "中孚", "誠実", "心の内の誠が相手を動かします。"),
    (62, "雷山小過", "小過", "小さな行き過ぎ", "小事には良く、大事には向かない時です。"),
    (63, "水火既済", "既済", "完成", "すでに整った時です。初めは吉でも終わりに乱れやすいものです。"),
    (64, "火水未済", "未済", "未完成", "まだ終わっていません。慎重に進めば成就します。"),
];

/// Hexagram by King Wen number, 1-64.
pub fn get_hexagram(number: u8) -> Option<&'static Hexagram> {
    usize::from(number)
        .checked_sub(1)
        .and_then(|i| HEXAGRAMS.get(i))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn table_is_numbered_in_order() {
        for (i, hex) in HEXAGRAMS.iter().enumerate() {
            assert_eq!(usize::from(hex.number), i + 1);
        }
    }

    #[test]
    fn all_64_patterns_map_to_distinct_hexagrams() {
        let mut seen = HashSet::new();
        for bits in 0u8..64 {
            let lines: [bool; 6] = std::array::from_fn(|i| bits & (1 << i) != 0);
            seen.insert(Hexagram::from_lines(lines).number);
        }
        assert_eq!(seen.len(), 64);
    }

    #[test]
    fn known_hexagrams() {
        assert_eq!(Hexagram::from_lines([true; 6]).number, 1);
        assert_eq!(Hexagram::from_lines([false; 6]).number, 2);
        // heaven below, earth above
        let tai = [true, true, true, false, false, false];
        assert_eq!(Hexagram::from_lines(tai).number, 11);
        // fire below, water above
        let jiji = [true, false, true, false, true, false];
        assert_eq!(Hexagram::from_lines(jiji).number, 63);
    }

    #[test]
    fn trigrams_round_trip() {
        for t in Trigram::all() {
            assert_eq!(Trigram::from_lines(t.lines()), *t);
        }
        let hex = get_hexagram(11).unwrap();
        assert_eq!(hex.trigrams(), (Trigram::Qian, Trigram::Kun));
    }

    #[test]
    fn earlier_heaven_numbers() {
        assert_eq!(Trigram::from_earlier_heaven(1), Trigram::Qian);
        assert_eq!(Trigram::from_earlier_heaven(8), Trigram::Kun);
        assert_eq!(Trigram::from_earlier_heaven(16), Trigram::Kun);
        assert_eq!(Trigram::from_earlier_heaven(11), Trigram::Li);
    }

    #[test]
    fn lookup_bounds() {
        assert!(get_hexagram(0).is_none());
        assert!(get_hexagram(65).is_none());
        assert_eq!(get_hexagram(64).map(|h| h.short_name), Some("未済"));
    }

    #[test]
    fn image_text() {
        let hex = get_hexagram(1).unwrap();
        assert!(hex.image().starts_with("天が重なる象"));
        let hex = get_hexagram(11).unwrap();
        assert!(hex.image().starts_with("地の下に天がある象"));
    }
}
