//! The Tree of Life: ten sephirot and the twenty-two paths between them.

use serde::Serialize;

/// The three pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pillar {
    /// Right pillar.
    Mercy,
    /// Left pillar.
    Severity,
    /// Middle pillar.
    Balance,
}

impl Pillar {
    /// Japanese name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mercy => "慈悲の柱",
            Self::Severity => "峻厳の柱",
            Self::Balance => "均衡の柱",
        }
    }
}

/// One sephira.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sephira {
    /// Position on the tree, 1-10.
    pub number: u8,
    /// Transliterated name.
    pub name: &'static str,
    /// Japanese meaning.
    pub title: &'static str,
    /// Pillar.
    pub pillar: Pillar,
    /// Planetary attribution.
    pub planet: &'static str,
    /// Divine name.
    pub divine_name: &'static str,
    /// Archangel.
    pub archangel: &'static str,
    /// Meaning.
    pub meaning: &'static str,
    /// Lesson.
    pub lesson: &'static str,
}

/// The ten sephirot, index = number − 1.
pub static SEPHIROT: [Sephira; 10] = [
    Sephira {
        number: 1,
        name: "Keter",
        title: "王冠",
        pillar: Pillar::Balance,
        planet: "海王星",
        divine_name: "エヘイエー",
        archangel: "メタトロン",
        meaning: "すべての始まりである純粋な意志と神性の光です。",
        lesson: "自我を超えた大いなる目的に心を開くこと。",
    },
    Sephira {
        number: 2,
        name: "Chokhmah",
        title: "知恵",
        pillar: Pillar::Mercy,
        planet: "天王星",
        divine_name: "ヤー",
        archangel: "ラツィエル",
        meaning: "ひらめきと創造の衝動、形になる前の力です。",
        lesson: "直感の閃きを信じて受け取ること。",
    },
    Sephira {
        number: 3,
        name: "Binah",
        title: "理解",
        pillar: Pillar::Severity,
        planet: "土星",
        divine_name: "エロヒム",
        archangel: "ツァフキエル",
        meaning: "ひらめきに形を与える理解と受容の器です。",
        lesson: "限界を受け入れ、深く理解すること。",
    },
    Sephira {
        number: 4,
        name: "Chesed",
        title: "慈悲",
        pillar: Pillar::Mercy,
        planet: "木星",
        divine_name: "エル",
        archangel: "ツァドキエル",
        meaning: "惜しみない愛と拡大、寛大さの力です。",
        lesson: "見返りを求めずに与えること。",
    },
    Sephira {
        number: 5,
        name: "Gevurah",
        title: "峻厳",
        pillar: Pillar::Severity,
        planet: "火星",
        divine_name: "エロヒム・ギボール",
        archangel: "カマエル",
        meaning: "不要なものを断ち切る勇気と規律の力です。",
        lesson: "正しい境界線を引くこと。",
    },
    Sephira {
        number: 6,
        name: "Tiferet",
        title: "美",
        pillar: Pillar::Balance,
        planet: "太陽",
        divine_name: "ヤハウェ・エロア・ヴェ・ダート",
        archangel: "ラファエル",
        meaning: "慈悲と峻厳を調和させる心の中心です。",
        lesson: "真の自己に調和して生きること。",
    },
    Sephira {
        number: 7,
        name: "Netzach",
        title: "勝利",
        pillar: Pillar::Mercy,
        planet: "金星",
        divine_name: "ヤハウェ・ツァバオト",
        archangel: "ハニエル",
        meaning: "情熱と感情、芸術と愛の力です。",
        lesson: "感情を創造の力へと昇華すること。",
    },
    Sephira {
        number: 8,
        name: "Hod",
        title: "栄光",
        pillar: Pillar::Severity,
        planet: "水星",
        divine_name: "エロヒム・ツァバオト",
        archangel: "ミカエル",
        meaning: "知性と言葉、分析と伝達の力です。",
        lesson: "思考を明晰に整え、誠実に伝えること。",
    },
    Sephira {
        number: 9,
        name: "Yesod",
        title: "基礎",
        pillar: Pillar::Balance,
        planet: "月",
        divine_name: "シャダイ・エル・ハイ",
        archangel: "ガブリエル",
        meaning: "夢と潜在意識、見えない世界の土台です。",
        lesson: "無意識の声に耳を傾けること。",
    },
    Sephira {
        number: 10,
        name: "Malkuth",
        title: "王国",
        pillar: Pillar::Balance,
        planet: "地球",
        divine_name: "アドナイ・メレク",
        archangel: "サンダルフォン",
        meaning: "物質世界と身体、すべてが形になる場所です。",
        lesson: "日々の現実の中に聖なるものを見出すこと。",
    },
];

/// One path between two sephirot.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreePath {
    /// Path number, 11-32.
    pub number: u8,
    /// Hebrew letter.
    pub letter: &'static str,
    /// Transliterated letter name.
    pub letter_name: &'static str,
    /// Sephirot it joins (lower number first).
    pub connects: (u8, u8),
    /// Meaning.
    pub meaning: &'static str,
}

impl TreePath {
    /// Major arcanum attributed to the path (path 11 is card 0).
    pub fn tarot_id(&self) -> usize {
        usize::from(self.number - 11)
    }
}

macro_rules! paths {
    ($(($n:expr, $l:expr, $ln:expr, $a:expr, $b:expr, $m:expr)),* $(,)?) => {
        [$(TreePath { number: $n, letter: $l, letter_name: $ln, connects: ($a, $b), meaning: $m }),*]
    };
}

/// The 22 paths in Golden Dawn attribution.
pub static PATHS: [TreePath; 22] = paths![
    (11, "א", "Aleph", 1, 2, "純粋な始まりの息吹"),
    (12, "ב", "Beth", 1, 3, "意志を形にする魔術"),
    (13, "ג", "Gimel", 1, 6, "深い内なる知恵"),
    (14, "ד", "Daleth", 2, 3, "豊かな創造と育み"),
    (15, "ה", "Heh", 2, 6, "秩序を打ち立てる力"),
    (16, "ו", "Vav", 2, 4, "伝統と教えの継承"),
    (17, "ז", "Zayin", 3, 6, "選択と結びつき"),
    (18, "ח", "Cheth", 3, 5, "意志による前進"),
    (19, "ט", "Teth", 4, 5, "内なる獣を馴らす強さ"),
    (20, "י", "Yod", 4, 6, "孤独な探求の灯"),
    (21, "כ", "Kaph", 4, 7, "巡りゆく運命"),
    (22, "ל", "Lamed", 5, 6, "均衡と裁き"),
    (23, "מ", "Mem", 5, 8, "手放しと視点の転換"),
    (24, "נ", "Nun", 6, 7, "変容と再生"),
    (25, "ס", "Samekh", 6, 9, "調和させる錬金"),
    (26, "ע", "Ayin", 6, 8, "物質への執着との対峙"),
    (27, "פ", "Peh", 7, 8, "偽りの構造の崩壊"),
    (28, "צ", "Tzaddi", 7, 9, "希望と瞑想"),
    (29, "ק", "Qoph", 7, 10, "夢と幻想の道"),
    (30, "ר", "Resh", 8, 9, "明晰な光"),
    (31, "ש", "Shin", 8, 10, "目覚めの炎"),
    (32, "ת", "Tav", 9, 10, "世界への帰還"),
];

/// Sephira by number, 1-10.
pub fn get_sephira(number: u8) -> Option<&'static Sephira> {
    usize::from(number)
        .checked_sub(1)
        .and_then(|i| SEPHIROT.get(i))
}

/// Path joining two sephirot, in either order.
pub fn path_between(a: u8, b: u8) -> Option<&'static TreePath> {
    let key = (a.min(b), a.max(b));
    PATHS.iter().find(|p| p.connects == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_sephirot_numbered_in_order() {
        for (i, s) in SEPHIROT.iter().enumerate() {
            assert_eq!(usize::from(s.number), i + 1);
        }
    }

    #[test]
    fn paths_are_numbered_and_distinct() {
        for (i, p) in PATHS.iter().enumerate() {
            assert_eq!(usize::from(p.number), i + 11);
            assert!(p.connects.0 < p.connects.1);
        }
        let mut pairs: Vec<(u8, u8)> = PATHS.iter().map(|p| p.connects).collect();
        pairs.sort_unstable();
        pairs.dedup();
        assert_eq!(pairs.len(), 22);
    }

    #[test]
    fn path_lookup_is_symmetric() {
        assert_eq!(path_between(1, 2).map(|p| p.letter_name), Some("Aleph"));
        assert_eq!(path_between(10, 9).map(|p| p.letter_name), Some("Tav"));
        assert!(path_between(1, 10).is_none());
        assert!(path_between(4, 4).is_none());
    }

    #[test]
    fn tarot_attribution() {
        assert_eq!(PATHS[0].tarot_id(), 0);
        assert_eq!(PATHS[21].tarot_id(), 21);
    }
}
