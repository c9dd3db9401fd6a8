//! Planets and houses.

use serde::Serialize;

/// One planet (the luminaries included).
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    /// Japanese name.
    pub name: &'static str,
    /// English name.
    pub name_en: &'static str,
    /// Glyph.
    pub symbol: &'static str,
    /// What it governs.
    pub domain: &'static str,
    /// Message when highlighted.
    pub message: &'static str,
}

/// The ten planets.
pub static PLANETS: [Planet; 10] = [
    Planet { name: "太陽", name_en: "Sun", symbol: "☉", domain: "自己と生命力", message: "自分らしさを堂々と表現することで運が開けます。" },
    Planet { name: "月", name_en: "Moon", symbol: "☽", domain: "感情と安心", message: "心が安らぐ時間と場所を確保しましょう。" },
    Planet { name: "水星", name_en: "Mercury", symbol: "☿", domain: "知性と言葉", message: "言葉と情報が幸運の鍵になります。" },
    Planet { name: "金星", name_en: "Venus", symbol: "♀", domain: "愛と美", message: "美しいものに触れ、愛を素直に表しましょう。" },
    Planet { name: "火星", name_en: "Mars", symbol: "♂", domain: "行動と情熱", message: "迷うより動くことで道が開けます。" },
    Planet { name: "木星", name_en: "Jupiter", symbol: "♃", domain: "拡大と幸運", message: "大きく構えることで幸運が広がります。" },
    Planet { name: "土星", name_en: "Saturn", symbol: "♄", domain: "責任と試練", message: "地道な努力が確かな実りになります。" },
    Planet { name: "天王星", name_en: "Uranus", symbol: "♅", domain: "変革と独創", message: "思い切った変化が新しい扉を開きます。" },
    Planet { name: "海王星", name_en: "Neptune", symbol: "♆", domain: "夢と直感", message: "直感とイメージの力を信じましょう。" },
    Planet { name: "冥王星", name_en: "Pluto", symbol: "♇", domain: "再生と変容", message: "手放すことで深い再生が起こります。" },
];

/// Planet by Japanese or English name.
pub fn parse_planet(name: &str) -> Option<&'static Planet> {
    let name = name.trim();
    PLANETS
        .iter()
        .find(|p| p.name == name || p.name_en.eq_ignore_ascii_case(name))
}

/// One house.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    /// House number, 1-12.
    pub number: u8,
    /// Theme.
    pub theme: &'static str,
    /// Message when in focus.
    pub message: &'static str,
}

/// The twelve houses.
pub static HOUSES: [House; 12] = [
    House { number: 1, theme: "自己と外見", message: "第一印象と自己表現に注目が集まります。" },
    House { number: 2, theme: "所有と金銭", message: "収入と価値観を見直す好機です。" },
    House { number: 3, theme: "学びと交流", message: "身近な人との会話や学びが実りをもたらします。" },
    House { number: 4, theme: "家庭と基盤", message: "家族や住まいを整えることが運気の土台になります。" },
    House { number: 5, theme: "創造と恋愛", message: "楽しむ心が恋と創造の扉を開きます。" },
    House { number: 6, theme: "仕事と健康", message: "日々の習慣を整えることが成果を生みます。" },
    House { number: 7, theme: "パートナー", message: "一対一の関係に大切な学びがあります。" },
    House { number: 8, theme: "絆と変容", message: "深い絆や共有資産に変化が訪れます。" },
    House { number: 9, theme: "探求と旅", message: "遠くへの旅や高度な学びが視野を広げます。" },
    House { number: 10, theme: "社会と使命", message: "社会的な評価と目標が前進します。" },
    House { number: 11, theme: "仲間と希望", message: "仲間とのつながりが希望を叶えます。" },
    House { number: 12, theme: "潜在意識と癒し", message: "静かな内省と休息が次の飛躍を準備します。" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_complete() {
        assert_eq!(PLANETS.len(), 10);
        for (i, h) in HOUSES.iter().enumerate() {
            assert_eq!(usize::from(h.number), i + 1);
        }
    }

    #[test]
    fn parse_planet_names() {
        assert_eq!(parse_planet("金星").map(|p| p.name_en), Some("Venus"));
        assert_eq!(parse_planet("jupiter").map(|p| p.name), Some("木星"));
        assert!(parse_planet("Vulcan").is_none());
    }
}
