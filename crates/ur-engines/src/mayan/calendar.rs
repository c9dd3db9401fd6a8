//! Calendar arithmetic: Tzolkin, Haab and the Long Count.
//!
//! All counts run from the creation date 0.0.0.0.0 4 Ahau 8 Cumku under
//! the GMT correlation (Julian day 584283).

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Julian day number of 0.0.0.0.0.
pub const GMT_CORRELATION: i64 = 584_283;

/// Julian day number of 0001-01-01 minus one.
const CE_JDN_OFFSET: i64 = 1_721_425;

/// One of the twenty day signs.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySign {
    /// 1 (Imix) to 20 (Ahau).
    pub number: u8,
    /// Yucatec name.
    pub name: &'static str,
    /// Dreamspell seal name.
    pub seal: &'static str,
    /// Seal colour.
    pub color: &'static str,
    /// Keyword.
    pub keyword: &'static str,
    /// Meaning.
    pub meaning: &'static str,
}

macro_rules! signs {
    ($(($n:expr, $name:expr, $seal:expr, $c:expr, $k:expr, $m:expr)),* $(,)?) => {
        [$(DaySign { number: $n, name: $name, seal: $seal, color: $c, keyword: $k, meaning: $m }),*]
    };
}

/// The twenty day signs, Imix first.
pub static DAY_SIGNS: [DaySign; 20] = signs![
    (1, "Imix", "赤い竜", "赤", "誕生", "すべてを育む母なる力。新しいものを生み出し、養う存在です。"),
    (2, "Ik", "白い風", "白", "スピリット", "言葉と息吹で魂を伝える力。感性豊かなコミュニケーターです。"),
    (3, "Akbal", "青い夜", "青", "夢", "内なる豊かさと夢見る力。直感で未来を描きます。"),
    (4, "Kan", "黄色い種", "黄", "気づき", "可能性の種を宿し、時をかけて花開かせる力です。"),
    (5, "Chicchan", "赤い蛇", "赤", "生命力", "身体の知恵と情熱。本能に従って生き抜く力です。"),
    (6, "Cimi", "白い世界の橋渡し", "白", "死と再生", "手放しと移行を司り、異なる世界をつなぐ存在です。"),
    (7, "Manik", "青い手", "青", "癒し", "手を通して癒し、成し遂げる実践の力です。"),
    (8, "Lamat", "黄色い星", "黄", "美", "調和と美を求め、世界を芸術的に彩る力です。"),
    (9, "Muluc", "赤い月", "赤", "浄化", "流れに乗り、感情を浄める水の力です。"),
    (10, "Oc", "白い犬", "白", "愛", "忠実さと無条件の愛。仲間を守り抜く心です。"),
    (11, "Chuen", "青い猿", "青", "遊び", "遊び心と魔法。笑いで世界を軽やかにします。"),
    (12, "Eb", "黄色い人", "黄", "自由意志", "知恵と自由意志で自分の道を選ぶ力です。"),
    (13, "Ben", "赤い空歩く人", "赤", "探求", "天と地をつなぎ、未知を探求する開拓者です。"),
    (14, "Ix", "白い魔法使い", "白", "受容", "時を超えた受容と魔術的な感受性です。"),
    (15, "Men", "青い鷲", "青", "ビジョン", "高みから全体を見渡すビジョンの力です。"),
    (16, "Cib", "黄色い戦士", "黄", "知性", "問いを恐れず、知性で道を切り開く勇気です。"),
    (17, "Caban", "赤い地球", "赤", "共時性", "地球と共鳴し、シンクロニシティを導く力です。"),
    (18, "Etznab", "白い鏡", "白", "真実", "ありのままを映し出し、真実を見極める力です。"),
    (19, "Cauac", "青い嵐", "青", "変容", "嵐のようなエネルギーで古いものを一新します。"),
    (20, "Ahau", "黄色い太陽", "黄", "悟り", "すべてを照らす光。無条件の愛と悟りの力です。"),
];

/// One of the thirteen tones.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tone {
    /// 1-13.
    pub number: u8,
    /// Name.
    pub name: &'static str,
    /// Keyword.
    pub keyword: &'static str,
}

/// The thirteen galactic tones.
pub static TONES: [Tone; 13] = [
    Tone { number: 1, name: "磁気の音", keyword: "目的を引き寄せる" },
    Tone { number: 2, name: "月の音", keyword: "挑戦と二極性" },
    Tone { number: 3, name: "電気の音", keyword: "奉仕と活性化" },
    Tone { number: 4, name: "自己存在の音", keyword: "形を定める" },
    Tone { number: 5, name: "倍音の音", keyword: "力を集める" },
    Tone { number: 6, name: "律動の音", keyword: "バランスと平等" },
    Tone { number: 7, name: "共振の音", keyword: "調律と神秘" },
    Tone { number: 8, name: "銀河の音", keyword: "調和と誠実" },
    Tone { number: 9, name: "太陽の音", keyword: "意図の実現" },
    Tone { number: 10, name: "惑星の音", keyword: "顕現と完成" },
    Tone { number: 11, name: "スペクトルの音", keyword: "解放と手放し" },
    Tone { number: 12, name: "水晶の音", keyword: "協力と普遍化" },
    Tone { number: 13, name: "宇宙の音", keyword: "超越と存在" },
];

/// Haab months: eighteen of twenty days, then Uayeb of five.
pub static HAAB_MONTHS: [&str; 19] = [
    "Pop", "Uo", "Zip", "Zotz", "Tzec", "Xul", "Yaxkin", "Mol", "Chen", "Yax", "Zac", "Ceh",
    "Mac", "Kankin", "Muan", "Pax", "Kayab", "Cumku", "Uayeb",
];

/// Julian day number of a Gregorian date.
pub fn julian_day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + CE_JDN_OFFSET
}

/// Days elapsed since 0.0.0.0.0.
pub fn days_since_creation(date: NaiveDate) -> i64 {
    julian_day_number(date) - GMT_CORRELATION
}

/// Position in the 260-day count.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tzolkin {
    /// Kin number, 1-260 (1 Imix = 1).
    pub kin: u16,
    /// Tone.
    pub tone: Tone,
    /// Day sign.
    pub sign: DaySign,
}

impl Tzolkin {
    /// Tzolkin date for a day count.
    pub fn from_days(days: i64) -> Self {
        // 0.0.0.0.0 is 4 Ahau, kin 160.
        let kin = ((days + 159).rem_euclid(260) + 1) as u16;
        Self::from_kin(kin)
    }

    /// Tzolkin date for a kin number; values outside 1-260 wrap.
    pub fn from_kin(kin: u16) -> Self {
        let k = (usize::from(kin) + 259) % 260;
        Self {
            kin: k as u16 + 1,
            tone: TONES[k % 13],
            sign: DAY_SIGNS[k % 20],
        }
    }

    /// The kin that opened this thirteen-day wavespell.
    pub fn wavespell(&self) -> DaySign {
        let start = (usize::from(self.kin) - 1) / 13 * 13;
        DAY_SIGNS[start % 20]
    }
}

impl std::fmt::Display for Tzolkin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.tone.number, self.sign.name)
    }
}

/// Position in the 365-day count.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Haab {
    /// Day of the month, 0-19 (0-4 in Uayeb).
    pub day: u8,
    /// Month name.
    pub month: &'static str,
}

impl Haab {
    /// Haab date for a day count.
    pub fn from_days(days: i64) -> Self {
        // 0.0.0.0.0 is 8 Cumku, day 348 of the year.
        let pos = (days + 348).rem_euclid(365) as usize;
        Self {
            day: (pos % 20) as u8,
            month: HAAB_MONTHS[pos / 20],
        }
    }
}

impl std::fmt::Display for Haab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.day, self.month)
    }
}

/// Long Count date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LongCount {
    /// 144,000-day periods.
    pub baktun: i64,
    /// 7,200-day periods.
    pub katun: i64,
    /// 360-day periods.
    pub tun: i64,
    /// 20-day periods.
    pub uinal: i64,
    /// Days.
    pub kin: i64,
}

impl LongCount {
    /// Long Count for a day count.
    pub fn from_days(days: i64) -> Self {
        let baktun = days.div_euclid(144_000);
        let rest = days.rem_euclid(144_000);
        Self {
            baktun,
            katun: rest / 7_200,
            tun: rest % 7_200 / 360,
            uinal: rest % 360 / 20,
            kin: rest % 20,
        }
    }
}

impl std::fmt::Display for LongCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}",
            self.baktun, self.katun, self.tun, self.uinal, self.kin
        )
    }
}

fn seal_at(number: i64) -> DaySign {
    // Seal numbers run 1-20 with 20 and 0 both naming Ahau.
    let idx = (number - 1).rem_euclid(20) as usize;
    DAY_SIGNS[idx]
}

/// Analog partner: seal numbers sum to 19 (mod 20).
pub fn analog(sign: &DaySign) -> DaySign {
    seal_at(19 - i64::from(sign.number))
}

/// Antipode: ten seals away.
pub fn antipode(sign: &DaySign) -> DaySign {
    seal_at(i64::from(sign.number) + 10)
}

/// Occult partner: seal numbers sum to 21.
pub fn occult(sign: &DaySign) -> DaySign {
    seal_at(21 - i64::from(sign.number))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn end_of_the_thirteenth_baktun() {
        let days = days_since_creation(date(2012, 12, 21));
        assert_eq!(LongCount::from_days(days).to_string(), "13.0.0.0.0");
        assert_eq!(Tzolkin::from_days(days).to_string(), "4 Ahau");
        assert_eq!(Haab::from_days(days).to_string(), "3 Kankin");
        assert_eq!(Tzolkin::from_days(days).kin, 160);
    }

    #[test]
    fn unix_epoch() {
        let days = days_since_creation(date(1970, 1, 1));
        assert_eq!(LongCount::from_days(days).to_string(), "12.17.16.7.5");
        assert_eq!(Tzolkin::from_days(days).to_string(), "13 Chicchan");
    }

    #[test]
    fn creation_date() {
        assert_eq!(Tzolkin::from_days(0).to_string(), "4 Ahau");
        assert_eq!(Haab::from_days(0).to_string(), "8 Cumku");
        assert_eq!(LongCount::from_days(0).to_string(), "0.0.0.0.0");
    }

    #[test]
    fn julian_day() {
        assert_eq!(julian_day_number(date(2000, 1, 1)), 2_451_545);
    }

    #[test]
    fn kin_cycle_is_consistent() {
        for kin in 1..=260u16 {
            let t = Tzolkin::from_kin(kin);
            assert_eq!(t.kin, kin);
            assert_eq!(usize::from(t.tone.number), (usize::from(kin) - 1) % 13 + 1);
            assert_eq!(usize::from(t.sign.number), (usize::from(kin) - 1) % 20 + 1);
        }
        assert_eq!(Tzolkin::from_kin(1).to_string(), "1 Imix");
        assert_eq!(Tzolkin::from_kin(261).kin, 1);
    }

    #[test]
    fn uayeb_has_five_days() {
        // Day 360 of the Haab year is 0 Uayeb.
        let h = Haab::from_days(360 - 348);
        assert_eq!(h.month, "Uayeb");
        assert_eq!(h.day, 0);
        assert_eq!(Haab::from_days(364 - 348).day, 4);
    }

    #[test]
    fn partner_seals() {
        let dragon = &DAY_SIGNS[0];
        assert_eq!(analog(dragon).seal, "白い鏡");
        assert_eq!(antipode(dragon).seal, "青い猿");
        assert_eq!(occult(dragon).seal, "黄色い太陽");
        let sun = &DAY_SIGNS[19];
        assert_eq!(analog(sun).seal, "青い嵐");
        assert_eq!(occult(sun).seal, "赤い竜");
    }

    #[test]
    fn wavespell_start() {
        assert_eq!(Tzolkin::from_kin(1).wavespell().name, "Imix");
        assert_eq!(Tzolkin::from_kin(14).wavespell().name, "Ix");
        assert_eq!(Tzolkin::from_kin(160).wavespell().name, Tzolkin::from_kin(157).sign.name);
    }
}
