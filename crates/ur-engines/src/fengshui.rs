//! Eight Mansions feng shui.
//!
//! The Kua number comes from the birth year and gender and fixes the
//! person's four favourable and four unfavourable directions.

use chrono::Datelike;
use serde::Serialize;
use ur_core::engine::{Divination, DivinationEngine, Reading, ReadingContext};
use ur_core::{DivinationKind, Gender, QuestionCategory};

use crate::numerology::digit_sum;

/// Compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// North.
    North,
    /// North-east.
    NorthEast,
    /// East.
    East,
    /// South-east.
    SouthEast,
    /// South.
    South,
    /// South-west.
    SouthWest,
    /// West.
    West,
    /// North-west.
    NorthWest,
}

impl Direction {
    /// Japanese label.
    pub fn label(self) -> &'static str {
        match self {
            Self::North => "北",
            Self::NorthEast => "北東",
            Self::East => "東",
            Self::SouthEast => "南東",
            Self::South => "南",
            Self::SouthWest => "南西",
            Self::West => "西",
            Self::NorthWest => "北西",
        }
    }
}

/// The eight direction qualities, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quality {
    /// Prosperity.
    ShengChi,
    /// Health.
    TianYi,
    /// Relationships.
    YanNian,
    /// Stability.
    FuWei,
    /// Mishaps.
    HuoHai,
    /// Quarrels.
    WuGui,
    /// Setbacks.
    LiuSha,
    /// Total loss.
    JueMing,
}

impl Quality {
    /// All eight in table order.
    pub fn all() -> [Self; 8] {
        [
            Self::ShengChi,
            Self::TianYi,
            Self::YanNian,
            Self::FuWei,
            Self::HuoHai,
            Self::WuGui,
            Self::LiuSha,
            Self::JueMing,
        ]
    }

    /// Japanese name.
    pub fn label(self) -> &'static str {
        match self {
            Self::ShengChi => "生気",
            Self::TianYi => "天医",
            Self::YanNian => "延年",
            Self::FuWei => "伏位",
            Self::HuoHai => "禍害",
            Self::WuGui => "五鬼",
            Self::LiuSha => "六殺",
            Self::JueMing => "絶命",
        }
    }

    /// Whether the direction is favourable.
    pub fn is_auspicious(self) -> bool {
        matches!(self, Self::ShengChi | Self::TianYi | Self::YanNian | Self::FuWei)
    }

    /// What the direction brings.
    pub fn meaning(self) -> &'static str {
        match self {
            Self::ShengChi => "成功と繁栄を呼ぶ最良の方位です。",
            Self::TianYi => "健康と回復を支える方位です。",
            Self::YanNian => "人間関係と愛情を育てる方位です。",
            Self::FuWei => "心を落ち着け、自分を保つ方位です。",
            Self::HuoHai => "小さなトラブルや失敗を招きやすい方位です。",
            Self::WuGui => "争いや盗難に注意が必要な方位です。",
            Self::LiuSha => "人間関係のもつれや停滞を招く方位です。",
            Self::JueMing => "最も避けたい、消耗と損失の方位です。",
        }
    }
}

/// Directions per Kua in [`Quality::all`] order. Kua 5 never occurs.
const MANSIONS: [(u8, [Direction; 8]); 8] = {
    use Direction::{
        East as E, North as N, NorthEast as NE, NorthWest as NW, South as S, SouthEast as SE,
        SouthWest as SW, West as W,
    };
    [
        (1, [SE, E, S, N, W, NE, NW, SW]),
        (2, [NE, W, NW, SW, E, SE, S, N]),
        (3, [S, N, SE, E, SW, NW, NE, W]),
        (4, [N, S, E, SE, NW, SW, W, NE]),
        (6, [W, NE, SW, NW, SE, E, N, S]),
        (7, [NW, SW, NE, W, N, S, SE, E]),
        (8, [SW, NW, W, NE, S, N, E, SE]),
        (9, [E, SE, N, S, NE, W, SW, NW]),
    ]
};

fn reduce_digit(mut n: u64) -> u64 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

/// Kua number for a birth year. Missing or non-binary gender uses the male
/// formula. The full-year digit sum gives the same result either side of 2000.
pub fn kua_number(year: i32, gender: Option<Gender>) -> u8 {
    let n = reduce_digit(digit_sum(u64::from(year.unsigned_abs())));
    let female = gender == Some(Gender::Female);
    let raw = if female { 4 + n } else { 11u64.saturating_sub(n) };
    match reduce_digit(raw) {
        5 if female => 8,
        5 => 2,
        0 => 9,
        k => k as u8,
    }
}

/// East or West life group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeGroup {
    /// Kua 1, 3, 4, 9.
    East,
    /// Kua 2, 6, 7, 8.
    West,
}

impl LifeGroup {
    /// Group of a Kua number.
    pub fn of(kua: u8) -> Self {
        if matches!(kua, 1 | 3 | 4 | 9) {
            Self::East
        } else {
            Self::West
        }
    }

    /// Japanese label.
    pub fn label(self) -> &'static str {
        match self {
            Self::East => "東四命",
            Self::West => "西四命",
        }
    }
}

/// One direction with its quality for this person.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionReading {
    /// Direction.
    pub direction: Direction,
    /// Japanese direction label.
    pub label: &'static str,
    /// Quality.
    pub quality: Quality,
    /// Japanese quality name.
    pub quality_name: &'static str,
    /// Favourable or not.
    pub auspicious: bool,
    /// Meaning.
    pub meaning: &'static str,
}

/// The eight directions for a Kua, best first.
pub fn directions_for(kua: u8) -> Vec<DirectionReading> {
    let dirs = MANSIONS
        .iter()
        .find(|(k, _)| *k == kua)
        .map(|(_, d)| *d)
        .unwrap_or(MANSIONS[1].1);
    Quality::all()
        .into_iter()
        .zip(dirs)
        .map(|(quality, direction)| DirectionReading {
            direction,
            label: direction.label(),
            quality,
            quality_name: quality.label(),
            auspicious: quality.is_auspicious(),
            meaning: quality.meaning(),
        })
        .collect()
}

const ANIMALS: [&str; 12] = [
    "子（ねずみ）",
    "丑（うし）",
    "寅（とら）",
    "卯（うさぎ）",
    "辰（たつ）",
    "巳（へび）",
    "午（うま）",
    "未（ひつじ）",
    "申（さる）",
    "酉（とり）",
    "戌（いぬ）",
    "亥（いのしし）",
];

/// Animal and five-element phase of a year in the sexagenary cycle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSign {
    /// Zodiac animal.
    pub animal: &'static str,
    /// Heavenly-stem element.
    pub element: &'static str,
    /// Lucky colour of the element.
    pub lucky_color: &'static str,
}

/// Chinese zodiac sign of a year.
pub fn year_sign(year: i32) -> YearSign {
    let animal = ANIMALS[(year - 4).rem_euclid(12) as usize];
    let (element, lucky_color) = match year.rem_euclid(10) {
        0 | 1 => ("金", "白・金色"),
        2 | 3 => ("水", "黒・紺"),
        4 | 5 => ("木", "緑・青"),
        6 | 7 => ("火", "赤・紫"),
        _ => ("土", "黄・茶"),
    };
    YearSign {
        animal,
        element,
        lucky_color,
    }
}

/// A room and what to do about it.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Name.
    pub name: &'static str,
    /// Advice.
    pub advice: &'static str,
}

/// Rooms a reading may focus on.
pub static ROOMS: [Room; 8] = [
    Room { name: "玄関", advice: "靴をしまい、明るく清潔に保って良い気を迎え入れましょう。" },
    Room { name: "リビング", advice: "不要な物を減らし、家族が集う中心に観葉植物を置きましょう。" },
    Room { name: "寝室", advice: "枕を吉方位に向け、鏡がベッドを映さないようにしましょう。" },
    Room { name: "キッチン", advice: "コンロ周りを磨き、火と水の気を整えましょう。" },
    Room { name: "書斎", advice: "机を扉が見える位置に置き、背後に壁を確保しましょう。" },
    Room { name: "浴室", advice: "換気をよくして湿気をため込まず、排水口を清潔に。" },
    Room { name: "ダイニング", advice: "丸いテーブルと暖色の明かりで団らんの気を高めましょう。" },
    Room { name: "窓辺", advice: "窓を磨いて光を取り込み、新しい運を招きましょう。" },
];

fn focus_quality(category: QuestionCategory) -> Quality {
    match category {
        QuestionCategory::Health => Quality::TianYi,
        QuestionCategory::Love | QuestionCategory::Relationship => Quality::YanNian,
        QuestionCategory::Spiritual => Quality::FuWei,
        QuestionCategory::General | QuestionCategory::Career | QuestionCategory::Money => {
            Quality::ShengChi
        }
    }
}

/// Feng shui has no configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct FengShui;

/// Engine alias for feng shui.
pub type FengShuiEngine = DivinationEngine<FengShui>;

/// A finished feng shui reading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FengShuiReading {
    /// Kua number.
    pub kua_number: u8,
    /// Life group.
    pub life_group: LifeGroup,
    /// Japanese group label.
    pub life_group_name: &'static str,
    /// All eight directions, best first.
    pub directions: Vec<DirectionReading>,
    /// Direction to use for the question category.
    pub focus_direction: DirectionReading,
    /// Birth-year sign.
    pub year_sign: YearSign,
    /// Room to work on.
    pub room_focus: Room,
    /// Advice.
    pub advice: String,
    /// Whether a birth date was given.
    pub birth_date_known: bool,
    /// Seed used.
    pub seed: u64,
}

impl Reading for FengShuiReading {
    fn summary(&self) -> String {
        format!(
            "本命卦は{}（{}）。{}の方位{}を活かしましょう。{}",
            self.kua_number,
            self.life_group_name,
            self.focus_direction.quality_name,
            self.focus_direction.label,
            self.advice
        )
    }

    fn key_symbols(&self) -> Vec<String> {
        vec![
            format!("Kua {}", self.kua_number),
            self.focus_direction.label.to_string(),
            self.room_focus.name.to_string(),
        ]
    }
}

impl Divination for FengShui {
    const KIND: DivinationKind = DivinationKind::FengShui;
    type Reading = FengShuiReading;

    fn cast(&self, ctx: &mut ReadingContext<'_>) -> FengShuiReading {
        let known = ctx.input.birth_date.is_some();
        let year = ctx.input.birth_date_or_epoch().year();
        let kua = kua_number(year, ctx.input.gender);
        let life_group = LifeGroup::of(kua);
        let directions = directions_for(kua);
        tracing::debug!(year, kua, group = ?life_group, "kua number");

        let wanted = focus_quality(ctx.category());
        let focus_direction = directions
            .iter()
            .find(|d| d.quality == wanted)
            .cloned()
            .unwrap_or_else(|| directions[0].clone());
        let room_focus = ROOMS[ctx.rng.next_index(ROOMS.len())];
        let year_sign = year_sign(year);

        let advice = format!(
            "{}を整えることが今の課題です。{}ラッキーカラーは{}。",
            room_focus.name, room_focus.advice, year_sign.lucky_color
        );

        FengShuiReading {
            kua_number: kua,
            life_group,
            life_group_name: life_group.label(),
            directions,
            focus_direction,
            year_sign,
            room_focus,
            advice,
            birth_date_known: known,
            seed: ctx.seed,
        }
    }
}
