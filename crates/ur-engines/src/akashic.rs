//! Akashic record readings.
//!
//! Soul age, a past-life era, a life lesson, a soul gift and a karmic
//! pattern are drawn in that order from the seeded generator.

use serde::Serialize;
use ur_core::engine::{Divination, DivinationEngine, Reading, ReadingContext};
use ur_core::{DivinationKind, QuestionCategory};

/// Stage of the soul's journey.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoulAge {
    /// Name.
    pub name: &'static str,
    /// Description.
    pub description: &'static str,
}

/// The five soul ages, youngest first.
pub static SOUL_AGES: [SoulAge; 5] = [
    SoulAge { name: "幼子の魂", description: "この世界を新鮮な驚きで体験している、始まりの魂です。" },
    SoulAge { name: "若木の魂", description: "秩序と所属を学び、共同体の中で自分の役割を探しています。" },
    SoulAge { name: "若い魂", description: "達成と成功を通して、自分の力を試している魂です。" },
    SoulAge { name: "成熟した魂", description: "人との深い関わりと感情の機微を学んでいる魂です。" },
    SoulAge { name: "老いた魂", description: "多くの転生を経て、手放しと本質への回帰を学ぶ魂です。" },
];

/// A past-life era.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Era {
    /// Place and period.
    pub name: &'static str,
    /// Role the soul played.
    pub role: &'static str,
    /// What carries over.
    pub legacy: &'static str,
}

/// Twelve past-life eras.
pub static ERAS: [Era; 12] = [
    Era { name: "古代エジプト", role: "神殿の書記", legacy: "記録し伝える力" },
    Era { name: "古代ギリシャ", role: "哲学を学ぶ学徒", legacy: "真理を問い続ける知性" },
    Era { name: "ローマ帝国", role: "街道を築く技師", legacy: "仕組みを形にする力" },
    Era { name: "中世ヨーロッパ", role: "修道院の薬草師", legacy: "癒しの知恵" },
    Era { name: "平安時代の日本", role: "宮廷の歌人", legacy: "言葉と美への感性" },
    Era { name: "マヤ文明", role: "星を読む神官", legacy: "時の巡りを読む直感" },
    Era { name: "ケルトの森", role: "ドルイドの見習い", legacy: "自然と語り合う心" },
    Era { name: "シルクロード", role: "隊商の商人", legacy: "異なるものをつなぐ才覚" },
    Era { name: "ルネサンス期イタリア", role: "工房の画家", legacy: "創造への情熱" },
    Era { name: "古代インド", role: "瞑想する修行者", legacy: "静寂の中の気づき" },
    Era { name: "大航海時代", role: "未知の海へ出る航海士", legacy: "恐れを越える勇気" },
    Era { name: "アトランティス", role: "水晶の守り手", legacy: "見えない力を扱う感覚" },
];

/// Twelve life lessons.
pub static LIFE_LESSONS: [&str; 12] = [
    "自分を無条件に受け入れること",
    "他者を信頼し、頼ること",
    "境界線を引き、自分を守ること",
    "許すことで自由になること",
    "恐れを越えて表現すること",
    "手放し、流れに委ねること",
    "責任を引き受け、やり遂げること",
    "豊かさを受け取ること",
    "忍耐と継続を学ぶこと",
    "孤独の中で自分を見つけること",
    "奉仕と自己犠牲を区別すること",
    "喜びを日々の中に見出すこと",
];

/// Twelve soul gifts.
pub static SOUL_GIFTS: [&str; 12] = [
    "人の痛みに寄り添う共感力",
    "場を明るくする笑顔",
    "物事の本質を見抜く洞察力",
    "言葉で人を励ます力",
    "手で美しいものを生み出す才能",
    "人と人をつなぐ橋渡しの力",
    "困難に屈しない粘り強さ",
    "未来を見通す直感",
    "場を癒す穏やかさ",
    "新しい道を切り開く開拓精神",
    "秩序を整える構成力",
    "自然や動物と通じ合う感性",
];

/// A karmic pattern.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KarmicPattern {
    /// Name.
    pub name: &'static str,
    /// How it shows up.
    pub pattern: &'static str,
    /// How to release it.
    pub release: &'static str,
}

/// Eight karmic patterns.
pub static KARMIC_PATTERNS: [KarmicPattern; 8] = [
    KarmicPattern { name: "見捨てられる恐れ", pattern: "大切な人が離れていく不安を繰り返し感じます。", release: "自分自身を見捨てないと決めることで解けていきます。" },
    KarmicPattern { name: "自己犠牲", pattern: "他者を優先しすぎて自分を後回しにしがちです。", release: "自分を満たすことが周囲を満たすと知りましょう。" },
    KarmicPattern { name: "力の乱用", pattern: "主導権を巡る争いに巻き込まれやすい傾向があります。", release: "力を分かち合うことで真の強さが生まれます。" },
    KarmicPattern { name: "沈黙の誓い", pattern: "本音を言えずに飲み込んでしまいます。", release: "小さな本音から声にしていきましょう。" },
    KarmicPattern { name: "欠乏感", pattern: "どれだけ持っていても足りないと感じます。", release: "今あるものへの感謝が流れを変えます。" },
    KarmicPattern { name: "完璧主義", pattern: "失敗を恐れて一歩を踏み出せません。", release: "不完全さを許すことで創造が始まります。" },
    KarmicPattern { name: "孤立", pattern: "人の輪の中でも一人だと感じがちです。", release: "助けを求めることを自分に許しましょう。" },
    KarmicPattern { name: "罪悪感", pattern: "幸せになることにためらいを覚えます。", release: "過去の自分を許し、今を生きる許可を出しましょう。" },
];

/// Akashic readings have no configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Akashic;

/// Engine alias for akashic readings.
pub type AkashicEngine = DivinationEngine<Akashic>;

/// A finished akashic reading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AkashicReading {
    /// Soul age.
    pub soul_age: SoulAge,
    /// Past-life era.
    pub past_life: Era,
    /// Life lesson.
    pub life_lesson: &'static str,
    /// Soul gift.
    pub soul_gift: &'static str,
    /// Karmic pattern.
    pub karmic_pattern: KarmicPattern,
    /// Past-life narrative.
    pub past_life_story: String,
    /// Closing message.
    pub message: String,
    /// Seed used.
    pub seed: u64,
}

impl Reading for AkashicReading {
    fn summary(&self) -> String {
        format!("{}{}", self.past_life_story, self.message)
    }

    fn key_symbols(&self) -> Vec<String> {
        vec![
            self.soul_age.name.to_string(),
            self.past_life.name.to_string(),
            self.karmic_pattern.name.to_string(),
        ]
    }
}

fn category_focus(category: QuestionCategory) -> &'static str {
    match category {
        QuestionCategory::Love | QuestionCategory::Relationship => {
            "大切な人との縁は、過去世から続く約束でもあります。"
        }
        QuestionCategory::Career | QuestionCategory::Money => {
            "過去世で培った技能が、今の仕事で再び花開こうとしています。"
        }
        QuestionCategory::Health => "身体の声は、魂の記憶を映す鏡でもあります。",
        QuestionCategory::Spiritual | QuestionCategory::General => {
            "記録は、あなたがすでに答えを知っていると告げています。"
        }
    }
}

impl Divination for Akashic {
    const KIND: DivinationKind = DivinationKind::Akashic;
    type Reading = AkashicReading;

    fn cast(&self, ctx: &mut ReadingContext<'_>) -> AkashicReading {
        let soul_age = SOUL_AGES[ctx.rng.next_index(SOUL_AGES.len())];
        let past_life = ERAS[ctx.rng.next_index(ERAS.len())];
        let life_lesson = LIFE_LESSONS[ctx.rng.next_index(LIFE_LESSONS.len())];
        let soul_gift = SOUL_GIFTS[ctx.rng.next_index(SOUL_GIFTS.len())];
        let karmic_pattern = KARMIC_PATTERNS[ctx.rng.next_index(KARMIC_PATTERNS.len())];
        tracing::debug!(
            soul_age = soul_age.name,
            era = past_life.name,
            karma = karmic_pattern.name,
            "akashic record opened"
        );

        let past_life_story = format!(
            "{}{}あなたは{}で{}として生き、{}を身につけました。",
            soul_age.name,
            soul_age.description,
            past_life.name,
            past_life.role,
            past_life.legacy
        );
        let mut message = format!(
            "今世の課題は「{}」。あなたの魂の才能は{}です。{}{}{}",
            life_lesson,
            soul_gift,
            karmic_pattern.pattern,
            karmic_pattern.release,
            category_focus(ctx.category())
        );
        if ctx.detailed() {
            message.push_str(ctx.moon_phase.influence());
        }

        AkashicReading {
            soul_age,
            past_life,
            life_lesson,
            soul_gift,
            karmic_pattern,
            past_life_story,
            message,
            seed: ctx.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ur_core::{Detail, DivinationInput, EngineOptions, FixedClock, Lcg};

    fn reading(options: EngineOptions) -> AkashicReading {
        DivinationEngine::new(Akashic, DivinationInput::new("x"))
            .with_options(options)
            .with_clock(FixedClock::from_millis(0))
            .calculate()
    }

    #[test]
    fn table_sizes() {
        assert_eq!(SOUL_AGES.len(), 5);
        assert_eq!(ERAS.len(), 12);
        assert_eq!(LIFE_LESSONS.len(), 12);
        assert_eq!(SOUL_GIFTS.len(), 12);
        assert_eq!(KARMIC_PATTERNS.len(), 8);
    }

    #[test]
    fn draws_follow_the_generator() {
        let r = reading(EngineOptions::default().with_seed(77));
        let mut lcg = Lcg::new(77);
        assert_eq!(r.soul_age.name, SOUL_AGES[lcg.next_index(5)].name);
        assert_eq!(r.past_life.name, ERAS[lcg.next_index(12)].name);
        assert_eq!(r.life_lesson, LIFE_LESSONS[lcg.next_index(12)]);
        assert_eq!(r.soul_gift, SOUL_GIFTS[lcg.next_index(12)]);
        assert_eq!(r.karmic_pattern.name, KARMIC_PATTERNS[lcg.next_index(8)].name);
    }

    #[test]
    fn detailed_adds_moon_text() {
        let brief = reading(EngineOptions::default().with_seed(3));
        let detailed = reading(EngineOptions::default().with_seed(3).with_detail(Detail::Detailed));
        assert!(detailed.message.len() > brief.message.len());
        assert!(detailed.message.starts_with(&brief.message));
    }
}
